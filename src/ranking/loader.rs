use anyhow::{Context, Result};
use log::{debug, error};
use std::path::Path;

use crate::config::rank_column_for;
use crate::domain::fields::parse_leading_int;
use crate::domain::CandidateEntry;
use crate::ranking::csv::{clean_field, split_quoted_line};

pub const GLOBAL_RANK_COLUMN: &str = "rank";
const GLOBAL_RANK_FALLBACK_INDEX: usize = 3;

/// Candidate ids ordered by one ranking column of the ranks file
#[derive(Debug, Clone, Default)]
pub struct RankIndex {
    candidates: Vec<CandidateEntry>,
}

impl RankIndex {
    /// Read the ranks file; an unreadable or malformed file yields an empty index
    pub async fn load(path: &Path, category: Option<&str>) -> Self {
        match Self::read(path, category).await {
            Ok(index) => {
                debug!(
                    "Loaded {} ranked candidates from {}",
                    index.len(),
                    path.display()
                );
                index
            }
            Err(e) => {
                error!("Ranking source read error: {:#}", e);
                Self::default()
            }
        }
    }

    async fn read(path: &Path, category: Option<&str>) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read ranks file {}", path.display()))?;
        Self::parse(&content, category)
    }

    pub fn parse(content: &str, category: Option<&str>) -> Result<Self> {
        let mut lines = content.split('\n');
        let header = lines.next().context("Ranks file has no header row")?;
        let headers: Vec<&str> = split_quoted_line(header).into_iter().map(clean_field).collect();
        let sort_index = resolve_sort_column(&headers, category);

        let mut candidates: Vec<CandidateEntry> = lines
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| parse_row(line, sort_index))
            .collect();

        // Stable: equal ranks keep file order
        candidates.sort_by_key(|c| c.rank);

        Ok(Self { candidates })
    }

    pub fn candidates(&self) -> &[CandidateEntry] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Index of the category's ranking column, or of the global rank column
fn resolve_sort_column(headers: &[&str], category: Option<&str>) -> usize {
    let position = |column: &str| headers.iter().position(|h| *h == column);

    category
        .and_then(rank_column_for)
        .and_then(position)
        .or_else(|| position(GLOBAL_RANK_COLUMN))
        .unwrap_or(GLOBAL_RANK_FALLBACK_INDEX)
}

fn parse_row(line: &str, sort_index: usize) -> Option<CandidateEntry> {
    let fields = split_quoted_line(line);
    let id = clean_field(fields.first()?);
    let rank = clean_field(fields.get(sort_index)?);

    if id.is_empty() || rank.is_empty() {
        return None;
    }
    let rank = parse_leading_int(rank)?;
    Some(CandidateEntry::new(id, rank))
}
