use serde::Serialize;
use serde_json::Value;

use crate::domain::fields::FieldShape;

/// One row of the ranking source for the selected ranking column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateEntry {
    pub id: String,
    pub rank: i64,
}

impl CandidateEntry {
    pub fn new(id: impl Into<String>, rank: i64) -> Self {
        Self { id: id.into(), rank }
    }
}

/// Search hit as returned by the catalog, before enrichment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchStub {
    pub id: String,
    pub name: String,
}

/// Upstream detail record, one `<item>` of a thing response
#[derive(Debug, Clone, PartialEq)]
pub struct RawDetailRecord(Value);

impl RawDetailRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Catalog id as written upstream, empty when absent
    pub fn catalog_id(&self) -> String {
        FieldShape::of(self.0.get("@_id")).text()
    }
}

/// Game record in the shape served to clients.
///
/// Numeric fields are `None` when upstream data does not parse; they
/// serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalGameRecord {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub min_players: Option<i64>,
    pub max_players: Option<i64>,
    pub min_age: Option<i64>,
    pub play_time: String,
    pub categories: Vec<String>,
    pub rating: String,
    pub image: String,
    pub year: Option<i64>,
}

/// A page request as received from a client, already sanitized
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub query: Option<String>,
    pub category: Option<String>,
    pub page: usize,
    pub min_players: Option<i64>,
    pub min_age: Option<i64>,
}

impl PageRequest {
    pub fn browse(page: usize) -> Self {
        Self {
            page: page.max(1),
            ..Self::default()
        }
    }

    pub fn search(query: impl Into<String>, page: usize) -> Self {
        Self {
            query: Some(query.into()),
            page: page.max(1),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_min_players(mut self, min_players: i64) -> Self {
        self.min_players = Some(min_players);
        self
    }

    pub fn with_min_age(mut self, min_age: i64) -> Self {
        self.min_age = Some(min_age);
        self
    }

    pub fn is_search(&self) -> bool {
        self.query.as_deref().is_some_and(|q| !q.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageResult {
    pub games: Vec<CanonicalGameRecord>,
}

impl PageResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(games: Vec<CanonicalGameRecord>) -> Self {
        Self { games }
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
