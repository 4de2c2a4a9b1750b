use log::{info, warn};

use crate::api::CatalogApi;
use crate::config::settings::PagingSettings;
use crate::domain::{CanonicalGameRecord, FilterCriteria, PageResult, SearchStub};
use crate::ranking::RankIndex;
use crate::scan::ScanPlanner;
use crate::services::enricher::BatchEnricher;

/// Builds one page of games from ranked candidates or search hits
pub struct PageAssembler<'a, C> {
    enricher: BatchEnricher<'a, C>,
    planner: ScanPlanner,
    target_size: usize,
    batch_size: usize,
}

impl<'a, C: CatalogApi> PageAssembler<'a, C> {
    pub fn new(catalog: &'a C, paging: &PagingSettings) -> Self {
        Self {
            enricher: BatchEnricher::new(catalog),
            planner: ScanPlanner::new(paging),
            target_size: paging.target_size,
            batch_size: paging.batch_size.max(1),
        }
    }

    /// Scan the planned window batch by batch until the page is full.
    ///
    /// A failed batch ends the scan; matches found before it are still returned.
    pub async fn browse(&self, index: &RankIndex, page: usize, criteria: &FilterCriteria) -> PageResult {
        let window = self
            .planner
            .window(index.candidates(), page, criteria.is_intensive());
        if window.is_empty() {
            info!("Page {}: nothing to scan ({} candidates)", page, index.len());
            return PageResult::empty();
        }

        let mut matches: Vec<CanonicalGameRecord> = Vec::new();
        let mut scanned = 0;

        for batch in window.chunks(self.batch_size) {
            if matches.len() >= self.target_size {
                break;
            }

            let ids: Vec<String> = batch.iter().map(|c| c.id.clone()).collect();
            match self.enricher.enrich(&ids).await {
                Ok(games) => matches.extend(criteria.apply(games)),
                Err(e) => {
                    warn!("Stopping scan of page {} after {} candidates: {}", page, scanned, e);
                    break;
                }
            }
            scanned += batch.len();
        }

        info!("Page {}. Scanned {} candidates. Found {} matches.", page, scanned, matches.len());
        self.truncate(matches)
    }

    /// Enrich the requested page of search hits with one detail call, unfiltered
    pub async fn search(&self, stubs: &[SearchStub], page: usize) -> PageResult {
        let start = page
            .saturating_sub(1)
            .saturating_mul(self.target_size)
            .min(stubs.len());
        let end = start.saturating_add(self.target_size).min(stubs.len());
        let ids: Vec<String> = stubs[start..end].iter().map(|s| s.id.clone()).collect();

        if ids.is_empty() {
            return PageResult::empty();
        }

        match self.enricher.enrich(&ids).await {
            Ok(games) => {
                info!("Search page {}: {} of {} hits enriched", page, games.len(), stubs.len());
                PageResult::new(games)
            }
            Err(e) => {
                warn!("Search page {} enrichment failed: {}", page, e);
                PageResult::empty()
            }
        }
    }

    fn truncate(&self, mut games: Vec<CanonicalGameRecord>) -> PageResult {
        games.truncate(self.target_size);
        PageResult::new(games)
    }
}
