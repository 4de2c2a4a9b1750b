use crate::config::settings::PagingSettings;
use crate::domain::CandidateEntry;

/// Chooses which slice of the ranked candidates a page request scans.
///
/// The catalog cannot tell how many earlier candidates matched the active
/// filters, so the offset is estimated from the page number alone and pushed
/// further out when filters are expected to reject candidates.
#[derive(Debug, Clone)]
pub struct ScanPlanner {
    target_size: usize,
    max_scan_depth: usize,
    filtered_scan_factor: usize,
}

impl ScanPlanner {
    pub fn new(settings: &PagingSettings) -> Self {
        Self {
            target_size: settings.target_size,
            max_scan_depth: settings.max_scan_depth,
            filtered_scan_factor: settings.filtered_scan_factor,
        }
    }

    pub fn scan_factor(&self, intensive: bool) -> usize {
        if intensive {
            self.filtered_scan_factor
        } else {
            1
        }
    }

    /// First candidate position scanned for a 1-based page
    pub fn start_offset(&self, page: usize, intensive: bool) -> usize {
        page.saturating_sub(1)
            .saturating_mul(self.target_size)
            .saturating_mul(self.scan_factor(intensive))
    }

    /// Candidates `[start, start + depth)`, clamped to the list
    pub fn window<'a>(
        &self,
        candidates: &'a [CandidateEntry],
        page: usize,
        intensive: bool,
    ) -> &'a [CandidateEntry] {
        let start = self.start_offset(page, intensive).min(candidates.len());
        let end = start.saturating_add(self.max_scan_depth).min(candidates.len());
        &candidates[start..end]
    }
}
