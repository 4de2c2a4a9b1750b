/// Category labels offered to users and the ranking column each one browses.
///
/// Labels without a column have no precomputed ranking in the ranks file;
/// browsing them falls back to the global rank and counts as a filtered scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryConfig {
    pub label: &'static str,
    pub rank_column: Option<&'static str>,
}

impl CategoryConfig {
    pub const fn new(label: &'static str, rank_column: Option<&'static str>) -> Self {
        Self { label, rank_column }
    }
}

const CATEGORIES: &[CategoryConfig] = &[
    CategoryConfig::new("Strategiczne", Some("strategygames_rank")),
    CategoryConfig::new("Rodzinne", Some("familygames_rank")),
    CategoryConfig::new("Imprezowe", Some("partygames_rank")),
    CategoryConfig::new("Kooperacyjne", None),
    // No economic ranking exists, strategy is the closest list
    CategoryConfig::new("Ekonomiczne", Some("strategygames_rank")),
    CategoryConfig::new("Przygodowe", Some("thematic_rank")),
    CategoryConfig::new("Karciane", None),
    CategoryConfig::new("Wojenne", Some("wargames_rank")),
    CategoryConfig::new("Abstrakcyjne", Some("abstracts_rank")),
    CategoryConfig::new("Dedukcyjne", None),
    CategoryConfig::new("Dziecięce", Some("childrensgames_rank")),
];

/// Get the full category vocabulary in display order
pub fn get_categories() -> &'static [CategoryConfig] {
    CATEGORIES
}

/// Ranking column for a label, `None` for unknown labels and labels without a ranking
pub fn rank_column_for(label: &str) -> Option<&'static str> {
    CATEGORIES
        .iter()
        .find(|c| c.label == label)
        .and_then(|c| c.rank_column)
}
