use std::path::PathBuf;

const API_TOKEN_VAR: &str = "BGG_API_TOKEN";
const BASE_URL_VAR: &str = "BGG_BASE_URL";
const RANKS_PATH_VAR: &str = "RANKS_PATH";

#[derive(Debug, Clone)]
pub struct CatalogSettings {
    pub base_url: String,
    pub api_token: Option<String>,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: "https://boardgamegeek.com/xmlapi2".to_string(),
            api_token: None,
            user_agent: "BoardGameCatalog/1.0",
            timeout_secs: 30,
        }
    }
}

impl CatalogSettings {
    pub fn has_credentials(&self) -> bool {
        self.api_token.as_deref().is_some_and(|t| !t.trim().is_empty())
    }
}

/// Page size, scan depth and batch size used by browse mode
#[derive(Debug, Clone)]
pub struct PagingSettings {
    pub target_size: usize,
    pub max_scan_depth: usize,
    pub batch_size: usize,
    /// Offset multiplier applied when post-fetch filters are likely to reject candidates
    pub filtered_scan_factor: usize,
}

impl Default for PagingSettings {
    fn default() -> Self {
        Self {
            target_size: 20,
            max_scan_depth: 300,
            batch_size: 20,
            filtered_scan_factor: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RankingSettings {
    pub ranks_path: PathBuf,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            ranks_path: PathBuf::from("boardgames_ranks.csv"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog: CatalogSettings,
    pub paging: PagingSettings,
    pub ranking: RankingSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            catalog: CatalogSettings::default(),
            paging: PagingSettings::default(),
            ranking: RankingSettings::default(),
        }
    }

    /// Defaults overridden by `BGG_API_TOKEN`, `BGG_BASE_URL` and `RANKS_PATH`.
    ///
    /// A missing token is not an error here; requests fail with a configuration
    /// error instead so the server can still start and report it.
    pub fn from_env() -> Self {
        let mut config = Self::new();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup(API_TOKEN_VAR) {
            self.catalog.api_token = Some(token);
        }
        if let Some(base_url) = lookup(BASE_URL_VAR) {
            self.catalog.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(path) = lookup(RANKS_PATH_VAR) {
            self.ranking.ranks_path = PathBuf::from(path);
        }
    }

    pub fn with_ranks_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ranking.ranks_path = path.into();
        self
    }
}
