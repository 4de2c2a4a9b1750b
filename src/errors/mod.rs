use thiserror::Error;

/// Failures that cross the catalog service boundary
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog API token is missing; nothing was attempted
    #[error("catalog API token is not configured")]
    Configuration,

    /// A catalog call returned a non-success status or failed in transport
    #[error("catalog request failed: {0:#}")]
    RemoteFetch(anyhow::Error),

    /// One detail record had a shape the normalizer cannot read
    #[error("malformed catalog record: {0}")]
    RecordParse(String),

    /// Any other failure, e.g. the HTTP client could not be built
    #[error(transparent)]
    Unhandled(#[from] anyhow::Error),
}

impl CatalogError {
    pub fn remote(error: anyhow::Error) -> Self {
        Self::RemoteFetch(error)
    }

    pub fn record(message: impl Into<String>) -> Self {
        Self::RecordParse(message.into())
    }
}

/// Add context to fetch errors
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}
