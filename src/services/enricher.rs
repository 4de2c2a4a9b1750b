use std::collections::HashMap;

use crate::api::CatalogApi;
use crate::domain::normalizer::normalize_batch;
use crate::domain::{CanonicalGameRecord, RawDetailRecord};
use crate::errors::CatalogError;

/// Turns one batch of catalog ids into canonical records with a single detail call
pub struct BatchEnricher<'a, C> {
    catalog: &'a C,
}

impl<'a, C: CatalogApi> BatchEnricher<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    /// Fetch and normalize `ids`, keeping the order of `ids`.
    ///
    /// A failed call is returned as `RemoteFetch` and never retried.
    pub async fn enrich(&self, ids: &[String]) -> Result<Vec<CanonicalGameRecord>, CatalogError> {
        let mut records = self
            .catalog
            .details_by_ids(ids)
            .await
            .map_err(CatalogError::remote)?;

        order_like_request(&mut records, ids);
        Ok(normalize_batch(&records))
    }
}

/// Records whose id was not requested keep upstream order at the end
fn order_like_request(records: &mut [RawDetailRecord], ids: &[String]) {
    let positions: HashMap<&str, usize> = ids
        .iter()
        .enumerate()
        .rev()
        .map(|(position, id)| (id.as_str(), position))
        .collect();

    records.sort_by_cached_key(|record| {
        positions
            .get(record.catalog_id().as_str())
            .copied()
            .unwrap_or(usize::MAX)
    });
}
