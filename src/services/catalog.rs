use log::{error, info};

use crate::api::CatalogApi;
use crate::config::AppConfig;
use crate::domain::{FilterCriteria, PageRequest, PageResult};
use crate::errors::CatalogError;
use crate::ranking::RankIndex;
use crate::services::assembler::PageAssembler;

/// Answers page requests in browse or search mode.
///
/// Holds only borrowed configuration and the catalog handle; the ranking index
/// and every intermediate result live for one request.
pub struct CatalogService<'a, C> {
    config: &'a AppConfig,
    catalog: &'a C,
}

impl<'a, C: CatalogApi> CatalogService<'a, C> {
    pub fn new(config: &'a AppConfig, catalog: &'a C) -> Self {
        Self { config, catalog }
    }

    pub async fn fetch_page(&self, request: &PageRequest) -> Result<PageResult, CatalogError> {
        if !self.config.catalog.has_credentials() {
            error!("Catalog API token is not configured");
            return Err(CatalogError::Configuration);
        }

        let assembler = PageAssembler::new(self.catalog, &self.config.paging);

        match request.query.as_deref().filter(|q| !q.is_empty()) {
            Some(query) => self.search(&assembler, query, request.page).await,
            None => Ok(self.browse(&assembler, request).await),
        }
    }

    async fn browse(&self, assembler: &PageAssembler<'a, C>, request: &PageRequest) -> PageResult {
        let index = RankIndex::load(&self.config.ranking.ranks_path, request.category.as_deref()).await;
        let criteria = FilterCriteria::from_request(request);

        assembler.browse(&index, request.page, &criteria).await
    }

    async fn search(
        &self,
        assembler: &PageAssembler<'a, C>,
        query: &str,
        page: usize,
    ) -> Result<PageResult, CatalogError> {
        let stubs = self
            .catalog
            .search(query)
            .await
            .map_err(CatalogError::remote)?;
        info!("Search {:?} matched {} games", query, stubs.len());

        Ok(assembler.search(&stubs, page).await)
    }
}
