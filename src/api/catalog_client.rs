use anyhow::Result;
use log::{debug, info};
use std::future::Future;

use crate::api::xml;
use crate::config::settings::CatalogSettings;
use crate::domain::fields::FieldShape;
use crate::domain::models::{RawDetailRecord, SearchStub};
use crate::http::AuthorizedClient;

/// The two primitives the remote catalog offers.
///
/// Every call is a single attempt; callers decide what a failure means.
pub trait CatalogApi: Send + Sync {
    /// Free-text search over board games, in upstream relevance order
    fn search(&self, text: &str) -> impl Future<Output = Result<Vec<SearchStub>>> + Send;

    /// Detail records (with statistics) for a list of catalog ids
    fn details_by_ids(
        &self,
        ids: &[String],
    ) -> impl Future<Output = Result<Vec<RawDetailRecord>>> + Send;
}

/// BoardGameGeek XML API 2 client
pub struct CatalogClient {
    client: AuthorizedClient,
    base_url: String,
}

impl CatalogClient {
    pub fn new(settings: &CatalogSettings) -> Result<Self> {
        let client = AuthorizedClient::new(
            settings.user_agent,
            settings.timeout_secs,
            settings.api_token.clone(),
        )?;
        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
        })
    }

    // --- URL Building ---

    fn build_search_url(&self, text: &str) -> String {
        format!(
            "{}/search?query={}&type=boardgame",
            self.base_url,
            urlencoding::encode(text)
        )
    }

    fn build_thing_url(&self, ids: &[String]) -> String {
        format!("{}/thing?id={}&stats=1", self.base_url, ids.join(","))
    }
}

impl CatalogApi for CatalogClient {
    async fn search(&self, text: &str) -> Result<Vec<SearchStub>> {
        let url = self.build_search_url(text);
        info!("Searching catalog for {:?}", text);

        let body = self.client.get_text(&url).await?;
        let stubs = parse_search_stubs(&body)?;

        debug!("Search for {:?} returned {} stubs", text, stubs.len());
        Ok(stubs)
    }

    async fn details_by_ids(&self, ids: &[String]) -> Result<Vec<RawDetailRecord>> {
        let url = self.build_thing_url(ids);
        debug!("Fetching details for {} ids", ids.len());

        let body = self.client.get_text(&url).await?;
        parse_detail_records(&body)
    }
}

fn parse_search_stubs(body: &str) -> Result<Vec<SearchStub>> {
    let document = xml::parse_document(body)?;
    let stubs = xml::item_list(&document)
        .iter()
        .filter_map(|item| {
            let id = FieldShape::of(item.get("@_id")).text();
            if id.is_empty() {
                return None;
            }
            let name = FieldShape::of(item.get("name")).text();
            Some(SearchStub { id, name })
        })
        .collect();
    Ok(stubs)
}

fn parse_detail_records(body: &str) -> Result<Vec<RawDetailRecord>> {
    let document = xml::parse_document(body)?;
    Ok(xml::item_list(&document)
        .into_iter()
        .map(RawDetailRecord::new)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> CatalogClient {
        let settings = CatalogSettings {
            base_url: "https://example.test/xmlapi2".to_string(),
            ..CatalogSettings::default()
        };
        CatalogClient::new(&settings).unwrap()
    }

    #[test]
    fn test_url_building() {
        let client = client();

        assert_eq!(
            client.build_search_url("Ticket to Ride"),
            "https://example.test/xmlapi2/search?query=Ticket%20to%20Ride&type=boardgame"
        );
        assert_eq!(
            client.build_thing_url(&["13".to_string(), "9209".to_string()]),
            "https://example.test/xmlapi2/thing?id=13,9209&stats=1"
        );
    }

    #[test]
    fn test_search_stubs_keep_upstream_order() {
        let body = r#"<items total="3">
            <item type="boardgame" id="13"><name type="primary" value="CATAN"/><yearpublished value="1995"/></item>
            <item type="boardgame" id="278"><name type="primary" value="Catan Card Game"/></item>
            <item type="boardgame" id="926"><name type="alternate" value="Catan: Cities"/></item>
        </items>"#;

        let stubs = parse_search_stubs(body).unwrap();
        let ids: Vec<_> = stubs.iter().map(|s| s.id.as_str()).collect();

        assert_eq!(ids, vec!["13", "278", "926"]);
        assert_eq!(stubs[0].name, "CATAN");
    }

    #[test]
    fn test_single_detail_record() {
        let body = r#"<items><item type="boardgame" id="13"><name type="primary" value="CATAN"/></item></items>"#;

        let records = parse_detail_records(body).unwrap();
        assert_eq!(records.len(), 1);
    }
}
