//! Scripted in-memory catalog used by service and route tests.

use anyhow::Result;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::api::CatalogApi;
use crate::domain::{RawDetailRecord, SearchStub};

#[derive(Default)]
pub struct ScriptedCatalog {
    items: HashMap<String, Value>,
    stubs: Vec<SearchStub>,
    failing_detail_call: Option<usize>,
    failing_search: bool,
    reverse_answers: bool,
    detail_calls: Mutex<Vec<Vec<String>>>,
    searches: Mutex<Vec<String>>,
}

impl ScriptedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, item: Value) -> Self {
        let id = item["@_id"].as_str().unwrap_or_default().to_string();
        self.items.insert(id, item);
        self
    }

    pub fn with_stub(mut self, id: &str, name: &str) -> Self {
        self.stubs.push(SearchStub {
            id: id.to_string(),
            name: name.to_string(),
        });
        self
    }

    /// The zero-based detail call that returns an error
    pub fn failing_detail_call(mut self, call: usize) -> Self {
        self.failing_detail_call = Some(call);
        self
    }

    pub fn failing_search(mut self) -> Self {
        self.failing_search = true;
        self
    }

    pub fn answering_in_reverse(mut self) -> Self {
        self.reverse_answers = true;
        self
    }

    pub fn detail_calls(&self) -> Vec<Vec<String>> {
        self.detail_calls.lock().unwrap().clone()
    }

    pub fn searches(&self) -> Vec<String> {
        self.searches.lock().unwrap().clone()
    }
}

impl CatalogApi for ScriptedCatalog {
    async fn search(&self, text: &str) -> Result<Vec<SearchStub>> {
        self.searches.lock().unwrap().push(text.to_string());
        if self.failing_search {
            anyhow::bail!("API returned status: 500 Internal Server Error");
        }
        Ok(self.stubs.clone())
    }

    async fn details_by_ids(&self, ids: &[String]) -> Result<Vec<RawDetailRecord>> {
        let call = {
            let mut calls = self.detail_calls.lock().unwrap();
            calls.push(ids.to_vec());
            calls.len() - 1
        };
        if self.failing_detail_call == Some(call) {
            anyhow::bail!("API returned status: 503 Service Unavailable");
        }

        let mut records: Vec<_> = ids
            .iter()
            .filter_map(|id| self.items.get(id).cloned())
            .map(RawDetailRecord::new)
            .collect();
        if self.reverse_answers {
            records.reverse();
        }
        Ok(records)
    }
}

/// Detail item in the tree shape produced by the XML converter
pub fn game_item(id: i64, name: &str, min_players: i64, max_players: i64, min_age: i64) -> Value {
    json!({
        "@_type": "boardgame",
        "@_id": id.to_string(),
        "image": format!("https://img.test/{id}.jpg"),
        "name": {"@_type": "primary", "@_sortindex": "1", "@_value": name},
        "description": "",
        "yearpublished": {"@_value": "2000"},
        "minplayers": {"@_value": min_players.to_string()},
        "maxplayers": {"@_value": max_players.to_string()},
        "minplaytime": {"@_value": "30"},
        "maxplaytime": {"@_value": "60"},
        "minage": {"@_value": min_age.to_string()},
        "link": {"@_type": "boardgamecategory", "@_value": "Strategy"},
        "statistics": {"ratings": {"average": {"@_value": "7.26"}}}
    })
}
