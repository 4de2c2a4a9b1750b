use serde::Deserialize;

use crate::config::settings::AppConfig;
use crate::domain::fields::parse_leading_int;
use crate::domain::PageRequest;

pub mod categories;
pub mod games;

pub struct AppState<C> {
    pub config: AppConfig,
    pub catalog: C,
}

/// Raw query string of `GET /api/games`; numbers are parsed leniently
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameParams {
    pub query: Option<String>,
    pub category: Option<String>,
    pub page: Option<String>,
    pub min_players: Option<String>,
    pub min_age: Option<String>,
}

impl GameParams {
    pub fn into_request(self) -> PageRequest {
        PageRequest {
            query: non_empty(self.query),
            category: non_empty(self.category),
            page: positive(self.page.as_deref())
                .and_then(|p| usize::try_from(p).ok())
                .unwrap_or(1),
            min_players: positive(self.min_players.as_deref()),
            min_age: positive(self.min_age.as_deref()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn positive(value: Option<&str>) -> Option<i64> {
    value.and_then(parse_leading_int).filter(|n| *n > 0)
}
