use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{categories::get_categories, games::get_games, AppState};
use crate::api::CatalogApi;

pub fn create_router<C: CatalogApi + 'static>(state: Arc<AppState<C>>) -> Router {
    Router::new()
        .route("/api/games", get(get_games::<C>))
        .route("/api/categories", get(get_categories))
        .with_state(state)
}
