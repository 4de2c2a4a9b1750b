use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::error;
use std::sync::Arc;

use super::{AppState, GameParams};
use crate::api::models::ErrorResponse;
use crate::api::CatalogApi;
use crate::errors::CatalogError;
use crate::services::CatalogService;

pub async fn get_games<C: CatalogApi>(
    State(state): State<Arc<AppState<C>>>,
    Query(params): Query<GameParams>,
) -> Response {
    let request = params.into_request();
    let service = CatalogService::new(&state.config, &state.catalog);

    match service.fetch_page(&request).await {
        Ok(page) => Json(page).into_response(),
        Err(e) => error_response(e),
    }
}

/// Remote fetch and unhandled failures both report their cause in `details`
fn error_response(error: CatalogError) -> Response {
    match error {
        CatalogError::Configuration => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Server configuration error")),
        )
            .into_response(),
        e => {
            error!("API error: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_details(
                    "Failed to fetch data from catalog",
                    e.to_string(),
                )),
            )
                .into_response()
        }
    }
}
