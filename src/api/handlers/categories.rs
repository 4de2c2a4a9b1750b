use axum::response::Json;

use crate::api::models::{CategoryItem, CategoryListResponse};
use crate::config::categories as vocabulary;

pub async fn get_categories() -> Json<CategoryListResponse> {
    let categories = vocabulary::get_categories()
        .iter()
        .map(|c| CategoryItem {
            label: c.label.to_string(),
            rank_column: c.rank_column.map(str::to_string),
        })
        .collect();

    Json(CategoryListResponse { categories })
}
