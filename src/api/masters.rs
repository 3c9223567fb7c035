//! Category and format endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::{Category, Format},
    AppState,
};

/// List all categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "masters",
    responses(
        (status = 200, description = "All categories", body = Vec<Category>)
    )
)]
pub async fn get_category_list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = state.services.masters.find_all_categories().await?;
    Ok(Json(categories))
}

/// List all formats
#[utoipa::path(
    get,
    path = "/formats",
    tag = "masters",
    responses(
        (status = 200, description = "All formats", body = Vec<Format>)
    )
)]
pub async fn get_format_list(State(state): State<AppState>) -> AppResult<Json<Vec<Format>>> {
    let formats = state.services.masters.find_all_formats().await?;
    Ok(Json(formats))
}
