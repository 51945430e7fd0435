//! Dataset Routes
//!
//! - GET /api/v1/datasets/:category - Raw sample data for one category

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::routes::charts::parse_category;
use crate::api::state::AppState;
use crate::dataset::MetricDataset;

/// GET /api/v1/datasets/:category
///
/// Return the literal dataset behind a category's chart.
pub async fn get_dataset(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> ApiResult<Json<MetricDataset>> {
    let category = parse_category(&category)?;
    Ok(Json(state.registry.get(category).clone()))
}
