//! Overview Routes
//!
//! - GET /api/v1/overview - The fixed Mega Mart three-chart page

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::overview::{build_overview, OverviewPage};

/// GET /api/v1/overview
///
/// The static Mega Mart page. 404 when disabled in config.
pub async fn get_overview(State(state): State<Arc<AppState>>) -> ApiResult<Json<OverviewPage>> {
    if !state.dashboard.overview_enabled {
        return Err(ApiError::NotFound(
            "Overview page is disabled".to_string(),
        ));
    }

    Ok(Json(build_overview()))
}
