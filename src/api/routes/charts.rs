//! Chart Routes
//!
//! - GET /api/v1/charts - All five charts
//! - GET /api/v1/charts/:category - One chart

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::ChartListResponse;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::chart::ChartSpec;
use crate::dataset::{MetricCategory, UnknownCategory};

/// GET /api/v1/charts
///
/// Build every chart, in category order.
pub async fn list_charts(State(state): State<Arc<AppState>>) -> Json<ChartListResponse> {
    let charts = state.builder.build_all();

    Json(ChartListResponse {
        total: charts.len(),
        charts,
    })
}

/// GET /api/v1/charts/:category
///
/// Build the chart for one category. The category string is the only
/// place an unknown value can enter; it maps to 404 here so the core
/// builder stays total.
pub async fn get_chart(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> ApiResult<Json<ChartSpec>> {
    let category = parse_category(&category)?;
    Ok(Json(state.builder.build(category)))
}

/// Parse a category path parameter
pub(crate) fn parse_category(s: &str) -> ApiResult<MetricCategory> {
    s.parse()
        .map_err(|e: UnknownCategory| ApiError::NotFound(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert!(matches!(
            parse_category("sales"),
            Ok(MetricCategory::Sales)
        ));
        assert!(matches!(
            parse_category("supply-chain"),
            Ok(MetricCategory::SupplyChain)
        ));
        assert!(matches!(
            parse_category("revenue"),
            Err(ApiError::NotFound(_))
        ));
    }
}
