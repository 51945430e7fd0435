//! Selection Routes
//!
//! - GET  /api/v1/selection - Current selection and its chart
//! - POST /api/v1/activate  - Dispatch a control activation
//!
//! An unrecognized control id is not an error: the dispatcher records an
//! audited no-op and the response carries `recognized: false` with the
//! unchanged chart.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{ActivateRequest, ActivateResponse, SelectionResponse};
use crate::api::state::AppState;
use crate::dispatch::Transition;

/// GET /api/v1/selection
///
/// The active category and the chart the shell should display.
pub async fn get_selection(State(state): State<Arc<AppState>>) -> Json<SelectionResponse> {
    let active = state.dispatcher.read().await.active();

    Json(SelectionResponse {
        active,
        chart: state.builder.build(active),
    })
}

/// POST /api/v1/activate
///
/// Dispatch one activation event and return the chart to render.
/// Events are serialized by the dispatcher lock: each one is processed
/// to completion before the next is considered.
pub async fn activate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ActivateRequest>,
) -> Json<ActivateResponse> {
    let activation = state.dispatcher.write().await.activate(&req.control);

    let recognized = !matches!(activation.transition, Transition::Ignored);

    tracing::info!(
        control = %req.control,
        active = %activation.active,
        changed = activation.changed(),
        "Activation dispatched"
    );

    Json(ActivateResponse {
        active: activation.active,
        changed: activation.changed(),
        recognized,
        chart: state.builder.build(activation.active),
    })
}
