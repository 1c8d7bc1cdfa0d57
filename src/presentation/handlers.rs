// HTTP request handlers - One handler per selector identity
use crate::application::chart_service::RenderError;
use crate::application::dataset::YearIndex;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct YearQuery {
    pub year: i32,
}

/// The single-page client. Chart panels are populated from the JSON
/// endpoints below and replaced wholesale on every selector change.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Legal year values plus the default for each selector widget.
pub async fn year_index(State(state): State<Arc<AppState>>) -> Json<YearIndex> {
    Json(state.store.year_index())
}

/// Bar selector: rebuilds both access bar charts for the selected year.
pub async fn access_charts(
    Query(query): Query<YearQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    chart_response(state.chart_service.access_charts(query.year))
}

/// Slider: rebuilds the 3D generation-mix scatter for the selected year.
pub async fn generation_mix(
    Query(query): Query<YearQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    chart_response(state.chart_service.generation_mix(query.year))
}

/// Geo selector: rebuilds the CO2/GDP bubble map for the selected year.
pub async fn emissions_map(
    Query(query): Query<YearQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    chart_response(state.chart_service.emissions_map(query.year))
}

/// A failed rebuild fails this one response; the process keeps serving.
fn chart_response<T: Serialize>(result: Result<T, RenderError>) -> Response {
    match result {
        Ok(spec) => Json(spec).into_response(),
        Err(e) => {
            tracing::error!("chart rebuild failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
