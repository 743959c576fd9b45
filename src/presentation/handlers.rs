// HTTP request handlers
use crate::application::dashboard_service::DashboardPayload;
use crate::domain::selection::Selection;
use crate::infrastructure::html_page::render_page;
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

/// Raw dropdown values as submitted by the sidebar form.
#[derive(Deserialize)]
pub struct SelectionQuery {
    pub year: Option<String>,
    pub scope: Option<String>,
}

impl SelectionQuery {
    fn selection(&self) -> Result<Selection, ApiError> {
        Ok(Selection::parse(self.year.as_deref(), self.scope.as_deref())?)
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Full dashboard page, regenerated on every request
pub async fn dashboard_page(
    Query(query): Query<SelectionQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ApiError> {
    let selection = query.selection()?;
    let page = state.dashboard_service.get_dashboard(&selection);
    let html = render_page(&page, state.dashboard_service.theme())?;
    Ok(Html(html))
}

/// Generated metrics and chart figures as JSON
pub async fn dashboard_data(
    Query(query): Query<SelectionQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardPayload>, ApiError> {
    let selection = query.selection()?;
    Ok(Json(state.dashboard_service.get_payload(&selection)))
}
