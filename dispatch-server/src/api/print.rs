//! Print dispatch handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use super::AppState;
use crate::backend::PrintOutcome;
use shared::{AppError, AppResult, LineItem, Order, TemplateKind};

/// Print request body
#[derive(Debug, Deserialize)]
pub struct PrintDispatchRequest {
    pub order: Order,
    pub items: Vec<LineItem>,
    /// Display name of the target printer
    pub printer_name: String,
    /// Pre-rendered layout override; passed through unchanged
    #[serde(default)]
    pub template_content: Option<String>,
}

/// POST /api/print/{template} - render and dispatch one print job
#[instrument(skip(state, payload), fields(template = %template))]
pub async fn dispatch(
    State(state): State<AppState>,
    Path(template): Path<String>,
    Json(payload): Json<PrintDispatchRequest>,
) -> AppResult<Json<PrintOutcome>> {
    let kind: TemplateKind = template
        .parse()
        .map_err(|_| AppError::not_found(format!("Print template '{}'", template)))?;

    // Job metadata, for operational traceability
    info!(
        printer = %payload.printer_name,
        order_id = payload.order.id,
        order_number = %payload.order.number,
        items = payload.items.len(),
        has_override = payload.template_content.is_some(),
        "Print job received"
    );

    let content = state
        .renderer
        .render(
            &payload.order,
            &payload.items,
            kind,
            payload.template_content.as_deref(),
        )
        .map_err(|e| AppError::validation(e.to_string()))?;

    let title = format!("{} #{}", kind.display_name(), payload.order.number);

    let outcome = state
        .backend
        .submit(&payload.printer_name, &title, &content)
        .await?;

    Ok(Json(outcome))
}

/// Fallback for non-POST methods on the dispatch route
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
}
