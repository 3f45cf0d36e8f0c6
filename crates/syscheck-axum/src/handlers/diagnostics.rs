//! Diagnostics handlers - the quick and comprehensive test endpoints.
//!
//! Request-shape validation (a missing name) is the adapter's concern and
//! maps to 400. Everything the orchestrator decides - including a failing
//! verdict - is a 200 with `success: false` in the body.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::dto::TestReportDto;
use crate::error::HttpError;
use crate::state::AppState;

/// Query parameters for the quick test endpoint.
#[derive(Deserialize)]
pub struct QuickTestParams {
    pub name: Option<String>,
}

/// Run the quick validation test.
pub async fn quick(
    State(state): State<AppState>,
    Query(params): Query<QuickTestParams>,
) -> Result<Json<TestReportDto>, HttpError> {
    let name = params.name.unwrap_or_default();
    if name.trim().is_empty() {
        return Err(HttpError::BadRequest(
            "Name parameter is required".to_string(),
        ));
    }

    Ok(Json(state.gui.quick_test(&name).into()))
}

/// Request body for the comprehensive test endpoint.
#[derive(Deserialize)]
pub struct RunTestRequest {
    pub name: Option<String>,
}

/// Run the comprehensive system test, blocking for the verdict.
///
/// A rejected handle (execution-substrate fault) surfaces as 500; a failing
/// check sequence is a normal 200 verdict.
pub async fn run(
    State(state): State<AppState>,
    Json(req): Json<RunTestRequest>,
) -> Result<Json<TestReportDto>, HttpError> {
    let name = req.name.unwrap_or_default();
    if name.trim().is_empty() {
        return Err(HttpError::BadRequest("Name is required".to_string()));
    }

    let report = state.gui.system_test(&name).await?;
    Ok(Json(report.into()))
}
