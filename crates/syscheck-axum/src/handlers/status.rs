//! Status handler - environment snapshot.

use axum::Json;
use axum::extract::State;

use crate::dto::SystemSnapshotDto;
use crate::state::AppState;

/// Get a descriptive snapshot of the probed environment.
pub async fn get(State(state): State<AppState>) -> Json<SystemSnapshotDto> {
    Json(state.gui.system_snapshot().into())
}
