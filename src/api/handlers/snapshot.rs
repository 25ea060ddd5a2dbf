//! Handler for the public snapshot endpoint.

use axum::{Json, extract::State};

use crate::api::dto::snapshot::SnapshotResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the full public snapshot.
///
/// # Endpoint
///
/// `GET /`
///
/// # Response
///
/// ```json
/// {
///   "candidates": [{ "id": "c1", "name": "...", "photo": "", ... }],
///   "votes": [["c1", 4.5, "2024-11-15T12:00:00Z", "a@b.c"]],
///   "comments": [["c1", "Nick", "text", "2024-11-15T12:00:01Z", "a@b.c"]]
/// }
/// ```
///
/// Only approved candidates appear; votes are unfiltered by approval and
/// keep one row per voter; comment display names reflect current
/// nicknames.
pub async fn snapshot_handler(
    State(state): State<AppState>,
) -> Result<Json<SnapshotResponse>, AppError> {
    let snapshot = state.snapshot_service.fetch().await?;
    Ok(Json(SnapshotResponse::from(snapshot)))
}
