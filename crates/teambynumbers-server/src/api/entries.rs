use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;

use teambynumbers_core::record::DATE_FORMAT;
use teambynumbers_core::StatRecord;

use super::run_blocking;
use crate::app_state::AppState;
use crate::error::ApiError;

/// Stamp today's date on `entry`, store it, and make sure its team is in
/// the directory. Shared by the JSON API and the HTML form.
pub async fn submit(app: &AppState, mut entry: StatRecord) -> Result<StatRecord, ApiError> {
    entry.date = chrono::Utc::now().format(DATE_FORMAT).to_string();

    let records = app.records();
    let teams = app.teams();
    let result = run_blocking(move || {
        let stored = records.append(entry)?;
        // Directory upkeep is best effort; the entry itself is already saved.
        if let Err(e) = teams.ensure_team(&stored.team) {
            tracing::warn!(team = %stored.team, error = %e, "failed to register team");
        }
        Ok(stored)
    })
    .await;

    let metrics = app.metrics();
    match &result {
        Ok(_) => metrics.entries.inc(&[("result", "accepted")]),
        Err(e) => {
            metrics.entries.inc(&[("result", "rejected")]);
            tracing::warn!(error = %e.0, "error storing new entry");
        }
    }
    result
}

/// POST /api/v1/entry
pub async fn create(
    State(app): State<AppState>,
    payload: Result<Json<StatRecord>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(entry) = payload?;
    let stored = submit(&app, entry).await?;
    Ok(Json(stored.view()).into_response())
}

/// GET /api/v1/export
pub async fn export(State(app): State<AppState>) -> Response {
    let records = app.records().all();
    let views: Vec<_> = records.iter().map(StatRecord::view).collect();
    Json(views).into_response()
}
