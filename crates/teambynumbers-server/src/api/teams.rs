use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use teambynumbers_core::PersonRecord;

use super::run_blocking;
use crate::app_state::AppState;
use crate::error::ApiError;

/// GET /api/v1/teams
pub async fn list(State(app): State<AppState>) -> Json<Vec<String>> {
    Json(app.teams().teams().into_iter().collect())
}

/// POST /api/v1/team
pub async fn create(
    State(app): State<AppState>,
    payload: Result<Json<PersonRecord>, JsonRejection>,
) -> Result<Json<PersonRecord>, ApiError> {
    let Json(person) = payload?;
    let teams = app.teams();
    let stored = person.clone();
    run_blocking(move || teams.add(person)).await?;
    Ok(Json(stored))
}
