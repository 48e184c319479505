//! HTML pages: record table and entry form.

pub mod render;

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;

use teambynumbers_core::StatRecord;

use crate::api::entries;
use crate::app_state::AppState;
use crate::error::ApiError;

const NEW_ENTRY_PAGE: &str = include_str!("../../assets/new.html");

/// GET /
pub async fn index(State(app): State<AppState>) -> Html<String> {
    let records = app.records().all();
    Html(render::index_page(&records))
}

/// GET /new
pub async fn new_form() -> Html<&'static str> {
    Html(NEW_ENTRY_PAGE)
}

/// POST /new
pub async fn submit_form(
    State(app): State<AppState>,
    payload: Result<Form<StatRecord>, FormRejection>,
) -> Result<Redirect, ApiError> {
    let Form(entry) = payload?;
    entries::submit(&app, entry).await?;
    Ok(Redirect::to("/"))
}
