//! Axum router wiring.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{api, app_state::AppState, ops, views};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(views::index))
        .route("/new", get(views::new_form).post(views::submit_form))
        .route("/api/v1/entry", post(api::entries::create))
        .route("/api/v1/export", get(api::entries::export))
        .route("/api/v1/teams", get(api::teams::list))
        .route("/api/v1/team", post(api::teams::create))
        .route("/api/v1/metrics", get(ops::metrics))
        .route("/healthz", get(ops::healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
