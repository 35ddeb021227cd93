use crate::http::handlers::{assignments, experiments, ops};
use crate::AppState;
use axum::routing::get;
use axum::Router;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(ops::health))
        .route(
            "/assignments",
            get(assignments::assign_from_query).post(assignments::assign_from_form),
        )
        .route("/experiments", get(experiments::list_experiments))
        .route("/ops/readiness", get(ops::readiness))
        .route("/ops/liveness", get(ops::liveness))
        .with_state(state)
}
