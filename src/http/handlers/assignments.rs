use crate::domain::experiment::{AssignmentErrorBody, AssignmentParams};
use crate::AppState;
use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};

pub async fn assign_from_query(
    State(state): State<AppState>,
    params: Result<Query<AssignmentParams>, QueryRejection>,
) -> impl IntoResponse {
    match params {
        Ok(Query(params)) => respond(&state, &params),
        Err(rejection) => rejected(&state, rejection.status(), rejection.body_text()),
    }
}

pub async fn assign_from_form(
    State(state): State<AppState>,
    params: Result<Form<AssignmentParams>, FormRejection>,
) -> impl IntoResponse {
    match params {
        Ok(Form(params)) => respond(&state, &params),
        Err(rejection) => rejected(&state, rejection.status(), rejection.body_text()),
    }
}

fn respond(state: &AppState, params: &AssignmentParams) -> Response {
    match state.assignment_service.assign(params) {
        Ok(resp) => (StatusCode::OK, Json(resp)).into_response(),
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}

fn rejected(state: &AppState, status: StatusCode, message: String) -> Response {
    tracing::warn!("rejected assignment request ({}): {}", status, message);
    (
        status,
        Json(AssignmentErrorBody {
            status: "error".to_string(),
            message,
            valid_experiments: state.catalog.names(),
        }),
    )
        .into_response()
}
