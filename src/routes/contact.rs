use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use landing_contact::{ContactSubmission, SubmitResponse};
use rust_i18n::t;

use crate::routes::AppState;

fn server_error(locale: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(SubmitResponse::failed(t!("relay.server_error", locale = locale))),
    )
        .into_response()
}

/// POST /api/submit-contact
///
/// Appends the submission to the sheet. Any failure, including a body that
/// is not valid JSON, answers 500 with a generic message; details only go
/// to the log.
pub async fn action(
    State(app_state): State<AppState>,
    input: Result<Json<ContactSubmission>, JsonRejection>,
) -> Response {
    let locale = app_state.config.contact.locale.as_str();

    let Json(input) = match input {
        Ok(input) => input,
        Err(err) => {
            tracing::error!("contact submission body rejected: {err}");

            return server_error(locale);
        }
    };

    match app_state.contact_command.submit(input).await {
        Ok(_) => (
            StatusCode::OK,
            Json(SubmitResponse::ok(t!("relay.success", locale = locale))),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("failed to append contact submission: {err:#}");

            server_error(locale)
        }
    }
}

/// Any method other than POST on the relay path.
pub async fn method_not_allowed(State(app_state): State<AppState>) -> Response {
    let locale = app_state.config.contact.locale.as_str();

    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        Json(SubmitResponse::failed(t!(
            "relay.method_not_allowed",
            locale = locale
        ))),
    )
        .into_response()
}
