use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::template::{NotFoundTemplate, Template};

mod contact;
mod health;
mod landing;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub contact_command: landing_contact::Command,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    let lang = template.language().to_owned();

    (StatusCode::NOT_FOUND, template.render(NotFoundTemplate { lang }))
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(landing::page))
        .route("/section/{name}", get(landing::section))
        .route("/health", get(health::health))
        .route(
            landing_contact::SUBMIT_PATH,
            post(contact::action).fallback(contact::method_not_allowed),
        )
        .nest_service("/static", crate::assets::AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
