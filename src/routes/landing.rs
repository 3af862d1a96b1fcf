use std::str::FromStr;

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};

use crate::{
    config::SiteConfig,
    navigation::{HeaderState, Navigation, SCROLL_THRESHOLD_PX, Section},
    routes::AppState,
    template::{Template, filters},
};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct LandingTemplate {
    pub lang: String,
    pub nav: Navigation,
    pub header: HeaderState,
    pub scroll_threshold: f64,
    pub submit_path: &'static str,
    pub site: SiteConfig,
    pub year: i32,
}

pub async fn page(template: Template, State(app_state): State<AppState>) -> impl IntoResponse {
    let lang = template.language().to_owned();

    template.render(LandingTemplate {
        lang,
        nav: Navigation::default(),
        header: HeaderState::default(),
        scroll_threshold: SCROLL_THRESHOLD_PX,
        submit_path: landing_contact::SUBMIT_PATH,
        site: app_state.config.site,
        year: time::OffsetDateTime::now_utc().year(),
    })
}

/// Deep link to a page section. Unknown names land on the top of the page.
pub async fn section(Path(name): Path<String>) -> Redirect {
    match Section::from_str(&name) {
        Ok(section) => Redirect::to(&format!("/#{}", section.anchor())),
        Err(_) => Redirect::to("/"),
    }
}
