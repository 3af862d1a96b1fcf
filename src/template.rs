use axum::{
    RequestPartsExt,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::{collections::HashMap, convert::Infallible};

use crate::language::UserLanguage;

pub const DEFAULT_LANGUAGE: &str = "en";

pub(crate) mod filters {
    #[askama::filter_fn]
    pub fn t(value: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let preferred_language = askama::get_value::<String>(values, "preferred_language")?;

        Ok(rust_i18n::t!(value, locale = preferred_language).to_string())
    }
}

/// Renders askama templates in the language negotiated for the request.
pub struct Template {
    preferred_language: String,
}

impl Template {
    pub fn new(preferred_language: impl Into<String>) -> Self {
        Self {
            preferred_language: preferred_language.into(),
        }
    }

    pub fn language(&self) -> &str {
        &self.preferred_language
    }

    fn render_with_values<T: askama::Template>(
        &self,
        template: T,
    ) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn std::any::Any>> = HashMap::new();
        values.insert(
            "preferred_language",
            Box::new(self.preferred_language.to_owned()),
        );

        template.render_with_values(&values)
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match self.render_with_values(template) {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("failed to render template: {err}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    rust_i18n::t!("page.error", locale = self.preferred_language.as_str())
                        .to_string(),
                )
                    .into_response()
            }
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_language = parts.extract::<UserLanguage>().await?;

        let preferred_language = user_language
            .negotiate(&rust_i18n::available_locales!())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_owned());

        Ok(Template::new(preferred_language))
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub lang: String,
}
