use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header::ACCEPT_LANGUAGE, request::Parts},
};

/// Languages listed by the client's `Accept-Language` header, most
/// preferred first. Entries with `q=0` are dropped, wildcards ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserLanguage(Vec<String>);

impl UserLanguage {
    pub fn parse(header: &str) -> Self {
        let mut weighted = header
            .split(',')
            .filter_map(|entry| {
                let mut parts = entry.trim().split(';');
                let tag = parts.next()?.trim();
                if tag.is_empty() || tag == "*" {
                    return None;
                }

                let quality = parts
                    .find_map(|param| param.trim().strip_prefix("q="))
                    .and_then(|q| q.trim().parse::<f32>().ok())
                    .unwrap_or(1.0);

                (quality > 0.0).then(|| (tag.to_lowercase(), quality))
            })
            .collect::<Vec<_>>();

        // Stable, so equal weights keep header order
        weighted.sort_by(|a, b| b.1.total_cmp(&a.1));

        Self(weighted.into_iter().map(|(tag, _)| tag).collect())
    }

    pub fn preferred_languages(&self) -> &[String] {
        &self.0
    }

    /// First preferred language with translations, matched on the primary
    /// subtag (`ru-RU` selects `ru`).
    pub fn negotiate(&self, supported: &[&str]) -> Option<String> {
        self.0.iter().find_map(|tag| {
            let primary = tag.split_once('-').map(|(p, _)| p).unwrap_or(tag);
            supported
                .iter()
                .find(|locale| **locale == primary)
                .map(|locale| locale.to_string())
        })
    }
}

impl<S: Send + Sync> FromRequestParts<S> for UserLanguage {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .map(UserLanguage::parse)
            .unwrap_or_default())
    }
}
