use std::sync::LazyLock;

use axum::{
    body::{Body, to_bytes},
    http::{StatusCode, header},
    response::Response,
};

static HTML_CFG: LazyLock<minify_html::Cfg> = LazyLock::new(|| minify_html::Cfg {
    keep_closing_tags: true,
    keep_html_and_head_opening_tags: true,
    minify_css: true,
    minify_js: true,
    ..Default::default()
});

/// Minifies `text/html` responses in release builds. Debug builds pass
/// every response through as rendered.
pub async fn minify_html_middleware(response: Response<Body>) -> Response<Body> {
    if cfg!(debug_assertions) || !is_html(&response) {
        return response;
    }

    minify(response).await
}

fn is_html(response: &Response<Body>) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("text/html"))
}

async fn minify(response: Response<Body>) -> Response<Body> {
    let (mut parts, body) = response.into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);

    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            let minified = minify_html::minify(&bytes, &HTML_CFG);

            Response::from_parts(parts, Body::from(minified))
        }
        Err(err) => {
            tracing::error!("failed to buffer html response: {err}");
            parts.status = StatusCode::INTERNAL_SERVER_ERROR;

            Response::from_parts(parts, Body::empty())
        }
    }
}
