use axum::{
    body::Body,
    http::{HeaderValue, Request, Response, header},
    middleware::Next,
};

const STATIC_PREFIX: &str = "/static/";
const STATIC_EXTENSIONS: [&str; 9] = [
    ".css", ".js", ".svg", ".png", ".jpg", ".webp", ".ico", ".woff", ".woff2",
];

fn is_static_file(path: &str) -> bool {
    path.starts_with(STATIC_PREFIX) || STATIC_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Middleware to set cache control headers
/// - Static files: cached for a year
/// - Pages and the contact relay: never cached
pub async fn cache_control_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let is_static = is_static_file(req.uri().path());
    let mut response = next.run(req).await;

    let headers = response.headers_mut();

    if is_static {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=31536000, immutable"),
        );
    } else {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store, no-cache, must-revalidate, proxy-revalidate"),
        );
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
    }

    response
}
