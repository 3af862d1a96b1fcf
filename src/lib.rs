rust_i18n::i18n!("locales", fallback = "en");

pub mod assets;
pub mod config;
pub mod language;
pub mod middleware;
pub mod navigation;
pub mod observability;
pub mod routes;
pub mod template;

pub use config::Config;
pub use routes::AppState;

use tower_http::{compression::CompressionLayer, trace::TraceLayer};

/// Router with every route and the response middleware stack.
///
/// Used by `serve` and by integration tests that drive the app without
/// binding a socket.
pub fn create_app(state: AppState) -> axum::Router {
    routes::router(state)
        // no-store for pages and the relay, long-lived caching for assets
        .layer(axum::middleware::from_fn(
            middleware::cache_control_middleware,
        ))
        // Minify HTML responses before compression
        .layer(axum::middleware::map_response(
            middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}
