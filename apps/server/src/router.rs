use crate::showcase;
use axum::Router;
use axum::routing::get;
use slim::server::{AppState, system_router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Assembles the showcase routes, static assets and system routes.
///
/// Minification wraps everything, including `/static`; tracing is outermost so
/// logged latencies include the minify pass.
pub(crate) fn init(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.storage.static_dir);
    let minify = slim::minify_layer(&state.config);

    Router::new()
        .route("/", get(showcase::index))
        .route("/api/packages", get(showcase::packages))
        .route("/api/config", get(showcase::config))
        .nest_service("/static", assets)
        .merge(system_router())
        .layer(minify)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
