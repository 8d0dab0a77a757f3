use super::health;
use axum::Router;
use axum::routing::get;
use std::sync::LazyLock;

/// Routes every Slimline server exposes regardless of its features.
pub fn system_router<S>() -> Router<S>
where
    S: Send + Sync + Clone + 'static,
{
    let _ = LazyLock::force(&health::START_TIME);
    Router::new().route("/health", get(health::health_handler))
}
