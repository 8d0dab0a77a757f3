//! Facade crate for the Slimline workspace.
//! Re-exports the domain models, kernel utilities and the minify middleware so
//! applications depend on one crate. Keep this crate thin: it composes, it does
//! not implement.
//!
//! ## Usage
//! - Add `slim` with the `server` feature for the axum system routes and state.
//! - Call [`minify_layer`] with the loaded config and attach it to the router.

pub use slim_domain as domain;
pub use slim_kernel as kernel;
pub use slim_minify as minify;

use slim_domain::config::AppConfig;
use slim_minify::MinifyLayer;
use tracing::info;

#[cfg(feature = "server")]
pub mod server {
    pub use slim_kernel::server::{AppState, AppStateBuilder, system_router};
}

/// Builds the minify middleware from the `[minify]` section of the config.
#[must_use]
pub fn minify_layer(config: &AppConfig) -> MinifyLayer {
    let layer = MinifyLayer::new(config.minify.clone());
    info!(kinds = %layer.engine().enabled(), "Response minification configured");
    layer
}
