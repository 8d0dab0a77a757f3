//! # Response minification
//!
//! A tower middleware that shrinks successful HTTP responses before they leave the
//! server. The response `Content-Type` decides which minifier runs:
//!
//! | Kind | Media types                                               | Default |
//! |------|-----------------------------------------------------------|---------|
//! | HTML | `text/html`                                               | on      |
//! | CSS  | `text/css`                                                | on      |
//! | JS   | `application/javascript`, `text/ecmascript`, `x-` forms   | on      |
//! | JSON | `application/json`, `*+json`, `json-seq`, `ld+json`       | off     |
//! | XML  | `application/xml`, `text/xml`, Atom and RSS feeds         | off     |
//! | SVG  | `image/svg+xml`                                           | off     |
//!
//! A body is only replaced when the minified form is non-empty and strictly
//! smaller. Any minifier failure falls back to the original body, so the layer
//! never turns a valid response into an error.
//!
//! ```rust,no_run
//! use axum::{Router, routing::get};
//! use slim_domain::config::MinifyConfig;
//! use slim_minify::MinifyLayer;
//!
//! let app: Router = Router::new()
//!     .route("/", get(|| async { "hello" }))
//!     .layer(MinifyLayer::new(MinifyConfig::all()).skip_if(|req| req.uri.path() == "/raw"));
//! ```

pub mod content;
pub mod engine;
mod error;
pub mod layer;
pub mod minifiers;

pub use crate::content::{ContentKind, parse_media_type};
pub use crate::engine::MinifyEngine;
pub use crate::error::{MinifyError, MinifyErrorExt, Result};
pub use crate::layer::{Minify, MinifyLayer};
pub use crate::minifiers::Minifier;
