//! Kernel utilities shared by the Slimline applications.
//! Keep this crate lightweight: configuration loading, the shared application
//! state and the system routes. Minification itself lives in `slim-minify`.
//!
//! ## Config loading
//! ```rust,no_run
//! use slim_kernel::config::load_config;
//! use slim_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(None::<&str>).unwrap();
//! println!("listening on port {}", cfg.server.port);
//! ```
pub mod config;
#[cfg(feature = "server")]
pub mod server;

pub use slim_domain as domain;
