use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides, e.g. `SLIM__MINIFY__JSON=true`.
pub const ENV_PREFIX: &str = "SLIM";
/// Base name of the configuration file looked up when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "server";

#[slim_derive::slim_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads layered configuration: a file, then `SLIM__`-prefixed environment overrides.
///
/// * With `Some(path)` the file must exist. Any extension `config` understands works
///   (`server.toml`, `server.json`, ...), and the extension may be omitted.
/// * With `None` the optional `server` file in the working directory is used, so a
///   missing file yields defaults plus environment overrides.
///
/// Nested keys are separated by a double underscore: `SLIM__SERVER__PORT=8080`
/// maps to `server.port`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if a required file is missing, a value has the
/// wrong type, or deserialization into `T` fails.
///
/// # Example
/// ```rust
/// use slim_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Settings {
///     port: u16,
/// }
///
/// let cfg: Settings = load_config(Some("config/missing")).unwrap_or_default();
/// assert_eq!(cfg.port, 0);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let required = path.is_some();
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    info!(path = %effective_path.display(), required, "Loading configuration");

    Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
