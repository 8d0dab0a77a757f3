//! # Logger
//!
//! Installs the global `tracing` subscriber for Slimline binaries.
//!
//! * Console output uses the compact formatter with ANSI colours.
//! * File output goes through a non-blocking rolling appender, optionally as JSON.
//! * `RUST_LOG` overrides the configured level; [`LoggerBuilder::env_filter`] sets a
//!   programmatic default such as `"slim_minify=debug,tower_http=info"`.
//!
//! ## Example
//!
//! ```rust
//! # use slim_logger::{LevelFilter, Logger};
//! let _logger = Logger::builder()
//!     .name("slim-server")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Rolling file output settings.
#[derive(Debug)]
struct FileOutput {
    dir: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

#[derive(Debug)]
struct Settings {
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    file: Option<FileOutput>,
}

impl Default for Settings {
    fn default() -> Self {
        Self { console: true, level: LevelFilter::INFO, env_filter: None, file: None }
    }
}

/// Builder state: no name has been given yet.
#[derive(Debug)]
pub struct Unnamed;
/// Builder state: named, ready to initialize.
#[derive(Debug)]
pub struct Named(String);
/// Builder state: console only.
#[derive(Debug)]
pub struct ConsoleOnly;
/// Builder state: file output configured.
#[derive(Debug)]
pub struct WithFile;

/// Configures and installs the global subscriber.
///
/// A name is required before [`LoggerBuilder::init`] becomes available; file-only
/// options ([`LoggerBuilder::rotation`], [`LoggerBuilder::max_files`],
/// [`LoggerBuilder::json`]) appear once [`LoggerBuilder::path`] was called.
#[derive(Debug)]
#[must_use = "call .init() to install the subscriber"]
pub struct LoggerBuilder<N = Unnamed, F = ConsoleOnly> {
    settings: Settings,
    name: N,
    output: PhantomData<F>,
}

impl<F> LoggerBuilder<Unnamed, F> {
    /// Sets the logger name, also used as the log file prefix.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named, F> {
        LoggerBuilder { settings: self.settings, name: Named(name.into()), output: PhantomData }
    }
}

impl<F> LoggerBuilder<Named, F> {
    /// Minimum level when `RUST_LOG` is not set.
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Programmatic filter directives; invalid directives make [`Self::init`] fail.
    pub fn env_filter(mut self, directives: impl Into<String>) -> Self {
        self.settings.env_filter = Some(directives.into());
        self
    }

    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Writes logs to rolling files in `dir` (daily rotation, ten files by default).
    pub fn path(mut self, dir: impl Into<PathBuf>) -> LoggerBuilder<Named, WithFile> {
        self.settings.file = Some(FileOutput {
            dir: dir.into(),
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        });
        LoggerBuilder { settings: self.settings, name: self.name, output: PhantomData }
    }

    /// Installs the subscriber.
    ///
    /// The returned [`Logger`] owns the file writer's worker guard and must be
    /// kept alive until shutdown so buffered lines are flushed.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`,
    ///   bad filter directives or when no output is enabled.
    /// * [`LoggerError::Directory`] / [`LoggerError::Appender`] when file output fails.
    /// * [`LoggerError::Subscriber`] if a global subscriber already exists.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Named(name) = self.name;
        validate(&self.settings, &name)?;

        let filter = build_filter(&self.settings)?;
        let mut layers: Vec<BoxedLayer> = Vec::new();

        if self.settings.console {
            layers.push(fmt::layer().compact().with_ansi(true).boxed());
        }

        let guard = match self.settings.file {
            Some(file) => {
                let (layer, guard) = file_layer(&name, file)?;
                layers.push(layer);
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "no output enabled, turn on console or file logging".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(layers).with(filter).try_init()?;

        Ok(Logger { guard })
    }
}

impl LoggerBuilder<Named, WithFile> {
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        if let Some(file) = self.settings.file.as_mut() {
            file.rotation = rotation;
        }
        self
    }

    pub fn max_files(mut self, max: usize) -> Self {
        if let Some(file) = self.settings.file.as_mut() {
            file.max_files = max;
        }
        self
    }

    /// Emits JSON lines to the log files (console output stays human-readable).
    pub fn json(mut self) -> Self {
        if let Some(file) = self.settings.file.as_mut() {
            file.json = true;
        }
        self
    }
}

/// Handle to the installed logging system.
#[must_use = "dropping the handle stops the background file writer"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts configuring the global subscriber.
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { settings: Settings::default(), name: Unnamed, output: PhantomData }
    }

    /// The file writer guard, present only when file output is enabled.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logger shutting down, flushing file output");
        }
    }
}

fn validate(settings: &Settings, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "logger name cannot be empty".into(),
            context: None,
        });
    }
    if settings.file.as_ref().is_some_and(|file| file.max_files == 0) {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }
    Ok(())
}

fn build_filter(settings: &Settings) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());
    match &settings.env_filter {
        None => Ok(builder.from_env_lossy()),
        Some(directives) => builder.parse(directives).map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("invalid filter '{directives}': {e}").into(),
                context: None,
            }
        }),
    }
}

fn file_layer(name: &str, file: FileOutput) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
    fs::create_dir_all(&file.dir)
        .context(format!("Failed to create log directory {}", file.dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(file.rotation)
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(file.max_files)
        .build(&file.dir)
        .context("Failed to build rolling appender")?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let layer = fmt::layer().with_writer(writer).with_ansi(false);
    let boxed = if file.json { layer.json().boxed() } else { layer.boxed() };

    Ok((boxed, guard))
}
