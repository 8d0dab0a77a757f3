//! # Slimline Server
//!
//! An `Axum` server that serves the showcase page, its JSON endpoints and static
//! assets, with every response passing through the minify middleware.
//!
//! ## Example
//! ```no_run
//! use slim_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(8080)
//!         .static_dir("public")
//!         .build()?
//!         .run()
//!         .await
//! }
//! ```

mod router;
pub mod showcase;

use anyhow::{Context, Result};
use axum::Router;
use axum_server::Handle;
use slim::domain::config::AppConfig;
use slim::server::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info, warn};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(30);

/// Collects the [`AppConfig`] for the showcase server, with shortcuts for the
/// listen port and the `/static` directory.
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: AppConfig,
}

impl ServerBuilder {
    /// Replaces the whole configuration, usually the result of `load_config`.
    pub fn config(mut self, cfg: AppConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Listen port. Overrides `server.port`.
    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    /// Directory served under `/static`.
    pub fn static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cfg.storage.static_dir = dir.into();
        self
    }

    /// Fails when HTTPS is configured but the certificate or key file is absent.
    /// A key readable by group or others only logs a warning.
    fn validate_ssl_config(&self) -> Result<()> {
        if let Some(ssl) = &self.cfg.server.ssl {
            if !ssl.cert.exists() {
                anyhow::bail!("TLS certificate not found at {}", ssl.cert.display());
            }
            if !ssl.key.exists() {
                anyhow::bail!("TLS key not found at {}", ssl.key.display());
            }

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                let metadata = ssl.key.metadata()?;
                if metadata.permissions().mode() & 0o077 != 0 {
                    warn!(
                        path = %ssl.key.display(),
                        "TLS key is readable by group or others, expected mode 600"
                    );
                }
            }
        }
        Ok(())
    }

    /// Checks the TLS files and assembles the [`AppState`] the routes share.
    ///
    /// A missing static directory is not fatal: `/static` then answers `404`.
    ///
    /// # Errors
    /// Returns an error if the TLS certificate or key is configured but missing,
    /// or if the application state cannot be assembled.
    pub fn build(self) -> Result<Server> {
        self.validate_ssl_config()?;

        let address = SocketAddr::new(self.cfg.server.address, self.cfg.server.port);
        let static_dir = &self.cfg.storage.static_dir;
        if !static_dir.is_dir() {
            warn!(path = %static_dir.display(), "Static directory not found");
        }

        info!(
            address = %address,
            minify = %self.cfg.minify.kinds(),
            "Initializing server"
        );

        let state = AppState::builder()
            .config(self.cfg)
            .build()
            .context("Failed to finalize application state")?;
        Ok(Server { state })
    }
}

/// The showcase server: shared state from which the minified router is built.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: AppState,
}

impl Server {
    /// Starts from [`AppConfig::default`], which enables every minifier.
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// The complete application router, with the minify and trace layers applied.
    #[must_use]
    pub fn router(&self) -> Router {
        router::init(self.state.clone())
    }

    /// Serves [`Server::router`] over HTTP, or HTTPS when `server.ssl` is set.
    ///
    /// On Ctrl+C or SIGTERM, in-flight requests get 30 seconds to finish.
    ///
    /// # Errors
    /// Returns an error if the address cannot be bound or the PEM files fail
    /// to load.
    pub async fn run(self) -> Result<()> {
        let cfg = self.state.config.clone();
        let address = SocketAddr::new(cfg.server.address, cfg.server.port);

        info!(
            address = %address,
            ssl = cfg.server.ssl.is_some(),
            "Starting server"
        );

        let app = self.router();

        let handle = Handle::<SocketAddr>::new();
        let shutdown_handle = handle.clone();

        tokio::spawn(async move {
            if let Err(e) = shutdown_signal().await {
                error!(error = %e, "Shutdown signal handler failed");
                return;
            }
            info!(grace = ?SHUTDOWN_GRACE, "Draining in-flight requests");
            shutdown_handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
        });

        if let Some(ssl_config) = &cfg.server.ssl {
            info!("Showcase available at https://{address}");

            let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(
                &ssl_config.cert,
                &ssl_config.key,
            )
            .await
            .context("Failed to load TLS certificate or key")?;

            axum_server::bind_rustls(address, tls_config)
                .handle(handle)
                .serve(app.into_make_service())
                .await
                .context("HTTPS server failed")?;
        } else {
            info!("Showcase available at http://{address}");

            axum_server::bind(address)
                .handle(handle)
                .serve(app.into_make_service())
                .await
                .context("HTTP server failed")?;
        }

        info!("Server stopped");
        Ok(())
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }
}

/// Waits for Ctrl+C, or SIGTERM on Unix, which is what container runtimes send.
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => {
            res.context("Ctrl+C signal received")?;
        },
        res = terminate => {
            res.context("SIGTERM signal received")?;
        },
    }

    Ok(())
}
