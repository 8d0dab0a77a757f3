//! # Runtime
//!
//! Tokio runtime profiles for Slimline binaries.
//!
//! The showcase server spends most of its time buffering and minifying response
//! bodies, which is CPU-bound work done on worker threads. The profiles here size
//! the worker pool and thread stacks for that load.
//!
//! ## Profiles
//! * **High Performance**: every core, 4 `MiB` stacks, long keep-alive.
//! * **Memory Efficient**: half the cores, 2 `MiB` stacks.
//! * **Default**: every core, 3 `MiB` stacks.
//!
//! ## Example
//!
//! ```rust,ignore
//! #[slim_runtime::main(high_performance)]
//! async fn main() -> anyhow::Result<()> {
//!     Ok(())
//! }
//! ```

pub use anyhow::Result;
pub use slim_derive::main;

use anyhow::Context;
use std::sync::OnceLock;
use std::thread::available_parallelism;
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

const FALLBACK_WORKER_THREADS: usize = 4;
const MAX_WORKER_THREADS: usize = 1024;
const DEFAULT_STACK_SIZE: usize = 3 * 1024 * 1024;
const MIN_STACK_SIZE: usize = 1024 * 1024;
const MAX_STACK_SIZE: usize = 16 * 1024 * 1024;
const DEFAULT_THREAD_NAME: &str = "slim-worker";

static DETECTED_WORKERS: OnceLock<usize> = OnceLock::new();

/// Worker count from `TOKIO_WORKER_THREADS`, falling back to the available parallelism.
fn detected_workers() -> usize {
    *DETECTED_WORKERS.get_or_init(|| {
        std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|raw| raw.parse::<usize>().ok())
            .filter(|&n| (1..=MAX_WORKER_THREADS).contains(&n))
            .unwrap_or_else(|| {
                available_parallelism().map_or(FALLBACK_WORKER_THREADS, std::num::NonZero::get)
            })
    })
}

/// Configuration for a multithreaded Tokio runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub worker_threads: usize,
    pub stack_size: usize,
    pub thread_name: String,
    pub thread_keep_alive: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            worker_threads: detected_workers(),
            stack_size: DEFAULT_STACK_SIZE,
            thread_name: DEFAULT_THREAD_NAME.to_owned(),
            thread_keep_alive: Duration::from_secs(60),
        }
    }
}

impl RuntimeConfig {
    /// Preset for the HTTP server.
    #[must_use]
    pub fn high_performance() -> Self {
        Self {
            stack_size: 4 * 1024 * 1024,
            thread_name: "slim-hp".to_owned(),
            thread_keep_alive: Duration::from_secs(300),
            ..Self::default()
        }
    }

    /// Preset for tooling and constrained hosts.
    #[must_use]
    pub fn memory_efficient() -> Self {
        Self {
            worker_threads: (detected_workers() / 2).max(1),
            stack_size: 2 * 1024 * 1024,
            thread_name: "slim-mem".to_owned(),
            thread_keep_alive: Duration::from_secs(30),
        }
    }

    #[must_use]
    pub const fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = clamp_workers(threads);
        self
    }

    #[must_use]
    pub const fn with_stack_size(mut self, size: usize) -> Self {
        self.stack_size = clamp_stack(size);
        self
    }

    #[must_use]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    /// Returns a copy with every field forced into its valid range.
    fn normalized(&self) -> Self {
        let thread_name = if self.thread_name.trim().is_empty() {
            DEFAULT_THREAD_NAME.to_owned()
        } else {
            self.thread_name.clone()
        };

        Self {
            worker_threads: clamp_workers(self.worker_threads),
            stack_size: clamp_stack(self.stack_size),
            thread_name,
            thread_keep_alive: self.thread_keep_alive,
        }
    }
}

const fn clamp_workers(threads: usize) -> usize {
    if threads == 0 {
        1
    } else if threads > MAX_WORKER_THREADS {
        MAX_WORKER_THREADS
    } else {
        threads
    }
}

const fn clamp_stack(size: usize) -> usize {
    if size < MIN_STACK_SIZE {
        MIN_STACK_SIZE
    } else if size > MAX_STACK_SIZE {
        MAX_STACK_SIZE
    } else {
        size
    }
}

/// Builds a multithreaded runtime with I/O and timers enabled.
///
/// # Errors
/// Returns an error if the OS refuses to spawn the worker threads.
pub fn build_runtime_with_config(config: &RuntimeConfig) -> Result<Runtime> {
    let config = config.normalized();
    debug!(
        workers = config.worker_threads,
        stack = config.stack_size,
        name = %config.thread_name,
        "Building tokio runtime"
    );

    Builder::new_multi_thread()
        .worker_threads(config.worker_threads)
        .thread_name(&config.thread_name)
        .thread_stack_size(config.stack_size)
        .thread_keep_alive(config.thread_keep_alive)
        .enable_all()
        .build()
        .context("Failed to initialize tokio runtime")
}
