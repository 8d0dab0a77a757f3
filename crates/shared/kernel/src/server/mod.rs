//! Shared HTTP pieces: application state and the system router.

mod health;
pub mod router;
pub mod state;

pub use health::HealthResponse;
pub use router::system_router;
pub use state::{AppState, AppStateBuilder, AppStateError};
