//! # Domain Models
//!
//! Pure data types shared by every Slimline crate, with minimal dependencies
//! (`serde`, `bitflags`). No I/O and no minification logic lives here.

pub mod config;
pub mod constants;
pub mod kinds;
pub mod showcase;
