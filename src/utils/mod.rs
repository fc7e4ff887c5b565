//! Shared helpers: errors, clocks and configuration files

pub mod clock;
pub mod config;
pub mod error;

pub use error::{AppError, AppResult};
