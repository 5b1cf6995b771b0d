//! Roster Server Library
//!
//! HTTP service exposing create, read, update and delete operations over
//! user records.
//!
//! This library exposes the router and its building blocks so tests can drive
//! the service without opening a socket.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod shutdown;
pub mod state;

// Re-export commonly used types for convenience
pub use app::create_router;
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;
