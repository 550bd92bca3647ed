//! softpharos-server: HTTP API and Postgres persistence
//!
//! Wires the domain services from `softpharos-core` to sqlx repositories and
//! exposes them as a JSON API.

pub mod config;
pub mod db;
pub mod http;
pub mod state;
pub mod tracing_setup;

pub use config::{DatabaseConfig, ServerArgs};
pub use http::{build_router, run_server, ServerConfig};
pub use state::AppState;
