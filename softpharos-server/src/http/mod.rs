//! HTTP server layer
//!
//! Axum server with:
//! - CORS open to any origin
//! - Request tracing
//! - Graceful shutdown
//! - JSON envelope on every response

pub mod error;
pub mod extractors;
pub mod response;
pub mod routes;
pub mod server;
pub mod validation;

pub use error::ApiError;
pub use response::ApiResponse;
pub use server::{build_router, run_server, ServerConfig};
