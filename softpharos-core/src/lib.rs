//! softpharos-core: domain model and service layer
//!
//! Entities, partial updates, repository ports and the services the HTTP
//! layer talks to. Storage implementations live in `softpharos-server`.

pub mod domain;
pub mod error;
pub mod patch;
pub mod ports;
pub mod service;

#[cfg(any(test, feature = "testing"))]
pub mod memory;

pub use error::{DbError, DbResult};
pub use patch::Patch;
