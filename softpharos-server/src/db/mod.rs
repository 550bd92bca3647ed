//! Database layer - connection pool, schema, records and repositories
//!
//! # Design Principles
//!
//! - One pool, created at startup and handed to every repository
//! - One generic repository; each table only declares its record mapping
//! - Associations are eager-loaded with JOINs in the same query (no N+1)
//! - Storage errors are returned as-is, no retries

pub mod migrations;
pub mod pool;
pub mod record;
pub mod records;
pub mod repository;

pub use pool::{create_pool, create_pool_with_options, PoolOptions};
pub use record::{list_to_domain, to_domain, to_record, Record, Relation};
pub use repository::PgRepository;
