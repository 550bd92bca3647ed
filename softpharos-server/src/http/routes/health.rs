//! Liveness endpoint
//!
//! Answers without touching the database; the process being up is all it reports.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Liveness {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
}

impl Liveness {
    fn running() -> Self {
        Self {
            status: "ok",
            message: "SoftPharos API is running",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// GET /health
async fn liveness() -> Json<Liveness> {
    Json(Liveness::running())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(liveness))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_package_version() {
        let body = serde_json::to_value(Liveness::running()).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["message"], "SoftPharos API is running");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
