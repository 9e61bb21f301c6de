//! # Health Check Handler
//!
//! `GET /health` — liveness probe for the frontend's connection indicator.
//! Deliberately touches no state: it answers even while a slow disk has the
//! service lock busy, which is exactly what a liveness check is for.

use axum::Json;
use chrono::Local;
use serde::{Deserialize, Serialize};

use kibanda_core::TIMESTAMP_FORMAT;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

/// `GET /health`.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Local::now().naive_local().format(TIMESTAMP_FORMAT).to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_healthy() {
        let Json(response) = health().await;

        assert_eq!(response.status, "healthy");
        assert_eq!(response.version, env!("CARGO_PKG_VERSION"));
        // Legacy timestamp shape: "2025-08-25 12:00:00"
        assert_eq!(response.timestamp.len(), 19);
        assert_eq!(&response.timestamp[4..5], "-");
        assert_eq!(&response.timestamp[10..11], " ");
    }
}
