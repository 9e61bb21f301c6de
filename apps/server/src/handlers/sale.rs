//! # Sale Handler
//!
//! `POST /sale` — the one write endpoint.
//!
//! ## Sale Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        POST /sale                                       │
//! │                                                                         │
//! │  { "item": "Rice Plate", "qty": 2, "table": "T4" }                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  reconcile business day (archive + reset if midnight passed)            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate: name non-empty ─► item exists ─► stock covers qty            │
//! │       │ first failure wins, nothing mutated                             │
//! │       ▼                                                                 │
//! │  apply: decrement stock, bump daily total, append ledger record,        │
//! │         write-through both snapshots                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  200 { status, item, amountCents, remaining, alert?, alertLevel? }      │
//! │  400 VALIDATION_ERROR │ 404 NOT_FOUND │ 409 INSUFFICIENT_STOCK          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use kibanda_core::types::{AlertLevel, SaleOutcome};
use kibanda_core::TIMESTAMP_FORMAT;

use crate::error::ApiError;
use crate::state::ServiceState;

/// Sale request body.
#[derive(Debug, Clone, Deserialize)]
pub struct SaleRequest {
    /// Item name as shown on the menu.
    pub item: String,
    /// Units to sell. Must be positive.
    pub qty: i64,
    /// Optional table identifier; "N/A" is recorded when absent.
    #[serde(default)]
    pub table: Option<String>,
}

/// Successful sale response.
///
/// `alert`/`alertLevel` appear only when the sale pushed the item to or
/// below its reorder threshold, matching what the frontend's toast logic
/// expects: absent means nothing to show.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleResponse {
    pub status: String,
    pub message: String,
    pub item: String,
    pub quantity: i64,
    pub amount_cents: i64,
    pub remaining: i64,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_level: Option<AlertLevel>,
}

impl From<SaleOutcome> for SaleResponse {
    fn from(outcome: SaleOutcome) -> Self {
        let (alert, alert_level) = match outcome.alert {
            Some(alert) => (Some(alert.message), Some(alert.level)),
            None => (None, None),
        };

        SaleResponse {
            status: "success".to_string(),
            message: "Sale processed successfully".to_string(),
            item: outcome.item,
            quantity: outcome.quantity,
            amount_cents: outcome.amount.cents(),
            remaining: outcome.remaining,
            timestamp: outcome.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            alert,
            alert_level,
        }
    }
}

/// `POST /sale` — validate and apply one sale.
pub async fn record_sale(
    State(state): State<ServiceState>,
    Json(req): Json<SaleRequest>,
) -> Result<Json<SaleResponse>, ApiError> {
    debug!(item = %req.item, qty = req.qty, "record_sale request");

    let outcome = state.with_service(|s| s.record_sale(&req.item, req.qty, req.table))?;

    Ok(Json(SaleResponse::from(outcome)))
}

// =============================================================================
// Unit Tests
// =============================================================================
