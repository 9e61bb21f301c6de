//! # Totals, History and Report Handlers
//!
//! The three reporting reads: today's totals (`GET /dailyTotals`), the full
//! sales history (`GET /salesHistory`) and the end-of-day report export
//! (`GET /exportReport`). Export is the one endpoint where a persistence
//! failure reaches the client: its entire purpose is the file on disk, so a
//! failed write is a failed request, not a logged shrug.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use kibanda_core::types::SaleRecord;
use kibanda_core::TIMESTAMP_FORMAT;

use crate::error::ApiError;
use crate::state::ServiceState;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTotalsResponse {
    /// The current business day, `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// The incrementally maintained running total.
    pub daily_total_cents: i64,
    /// Revenue derived from today's ledger records. Equals
    /// `dailyTotalCents` by invariant; both are served because the frontend
    /// reads both.
    pub today_revenue_cents: i64,
    pub today_sales: usize,
    pub most_popular_item: Option<String>,
    pub most_popular_quantity: i64,
    pub average_sale_cents: i64,
}

/// `GET /dailyTotals` — today's revenue and transaction statistics.
pub async fn daily_totals(State(state): State<ServiceState>) -> Json<DailyTotalsResponse> {
    debug!("daily_totals request");

    let totals = state.with_service(|s| s.daily_totals());
    let (most_popular_item, most_popular_quantity) = match totals.summary.most_popular() {
        Some((name, qty)) => (Some(name.to_string()), qty),
        None => (None, 0),
    };

    Json(DailyTotalsResponse {
        date: totals.date,
        daily_total_cents: totals.running_total.cents(),
        today_revenue_cents: totals.summary.revenue.cents(),
        today_sales: totals.summary.transactions,
        most_popular_item,
        most_popular_quantity,
        average_sale_cents: totals.summary.average_sale().cents(),
    })
}

/// One ledger record on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleDto {
    pub timestamp: String,
    pub items: BTreeMap<String, i64>,
    pub total_cents: i64,
    pub table: String,
}

impl From<&SaleRecord> for SaleDto {
    fn from(record: &SaleRecord) -> Self {
        SaleDto {
            timestamp: record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            items: record.line_items.clone(),
            total_cents: record.total.cents(),
            table: record.table.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesHistoryResponse {
    pub sales: Vec<SaleDto>,
    pub total_sales: usize,
}

/// `GET /salesHistory` — every recorded sale, oldest first.
pub async fn sales_history(State(state): State<ServiceState>) -> Json<SalesHistoryResponse> {
    debug!("sales_history request");

    let (sales, total_sales) = state.with_service(|s| {
        let records = s.sales_history();
        (
            records.iter().map(SaleDto::from).collect::<Vec<_>>(),
            records.len(),
        )
    });

    Json(SalesHistoryResponse { sales, total_sales })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    pub status: String,
    pub message: String,
    pub filename: String,
    pub path: String,
}

/// `GET /exportReport` — write today's end-of-day report file.
pub async fn export_report(
    State(state): State<ServiceState>,
) -> Result<Json<ExportResponse>, ApiError> {
    debug!("export_report request");

    let exported = state.with_service(|s| s.export_report())?;

    Ok(Json(ExportResponse {
        status: "success".to_string(),
        message: "Report exported successfully".to_string(),
        filename: exported.file_name,
        path: exported.path.display().to_string(),
    }))
}

// =============================================================================
// Unit Tests
// =============================================================================
