//! # Daily Report Rendering
//!
//! Renders one business day's activity into the plain-text report written at
//! rollover (`daily_reports_<date>.txt`) and on explicit export
//! (`end_of_day_report_<date>.txt`). Both triggers share this single format:
//! revenue summary, per-item stock status, then a chronological itemized
//! listing of the day's sales.

use chrono::{NaiveDate, NaiveDateTime};

use crate::inventory::Inventory;
use crate::ledger::Ledger;
use crate::types::{SaleRecord, StockStatus};
use crate::{DATE_FORMAT, TIMESTAMP_FORMAT};

/// Renders the daily report for `day`.
///
/// `generated_at` is stamped into the header; the caller supplies it so the
/// rendering stays deterministic and clock-free.
pub fn daily_report(
    day: NaiveDate,
    generated_at: NaiveDateTime,
    inventory: &Inventory,
    ledger: &Ledger,
) -> String {
    let summary = ledger.summarize_day(day);
    let mut out = String::new();

    out.push_str("KIBANDA POS - DAILY SALES REPORT\n");
    out.push_str("=====================================\n\n");
    out.push_str(&format!("Date: {}\n", day.format(DATE_FORMAT)));
    out.push_str(&format!(
        "Generated: {}\n\n",
        generated_at.format(TIMESTAMP_FORMAT)
    ));

    out.push_str("SALES SUMMARY\n");
    out.push_str("-------------\n");
    out.push_str(&format!("Total Revenue: {}\n", summary.revenue));
    out.push_str(&format!("Total Transactions: {}\n", summary.transactions));
    out.push_str(&format!("Average Transaction: {}\n\n", summary.average_sale()));

    out.push_str("INVENTORY STATUS\n");
    out.push_str("----------------\n");
    for item in inventory.items() {
        out.push_str(&format!(
            "{}: {} units{}\n",
            item.name,
            item.stock,
            stock_flag(item.stock_status())
        ));
    }

    out.push_str("\nDETAILED SALES\n");
    out.push_str("--------------\n");
    for record in ledger.records_for_day(day) {
        out.push_str(&format!("\nTime: {}\n", record.timestamp.format(TIMESTAMP_FORMAT)));
        out.push_str(&format!("Table: {}\n", record.table));
        out.push_str(&format!("Total: {}\n", record.total));
        out.push_str(&format!("Items: {}\n", format_line_items(record)));
    }

    out
}

/// Flag appended to an inventory line. One flag at most; out-of-stock wins.
fn stock_flag(status: StockStatus) -> &'static str {
    match status {
        StockStatus::OutOfStock => " OUT OF STOCK",
        StockStatus::LowStock => " LOW STOCK",
        StockStatus::InStock => "",
    }
}

/// Formats a record's line items as `Chapati x2 Coffee x1`.
fn format_line_items(record: &SaleRecord) -> String {
    record
        .line_items
        .iter()
        .map(|(name, qty)| format!("{name} x{qty}"))
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// Unit Tests
// =============================================================================
