//! # Sales Ledger
//!
//! Append-only sequence of [`SaleRecord`]s, the source of truth for all
//! historical and same-day aggregation.
//!
//! Records are pushed in the order sales are applied, and timestamps are
//! assigned at append time, so insertion order equals chronological order.
//! Nothing is ever updated or deleted. Day bucketing compares the record's
//! typed date against the requested day, so `2025-08-02` can never
//! accidentally match `2025-08-25` the way substring matching could.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::money::Money;
use crate::types::SaleRecord;

// =============================================================================
// Ledger
// =============================================================================

/// The append-only sales ledger.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    records: Vec<SaleRecord>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Ledger::default()
    }

    /// Builds a ledger from previously persisted records, preserving order.
    pub fn from_records(records: Vec<SaleRecord>) -> Self {
        Ledger { records }
    }

    /// Appends a record. Unconditional; persistence is the caller's job.
    pub fn append(&mut self, record: SaleRecord) {
        self.records.push(record);
    }

    /// All records in insertion (= chronological) order.
    pub fn all(&self) -> &[SaleRecord] {
        &self.records
    }

    /// Number of records ever appended.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no sales have been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose timestamp falls on `day`, in chronological order.
    pub fn records_for_day(&self, day: NaiveDate) -> impl Iterator<Item = &SaleRecord> {
        self.records.iter().filter(move |record| record.day() == day)
    }

    /// Sum of totals for `day`. Used to rebuild the daily accumulator after
    /// a restart.
    pub fn total_for_day(&self, day: NaiveDate) -> Money {
        self.records_for_day(day).map(|record| record.total).sum()
    }

    /// Aggregates one day's activity into a [`DaySummary`].
    pub fn summarize_day(&self, day: NaiveDate) -> DaySummary {
        let mut transactions = 0;
        let mut revenue = Money::zero();
        let mut item_quantities: BTreeMap<String, i64> = BTreeMap::new();

        for record in self.records_for_day(day) {
            transactions += 1;
            revenue += record.total;
            for (name, qty) in &record.line_items {
                *item_quantities.entry(name.clone()).or_insert(0) += qty;
            }
        }

        DaySummary {
            day,
            transactions,
            revenue,
            item_quantities,
        }
    }
}

// =============================================================================
// Day Summary
// =============================================================================

/// Aggregated view of one business day's sales.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    /// The day summarized.
    pub day: NaiveDate,
    /// Number of sale records on that day.
    pub transactions: usize,
    /// Total revenue across those records.
    pub revenue: Money,
    /// Total quantity sold per item name.
    pub item_quantities: BTreeMap<String, i64>,
}

impl DaySummary {
    /// The most-sold item and its quantity, if anything sold.
    ///
    /// Ties break toward the alphabetically first name, since candidates are
    /// visited in name order and only a strictly greater count displaces the
    /// current best.
    pub fn most_popular(&self) -> Option<(&str, i64)> {
        let mut best: Option<(&str, i64)> = None;
        for (name, &qty) in &self.item_quantities {
            if best.map_or(true, |(_, best_qty)| qty > best_qty) {
                best = Some((name.as_str(), qty));
            }
        }
        best
    }

    /// Average transaction value, `Ksh 0.00` for an empty day.
    pub fn average_sale(&self) -> Money {
        self.revenue.divide_count(self.transactions as i64)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
