//! # Persistence Trait
//!
//! The seam between the service layer and durable storage.
//!
//! The service owns an `Arc<dyn Persistence>`, so production runs against
//! [`crate::JsonFileStore`] while unit tests run against
//! [`crate::MemoryStore`] or a purposely failing stand-in. All methods are
//! synchronous: writes sit on the request's critical path by design
//! (write-through), and the files involved are small.

use std::path::PathBuf;

use chrono::NaiveDate;
use kibanda_core::types::{Item, SaleRecord};
use kibanda_core::DATE_FORMAT;

use crate::error::StoreResult;

// =============================================================================
// Report Kinds
// =============================================================================

/// Which report file a piece of report text lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Archive written once when a business day rolls over.
    DailyArchive,
    /// Report written on an explicit export request.
    EndOfDay,
}

impl ReportKind {
    /// File name for a report of this kind covering `day`.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveDate;
    /// use kibanda_store::ReportKind;
    ///
    /// let day = NaiveDate::from_ymd_opt(2025, 8, 25).unwrap();
    /// assert_eq!(
    ///     ReportKind::DailyArchive.file_name(day),
    ///     "daily_reports_2025-08-25.txt"
    /// );
    /// assert_eq!(
    ///     ReportKind::EndOfDay.file_name(day),
    ///     "end_of_day_report_2025-08-25.txt"
    /// );
    /// ```
    pub fn file_name(&self, day: NaiveDate) -> String {
        let date = day.format(DATE_FORMAT);
        match self {
            ReportKind::DailyArchive => format!("daily_reports_{date}.txt"),
            ReportKind::EndOfDay => format!("end_of_day_report_{date}.txt"),
        }
    }
}

// =============================================================================
// Persistence Trait
// =============================================================================

/// Durable storage for inventory snapshots, the sales ledger and reports.
///
/// ## Contract
/// - `load_inventory` returns `Ok(None)` when no snapshot exists yet; the
///   caller seeds the default menu. A snapshot that exists but does not
///   parse is an error, never `None`.
/// - `load_sales` returns an empty ledger when no history file exists.
/// - Saves replace the whole file (full-snapshot write-through).
/// - `write_report` returns the path the report landed at.
pub trait Persistence: Send + Sync {
    /// Loads the inventory snapshot, `None` on first run.
    fn load_inventory(&self) -> StoreResult<Option<Vec<Item>>>;

    /// Replaces the inventory snapshot.
    fn save_inventory(&self, items: &[Item]) -> StoreResult<()>;

    /// Loads the full sales ledger in append order, empty on first run.
    fn load_sales(&self) -> StoreResult<Vec<SaleRecord>>;

    /// Replaces the sales ledger.
    fn save_sales(&self, records: &[SaleRecord]) -> StoreResult<()>;

    /// Writes a report file for `day` and returns where it landed.
    fn write_report(&self, kind: ReportKind, day: NaiveDate, text: &str) -> StoreResult<PathBuf>;
}

// =============================================================================
// Unit Tests
// =============================================================================
