//! # In-Memory Store
//!
//! A [`Persistence`] implementation backed by plain Vecs, for unit tests.
//! The service layer can run full sale/rollover scenarios against it without
//! touching the file system, and tests can assert on exactly what was saved
//! and which reports were written.

use std::path::PathBuf;
use std::sync::Mutex;

use chrono::NaiveDate;
use kibanda_core::types::{Item, SaleRecord};

use crate::error::StoreResult;
use crate::persistence::{Persistence, ReportKind};

/// A report captured by [`MemoryStore::write_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenReport {
    pub kind: ReportKind,
    pub day: NaiveDate,
    pub text: String,
}

/// In-memory persistence for tests.
///
/// Starts out empty, which is exactly the first-run state: no inventory
/// snapshot, no sales history.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inventory: Mutex<Option<Vec<Item>>>,
    sales: Mutex<Vec<SaleRecord>>,
    reports: Mutex<Vec<WrittenReport>>,
}

impl MemoryStore {
    /// Creates an empty store (first-run state).
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Creates a store already holding an inventory snapshot.
    pub fn with_inventory(items: Vec<Item>) -> Self {
        let store = MemoryStore::new();
        *store.inventory.lock().expect("Store mutex poisoned") = Some(items);
        store
    }

    /// Creates a store holding both an inventory snapshot and sales history.
    pub fn with_data(items: Vec<Item>, sales: Vec<SaleRecord>) -> Self {
        let store = MemoryStore::with_inventory(items);
        *store.sales.lock().expect("Store mutex poisoned") = sales;
        store
    }

    /// The last inventory snapshot saved, if any.
    pub fn saved_inventory(&self) -> Option<Vec<Item>> {
        self.inventory.lock().expect("Store mutex poisoned").clone()
    }

    /// The last sales ledger saved.
    pub fn saved_sales(&self) -> Vec<SaleRecord> {
        self.sales.lock().expect("Store mutex poisoned").clone()
    }

    /// Every report written, in write order.
    pub fn written_reports(&self) -> Vec<WrittenReport> {
        self.reports.lock().expect("Store mutex poisoned").clone()
    }
}

impl Persistence for MemoryStore {
    fn load_inventory(&self) -> StoreResult<Option<Vec<Item>>> {
        Ok(self.inventory.lock().expect("Store mutex poisoned").clone())
    }

    fn save_inventory(&self, items: &[Item]) -> StoreResult<()> {
        *self.inventory.lock().expect("Store mutex poisoned") = Some(items.to_vec());
        Ok(())
    }

    fn load_sales(&self) -> StoreResult<Vec<SaleRecord>> {
        Ok(self.sales.lock().expect("Store mutex poisoned").clone())
    }

    fn save_sales(&self, records: &[SaleRecord]) -> StoreResult<()> {
        *self.sales.lock().expect("Store mutex poisoned") = records.to_vec();
        Ok(())
    }

    fn write_report(&self, kind: ReportKind, day: NaiveDate, text: &str) -> StoreResult<PathBuf> {
        let path = PathBuf::from(kind.file_name(day));
        self.reports
            .lock()
            .expect("Store mutex poisoned")
            .push(WrittenReport {
                kind,
                day,
                text: text.to_string(),
            });
        Ok(path)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
