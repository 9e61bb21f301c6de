//! # JSON File Store
//!
//! The production [`Persistence`] implementation: plain JSON files in one
//! data directory, rewritten whole on every save.
//!
//! ## File Formats
//! ```text
//! inventory.json                      sales_history.json
//! {                                   [
//!   "Rice Plate": {                     {
//!     "price": 15000,                     "timestamp": "2025-08-25 12:30:00",
//!     "stock": 80,                        "items": { "Rice Plate": 5 },
//!     "threshold": 10,                    "total": 75000,
//!     "category": "main"                  "table": "T1"
//!   },                                  },
//!   ...                                 ...
//! }                                   ]
//! ```
//!
//! Prices and totals are integer cents. Timestamps keep the legacy
//! space-separated format so history files from the previous generation of
//! the system still load.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use kibanda_core::money::Money;
use kibanda_core::types::{Item, SaleRecord};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::persistence::{Persistence, ReportKind};

/// Inventory snapshot file name inside the data directory.
pub const INVENTORY_FILE: &str = "inventory.json";

/// Sales ledger file name inside the data directory.
pub const SALES_FILE: &str = "sales_history.json";

// =============================================================================
// Configuration
// =============================================================================

/// File store configuration.
///
/// ## Example
/// ```rust,no_run
/// use kibanda_store::{JsonFileStore, StoreConfig};
///
/// let store = JsonFileStore::new(StoreConfig::new("./data"))?;
/// # Ok::<(), kibanda_store::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding all data and report files. Created if missing.
    pub data_dir: PathBuf,
}

impl StoreConfig {
    /// Creates a configuration rooted at the given directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
        }
    }
}

// =============================================================================
// JSON File Store
// =============================================================================

/// File-backed persistence rooted at a data directory.
#[derive(Debug)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    /// Opens the store, creating the data directory if needed.
    pub fn new(config: StoreConfig) -> StoreResult<Self> {
        fs::create_dir_all(&config.data_dir)
            .map_err(|e| StoreError::write_failed(&config.data_dir, e))?;

        debug!(dir = %config.data_dir.display(), "File store ready");
        Ok(JsonFileStore {
            data_dir: config.data_dir,
        })
    }

    fn inventory_path(&self) -> PathBuf {
        self.data_dir.join(INVENTORY_FILE)
    }

    fn sales_path(&self) -> PathBuf {
        self.data_dir.join(SALES_FILE)
    }

    /// Reads and parses a JSON file, `None` when the file does not exist.
    fn read_json<T: DeserializeOwned>(&self, path: &Path) -> StoreResult<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(path).map_err(|e| StoreError::read_failed(path, e))?;
        let value =
            serde_json::from_str(&raw).map_err(|e| StoreError::corrupt(path, e.to_string()))?;
        Ok(Some(value))
    }

    /// Serializes a value and replaces the file at `path`.
    fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string_pretty(value).map_err(|e| {
            StoreError::write_failed(path, std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;
        fs::write(path, raw).map_err(|e| StoreError::write_failed(path, e))
    }
}

impl Persistence for JsonFileStore {
    fn load_inventory(&self) -> StoreResult<Option<Vec<Item>>> {
        let path = self.inventory_path();
        let Some(docs) = self.read_json::<BTreeMap<String, ItemDoc>>(&path)? else {
            return Ok(None);
        };

        let items = docs
            .into_iter()
            .map(|(name, doc)| doc.into_item(name))
            .collect();
        Ok(Some(items))
    }

    fn save_inventory(&self, items: &[Item]) -> StoreResult<()> {
        let docs: BTreeMap<String, ItemDoc> = items
            .iter()
            .map(|item| (item.name.clone(), ItemDoc::from_item(item)))
            .collect();
        self.write_json(&self.inventory_path(), &docs)
    }

    fn load_sales(&self) -> StoreResult<Vec<SaleRecord>> {
        let records = self
            .read_json::<Vec<SaleRecord>>(&self.sales_path())?
            .unwrap_or_default();
        Ok(records)
    }

    fn save_sales(&self, records: &[SaleRecord]) -> StoreResult<()> {
        self.write_json(&self.sales_path(), &records)
    }

    fn write_report(&self, kind: ReportKind, day: NaiveDate, text: &str) -> StoreResult<PathBuf> {
        let path = self.data_dir.join(kind.file_name(day));
        fs::write(&path, text).map_err(|e| StoreError::write_failed(&path, e))?;
        Ok(path)
    }
}

// =============================================================================
// On-Disk Shapes
// =============================================================================

/// On-disk shape of one inventory entry. The item name is the map key, not a
/// field, matching the snapshot files the first generation of the system
/// wrote.
#[derive(Debug, Serialize, Deserialize)]
struct ItemDoc {
    price: Money,
    stock: i64,
    threshold: i64,
    /// Old snapshot files may predate categories.
    #[serde(default = "uncategorized")]
    category: String,
}

fn uncategorized() -> String {
    "uncategorized".to_string()
}

impl ItemDoc {
    fn from_item(item: &Item) -> Self {
        ItemDoc {
            price: item.unit_price,
            stock: item.stock,
            threshold: item.reorder_threshold,
            category: item.category.clone(),
        }
    }

    fn into_item(self, name: String) -> Item {
        Item {
            name,
            unit_price: self.price,
            stock: self.stock,
            reorder_threshold: self.threshold,
            category: self.category,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::new(StoreConfig::new(dir.path())).unwrap()
    }

    fn rice_plate() -> Item {
        Item {
            name: "Rice Plate".to_string(),
            unit_price: Money::from_shillings(150),
            stock: 80,
            reorder_threshold: 10,
            category: "main".to_string(),
        }
    }

    fn sample_record() -> SaleRecord {
        SaleRecord::single(
            NaiveDate::from_ymd_opt(2025, 8, 25)
                .unwrap()
                .and_hms_opt(12, 30, 0)
                .unwrap(),
            "Rice Plate",
            5,
            Money::from_shillings(750),
            "T1",
        )
    }

    #[test]
    fn test_first_run_loads_nothing() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        assert!(store.load_inventory().unwrap().is_none());
        assert!(store.load_sales().unwrap().is_empty());
    }

    #[test]
    fn test_inventory_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        store.save_inventory(&[rice_plate()]).unwrap();
        let loaded = store.load_inventory().unwrap().unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0], rice_plate());
    }

    #[test]
    fn test_inventory_file_is_name_keyed_with_cent_prices() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        store.save_inventory(&[rice_plate()]).unwrap();

        let raw = std::fs::read_to_string(dir.path().join(INVENTORY_FILE)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["Rice Plate"]["price"], 15000);
        assert_eq!(json["Rice Plate"]["stock"], 80);
        assert_eq!(json["Rice Plate"]["threshold"], 10);
        assert_eq!(json["Rice Plate"]["category"], "main");
    }

    #[test]
    fn test_sales_round_trip_preserves_order() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let mut second = sample_record();
        second.timestamp += chrono::Duration::hours(1);
        second.table = "T2".to_string();

        store
            .save_sales(&[sample_record(), second.clone()])
            .unwrap();
        let loaded = store.load_sales().unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0], sample_record());
        assert_eq!(loaded[1], second);
    }

    #[test]
    fn test_sales_file_uses_legacy_timestamp_format() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        store.save_sales(&[sample_record()]).unwrap();

        let raw = std::fs::read_to_string(dir.path().join(SALES_FILE)).unwrap();
        assert!(raw.contains("\"2025-08-25 12:30:00\""));
    }

    #[test]
    fn test_missing_category_defaults_to_uncategorized() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        std::fs::write(
            dir.path().join(INVENTORY_FILE),
            r#"{"Mandazi": {"price": 2000, "stock": 40, "threshold": 5}}"#,
        )
        .unwrap();

        let loaded = store.load_inventory().unwrap().unwrap();
        assert_eq!(loaded[0].category, "uncategorized");
    }

    #[test]
    fn test_corrupt_inventory_is_an_error_not_a_seed() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        std::fs::write(dir.path().join(INVENTORY_FILE), "{not json").unwrap();

        let err = store.load_inventory().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn test_corrupt_sales_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        std::fs::write(dir.path().join(SALES_FILE), "[{\"broken\": true}]").unwrap();

        let err = store.load_sales().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn test_write_report_creates_named_file() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        let day = NaiveDate::from_ymd_opt(2025, 8, 25).unwrap();

        let path = store
            .write_report(ReportKind::EndOfDay, day, "report body")
            .unwrap();

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "end_of_day_report_2025-08-25.txt"
        );
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "report body");
    }

    #[test]
    fn test_write_report_overwrites_same_day() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        let day = NaiveDate::from_ymd_opt(2025, 8, 25).unwrap();

        store
            .write_report(ReportKind::DailyArchive, day, "first")
            .unwrap();
        let path = store
            .write_report(ReportKind::DailyArchive, day, "second")
            .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_new_creates_nested_data_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("pos").join("data");
        let store = JsonFileStore::new(StoreConfig::new(&nested)).unwrap();

        store.save_inventory(&[rice_plate()]).unwrap();
        assert!(nested.join(INVENTORY_FILE).exists());
    }
}
