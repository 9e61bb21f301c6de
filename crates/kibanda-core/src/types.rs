//! # Domain Types
//!
//! Core domain types used throughout Kibanda POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │   SaleRecord    │   │   SaleOutcome   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name (key)     │   │  timestamp      │   │  item, quantity │       │
//! │  │  unit_price     │   │  line_items     │   │  amount         │       │
//! │  │  stock          │   │  total          │   │  remaining      │       │
//! │  │  threshold      │   │  table          │   │  alert?         │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │   StockStatus   │   │   StockAlert    │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  InStock        │   │  level: Warning │                             │
//! │  │  LowStock       │   │       | Error   │                             │
//! │  │  OutOfStock     │   │  message        │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Items are keyed by name: the menu is small, names are unique, and the
//! persisted snapshot is a name-keyed map, so no synthetic ids exist.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::money::Money;

// =============================================================================
// Item
// =============================================================================

/// A menu item available for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name, also the unique key in the inventory.
    pub name: String,

    /// Price per unit in cents.
    pub unit_price: Money,

    /// Current stock level. Never negative.
    pub stock: i64,

    /// Stock level at or below which the item is flagged for restocking.
    pub reorder_threshold: i64,

    /// Menu section: "main", "dessert", "beverage", ...
    pub category: String,
}

impl Item {
    /// Checks whether the item can currently be sold at all.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.stock > 0
    }

    /// Classifies the item's current stock level.
    #[inline]
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::classify(self.stock, self.reorder_threshold)
    }
}

// =============================================================================
// Stock Status
// =============================================================================

/// Classification of an item's stock level against its reorder threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// Stock is above the reorder threshold.
    InStock,
    /// Stock is positive but at or below the reorder threshold.
    LowStock,
    /// No stock left.
    OutOfStock,
}

impl StockStatus {
    /// Classifies a stock level.
    ///
    /// Out-of-stock wins over low-stock: zero remaining always satisfies
    /// `stock <= threshold`, and the stronger signal must be the one emitted.
    ///
    /// ## Example
    /// ```rust
    /// use kibanda_core::types::StockStatus;
    ///
    /// assert_eq!(StockStatus::classify(80, 10), StockStatus::InStock);
    /// assert_eq!(StockStatus::classify(10, 10), StockStatus::LowStock);
    /// assert_eq!(StockStatus::classify(0, 10), StockStatus::OutOfStock);
    /// ```
    pub fn classify(stock: i64, threshold: i64) -> Self {
        if stock <= 0 {
            StockStatus::OutOfStock
        } else if stock <= threshold {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }
}

// =============================================================================
// Stock Alerts
// =============================================================================

/// Severity of a stock alert attached to a sale outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    /// Stock dropped to or below the reorder threshold.
    Warning,
    /// Stock is exhausted.
    Error,
}

/// A stock alert raised by a sale that depleted an item's stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockAlert {
    pub level: AlertLevel,
    pub message: String,
}

impl StockAlert {
    /// Low-stock warning for an item that crossed its reorder threshold.
    pub fn low_stock(name: &str) -> Self {
        StockAlert {
            level: AlertLevel::Warning,
            message: format!("Low stock alert: {name} needs reordering!"),
        }
    }

    /// Out-of-stock alert for a fully depleted item.
    pub fn out_of_stock(name: &str) -> Self {
        StockAlert {
            level: AlertLevel::Error,
            message: format!("Out of stock: {name}"),
        }
    }

    /// Classifies the stock remaining after a sale into an optional alert.
    ///
    /// Mirrors [`StockStatus::classify`]: exactly one alert is emitted, with
    /// out-of-stock taking precedence over the threshold rule.
    pub fn for_remaining(name: &str, remaining: i64, threshold: i64) -> Option<Self> {
        match StockStatus::classify(remaining, threshold) {
            StockStatus::OutOfStock => Some(StockAlert::out_of_stock(name)),
            StockStatus::LowStock => Some(StockAlert::low_stock(name)),
            StockStatus::InStock => None,
        }
    }
}

// =============================================================================
// Sale Record
// =============================================================================

/// A completed sale transaction, as stored in the ledger.
///
/// Immutable once appended. `line_items` is a map so a record can carry
/// several items, even though the current transaction API inserts exactly
/// one entry per sale; the persisted shape must not break when multi-item
/// orders arrive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    /// When the sale was applied, wall-clock local time, second precision.
    #[serde(with = "legacy_timestamp")]
    pub timestamp: NaiveDateTime,

    /// Item name to quantity sold. Quantities are positive.
    #[serde(rename = "items")]
    pub line_items: BTreeMap<String, i64>,

    /// Total amount charged, in cents.
    pub total: Money,

    /// Table identifier, `"N/A"` when the request named none.
    pub table: String,
}

impl SaleRecord {
    /// Builds a record holding a single line item.
    pub fn single(
        timestamp: NaiveDateTime,
        name: impl Into<String>,
        quantity: i64,
        total: Money,
        table: impl Into<String>,
    ) -> Self {
        let mut line_items = BTreeMap::new();
        line_items.insert(name.into(), quantity);
        SaleRecord {
            timestamp,
            line_items,
            total,
            table: table.into(),
        }
    }

    /// The business day this record belongs to.
    #[inline]
    pub fn day(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// Serde adapter keeping the on-disk timestamp in the legacy space-separated
/// format (`2025-08-25 13:45:07`) instead of chrono's RFC 3339 default.
pub mod legacy_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::TIMESTAMP_FORMAT;

    pub fn serialize<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&timestamp.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Sale Outcome
// =============================================================================

/// The result handed back to the caller after a successful sale.
#[derive(Debug, Clone)]
pub struct SaleOutcome {
    /// Item sold.
    pub item: String,
    /// Quantity sold.
    pub quantity: i64,
    /// Amount charged (`unit_price * quantity`).
    pub amount: Money,
    /// Stock remaining after the decrement.
    pub remaining: i64,
    /// When the sale was applied.
    pub timestamp: NaiveDateTime,
    /// Stock alert raised by this sale, if any.
    pub alert: Option<StockAlert>,
}

// =============================================================================
// Unit Tests
// =============================================================================
