//! # kibanda-core: Pure Business Logic for Kibanda POS
//!
//! This crate is the **heart** of Kibanda POS. It contains all business logic
//! as pure functions and plain data structures with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Kibanda POS Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP Clients (cashier UI)                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON over HTTP                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/server (axum)                           │   │
//! │  │    /items, /sale, /dailyTotals, /salesHistory, /stockReport     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ kibanda-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌───────────┐ ┌────────┐ ┌───────┐ ┌──────────┐  │   │
//! │  │  │  money  │ │ inventory │ │ ledger │ │ daily │ │  report  │  │   │
//! │  │  │  Money  │ │   Item    │ │ Sale   │ │ Daily │ │  text    │  │   │
//! │  │  │  (Ksh)  │ │  stock    │ │ Record │ │ State │ │  render  │  │   │
//! │  │  └─────────┘ └───────────┘ └────────┘ └───────┘ └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO FILE SYSTEM • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 kibanda-store (Persistence Layer)               │   │
//! │  │          JSON snapshots, sales history, report files            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, SaleRecord, StockAlert, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation for sale requests
//! - [`inventory`] - In-memory inventory with validated decrements
//! - [`ledger`] - Append-only sales ledger and per-day aggregation
//! - [`daily`] - Business-day accumulator state
//! - [`report`] - Plain-text daily report rendering
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system and clock access are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use kibanda_core::inventory::Inventory;
//! use kibanda_core::money::Money;
//! use kibanda_core::types::Item;
//!
//! let mut inventory = Inventory::from_items([Item {
//!     name: "Chapati".to_string(),
//!     unit_price: Money::from_shillings(30),
//!     stock: 200,
//!     reorder_threshold: 20,
//!     category: "main".to_string(),
//! }]);
//!
//! // Validated, all-or-nothing stock decrement
//! let remaining = inventory.apply_decrement("Chapati", 4).unwrap();
//! assert_eq!(remaining, 196);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod daily;
pub mod error;
pub mod inventory;
pub mod ledger;
pub mod money;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kibanda_core::Money` instead of
// `use kibanda_core::money::Money`

pub use daily::DailyState;
pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::Inventory;
pub use ledger::{DaySummary, Ledger};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Table identifier recorded when a sale request names no table.
pub const DEFAULT_TABLE: &str = "N/A";

/// Timestamp format used on disk and in reports: `2025-08-25 13:45:07`.
///
/// ## Why not RFC 3339?
/// Existing `sales_history.json` files written by the first generation of
/// this system use the space-separated form, and receipts print it verbatim.
/// Keeping the format means old data files load without migration.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date format used for business days and report file names: `2025-08-25`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
