//! # kibanda-store: Persistence Layer for Kibanda POS
//!
//! This crate provides durable storage for the POS system: JSON snapshots of
//! the inventory and sales ledger, plus plain-text report files.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Kibanda POS Data Flow                             │
//! │                                                                         │
//! │  PosService (apps/server)                                              │
//! │       │ Arc<dyn Persistence>                                            │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  kibanda-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  Persistence  │    │ JsonFileStore │    │ MemoryStore  │  │   │
//! │  │   │   (trait)     │◄───│  (production) │    │   (tests)    │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  │                                │                               │   │
//! │  └────────────────────────────────┼───────────────────────────────┘   │
//! │                                   ▼                                    │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  <data_dir>/inventory.json                                      │   │
//! │  │  <data_dir>/sales_history.json                                  │   │
//! │  │  <data_dir>/daily_reports_<date>.txt                            │   │
//! │  │  <data_dir>/end_of_day_report_<date>.txt                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`persistence`] - The `Persistence` trait and report file naming
//! - [`json_store`] - Production file-backed store
//! - [`memory`] - In-memory store for unit tests
//! - [`seed`] - Built-in default menu for first runs
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kibanda_store::{JsonFileStore, Persistence, StoreConfig};
//!
//! let store = JsonFileStore::new(StoreConfig::new("./data"))?;
//! let inventory = match store.load_inventory()? {
//!     Some(items) => items,
//!     None => kibanda_store::seed::default_inventory(),
//! };
//! # Ok::<(), kibanda_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod json_store;
pub mod memory;
pub mod persistence;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use json_store::{JsonFileStore, StoreConfig};
pub use memory::MemoryStore;
pub use persistence::{Persistence, ReportKind};
