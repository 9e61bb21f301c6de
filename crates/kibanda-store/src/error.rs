//! # Storage Error Types
//!
//! Error types for persistence operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the path and categorization           │
//! │       │                                                                 │
//! │       ├── on the sale path: logged by the service, swallowed           │
//! │       │   (the in-memory state is authoritative)                       │
//! │       │                                                                 │
//! │       └── at startup / on export: propagated to the caller             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Persistence operation errors.
///
/// Every variant carries the file path involved so log lines point straight
/// at the offending file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading a data file failed.
    ///
    /// ## When This Occurs
    /// - Permission problems on the data directory
    /// - The file vanished between the existence check and the read
    #[error("Failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a data file failed.
    ///
    /// ## When This Occurs
    /// - Disk full
    /// - Permission problems on the data directory
    #[error("Failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data file exists but does not parse.
    ///
    /// Deliberately NOT the seeding path: a file that exists but cannot be
    /// parsed means someone's data is at stake, so loading fails instead of
    /// silently reseeding over it.
    #[error("Corrupt data file {}: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },
}

impl StoreError {
    /// Creates a ReadFailed error for a given path.
    pub fn read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::ReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Creates a WriteFailed error for a given path.
    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::WriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Creates a Corrupt error for a given path.
    pub fn corrupt(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        StoreError::Corrupt {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for persistence operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
