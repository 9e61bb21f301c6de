//! # Validation Module
//!
//! Input validation for sale requests.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP handler (axum)                                          │
//! │  ├── Type validation (JSON deserialization)                            │
//! │  └── Missing-field defaults (table → "N/A")                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Empty item name                                                   │
//! │  └── Non-positive quantity                                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Inventory store                                              │
//! │  ├── Item existence                                                    │
//! │  └── Sufficient stock                                                  │
//! │                                                                         │
//! │  First failing check wins; nothing mutates on a failed path            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an item name from a sale request.
///
/// ## Rules
/// - Must not be empty after trimming
///
/// ## Returns
/// The trimmed name, which is what inventory lookups should use.
///
/// ## Example
/// ```rust
/// use kibanda_core::validation::validate_item_name;
///
/// assert_eq!(validate_item_name(" Rice Plate ").unwrap(), "Rice Plate");
/// assert!(validate_item_name("").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "item".to_string(),
        });
    }

    Ok(name.to_string())
}

/// Validates a requested sale quantity.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// There is deliberately no upper bound: the stock check against the
/// inventory is the real ceiling, and a cafeteria order can legitimately
/// clear out a whole tray.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert_eq!(validate_item_name("Chapati").unwrap(), "Chapati");
        assert_eq!(validate_item_name("  Chapati  ").unwrap(), "Chapati");

        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(300).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }
}
