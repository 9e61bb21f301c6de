//! # Default Menu
//!
//! The built-in inventory used on the very first run, before any snapshot
//! exists. Once seeded it is saved like any other snapshot and never
//! consulted again.

use kibanda_core::money::Money;
use kibanda_core::types::Item;

/// The default cafeteria menu.
pub fn default_inventory() -> Vec<Item> {
    [
        ("Rice Plate", 150, 80, 10, "main"),
        ("Chapati", 30, 200, 20, "main"),
        ("Beans Stew", 100, 60, 10, "main"),
        ("Chicken Curry", 250, 40, 5, "main"),
        ("Fruit Salad", 80, 50, 5, "dessert"),
        ("Coffee", 40, 150, 15, "beverage"),
        ("Juice", 80, 100, 10, "beverage"),
        ("Water Bottle", 30, 300, 30, "beverage"),
    ]
    .into_iter()
    .map(|(name, price, stock, threshold, category)| Item {
        name: name.to_string(),
        unit_price: Money::from_shillings(price),
        stock,
        reorder_threshold: threshold,
        category: category.to_string(),
    })
    .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
