//! # Inventory Store
//!
//! In-memory inventory of menu items, keyed by name.
//!
//! A `BTreeMap` keeps iteration in name order, so every listing, report and
//! snapshot comes out deterministic without extra sorting. Mutation happens
//! through exactly one door: [`Inventory::apply_decrement`], which validates
//! the whole sale before touching stock. Persisting snapshots is the owning
//! service's job; this type never performs I/O.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{CoreError, CoreResult};
use crate::types::Item;
use crate::validation;

/// The in-memory inventory.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: BTreeMap<String, Item>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Inventory::default()
    }

    /// Builds an inventory from a collection of items.
    ///
    /// Later duplicates of a name replace earlier ones, matching the
    /// keyed-snapshot shape the store loads from disk.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        let items = items
            .into_iter()
            .map(|item| (item.name.clone(), item))
            .collect();
        Inventory { items }
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when no items exist.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an item by name.
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    /// Iterates items in name order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// The distinct categories present, sorted.
    pub fn categories(&self) -> Vec<String> {
        self.items
            .values()
            .map(|item| item.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Clones the full item set for a write-through snapshot.
    pub fn snapshot(&self) -> Vec<Item> {
        self.items.values().cloned().collect()
    }

    /// Applies a validated stock decrement for a sale.
    ///
    /// ## Preconditions (checked in order, first failure wins)
    /// 1. `qty > 0`, else a validation error
    /// 2. the item exists, else [`CoreError::ItemNotFound`]
    /// 3. `stock >= qty`, else [`CoreError::InsufficientStock`]
    ///
    /// ## Postcondition
    /// On success stock is reduced by exactly `qty` and the remaining stock
    /// is returned. On any failure stock is untouched; there is no partial
    /// application to roll back.
    pub fn apply_decrement(&mut self, name: &str, qty: i64) -> CoreResult<i64> {
        validation::validate_quantity(qty)?;

        let item = self
            .items
            .get_mut(name)
            .ok_or_else(|| CoreError::ItemNotFound(name.to_string()))?;

        if item.stock < qty {
            return Err(CoreError::InsufficientStock {
                name: name.to_string(),
                available: item.stock,
                requested: qty,
            });
        }

        item.stock -= qty;
        Ok(item.stock)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
