//! # Inventory Handlers
//!
//! Menu listing (`GET /items`) and the stock report (`GET /stockReport`).
//! Both are reads, but they still reconcile the business day on entry like
//! every other operation, so the first request of a new morning performs
//! yesterday's rollover no matter which endpoint it hits.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use kibanda_core::types::{Item, StockStatus};

use crate::state::ServiceState;

/// Menu item DTO for the frontend.
///
/// ## Why DTO?
/// - Decouples internal domain model from the wire contract
/// - Handles serde rename to camelCase for JS consumption
/// - Carries the derived `available` flag the frontend keys its UI off
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub name: String,
    pub price_cents: i64,
    pub stock: i64,
    pub threshold: i64,
    pub category: String,
    pub available: bool,
}

impl From<&Item> for ItemDto {
    fn from(item: &Item) -> Self {
        ItemDto {
            name: item.name.clone(),
            price_cents: item.unit_price.cents(),
            stock: item.stock,
            threshold: item.reorder_threshold,
            category: item.category.clone(),
            available: item.is_available(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryResponse {
    pub items: Vec<ItemDto>,
    pub categories: Vec<String>,
    pub total_items: usize,
}

/// `GET /items` — the full menu with categories.
pub async fn list_items(State(state): State<ServiceState>) -> Json<InventoryResponse> {
    debug!("list_items request");

    let view = state.with_service(|s| s.list_inventory());

    Json(InventoryResponse {
        total_items: view.items.len(),
        items: view.items.iter().map(ItemDto::from).collect(),
        categories: view.categories,
    })
}

/// One entry in the stock report's low-stock list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockItem {
    pub name: String,
    pub stock: i64,
    pub threshold: i64,
}

/// Per-item stock detail, keyed by item name in the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLevel {
    pub stock: i64,
    pub threshold: i64,
    pub category: String,
    pub status: StockStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockReportResponse {
    pub total_items: usize,
    pub low_stock_items: Vec<LowStockItem>,
    pub out_of_stock_items: Vec<String>,
    pub stock_levels: BTreeMap<String, StockLevel>,
}

/// `GET /stockReport` — every item classified against its threshold.
///
/// An item appears in exactly one of the flag lists: `outOfStockItems` wins
/// over `lowStockItems`, mirroring the alert precedence on the sale path.
pub async fn stock_report(State(state): State<ServiceState>) -> Json<StockReportResponse> {
    debug!("stock_report request");

    let items = state.with_service(|s| s.stock_report());

    let mut low_stock_items = Vec::new();
    let mut out_of_stock_items = Vec::new();
    let mut stock_levels = BTreeMap::new();

    for item in &items {
        let status = item.stock_status();
        match status {
            StockStatus::OutOfStock => out_of_stock_items.push(item.name.clone()),
            StockStatus::LowStock => low_stock_items.push(LowStockItem {
                name: item.name.clone(),
                stock: item.stock,
                threshold: item.reorder_threshold,
            }),
            StockStatus::InStock => {}
        }

        stock_levels.insert(
            item.name.clone(),
            StockLevel {
                stock: item.stock,
                threshold: item.reorder_threshold,
                category: item.category.clone(),
                status,
            },
        );
    }

    Json(StockReportResponse {
        total_items: items.len(),
        low_stock_items,
        out_of_stock_items,
        stock_levels,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
