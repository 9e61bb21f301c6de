//! # HTTP Handlers Module
//!
//! All routes exposed to the counter frontend.
//!
//! ## Handler Organization
//! ```text
//! handlers/
//! ├── mod.rs        ◄─── You are here (exports + router)
//! ├── inventory.rs  ◄─── Menu listing, stock report
//! ├── sale.rs       ◄─── Sale processing
//! ├── reports.rs    ◄─── Daily totals, history, report export
//! └── health.rs     ◄─── Liveness check
//! ```
//!
//! ## How Handlers Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Request Flow                                     │
//! │                                                                         │
//! │  Counter Frontend                                                       │
//! │  ────────────────                                                       │
//! │  fetch('http://localhost:18080/sale', {                                 │
//! │    method: 'POST',                                                      │
//! │    body: JSON.stringify({ item: 'Rice Plate', qty: 2, table: 'T4' })    │
//! │  });                                                                    │
//! │         │                                                               │
//! │         │ (CorsLayer answers the preflight, TraceLayer logs)            │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  async fn record_sale(                                                  │
//! │      State(state): State<ServiceState>,  ◄── Injected by axum           │
//! │      Json(req): Json<SaleRequest>,       ◄── Parsed request body        │
//! │  ) -> Result<Json<SaleResponse>, ApiError>                              │
//! │         │                                                               │
//! │         │ state.with_service(|s| s.record_sale(...))                    │
//! │         ▼                                                               │
//! │  Frontend receives: { status: "success", amountCents: 30000, ... }      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers stay thin: parse, call one service method under the lock, map
//! the result into a camelCase DTO. Field names and shapes are the wire
//! contract the existing frontend already speaks, so they change only with
//! the frontend.

use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::ServiceState;

pub mod health;
pub mod inventory;
pub mod reports;
pub mod sale;

/// Builds the application router with all routes and middleware.
///
/// CORS is wide open on purpose: the counter frontend is served from a
/// different origin (often `file://` during development) and the API carries
/// no credentials. The `CorsLayer` also answers the preflight OPTIONS
/// requests the frontend sends before every POST.
pub fn router(state: ServiceState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(86400));

    Router::new()
        // Menu and stock
        .route("/items", get(inventory::list_items))
        .route("/stockReport", get(inventory::stock_report))
        // Sales
        .route("/sale", post(sale::record_sale))
        // Totals and reports
        .route("/dailyTotals", get(reports::daily_totals))
        .route("/salesHistory", get(reports::sales_history))
        .route("/exportReport", get(reports::export_report))
        // Ops
        .route("/health", get(health::health))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
