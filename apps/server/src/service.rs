//! # POS Service
//!
//! The single stateful object behind the API. Owns the inventory, the sales
//! ledger and the daily counters, and talks to persistence and the clock
//! through their seams.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Every Operation                                  │
//! │                                                                         │
//! │  handler ──► reconcile_day() ──► operation body ──► response            │
//! │                   │                                                     │
//! │                   │ clock date != business day?                         │
//! │                   ▼                                                     │
//! │           archive outgoing day's report                                 │
//! │           reset running total to zero                                   │
//! │           adopt today as the business day                               │
//! │                                                                         │
//! │  The ledger is never touched by rollover; day totals are derived        │
//! │  from record timestamps, so history survives any number of rollovers.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence Policy
//! - Startup: load failures are fatal. A corrupt file means someone's data
//!   is at stake, so the server refuses to start rather than reseed over it.
//! - Sale path: write-through after every sale, failures logged and
//!   swallowed. The in-memory state is authoritative; a full disk must not
//!   block the lunch queue.
//! - Export: write failures propagate. The caller asked for a file and must
//!   learn it does not exist.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use kibanda_core::types::{Item, SaleOutcome, SaleRecord, StockAlert};
use kibanda_core::{
    report, validation, CoreError, CoreResult, DailyState, DaySummary, Inventory, Ledger, Money,
    DEFAULT_TABLE,
};
use kibanda_store::{Persistence, ReportKind, StoreResult};

use crate::clock::Clock;

/// Inventory snapshot plus the distinct category list, both in name order.
#[derive(Debug, Clone)]
pub struct InventoryView {
    pub items: Vec<Item>,
    pub categories: Vec<String>,
}

/// Today's totals, as served by `/dailyTotals`.
#[derive(Debug, Clone)]
pub struct DailyTotals {
    /// The business day the totals cover.
    pub date: NaiveDate,
    /// Incrementally maintained total; equals `summary.revenue` by invariant.
    pub running_total: Money,
    /// Derived from today's ledger records.
    pub summary: DaySummary,
}

/// Where an exported end-of-day report landed.
#[derive(Debug, Clone)]
pub struct ExportedReport {
    pub day: NaiveDate,
    pub file_name: String,
    pub path: PathBuf,
}

/// The cafeteria POS engine.
///
/// All mutating access is serialized by the caller (the server wraps this in
/// `Arc<Mutex<_>>`), so the operations can assume exclusive access and
/// mutate freely once their checks have passed.
pub struct PosService {
    inventory: Inventory,
    ledger: Ledger,
    daily: DailyState,
    store: Arc<dyn Persistence>,
    clock: Arc<dyn Clock>,
}

impl PosService {
    /// Loads state from the store, seeding the default menu on first run.
    ///
    /// Load failures are fatal here. `Ok(None)` from the store means a clean
    /// first run and triggers seeding; an unreadable or corrupt file does not.
    pub fn initialize(store: Arc<dyn Persistence>, clock: Arc<dyn Clock>) -> StoreResult<Self> {
        let inventory = match store.load_inventory()? {
            Some(items) => {
                info!(items = items.len(), "Loaded inventory snapshot");
                Inventory::from_items(items)
            }
            None => {
                let items = kibanda_store::seed::default_inventory();
                info!(items = items.len(), "No inventory snapshot found, seeding default menu");
                store.save_inventory(&items)?;
                Inventory::from_items(items)
            }
        };

        let ledger = Ledger::from_records(store.load_sales()?);
        info!(sales = ledger.len(), "Loaded sales history");

        let today = clock.now().date();
        let daily = DailyState::rebuilt(today, &ledger);
        info!(
            business_day = %today,
            running_total = %daily.running_total(),
            "Daily state rebuilt from ledger"
        );

        Ok(PosService {
            inventory,
            ledger,
            daily,
            store,
            clock,
        })
    }

    /// The current business day.
    pub fn business_day(&self) -> NaiveDate {
        self.daily.business_day()
    }

    /// Revenue recorded so far today.
    pub fn running_total(&self) -> Money {
        self.daily.running_total()
    }

    /// Catches up with the calendar before an operation runs.
    ///
    /// When the clock has crossed midnight since the last operation, the
    /// outgoing day's report is archived and the daily counters reset. A
    /// failed archive write is logged and the rollover proceeds; the report
    /// can always be regenerated from the ledger. Runs at most one step per
    /// call: after an idle gap of several days only the outgoing business
    /// day gets an archive, the days nobody traded have nothing to report.
    fn reconcile_day(&mut self) {
        let today = self.clock.now().date();
        if !self.daily.is_stale(today) {
            return;
        }

        let outgoing = self.daily.business_day();
        info!(%outgoing, %today, "Business day changed, archiving outgoing day");

        let text = report::daily_report(outgoing, self.clock.now(), &self.inventory, &self.ledger);
        if let Err(err) = self.store.write_report(ReportKind::DailyArchive, outgoing, &text) {
            warn!(error = %err, day = %outgoing, "Failed to archive daily report");
        }

        self.daily.roll_to(today);
    }

    /// Records a sale of `quantity` units of `item`.
    ///
    /// Checks run in a fixed order and the first failure wins: item name,
    /// then quantity, then existence, then stock cover. Nothing is mutated
    /// until every check has passed, so a rejected sale leaves no trace.
    pub fn record_sale(
        &mut self,
        item: &str,
        quantity: i64,
        table: Option<String>,
    ) -> CoreResult<SaleOutcome> {
        self.reconcile_day();

        let name = validation::validate_item_name(item)?;
        validation::validate_quantity(quantity)?;

        let (unit_price, threshold) = match self.inventory.get(&name) {
            Some(item) => (item.unit_price, item.reorder_threshold),
            None => return Err(CoreError::ItemNotFound(name)),
        };

        let remaining = self.inventory.apply_decrement(&name, quantity)?;

        // All checks passed; from here the sale is committed.
        let amount = unit_price.multiply_quantity(quantity);
        let timestamp = self.clock.now();
        let table = table.unwrap_or_else(|| DEFAULT_TABLE.to_string());

        self.daily.record_sale(amount);
        self.ledger.append(SaleRecord::single(
            timestamp,
            name.clone(),
            quantity,
            amount,
            table,
        ));
        self.persist_snapshots();

        let alert = StockAlert::for_remaining(&name, remaining, threshold);
        if let Some(alert) = &alert {
            warn!(item = %name, remaining, "{}", alert.message);
        }
        debug!(item = %name, quantity, amount = %amount, remaining, "Sale recorded");

        Ok(SaleOutcome {
            item: name,
            quantity,
            amount,
            remaining,
            timestamp,
            alert,
        })
    }

    /// The full menu with categories.
    pub fn list_inventory(&mut self) -> InventoryView {
        self.reconcile_day();
        InventoryView {
            items: self.inventory.snapshot(),
            categories: self.inventory.categories(),
        }
    }

    /// Today's totals and per-item breakdown.
    pub fn daily_totals(&mut self) -> DailyTotals {
        self.reconcile_day();

        let date = self.daily.business_day();
        DailyTotals {
            date,
            running_total: self.daily.running_total(),
            summary: self.ledger.summarize_day(date),
        }
    }

    /// Every recorded sale, oldest first.
    pub fn sales_history(&mut self) -> &[SaleRecord] {
        self.reconcile_day();
        self.ledger.all()
    }

    /// Inventory snapshot for the stock report.
    pub fn stock_report(&mut self) -> Vec<Item> {
        self.reconcile_day();
        self.inventory.snapshot()
    }

    /// Writes the end-of-day report for the current business day.
    ///
    /// Does NOT roll the day over; the report can be exported any number of
    /// times while trading continues. Write failures propagate.
    pub fn export_report(&mut self) -> StoreResult<ExportedReport> {
        self.reconcile_day();

        let day = self.daily.business_day();
        let text = report::daily_report(day, self.clock.now(), &self.inventory, &self.ledger);
        let path = self.store.write_report(ReportKind::EndOfDay, day, &text)?;
        info!(%day, path = %path.display(), "End of day report exported");

        Ok(ExportedReport {
            day,
            file_name: ReportKind::EndOfDay.file_name(day),
            path,
        })
    }

    /// Final flush on shutdown: archive today's report and save state.
    ///
    /// Shutdown must never fail, so every write error here is logged and
    /// swallowed. Re-running a day after a crash regenerates the same report
    /// from the ledger, overwriting a partial file is harmless.
    pub fn flush_current_day(&mut self) {
        self.reconcile_day();

        let day = self.daily.business_day();
        let text = report::daily_report(day, self.clock.now(), &self.inventory, &self.ledger);
        if let Err(err) = self.store.write_report(ReportKind::DailyArchive, day, &text) {
            warn!(error = %err, day = %day, "Failed to write daily report on shutdown");
        }
        self.persist_snapshots();
        info!(%day, "Current day flushed");
    }

    /// Write-through of inventory and ledger.
    ///
    /// Failures are logged and swallowed; the in-memory state is
    /// authoritative and the next successful save catches everything up,
    /// since saves always write the full snapshot.
    fn persist_snapshots(&self) {
        if let Err(err) = self.store.save_inventory(&self.inventory.snapshot()) {
            warn!(error = %err, "Failed to persist inventory snapshot");
        }
        if let Err(err) = self.store.save_sales(self.ledger.all()) {
            warn!(error = %err, "Failed to persist sales history");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::NaiveDateTime;
    use kibanda_core::types::AlertLevel;
    use kibanda_core::ValidationError;
    use kibanda_store::{JsonFileStore, MemoryStore, StoreConfig, StoreError};

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Fresh service seeded with the default menu, clock pinned at `start`.
    fn service_at(start: NaiveDateTime) -> (PosService, Arc<MemoryStore>, ManualClock) {
        let store = Arc::new(MemoryStore::new());
        let clock = ManualClock::starting_at(start);
        let service = PosService::initialize(store.clone(), Arc::new(clock.clone()))
            .expect("init from empty store");
        (service, store, clock)
    }

    fn lunchtime_service() -> (PosService, Arc<MemoryStore>, ManualClock) {
        service_at(dt(2025, 8, 25, 12, 0, 0))
    }

    /// Loads fine but refuses every write. For the durability-policy tests.
    struct FailingStore {
        items: Vec<Item>,
    }

    impl FailingStore {
        fn seeded() -> Self {
            FailingStore {
                items: kibanda_store::seed::default_inventory(),
            }
        }

        fn refuse(file: &str) -> StoreError {
            StoreError::write_failed(
                file,
                std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            )
        }
    }

    impl Persistence for FailingStore {
        fn load_inventory(&self) -> StoreResult<Option<Vec<Item>>> {
            Ok(Some(self.items.clone()))
        }

        fn save_inventory(&self, _items: &[Item]) -> StoreResult<()> {
            Err(FailingStore::refuse("inventory.json"))
        }

        fn load_sales(&self) -> StoreResult<Vec<SaleRecord>> {
            Ok(Vec::new())
        }

        fn save_sales(&self, _records: &[SaleRecord]) -> StoreResult<()> {
            Err(FailingStore::refuse("sales_history.json"))
        }

        fn write_report(&self, kind: ReportKind, d: NaiveDate, _: &str) -> StoreResult<PathBuf> {
            Err(FailingStore::refuse(&kind.file_name(d)))
        }
    }

    /// Inventory file exists but does not parse.
    struct CorruptStore;

    impl Persistence for CorruptStore {
        fn load_inventory(&self) -> StoreResult<Option<Vec<Item>>> {
            Err(StoreError::corrupt("inventory.json", "expected value at line 1"))
        }

        fn save_inventory(&self, _items: &[Item]) -> StoreResult<()> {
            Ok(())
        }

        fn load_sales(&self) -> StoreResult<Vec<SaleRecord>> {
            Ok(Vec::new())
        }

        fn save_sales(&self, _records: &[SaleRecord]) -> StoreResult<()> {
            Ok(())
        }

        fn write_report(&self, kind: ReportKind, d: NaiveDate, _: &str) -> StoreResult<PathBuf> {
            Ok(PathBuf::from(kind.file_name(d)))
        }
    }

    // ------------------------------------------------------------------
    // Startup
    // ------------------------------------------------------------------

    #[test]
    fn test_first_run_seeds_default_menu() {
        let (mut service, store, _) = lunchtime_service();

        let view = service.list_inventory();
        assert_eq!(view.items.len(), 8);
        assert_eq!(view.categories, vec!["beverage", "dessert", "main"]);

        let rice = view.items.iter().find(|i| i.name == "Rice Plate").unwrap();
        assert_eq!(rice.unit_price, Money::from_shillings(150));
        assert_eq!(rice.stock, 80);
        assert_eq!(rice.reorder_threshold, 10);

        // The seed was written through on first run.
        let saved = store.saved_inventory().expect("seed saved");
        assert_eq!(saved.len(), 8);
    }

    #[test]
    fn test_restart_loads_saved_state_instead_of_seeding() {
        let items = vec![Item {
            name: "Mandazi".to_string(),
            unit_price: Money::from_shillings(20),
            stock: 12,
            reorder_threshold: 4,
            category: "snack".to_string(),
        }];
        let store = Arc::new(MemoryStore::with_inventory(items));
        let clock = Arc::new(ManualClock::starting_at(dt(2025, 8, 25, 8, 0, 0)));

        let mut service = PosService::initialize(store, clock).unwrap();

        let view = service.list_inventory();
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].name, "Mandazi");
    }

    #[test]
    fn test_corrupt_inventory_fails_startup() {
        let clock = Arc::new(ManualClock::starting_at(dt(2025, 8, 25, 8, 0, 0)));
        let result = PosService::initialize(Arc::new(CorruptStore), clock);

        assert!(matches!(result, Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn test_restart_rebuilds_running_total_from_todays_records() {
        let yesterday = SaleRecord::single(
            dt(2025, 8, 24, 19, 0, 0),
            "Coffee",
            1,
            Money::from_shillings(40),
            DEFAULT_TABLE,
        );
        let this_morning = SaleRecord::single(
            dt(2025, 8, 25, 9, 15, 0),
            "Chapati",
            3,
            Money::from_shillings(90),
            "T1",
        );
        let store = Arc::new(MemoryStore::with_data(
            kibanda_store::seed::default_inventory(),
            vec![yesterday, this_morning],
        ));
        let clock = Arc::new(ManualClock::starting_at(dt(2025, 8, 25, 12, 0, 0)));

        let service = PosService::initialize(store, clock).unwrap();

        // Only today's record counts; yesterday's stays in the ledger only.
        assert_eq!(service.running_total(), Money::from_shillings(90));
        assert_eq!(service.business_day(), day(2025, 8, 25));
    }

    // ------------------------------------------------------------------
    // Recording sales
    // ------------------------------------------------------------------

    #[test]
    fn test_sale_happy_path() {
        let (mut service, store, _) = lunchtime_service();

        let outcome = service
            .record_sale("Rice Plate", 2, Some("T4".to_string()))
            .unwrap();

        assert_eq!(outcome.item, "Rice Plate");
        assert_eq!(outcome.quantity, 2);
        assert_eq!(outcome.amount, Money::from_shillings(300));
        assert_eq!(outcome.remaining, 78);
        assert_eq!(outcome.timestamp, dt(2025, 8, 25, 12, 0, 0));
        assert!(outcome.alert.is_none());

        assert_eq!(service.running_total(), Money::from_shillings(300));

        // Write-through: both snapshots hit the store.
        let saved = store.saved_inventory().unwrap();
        let rice = saved.iter().find(|i| i.name == "Rice Plate").unwrap();
        assert_eq!(rice.stock, 78);

        let sales = store.saved_sales();
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].total, Money::from_shillings(300));
        assert_eq!(sales[0].table, "T4");
    }

    #[test]
    fn test_sale_without_table_gets_default() {
        let (mut service, store, _) = lunchtime_service();

        service.record_sale("Coffee", 1, None).unwrap();

        assert_eq!(store.saved_sales()[0].table, DEFAULT_TABLE);
    }

    #[test]
    fn test_sale_trims_item_name() {
        let (mut service, _, _) = lunchtime_service();

        let outcome = service.record_sale("  Coffee  ", 2, None).unwrap();

        assert_eq!(outcome.item, "Coffee");
        assert_eq!(outcome.amount, Money::from_shillings(80));
    }

    #[test]
    fn test_blank_item_name_rejected() {
        let (mut service, _, _) = lunchtime_service();

        let err = service.record_sale("   ", 1, None).unwrap_err();

        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_nonpositive_quantity_rejected() {
        let (mut service, _, _) = lunchtime_service();

        for qty in [0, -3] {
            let err = service.record_sale("Chapati", qty, None).unwrap_err();
            assert!(matches!(
                err,
                CoreError::Validation(ValidationError::MustBePositive { .. })
            ));
        }
    }

    #[test]
    fn test_unknown_item_rejected() {
        let (mut service, _, _) = lunchtime_service();

        let err = service.record_sale("Pizza", 1, None).unwrap_err();

        assert_eq!(err.to_string(), "Item not found: Pizza");
    }

    #[test]
    fn test_insufficient_stock_rejected() {
        let (mut service, _, _) = lunchtime_service();

        // Chicken Curry seeds with 40 units.
        let err = service.record_sale("Chicken Curry", 41, None).unwrap_err();

        assert!(matches!(
            err,
            CoreError::InsufficientStock {
                available: 40,
                requested: 41,
                ..
            }
        ));
    }

    #[test]
    fn test_input_validation_runs_before_existence_check() {
        let (mut service, _, _) = lunchtime_service();

        // Unknown item AND bad quantity: the quantity check fires first.
        let err = service.record_sale("Pizza", 0, None).unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_rejected_sale_leaves_no_trace() {
        let (mut service, store, _) = lunchtime_service();

        service.record_sale("Chicken Curry", 41, None).unwrap_err();

        assert_eq!(service.running_total(), Money::zero());
        assert!(service.sales_history().is_empty());
        assert!(store.saved_sales().is_empty());

        let curry = service
            .list_inventory()
            .items
            .into_iter()
            .find(|i| i.name == "Chicken Curry")
            .unwrap();
        assert_eq!(curry.stock, 40);
    }

    #[test]
    fn test_persistence_failure_does_not_void_the_sale() {
        let store = Arc::new(FailingStore::seeded());
        let clock = Arc::new(ManualClock::starting_at(dt(2025, 8, 25, 12, 0, 0)));
        let mut service = PosService::initialize(store, clock).unwrap();

        let outcome = service.record_sale("Chapati", 2, None).unwrap();

        assert_eq!(outcome.remaining, 198);
        assert_eq!(service.running_total(), Money::from_shillings(60));
        assert_eq!(service.sales_history().len(), 1);
    }

    // ------------------------------------------------------------------
    // Stock alerts
    // ------------------------------------------------------------------

    #[test]
    fn test_no_alert_above_threshold() {
        let (mut service, _, _) = lunchtime_service();

        // Fruit Salad: 50 in stock, threshold 5. 50 - 44 = 6, one above.
        let outcome = service.record_sale("Fruit Salad", 44, None).unwrap();

        assert_eq!(outcome.remaining, 6);
        assert!(outcome.alert.is_none());
    }

    #[test]
    fn test_warning_alert_exactly_at_threshold() {
        let (mut service, _, _) = lunchtime_service();

        let outcome = service.record_sale("Fruit Salad", 45, None).unwrap();

        assert_eq!(outcome.remaining, 5);
        let alert = outcome.alert.unwrap();
        assert_eq!(alert.level, AlertLevel::Warning);
        assert_eq!(alert.message, "Low stock alert: Fruit Salad needs reordering!");
    }

    #[test]
    fn test_error_alert_at_zero() {
        let (mut service, _, _) = lunchtime_service();

        let outcome = service.record_sale("Fruit Salad", 50, None).unwrap();

        assert_eq!(outcome.remaining, 0);
        let alert = outcome.alert.unwrap();
        assert_eq!(alert.level, AlertLevel::Error);
        assert_eq!(alert.message, "Out of stock: Fruit Salad");

        // The next attempt fails the stock check.
        let err = service.record_sale("Fruit Salad", 1, None).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock { available: 0, .. }
        ));
    }

    // ------------------------------------------------------------------
    // Day rollover
    // ------------------------------------------------------------------

    #[test]
    fn test_rollover_archives_outgoing_day() {
        let (mut service, store, clock) = lunchtime_service();
        service.record_sale("Rice Plate", 2, None).unwrap();
        service.record_sale("Coffee", 1, None).unwrap();

        clock.set(dt(2025, 8, 26, 0, 5, 0));
        let totals = service.daily_totals();

        assert_eq!(totals.date, day(2025, 8, 26));
        assert_eq!(totals.running_total, Money::zero());
        assert_eq!(totals.summary.transactions, 0);

        let reports = store.written_reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].kind, ReportKind::DailyArchive);
        assert_eq!(reports[0].day, day(2025, 8, 25));
        assert!(reports[0].text.contains("KIBANDA POS - DAILY SALES REPORT"));
        assert!(reports[0].text.contains("Date: 2025-08-25"));
        assert!(reports[0].text.contains("Total Revenue: Ksh 340.00"));

        // History is untouched by rollover.
        assert_eq!(service.sales_history().len(), 2);
    }

    #[test]
    fn test_rollover_runs_before_the_triggering_sale() {
        let (mut service, store, clock) = lunchtime_service();
        service.record_sale("Chapati", 1, None).unwrap();

        clock.set(dt(2025, 8, 26, 7, 30, 0));
        let outcome = service.record_sale("Coffee", 1, None).unwrap();

        // The new sale lands on the new day, not the archived one.
        assert_eq!(outcome.timestamp.date(), day(2025, 8, 26));
        assert_eq!(service.running_total(), Money::from_shillings(40));

        let reports = store.written_reports();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].text.contains("Total Transactions: 1"));
    }

    #[test]
    fn test_rollover_is_idempotent_within_a_day() {
        let (mut service, store, clock) = lunchtime_service();
        service.record_sale("Juice", 1, None).unwrap();

        clock.set(dt(2025, 8, 26, 9, 0, 0));
        service.daily_totals();
        service.daily_totals();
        service.list_inventory();

        assert_eq!(store.written_reports().len(), 1);
        assert_eq!(service.business_day(), day(2025, 8, 26));
    }

    #[test]
    fn test_multi_day_gap_archives_only_the_outgoing_day() {
        let (mut service, store, clock) = lunchtime_service();
        service.record_sale("Water Bottle", 2, None).unwrap();

        // Closed over the long weekend.
        clock.set(dt(2025, 8, 28, 10, 0, 0));
        let totals = service.daily_totals();

        assert_eq!(totals.date, day(2025, 8, 28));
        let reports = store.written_reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].day, day(2025, 8, 25));
    }

    #[test]
    fn test_archive_failure_still_rolls_the_day() {
        let store = Arc::new(FailingStore::seeded());
        let clock = ManualClock::starting_at(dt(2025, 8, 25, 12, 0, 0));
        let mut service =
            PosService::initialize(store, Arc::new(clock.clone())).unwrap();
        service.record_sale("Coffee", 1, None).unwrap();

        clock.set(dt(2025, 8, 26, 8, 0, 0));
        let totals = service.daily_totals();

        assert_eq!(totals.date, day(2025, 8, 26));
        assert_eq!(totals.running_total, Money::zero());
    }

    // ------------------------------------------------------------------
    // Totals invariant
    // ------------------------------------------------------------------

    #[test]
    fn test_running_total_always_matches_ledger_sum() {
        let (mut service, _, _) = lunchtime_service();

        service.record_sale("Rice Plate", 1, None).unwrap();
        service.record_sale("Chicken Curry", 41, None).unwrap_err();
        service.record_sale("Coffee", 3, None).unwrap();
        service.record_sale("Pizza", 1, None).unwrap_err();
        service.record_sale("Beans Stew", 2, None).unwrap();

        let totals = service.daily_totals();
        assert_eq!(totals.running_total, totals.summary.revenue);
        assert_eq!(totals.running_total, Money::from_shillings(150 + 120 + 200));
        assert_eq!(totals.summary.transactions, 3);
    }

    #[test]
    fn test_daily_totals_breakdown() {
        let (mut service, _, _) = lunchtime_service();
        service.record_sale("Chapati", 4, None).unwrap();
        service.record_sale("Coffee", 2, None).unwrap();
        service.record_sale("Chapati", 1, None).unwrap();

        let totals = service.daily_totals();

        assert_eq!(totals.summary.most_popular(), Some(("Chapati", 5)));
        // 120 + 80 + 30 = 230 shillings over three transactions.
        assert_eq!(totals.summary.revenue, Money::from_shillings(230));
        assert_eq!(totals.summary.average_sale(), Money::from_cents(7666));
    }

    // ------------------------------------------------------------------
    // Export and shutdown
    // ------------------------------------------------------------------

    #[test]
    fn test_export_writes_end_of_day_report() {
        let (mut service, store, _) = lunchtime_service();
        service.record_sale("Rice Plate", 2, Some("T1".to_string())).unwrap();

        let exported = service.export_report().unwrap();

        assert_eq!(exported.day, day(2025, 8, 25));
        assert_eq!(exported.file_name, "end_of_day_report_2025-08-25.txt");

        let reports = store.written_reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].kind, ReportKind::EndOfDay);
        assert!(reports[0].text.contains("SALES SUMMARY"));
        assert!(reports[0].text.contains("INVENTORY STATUS"));
        assert!(reports[0].text.contains("DETAILED SALES"));
        assert!(reports[0].text.contains("Total Revenue: Ksh 300.00"));
        assert!(reports[0].text.contains("Items: Rice Plate x2"));
    }

    #[test]
    fn test_export_does_not_roll_the_day() {
        let (mut service, _, _) = lunchtime_service();
        service.record_sale("Coffee", 1, None).unwrap();

        service.export_report().unwrap();

        assert_eq!(service.business_day(), day(2025, 8, 25));
        assert_eq!(service.running_total(), Money::from_shillings(40));
    }

    #[test]
    fn test_export_failure_propagates() {
        let store = Arc::new(FailingStore::seeded());
        let clock = Arc::new(ManualClock::starting_at(dt(2025, 8, 25, 12, 0, 0)));
        let mut service = PosService::initialize(store, clock).unwrap();

        let err = service.export_report().unwrap_err();

        assert!(matches!(err, StoreError::WriteFailed { .. }));
    }

    #[test]
    fn test_flush_writes_archive_and_snapshots() {
        let (mut service, store, _) = lunchtime_service();
        service.record_sale("Juice", 2, None).unwrap();

        service.flush_current_day();

        let reports = store.written_reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].kind, ReportKind::DailyArchive);
        assert_eq!(reports[0].day, day(2025, 8, 25));
        assert_eq!(store.saved_sales().len(), 1);
    }

    // ------------------------------------------------------------------
    // Restart over real files
    // ------------------------------------------------------------------

    #[test]
    fn test_restart_over_real_files_resumes_the_day() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = StoreConfig::new(dir.path());

        // First run: seed, trade, exit without a clean shutdown.
        {
            let store = Arc::new(JsonFileStore::new(config.clone()).unwrap());
            let clock = Arc::new(ManualClock::starting_at(dt(2025, 8, 25, 12, 0, 0)));
            let mut service = PosService::initialize(store, clock).unwrap();
            service
                .record_sale("Rice Plate", 2, Some("T2".to_string()))
                .unwrap();
            service.record_sale("Coffee", 1, None).unwrap();
        }

        // Same day, fresh process: stock, history and the running total all
        // pick up where the first run left off.
        let store = Arc::new(JsonFileStore::new(config).unwrap());
        let clock = Arc::new(ManualClock::starting_at(dt(2025, 8, 25, 15, 0, 0)));
        let mut service = PosService::initialize(store, clock).unwrap();

        assert_eq!(service.running_total(), Money::from_shillings(340));
        assert_eq!(service.sales_history().len(), 2);

        let rice = service
            .list_inventory()
            .items
            .into_iter()
            .find(|i| i.name == "Rice Plate")
            .unwrap();
        assert_eq!(rice.stock, 78);
    }
}
