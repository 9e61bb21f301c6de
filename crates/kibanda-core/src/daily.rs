//! # Daily Accumulator
//!
//! Tracks the current business day and its running revenue total.
//!
//! ## Day Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  State per day:  Open  (business_day == today)                          │
//! │                  Stale (business_day != today, rollover pending)        │
//! │                                                                         │
//! │  Request arrives                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  is_stale(today)? ──no──► proceed (Open)                                │
//! │       │yes                                                              │
//! │       ▼                                                                 │
//! │  archive outgoing day's report (owning service)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  roll_to(today): business_day = today, running_total = 0                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no timer; the owning service performs this check at the start of
//! every operation, which makes the transition happen exactly once per date
//! change no matter how many requests follow. This type never reads the
//! clock itself; `today` always arrives as an argument.

use chrono::NaiveDate;

use crate::ledger::Ledger;
use crate::money::Money;

/// Current business day plus its accumulated revenue.
///
/// Invariant: `running_total` equals the sum of ledger totals for
/// `business_day`. Maintained by routing every successful sale through
/// [`DailyState::record_sale`] and every restart through
/// [`DailyState::rebuilt`].
#[derive(Debug, Clone, PartialEq)]
pub struct DailyState {
    business_day: NaiveDate,
    running_total: Money,
}

impl DailyState {
    /// Opens a fresh day with a zero total.
    pub fn new(business_day: NaiveDate) -> Self {
        DailyState {
            business_day,
            running_total: Money::zero(),
        }
    }

    /// Opens a day with the total rebuilt from already-persisted records.
    ///
    /// Used at startup: if the process restarts mid-day, the loaded ledger
    /// already holds today's sales and the running total must match them,
    /// not start over at zero.
    pub fn rebuilt(business_day: NaiveDate, ledger: &Ledger) -> Self {
        DailyState {
            business_day,
            running_total: ledger.total_for_day(business_day),
        }
    }

    /// The day currently being accumulated.
    #[inline]
    pub fn business_day(&self) -> NaiveDate {
        self.business_day
    }

    /// Revenue accumulated for the current business day.
    #[inline]
    pub fn running_total(&self) -> Money {
        self.running_total
    }

    /// True when the wall-clock date has moved past the business day.
    #[inline]
    pub fn is_stale(&self, today: NaiveDate) -> bool {
        self.business_day != today
    }

    /// Adds a successful sale's amount to the running total.
    pub fn record_sale(&mut self, amount: Money) {
        self.running_total += amount;
    }

    /// Closes the current day and opens `today` with a zero total.
    ///
    /// The caller archives the outgoing day BEFORE calling this; afterwards
    /// the outgoing total is gone from this state (the ledger still has it).
    pub fn roll_to(&mut self, today: NaiveDate) {
        self.business_day = today;
        self.running_total = Money::zero();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
