//! # Shared Service State
//!
//! One [`PosService`] behind a mutex, cloned into every handler.
//!
//! ## Why a Mutex
//! The POS is single-till: one counter, one queue, one writer. Serializing
//! every operation through a mutex gives each sale exclusive access for its
//! check-then-mutate sequence, which is what makes "no partial effects on
//! rejection" hold without any rollback machinery. Handlers never await while
//! holding the lock.

use std::sync::{Arc, Mutex};

use crate::service::PosService;

/// Shared handle to the POS engine.
#[derive(Clone)]
pub struct ServiceState {
    service: Arc<Mutex<PosService>>,
}

impl ServiceState {
    /// Wraps a service for sharing across handlers.
    pub fn new(service: PosService) -> Self {
        ServiceState {
            service: Arc::new(Mutex::new(service)),
        }
    }

    /// Runs `f` with exclusive access to the service.
    ///
    /// Every operation reconciles the business day on entry, so even
    /// read-only endpoints need the write lock.
    pub fn with_service<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut PosService) -> R,
    {
        let mut service = self.service.lock().expect("Service mutex poisoned");
        f(&mut service)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::NaiveDate;
    use kibanda_store::MemoryStore;

    fn state() -> ServiceState {
        let store = Arc::new(MemoryStore::new());
        let clock = Arc::new(ManualClock::starting_at(
            NaiveDate::from_ymd_opt(2025, 8, 25)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        ));
        let service = PosService::initialize(store, clock).expect("init");
        ServiceState::new(service)
    }

    #[test]
    fn test_clones_share_the_service() {
        let state = state();
        let handle = state.clone();

        state.with_service(|s| {
            s.record_sale("Coffee", 1, None).unwrap();
        });

        let seen = handle.with_service(|s| s.sales_history().len());
        assert_eq!(seen, 1);
    }

    #[test]
    fn test_sequential_access_from_threads() {
        let state = state();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let state = state.clone();
                std::thread::spawn(move || {
                    state.with_service(|s| s.record_sale("Chapati", 1, None).is_ok())
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }

        let total = state.with_service(|s| s.sales_history().len());
        assert_eq!(total, 4);
    }
}
