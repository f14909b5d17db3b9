//! Shared test utilities for progress store tests

#![allow(dead_code)]

use std::sync::{Arc, Once};

use arcade_progress::clock::ManualClock;
use arcade_progress::persistence::{MemorySlotStore, ProgressPersistence};
use arcade_progress::progress::DEFAULT_TOAST_DURATION_MS;
use arcade_progress::ProgressStore;

static TRACING: Once = Once::new();

/// Route store logs to the test output (`RUST_LOG=debug cargo test`)
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// A store over an in-memory slot with a manual clock starting at zero
pub struct TestArcade {
    pub clock: ManualClock,
    pub slots: MemorySlotStore,
    pub store: ProgressStore,
}

impl TestArcade {
    pub fn new() -> Self {
        Self::with_slots(MemorySlotStore::new())
    }

    pub fn with_slots(slots: MemorySlotStore) -> Self {
        init_tracing();
        let clock = ManualClock::new(0);
        let store = open(&slots, &clock);
        Self { clock, slots, store }
    }

    /// Simulate a process restart over the same slots
    pub fn restart(self) -> Self {
        let clock = ManualClock::new(0);
        let store = open(&self.slots, &clock);
        Self {
            clock,
            slots: self.slots,
            store,
        }
    }
}

fn open(slots: &MemorySlotStore, clock: &ManualClock) -> ProgressStore {
    ProgressStore::with_clock(
        ProgressPersistence::with_default_key(slots.clone()),
        Arc::new(clock.clone()),
        DEFAULT_TOAST_DURATION_MS,
    )
}
