//! Session length tracking
//!
//! The session starts on first access within the process; only the derived
//! longest-session statistic is persisted.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::clock::Clock;

pub struct SessionClock {
    clock: Arc<dyn Clock>,
    started_at: OnceCell<i64>,
}

impl SessionClock {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            started_at: OnceCell::new(),
        }
    }

    /// Session start, fixed on first call
    pub fn started_at_ms(&self) -> i64 {
        *self.started_at.get_or_init(|| self.clock.now_ms())
    }

    /// Whole minutes since the session started, rounded down
    pub fn elapsed_minutes(&self) -> u64 {
        let start = self.started_at_ms();
        let elapsed = (self.clock.now_ms() - start).max(0);
        (elapsed / 60_000) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    #[test]
    fn test_starts_lazily() {
        let clock = ManualClock::new(0);
        let session = SessionClock::new(Arc::new(clock.clone()));
        clock.advance_minutes(30);
        // Nothing has read the session yet, so it starts now
        assert_eq!(session.elapsed_minutes(), 0);
        assert_eq!(session.started_at_ms(), 30 * 60_000);
    }

    #[test]
    fn test_partial_minutes_round_down() {
        let clock = ManualClock::new(0);
        let session = SessionClock::new(Arc::new(clock.clone()));
        session.started_at_ms();

        clock.advance_ms(59_999);
        assert_eq!(session.elapsed_minutes(), 0);
        clock.advance_ms(1);
        assert_eq!(session.elapsed_minutes(), 1);
        clock.advance_ms(150_000);
        assert_eq!(session.elapsed_minutes(), 3);
    }

    #[test]
    fn test_clock_going_backwards_reads_zero() {
        let clock = ManualClock::new(1_000_000);
        let session = SessionClock::new(Arc::new(clock.clone()));
        session.started_at_ms();
        clock.set_ms(0);
        assert_eq!(session.elapsed_minutes(), 0);
    }
}
