use std::cell::Cell;
use std::fmt::Debug;
use std::rc::Rc;

use chrono::Utc;

/// Source of "now" in epoch milliseconds.
///
/// Decides whether the view is live (gap synthesis, unclamped tail snapping).
pub trait WallClock: Debug {
    fn now_ms(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Manually driven clock for tests and replays.
///
/// Clones share the same instant, so a test can keep a handle and move time
/// while the engine owns another.
#[derive(Debug, Clone, Default)]
pub struct FixedClock {
    now_ms: Rc<Cell<i64>>,
}

impl FixedClock {
    #[must_use]
    pub fn new(now_ms: i64) -> Self {
        Self {
            now_ms: Rc::new(Cell::new(now_ms)),
        }
    }

    pub fn set(&self, now_ms: i64) {
        self.now_ms.set(now_ms);
    }

    pub fn advance(&self, delta_ms: i64) {
        self.now_ms.set(self.now_ms.get().saturating_add(delta_ms));
    }
}

impl WallClock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.now_ms.get()
    }
}
