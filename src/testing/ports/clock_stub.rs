use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::ports::Clock;

/// Simulated clock: sleeping advances time instantly.
#[derive(Clone, Default)]
pub struct FakeClock {
    now: Arc<Mutex<Duration>>,
    sleeps: Arc<Mutex<Vec<Duration>>>,
}

impl FakeClock {
    pub const TIMESTAMP: &'static str = "2026-04-01T12:00:00";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }

    pub fn total_slept(&self) -> Duration {
        self.sleeps.lock().unwrap().iter().sum()
    }
}

impl Clock for FakeClock {
    fn elapsed(&self) -> Duration {
        *self.now.lock().unwrap()
    }

    fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
        self.advance(duration);
    }

    fn timestamp(&self) -> String {
        Self::TIMESTAMP.to_string()
    }
}
