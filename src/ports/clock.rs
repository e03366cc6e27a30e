use std::time::Duration;

/// Time source for polling loops and history timestamps.
pub trait Clock {
    /// Monotonic time since the clock was created.
    fn elapsed(&self) -> Duration;

    /// Block the current thread for `duration`.
    fn sleep(&self, duration: Duration);

    /// Current local time as `%Y-%m-%dT%H:%M:%S`.
    fn timestamp(&self) -> String;
}
