//! Notifier timing and sizing parameters.

use std::time::Duration;

/// Tunables for the alert notifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierConfig {
    /// Delay from start until the first poll.
    pub startup_delay: Duration,
    /// Interval between polls once polling has begun.
    pub poll_interval: Duration,
    /// How long a toast stays visible unless dismissed.
    pub toast_lifetime: Duration,
    /// Number of active alerts fetched to seed the known ids.
    pub prime_limit: u32,
    /// Number of active alerts fetched per poll.
    pub poll_limit: u32,
    /// Toasts admitted per poll cycle.
    pub max_new_per_cycle: usize,
    /// Visible toast cap.
    pub max_visible: usize,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            startup_delay: Duration::from_secs(20),
            poll_interval: Duration::from_secs(15),
            toast_lifetime: Duration::from_secs(8),
            prime_limit: 20,
            poll_limit: 5,
            max_new_per_cycle: 3,
            max_visible: 5,
        }
    }
}

impl NotifierConfig {
    /// Clamp zero values that would stall the timers or hide everything.
    pub fn normalized(mut self) -> Self {
        const MIN_PERIOD: Duration = Duration::from_millis(1);

        self.poll_interval = self.poll_interval.max(MIN_PERIOD);
        self.toast_lifetime = self.toast_lifetime.max(MIN_PERIOD);
        self.prime_limit = self.prime_limit.max(1);
        self.poll_limit = self.poll_limit.max(1);
        self.max_new_per_cycle = self.max_new_per_cycle.max(1);
        self.max_visible = self.max_visible.max(1);
        self
    }
}
