//! Setting keys. Defaults live on `AppConfig` and `NotifierConfig`.

pub const WARD_API_BASE: &str = "WARD_API_BASE";
pub const SERVER_PORT: &str = "SERVER_PORT";
pub const NOTIFICATIONS_ENABLED: &str = "NOTIFICATIONS_ENABLED";
pub const NOTIFY_STARTUP_DELAY_SECS: &str = "NOTIFY_STARTUP_DELAY_SECS";
pub const NOTIFY_POLL_INTERVAL_SECS: &str = "NOTIFY_POLL_INTERVAL_SECS";
pub const NOTIFY_TOAST_LIFETIME_SECS: &str = "NOTIFY_TOAST_LIFETIME_SECS";
pub const NOTIFY_PRIME_LIMIT: &str = "NOTIFY_PRIME_LIMIT";
pub const NOTIFY_POLL_LIMIT: &str = "NOTIFY_POLL_LIMIT";
pub const NOTIFY_MAX_NEW_PER_CYCLE: &str = "NOTIFY_MAX_NEW_PER_CYCLE";
pub const NOTIFY_MAX_VISIBLE: &str = "NOTIFY_MAX_VISIBLE";

pub const DEFAULT_SERVER_PORT: u16 = 8080;
