//! Runtime application configuration loaded from the environment.

use std::time::Duration;

use alert_notifier::NotifierConfig;

use super::defaults::*;
use super::validation::validate_setting;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub server_port: u16,
    pub notifications_enabled: bool,
    pub notifier: NotifierConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: ward_client::api::DEFAULT_BASE_URL.into(),
            server_port: DEFAULT_SERVER_PORT,
            notifications_enabled: true,
            notifier: NotifierConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from process environment variables.
    pub fn load() -> Result<Self, anyhow::Error> {
        Ok(Self::from_lookup(|key| std::env::var(key).ok()))
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Missing or invalid values fall back to defaults; invalid ones are
    /// logged.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let g = |key: &str| -> Option<String> {
            let value = lookup(key)?.trim().to_string();
            if value.is_empty() {
                return None;
            }
            match validate_setting(key, &value) {
                Ok(()) => Some(value),
                Err(e) => {
                    tracing::warn!(key, value = %value, "Ignoring invalid setting: {e}");
                    None
                }
            }
        };
        let secs = |key: &str, default: Duration| -> Duration {
            g(key)
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(default)
        };
        let count = |key: &str, default: u32| -> u32 {
            g(key).and_then(|v| v.parse().ok()).unwrap_or(default)
        };

        let defaults = NotifierConfig::default();
        let notifier = NotifierConfig {
            startup_delay: secs(NOTIFY_STARTUP_DELAY_SECS, defaults.startup_delay),
            poll_interval: secs(NOTIFY_POLL_INTERVAL_SECS, defaults.poll_interval),
            toast_lifetime: secs(NOTIFY_TOAST_LIFETIME_SECS, defaults.toast_lifetime),
            prime_limit: count(NOTIFY_PRIME_LIMIT, defaults.prime_limit),
            poll_limit: count(NOTIFY_POLL_LIMIT, defaults.poll_limit),
            max_new_per_cycle: count(NOTIFY_MAX_NEW_PER_CYCLE, defaults.max_new_per_cycle as u32)
                as usize,
            max_visible: count(NOTIFY_MAX_VISIBLE, defaults.max_visible as u32) as usize,
        }
        .normalized();

        Self {
            api_base_url: g(WARD_API_BASE)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| ward_client::api::DEFAULT_BASE_URL.into()),
            server_port: g(SERVER_PORT)
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            notifications_enabled: g(NOTIFICATIONS_ENABLED)
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(true),
            notifier,
        }
    }

    /// Non-fatal issues worth surfacing at startup.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.api_base_url.starts_with("http://") {
            warnings.push(format!(
                "{WARD_API_BASE} uses plain http: {}",
                self.api_base_url
            ));
        }
        if !self.notifications_enabled {
            warnings.push("alert notifications are disabled at startup".into());
        }
        if self.notifier.toast_lifetime > self.notifier.poll_interval {
            warnings.push("toast lifetime exceeds the poll interval; toasts will stack".into());
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config_from(&[]), AppConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            (WARD_API_BASE, "http://localhost:5000/"),
            (SERVER_PORT, "9090"),
            (NOTIFICATIONS_ENABLED, "false"),
            (NOTIFY_POLL_INTERVAL_SECS, "30"),
            (NOTIFY_MAX_VISIBLE, "3"),
        ]);

        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.server_port, 9090);
        assert!(!config.notifications_enabled);
        assert_eq!(config.notifier.poll_interval, Duration::from_secs(30));
        assert_eq!(config.notifier.max_visible, 3);
        assert_eq!(config.notifier.startup_delay, Duration::from_secs(20));
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config_from(&[
            (WARD_API_BASE, "not-a-url"),
            (SERVER_PORT, "0"),
            (NOTIFY_POLL_INTERVAL_SECS, "0"),
            (NOTIFY_TOAST_LIFETIME_SECS, "soon"),
        ]);

        assert_eq!(config.api_base_url, ward_client::api::DEFAULT_BASE_URL);
        assert_eq!(config.server_port, DEFAULT_SERVER_PORT);
        assert_eq!(config.notifier.poll_interval, Duration::from_secs(15));
        assert_eq!(config.notifier.toast_lifetime, Duration::from_secs(8));
    }

    #[test]
    fn warnings_flag_plain_http_and_disabled() {
        let config = config_from(&[
            (WARD_API_BASE, "http://localhost:5000"),
            (NOTIFICATIONS_ENABLED, "false"),
        ]);
        let warnings = config.warnings();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("plain http"));
        assert!(AppConfig::default().warnings().is_empty());
    }
}
