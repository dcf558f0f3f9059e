//! Setting value validation.

use regex::Regex;
use std::sync::LazyLock;

use super::defaults::*;

static RE_HTTP_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/:]+(:\d+)?(/\S*)?$").unwrap());

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        WARD_API_BASE => {
            if !RE_HTTP_URL.is_match(value) {
                return Err("must be an http(s) URL".into());
            }
        }
        SERVER_PORT => validate_int_range(value, 1, 65535)?,
        NOTIFICATIONS_ENABLED => {
            if !matches!(value.to_lowercase().as_str(), "true" | "false") {
                return Err("must be 'true' or 'false'".into());
            }
        }
        NOTIFY_STARTUP_DELAY_SECS => validate_int_range(value, 0, 3600)?,
        NOTIFY_POLL_INTERVAL_SECS => validate_int_range(value, 1, 3600)?,
        NOTIFY_TOAST_LIFETIME_SECS => validate_int_range(value, 1, 600)?,
        NOTIFY_PRIME_LIMIT => validate_int_range(value, 1, 500)?,
        NOTIFY_POLL_LIMIT => validate_int_range(value, 1, 100)?,
        NOTIFY_MAX_NEW_PER_CYCLE => validate_int_range(value, 1, 20)?,
        NOTIFY_MAX_VISIBLE => validate_int_range(value, 1, 20)?,
        _ => {}
    }
    Ok(())
}

fn validate_int_range(value: &str, min: i64, max: i64) -> Result<(), String> {
    let v: i64 = value.parse().map_err(|_| "must be an integer")?;
    if !(min..=max).contains(&v) {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_base_must_be_http() {
        assert!(validate_setting(WARD_API_BASE, "https://ward.example").is_ok());
        assert!(validate_setting(WARD_API_BASE, "http://localhost:3000/").is_ok());
        assert!(validate_setting(WARD_API_BASE, "ftp://ward.example").is_err());
        assert!(validate_setting(WARD_API_BASE, "ward.example").is_err());
    }

    #[test]
    fn numeric_ranges() {
        assert!(validate_setting(NOTIFY_POLL_INTERVAL_SECS, "15").is_ok());
        assert!(validate_setting(NOTIFY_POLL_INTERVAL_SECS, "0").is_err());
        assert!(validate_setting(NOTIFY_STARTUP_DELAY_SECS, "0").is_ok());
        assert_eq!(
            validate_setting(SERVER_PORT, "70000").unwrap_err(),
            "must be between 1 and 65535"
        );
        assert_eq!(
            validate_setting(NOTIFY_MAX_VISIBLE, "five").unwrap_err(),
            "must be an integer"
        );
    }

    #[test]
    fn booleans() {
        assert!(validate_setting(NOTIFICATIONS_ENABLED, "TRUE").is_ok());
        assert!(validate_setting(NOTIFICATIONS_ENABLED, "yes").is_err());
    }

    #[test]
    fn unknown_keys_pass() {
        assert!(validate_setting("SOMETHING_ELSE", "anything").is_ok());
    }
}
