//! Environment variable helpers used by [`config`](crate::config) and
//! [`log`](crate::log).
//!
//! Every knob is optional: an unset or unparsable variable falls back to
//! the compiled-in default.

use std::str::FromStr;

/// Get environment variable parsed as type T, or return default.
///
/// ```ignore
/// let first: i32 = env_get("FERROR_FIRST_CODE", 0);
/// ```
#[inline]
pub fn env_get<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Get environment variable as boolean.
///
/// `1`, `true`, `yes`, `on` are true and `0`, `false`, `no`, `off` are
/// false (case-insensitive). Anything else, including unset, returns the
/// default.
#[inline]
pub fn env_get_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(val) => match val.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        Err(_) => default,
    }
}
