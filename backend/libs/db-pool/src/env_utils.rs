//! Environment variable helpers shared by the blog services
//!
//! Unset or blank variables fall back to a default. A value that is set but
//! does not parse is an error, so a typo such as `MYSQL_PORT=33o6` stops
//! startup instead of silently connecting somewhere else.

use std::fmt::Display;
use std::str::FromStr;

/// Read `key`, returning `default` when it is unset or blank
///
/// # Example
/// ```ignore
/// let port: u16 = parse_env_with_default("MYSQL_PORT", 3306)?;
/// ```
pub fn parse_env_with_default<T>(key: &str, default: T) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    Ok(parse_env_optional(key)?.unwrap_or(default))
}

/// Read `key`, returning `Ok(None)` when it is unset or blank
pub fn parse_env_optional<T>(key: &str) -> Result<Option<T>, String>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| format!("Failed to parse {}='{}': {}", key, raw, e)),
        Err(_) => Ok(None),
    }
}
