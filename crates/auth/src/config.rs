//! Authentication configuration

use chrono::Duration;
use folio_common::Config;

use crate::error::AuthError;

/// Lowest and highest work factors bcrypt accepts
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub expires_in: Duration,
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    /// Build from the process configuration
    pub fn from_config(config: &Config) -> Result<Self, AuthError> {
        if config.jwt_secret.is_empty() {
            return Err(AuthError::Configuration("JWT_SECRET must not be empty".to_string()));
        }
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&config.bcrypt_cost) {
            return Err(AuthError::Configuration(format!(
                "BCRYPT_COST must be between {} and {}, got {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST, config.bcrypt_cost
            )));
        }

        Ok(Self {
            jwt_secret: config.jwt_secret.clone(),
            expires_in: parse_expires_in(&config.expires_in)?,
            bcrypt_cost: config.bcrypt_cost,
        })
    }
}

/// Milliseconds in one unit of `EXPIRES_IN`
const MS_PER_SECOND: f64 = 1_000.0;
const MS_PER_MINUTE: f64 = 60.0 * MS_PER_SECOND;
const MS_PER_HOUR: f64 = 60.0 * MS_PER_MINUTE;
const MS_PER_DAY: f64 = 24.0 * MS_PER_HOUR;
const MS_PER_WEEK: f64 = 7.0 * MS_PER_DAY;
const MS_PER_YEAR: f64 = 365.25 * MS_PER_DAY;

/// Parse a token lifetime such as `3600000`, `500ms`, `90s`, `15m`, `1.5h`,
/// `1d`, `2w` or `1y`
///
/// A bare number is a count of milliseconds. Amounts may be fractional and
/// the lifetime must be positive. Token expiry is kept to whole seconds, so
/// any sub-second remainder is dropped when a token is issued.
pub fn parse_expires_in(raw: &str) -> Result<Duration, AuthError> {
    let raw = raw.trim();
    let invalid = || AuthError::Configuration(format!("Invalid EXPIRES_IN value: {:?}", raw));

    let split = raw
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(raw.len());
    let (number, unit) = raw.split_at(split);

    let amount: f64 = number.parse().map_err(|_| invalid())?;
    if !(amount.is_finite() && amount > 0.0) {
        return Err(invalid());
    }

    let ms_per_unit = match unit.trim().to_ascii_lowercase().as_str() {
        "" | "ms" | "msec" | "msecs" | "millisecond" | "milliseconds" => 1.0,
        "s" | "sec" | "secs" | "second" | "seconds" => MS_PER_SECOND,
        "m" | "min" | "mins" | "minute" | "minutes" => MS_PER_MINUTE,
        "h" | "hr" | "hrs" | "hour" | "hours" => MS_PER_HOUR,
        "d" | "day" | "days" => MS_PER_DAY,
        "w" | "week" | "weeks" => MS_PER_WEEK,
        "y" | "yr" | "yrs" | "year" | "years" => MS_PER_YEAR,
        _ => return Err(invalid()),
    };

    let millis = (amount * ms_per_unit).round();
    if millis < 1.0 || millis >= i64::MAX as f64 {
        return Err(invalid());
    }

    Duration::try_milliseconds(millis as i64).ok_or_else(invalid)
}
