//! Timezone catalog and time formatting, backed by `chrono-tz`

use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::{Tz, TZ_VARIANTS};
use once_cell::sync::Lazy;

use crate::error::ClockError;

static CATALOG: Lazy<Arc<[String]>> = Lazy::new(|| {
    TZ_VARIANTS
        .iter()
        .map(|tz| tz.name().to_string())
        .collect::<Vec<_>>()
        .into()
});

/// Every identifier known to the timezone database, in catalog order
///
/// The returned slice is shared; cloning the `Arc` is cheap and every
/// autocomplete entry can hold its own handle.
pub fn all_timezones() -> Arc<[String]> {
    Arc::clone(&CATALOG)
}

/// Resolve an identifier such as `"Europe/London"`
pub fn resolve(name: &str) -> Result<Tz, ClockError> {
    name.parse::<Tz>()
        .map_err(|_| ClockError::UnknownZone(name.to_string()))
}

/// Format `now` as a 12-hour wall-clock time in `tz`
///
/// `07:05:09 PM` with seconds, `07:05 PM` without.
pub fn format_time(now: DateTime<Utc>, tz: Tz, show_seconds: bool) -> String {
    let pattern = if show_seconds {
        "%I:%M:%S %p"
    } else {
        "%I:%M %p"
    };
    now.with_timezone(&tz).format(pattern).to_string()
}

/// Resolve `name` and format `now` in it
pub fn zone_time(name: &str, now: DateTime<Utc>, show_seconds: bool) -> Result<String, ClockError> {
    resolve(name).map(|tz| format_time(now, tz, show_seconds))
}
