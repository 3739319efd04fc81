//! Business-hours predicate for the bar (22:00-04:00 JST).
//!
//! The server consumes this in two places: the `/api/status` endpoint
//! and the lifecycle sweeper that clears all in-memory state once the
//! bar closes.
//!
//! Two environment variables exist for tests only:
//!
//! - `MEIMEI_SKIP_BUSINESS_HOURS=true` bypasses the check entirely
//! - `MEIMEI_TEST_JST_HOUR=<0-23>` overrides the current JST hour

use crate::time::get_jst_hour;

/// Environment variable that bypasses the business-hours check (test only).
pub const SKIP_BUSINESS_HOURS_ENV: &str = "MEIMEI_SKIP_BUSINESS_HOURS";

/// Environment variable that overrides the current JST hour (test only).
pub const TEST_JST_HOUR_ENV: &str = "MEIMEI_TEST_JST_HOUR";

/// Whether the bar is open at the given JST hour of day.
///
/// Open window: 22:00 <= hour < 24:00 or 0:00 <= hour < 4:00.
pub fn is_open_at(jst_hour: u32) -> bool {
    jst_hour >= 22 || jst_hour < 4
}

/// Whether the bar is currently open.
pub fn is_open() -> bool {
    if std::env::var(SKIP_BUSINESS_HOURS_ENV).as_deref() == Ok("true") {
        return true;
    }

    let jst_hour = match std::env::var(TEST_JST_HOUR_ENV) {
        Ok(raw) => match raw.parse::<u32>() {
            Ok(hour) => hour,
            Err(_) => {
                tracing::warn!(
                    "Ignoring unparsable {} value: '{}'",
                    TEST_JST_HOUR_ENV,
                    raw
                );
                get_jst_hour()
            }
        },
        Err(_) => get_jst_hour(),
    };

    is_open_at(jst_hour)
}
