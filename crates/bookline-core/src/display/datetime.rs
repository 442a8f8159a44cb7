//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that formats an appointment time in the
/// system's single reference zone (UTC) via the `Display` trait.
///
/// # Format
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM`. Minute
/// precision is all a slot needs, and the zone is implicit.
pub struct SlotTime<'a>(pub &'a Timestamp);

impl fmt::Display for SlotTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0.to_zoned(TimeZone::UTC).strftime("%Y-%m-%d %H:%M")
        )
    }
}
