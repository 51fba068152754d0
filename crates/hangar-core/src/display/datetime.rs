//! DateTime and duration display utilities.
//!
//! This module provides wrapper types for formatting timestamps in a
//! consistent, human-readable format using system timezone, and durations
//! as hours and minutes.

use std::fmt;

use jiff::{tz::TimeZone, SignedDuration, Timestamp};

/// A wrapper around `Timestamp` that provides system timezone formatting via
/// the `Display` trait.
///
/// # Format
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM TZ`
/// - Year, month, and day are zero-padded
/// - Time is in 24-hour format with zero-padded components
/// - Timezone abbreviation is included (e.g., UTC, EST, JST)
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M %Z")
        )
    }
}

/// Formats a duration as `Xh YYm`, with a leading `-` when negative.
///
/// # Examples
///
/// ```rust
/// use hangar_core::display::HoursMinutes;
/// use jiff::SignedDuration;
///
/// assert_eq!(HoursMinutes(SignedDuration::from_mins(150)).to_string(), "2h 30m");
/// assert_eq!(HoursMinutes(SignedDuration::from_mins(-45)).to_string(), "-0h 45m");
/// ```
pub struct HoursMinutes(pub SignedDuration);

impl fmt::Display for HoursMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.0.as_mins();
        let sign = if minutes < 0 { "-" } else { "" };
        let minutes = minutes.unsigned_abs();
        write!(f, "{sign}{}h {:02}m", minutes / 60, minutes % 60)
    }
}
