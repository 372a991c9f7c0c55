//! Local-time rendering of timestamps.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a [`Timestamp`] in the system time zone as
/// `YYYY-MM-DD HH:MM:SS TZ`.
///
/// Storage and the JSON surface always carry UTC instants; this wrapper is
/// only used where a person reads the value.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zoned = self.0.to_zoned(TimeZone::system());
        write!(f, "{}", zoned.strftime("%Y-%m-%d %H:%M:%S %Z"))
    }
}
