//! Time related utils.

use chrono::TimeZone;
use chrono::Utc;

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into date: `20220301`
///
/// The date is taken in the offset carried by `t`, not in UTC.
pub fn format_date<Tz: TimeZone>(t: &chrono::DateTime<Tz>) -> String {
    t.fixed_offset().format("%Y%m%d").to_string()
}

/// Format time into ISO 8601 basic format with zone designator.
///
/// - UTC (or any zero offset): `20220313T072004Z`
/// - Other offsets: `20220313T082004+0100`
pub fn format_iso8601_basic<Tz: TimeZone>(t: &chrono::DateTime<Tz>) -> String {
    let t = t.fixed_offset();
    if t.offset().local_minus_utc() == 0 {
        t.format("%Y%m%dT%H%M%SZ").to_string()
    } else {
        t.format("%Y%m%dT%H%M%S%z").to_string()
    }
}
