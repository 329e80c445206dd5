use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NAIVE_DATETIME_FORMATS: [&str; 3] =
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Minute-precision date-times with a numeric offset (`2024-03-15T10:00+02:00`)
const OFFSET_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"];

/// Parse an `updated` value as an ISO-8601 date or date-time
///
/// Accepts RFC 3339, minute-precision times with `Z` or an offset, naive date-times
/// (read as UTC), `YYYY-MM-DD`, and the reduced forms `YYYY-MM` and `YYYY` (read as
/// the first day of the month or year).
pub fn parse_updated(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in OFFSET_DATETIME_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(value, format) {
            return Some(parsed.with_timezone(&Utc));
        }
    }

    let naive = value.strip_suffix(['Z', 'z']).unwrap_or(value);
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(naive, format) {
            return Some(parsed.and_utc());
        }
    }

    parse_date(value).and_then(|date| date.and_hms_opt(0, 0, 0)).map(|dt| dt.and_utc())
}

/// `YYYY-MM-DD`, `YYYY-MM` or `YYYY`
fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    let mut parts = value.split('-');
    let year = parts.next().filter(|y| is_digits(y, 4))?.parse().ok()?;
    let month = match parts.next() {
        Some(month) if is_digits(month, 2) => month.parse().ok()?,
        Some(_) => return None,
        None => 1,
    };
    if parts.next().is_some() {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, 1)
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

/// Milliseconds since the epoch for an `updated` value; missing or unparsable is 0
pub fn updated_millis(value: &str) -> i64 {
    parse_updated(value).map(|datetime| datetime.timestamp_millis()).unwrap_or(0)
}
