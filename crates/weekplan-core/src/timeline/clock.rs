//! "HH:MM" clock-time values.
//!
//! Times travel through the model as the strings the user typed. Ordering
//! and gap arithmetic go through the numeric value below, never through
//! string comparison. Malformed input is a caller precondition violation:
//! it yields NaN, which then compares as neither smaller nor larger.

/// Minutes since midnight for an "HH:MM" string.
///
/// Only the first two `:`-separated fields are read. A field that is empty
/// after trimming counts as zero; a missing minutes field or a non-numeric
/// field yields NaN.
pub fn time_to_minutes(time: &str) -> f64 {
    let mut parts = time.split(':');
    let hours = parts.next().map(parse_field).unwrap_or(f64::NAN);
    let minutes = parts.next().map(parse_field).unwrap_or(f64::NAN);
    hours * 60.0 + minutes
}

/// Hours since midnight (hours + minutes / 60) for an "HH:MM" string.
pub fn time_to_hours(time: &str) -> f64 {
    time_to_minutes(time) / 60.0
}

/// Strict "HH:MM" check (two-digit fields, 00-23 and 00-59).
pub fn is_valid_time(time: &str) -> bool {
    let bytes = time.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return false;
    }
    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    let (h, m) = (&time[0..2], &time[3..5]);
    if !digits(h) || !digits(m) {
        return false;
    }
    matches!((h.parse::<u8>(), m.parse::<u8>()), (Ok(h), Ok(m)) if h < 24 && m < 60)
}

fn parse_field(field: &str) -> f64 {
    let field = field.trim();
    if field.is_empty() {
        return 0.0;
    }
    field.parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_zero_padded_times() {
        assert_eq!(time_to_minutes("08:30"), 510.0);
        assert_eq!(time_to_minutes("00:00"), 0.0);
        assert_eq!(time_to_minutes("23:59"), 1439.0);
    }

    #[test]
    fn parses_unpadded_times_by_value() {
        assert_eq!(time_to_minutes("9:05"), 545.0);
        // Lexically "9:05" > "10:00", by value it is earlier.
        assert!(time_to_minutes("9:05") < time_to_minutes("10:00"));
    }

    #[test]
    fn hours_are_fractional() {
        assert_eq!(time_to_hours("14:30"), 14.5);
        assert_eq!(time_to_hours("07:15"), 7.25);
    }

    #[test]
    fn malformed_times_are_nan() {
        assert!(time_to_minutes("abc").is_nan());
        assert!(time_to_minutes("10").is_nan());
        assert!(time_to_minutes("10:xx").is_nan());
    }

    #[test]
    fn strict_validation() {
        assert!(is_valid_time("08:00"));
        assert!(is_valid_time("23:59"));
        assert!(!is_valid_time("24:00"));
        assert!(!is_valid_time("8:00"));
        assert!(!is_valid_time("08:60"));
        assert!(!is_valid_time("08-00"));
        assert!(!is_valid_time(""));
    }
}
