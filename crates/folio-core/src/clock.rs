//! Wall-clock formatting for the contact info panel.

use chrono::{NaiveTime, Timelike};

/// Format a time of day as a 12-hour clock string, e.g. "4:05 PM".
///
/// No leading zero on the hour, two digits for the minutes, uppercase
/// AM/PM. Midnight and noon both render as 12.
pub fn format_clock(time: NaiveTime) -> String {
    let (is_pm, hour) = time.hour12();
    let suffix = if is_pm { "PM" } else { "AM" };
    format!("{}:{:02} {}", hour, time.minute(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_afternoon() {
        assert_eq!(format_clock(at(14, 5)), "2:05 PM");
        assert_eq!(format_clock(at(16, 5)), "4:05 PM");
    }

    #[test]
    fn test_after_midnight() {
        assert_eq!(format_clock(at(0, 30)), "12:30 AM");
        assert_eq!(format_clock(at(0, 0)), "12:00 AM");
    }

    #[test]
    fn test_noon() {
        assert_eq!(format_clock(at(12, 0)), "12:00 PM");
        assert_eq!(format_clock(at(12, 59)), "12:59 PM");
    }

    #[test]
    fn test_morning_minutes_are_zero_padded() {
        assert_eq!(format_clock(at(9, 7)), "9:07 AM");
        assert_eq!(format_clock(at(11, 59)), "11:59 AM");
    }
}
