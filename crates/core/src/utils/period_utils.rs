use chrono::{Datelike, Days, Local, NaiveDate};

use crate::constants::{DAYS_PER_PERIOD, PERIOD_KEY_FORMAT};
use crate::errors::Result;

/// Returns the Saturday that opens the Saturday-to-Friday week containing `date`.
pub fn period_start(date: NaiveDate) -> NaiveDate {
    // Saturday is 6 days from Sunday; Sunday rolls back one day, Friday six.
    let back = (date.weekday().num_days_from_sunday() + 1) % 7;
    date - Days::new(u64::from(back))
}

/// Period key (`YYYY-MM-DD` of the week's Saturday) for an arbitrary date.
pub fn period_key(date: NaiveDate) -> String {
    format_period_key(period_start(date))
}

/// Period key for today in local time. Recomputed on every call.
pub fn current_period_key() -> String {
    period_key(today())
}

/// Saturday of the current week in local time.
pub fn current_period_date() -> NaiveDate {
    period_start(today())
}

pub fn format_period_key(date: NaiveDate) -> String {
    date.format(PERIOD_KEY_FORMAT).to_string()
}

pub fn parse_period_key(key: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(key.trim(), PERIOD_KEY_FORMAT)?)
}

/// The calendar date `periods` weeks before `date`, or `None` when that would
/// fall outside chrono's supported range.
pub fn periods_before(date: NaiveDate, periods: u32) -> Option<NaiveDate> {
    let days = u64::from(periods) * DAYS_PER_PERIOD as u64;
    date.checked_sub_days(Days::new(days))
}

/// Week-of-year number, counting the partial week containing January 1st as
/// week 1 and starting weeks on Sunday.
pub fn week_number(date: NaiveDate) -> u32 {
    let jan_first = NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date);
    let past_days = date.ordinal0();
    let offset = jan_first.weekday().num_days_from_sunday();
    (past_days + offset + 1).div_ceil(7)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_saturday_maps_to_itself() {
        assert_eq!(period_key(d("2024-01-06")), "2024-01-06");
    }

    #[test]
    fn test_week_days_roll_back_to_saturday() {
        for day in ["2024-01-07", "2024-01-08", "2024-01-10", "2024-01-12"] {
            assert_eq!(period_key(d(day)), "2024-01-06", "day {}", day);
        }
        assert_eq!(period_key(d("2024-01-13")), "2024-01-13");
    }

    #[test]
    fn test_period_start_across_year_boundary() {
        // 2025-01-01 is a Wednesday.
        assert_eq!(period_start(d("2025-01-01")), d("2024-12-28"));
    }

    #[test]
    fn test_current_period_key_is_a_saturday() {
        let key = current_period_key();
        let date = parse_period_key(&key).unwrap();
        assert_eq!(date.weekday(), chrono::Weekday::Sat);
        assert_eq!(key.len(), 10);
    }

    #[test]
    fn test_parse_period_key_rejects_garbage() {
        assert!(parse_period_key("2024-13-01").is_err());
        assert!(parse_period_key("last week").is_err());
        assert_eq!(parse_period_key(" 2024-01-06 ").unwrap(), d("2024-01-06"));
    }

    #[test]
    fn test_periods_before() {
        assert_eq!(periods_before(d("2024-01-27"), 1), Some(d("2024-01-20")));
        assert_eq!(periods_before(d("2024-03-30"), 12), Some(d("2024-01-06")));
        assert_eq!(periods_before(d("2024-01-27"), 0), Some(d("2024-01-27")));
    }

    #[test]
    fn test_week_number() {
        // 2023-01-01 is a Sunday.
        assert_eq!(week_number(d("2023-01-01")), 1);
        assert_eq!(week_number(d("2023-01-07")), 1);
        assert_eq!(week_number(d("2023-01-08")), 2);
        // 2024-01-01 is a Monday; the first week ends on Saturday the 6th.
        assert_eq!(week_number(d("2024-01-06")), 1);
        assert_eq!(week_number(d("2024-01-07")), 2);
    }
}
