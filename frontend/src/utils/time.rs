use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::config;

fn app_time_zone() -> Tz {
    config::current_time_zone()
}

pub fn now_in_app_tz() -> DateTime<Tz> {
    Utc::now().with_timezone(&app_time_zone())
}

pub fn today_in_app_tz() -> NaiveDate {
    now_in_app_tz().date_naive()
}

/// First and last day of the month; the last day is the first day of the
/// next month minus one day.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
    Some((first, last))
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    month_bounds(year, month)
        .map(|(_, last)| last.day())
        .unwrap_or(0)
}

/// Every calendar day of the month, in order.
pub fn month_days(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some((first, last)) = month_bounds(year, month) else {
        return Vec::new();
    };
    first.iter_days().take_while(|day| *day <= last).collect()
}

/// Years offered by month/year pickers: five back, four ahead.
pub fn year_options(current_year: i32) -> Vec<i32> {
    (current_year - 5..current_year + 5).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn february_length_follows_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 13), 0);
    }

    #[test]
    fn month_days_cover_whole_month() {
        let days = month_days(2024, 2);
        assert_eq!(days.len(), 29);
        assert_eq!(days.first(), NaiveDate::from_ymd_opt(2024, 2, 1).as_ref());
        assert_eq!(days.last(), NaiveDate::from_ymd_opt(2024, 2, 29).as_ref());
    }

    #[test]
    fn year_options_span_ten_years() {
        let years = year_options(2024);
        assert_eq!(years.first(), Some(&2019));
        assert_eq!(years.last(), Some(&2028));
        assert_eq!(years.len(), 10);
    }
}
