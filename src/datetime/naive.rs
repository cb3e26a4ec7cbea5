// Copyright 2025 Cowboy AI, LLC.

//! Naive (zone-free) dates, times, and datetimes: construction, parsing,
//! arithmetic, and calendar adjusters.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::errors::{PrimerError, PrimerResult};

/// Build a date from a year and the ordinal day within it.
pub fn date_from_year_day(year: i32, day: u32) -> PrimerResult<NaiveDate> {
    NaiveDate::from_yo_opt(year, day)
        .ok_or_else(|| PrimerError::invalid_datetime(format!("day {day} of year {year}")))
}

/// Parse an ISO `yyyy-mm-dd` date.
pub fn parse_date(text: &str) -> PrimerResult<NaiveDate> {
    Ok(text.parse::<NaiveDate>()?)
}

/// Parse a date with an explicit format pattern.
pub fn parse_date_with(text: &str, format: &str) -> PrimerResult<NaiveDate> {
    Ok(NaiveDate::parse_from_str(text, format)?)
}

/// Shift a date forward by days and back by calendar months, in that order.
pub fn days_forward_months_back(
    date: NaiveDate,
    days: u64,
    months: u32,
) -> PrimerResult<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .and_then(|d| d.checked_sub_months(Months::new(months)))
        .ok_or_else(|| PrimerError::invalid_datetime(format!("{date} +{days}d -{months}mo")))
}

/// The next occurrence of `weekday` strictly after `date`.
pub fn next_weekday(date: NaiveDate, weekday: Weekday) -> PrimerResult<NaiveDate> {
    let mut candidate = date;
    for _ in 0..7 {
        candidate = candidate
            .succ_opt()
            .ok_or_else(|| PrimerError::invalid_datetime("date out of range"))?;
        if candidate.weekday() == weekday {
            return Ok(candidate);
        }
    }
    Err(PrimerError::invalid_datetime("weekday never reached"))
}

/// The last day of the month `date` falls in.
pub fn last_day_of_month(date: NaiveDate) -> PrimerResult<NaiveDate> {
    let first = date
        .with_day(1)
        .ok_or_else(|| PrimerError::invalid_datetime("first of month"))?;
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| PrimerError::invalid_datetime("last of month out of range"))
}

/// How many days the month of `date` has.
pub fn days_in_month(date: NaiveDate) -> PrimerResult<u32> {
    Ok(last_day_of_month(date)?.day())
}

/// Parse a time with an explicit format pattern.
pub fn parse_time_with(text: &str, format: &str) -> PrimerResult<NaiveTime> {
    Ok(NaiveTime::parse_from_str(text, format)?)
}

/// Whole minutes from one time of day to another (negative when `to` is
/// earlier).
pub fn minutes_until(from: NaiveTime, to: NaiveTime) -> i64 {
    (to - from).num_minutes()
}

/// Whole hours from one datetime to another.
pub fn hours_until(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_hours()
}

/// Shift a datetime by signed calendar months, clamping to valid month ends.
pub fn shifted_by_months(dt: NaiveDateTime, months: i32) -> PrimerResult<NaiveDateTime> {
    let shifted = if months >= 0 {
        dt.checked_add_months(Months::new(months as u32))
    } else {
        dt.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.ok_or_else(|| PrimerError::invalid_datetime(format!("{dt} {months:+}mo")))
}

/// Truncate a datetime to the start of its day.
pub fn truncate_to_day(dt: NaiveDateTime) -> PrimerResult<NaiveDateTime> {
    dt.date()
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| PrimerError::invalid_datetime("midnight"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, Timelike};
    use test_case::test_case;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_construction_forms() {
        assert_eq!(date_from_year_day(2020, 32).unwrap(), ymd(2020, 2, 1));
        assert_eq!(parse_date("2020-01-01").unwrap(), ymd(2020, 1, 1));
        assert_eq!(
            parse_date_with("2020-01-01", "%Y-%m-%d").unwrap(),
            ymd(2020, 1, 1)
        );
        assert!(date_from_year_day(2019, 366).is_err());
    }

    #[test]
    fn date_arithmetic_and_queries() {
        assert_eq!(
            days_forward_months_back(ymd(2020, 3, 1), 1, 2).unwrap(),
            ymd(2020, 1, 2)
        );

        assert!(ymd(2020, 6, 1).leap_year());
        assert!(!ymd(2019, 6, 1).leap_year());

        // ordering
        assert!(ymd(2020, 6, 1) > ymd(2020, 1, 1));
        assert!(ymd(2020, 1, 1) < ymd(2020, 6, 1));
    }

    #[test_case(ymd(2020, 1, 1), "%Y-%m-%d", "2020-01-01"; "iso")]
    #[test_case(ymd(2020, 1, 1), "%m/%d/%Y", "01/01/2020"; "us slashes")]
    fn date_formatting(date: NaiveDate, format: &str, expected: &str) {
        assert_eq!(date.format(format).to_string(), expected);
    }

    #[test]
    fn adjusters_compose_to_a_leap_day() {
        // set month to February, jump to the next Friday, then to month end
        let adjusted = ymd(2020, 1, 1).with_month(2).unwrap();
        let friday = next_weekday(adjusted, Weekday::Fri).unwrap();
        assert_eq!(friday, ymd(2020, 2, 7));
        assert_eq!(last_day_of_month(friday).unwrap(), ymd(2020, 2, 29));
    }

    #[test]
    fn month_day_range() {
        assert_eq!(days_in_month(ymd(2020, 2, 1)).unwrap(), 29);
        assert_eq!(days_in_month(ymd(2019, 2, 1)).unwrap(), 28);
        assert_eq!(ymd(2020, 2, 1).with_day(1).unwrap().day(), 1);
    }

    #[test]
    fn time_construction_forms() {
        let hms = NaiveTime::from_hms_opt(1, 2, 3).unwrap();
        assert_eq!(hms.format("%H:%M:%S").to_string(), "01:02:03");

        let with_nanos = NaiveTime::from_hms_nano_opt(1, 2, 3, 800).unwrap();
        assert_eq!(with_nanos.format("%H:%M:%S%.9f").to_string(), "01:02:03.000000800");

        let second_of_day = NaiveTime::from_num_seconds_from_midnight_opt(300, 0).unwrap();
        assert_eq!(second_of_day, NaiveTime::from_hms_opt(0, 5, 0).unwrap());
    }

    #[test]
    fn time_arithmetic() {
        let eight = NaiveTime::from_hms_opt(8, 0, 0).unwrap();

        let shifted = eight + Duration::hours(1) - Duration::minutes(30);
        assert_eq!(shifted.format("%H:%M:%S").to_string(), "08:30:00");

        assert!(eight > NaiveTime::from_hms_opt(7, 59, 59).unwrap());

        // adjust fields, then ask how long until ten o'clock
        let adjusted = eight.with_minute(20).unwrap().with_hour(9).unwrap();
        assert_eq!(
            minutes_until(adjusted, NaiveTime::from_hms_opt(10, 0, 0).unwrap()),
            40
        );

        // duration between two times of day
        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        assert_eq!((nine - eight).num_hours(), 1);
    }

    #[test]
    fn time_parsing() {
        let parsed = parse_time_with("08:00:00", "%H:%M:%S").unwrap();
        assert_eq!(parsed, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
    }

    #[test]
    fn datetime_arithmetic_oracle() {
        let start = ymd(2020, 1, 1).and_hms_opt(8, 0, 0).unwrap();

        let shifted = shifted_by_months(start, 13).unwrap() // +1y +1mo
            + Duration::days(1)
            + Duration::hours(1)
            - Duration::minutes(1)
            + Duration::seconds(1);
        assert_eq!(
            shifted.format("%Y-%m-%dT%H:%M:%S").to_string(),
            "2021-02-02T08:59:01"
        );
    }

    #[test]
    fn datetime_parsing_and_queries() {
        let dt = "2020-01-01T08:00:00".parse::<NaiveDateTime>().unwrap();
        assert_eq!(dt, ymd(2020, 1, 1).and_hms_opt(8, 0, 0).unwrap());

        let by_pattern =
            NaiveDateTime::parse_from_str("2020-01-01T08:00:00", "%Y-%m-%dT%H:%M:%S").unwrap();
        assert_eq!(by_pattern, dt);

        let nine = ymd(2020, 1, 1).and_hms_opt(9, 0, 0).unwrap();
        assert_eq!(hours_until(dt, nine), 1);

        assert_eq!(
            truncate_to_day(dt)
                .unwrap()
                .format("%Y-%m-%dT%H:%M:%S")
                .to_string(),
            "2020-01-01T00:00:00"
        );
    }
}
