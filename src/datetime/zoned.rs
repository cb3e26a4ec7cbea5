// Copyright 2025 Cowboy AI, LLC.

//! Zoned datetimes and instants: fixed offsets, same-instant vs same-local
//! conversion, and epoch arithmetic.
//!
//! The two conversions are easy to conflate: same-instant keeps the point on
//! the timeline and re-renders it (+08:00 08:00 becomes UTC 00:00), while
//! same-local keeps the wall-clock reading and moves the point (+08:00 08:00
//! becomes UTC 08:00).

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

use crate::errors::{PrimerError, PrimerResult};

/// A fixed offset east of UTC by whole hours.
pub fn offset_east_hours(hours: i32) -> PrimerResult<FixedOffset> {
    FixedOffset::east_opt(hours * 3600)
        .ok_or_else(|| PrimerError::invalid_datetime(format!("offset of {hours} hours")))
}

/// Attach a fixed offset to a naive local reading.
pub fn at_offset(local: NaiveDateTime, offset: FixedOffset) -> PrimerResult<DateTime<FixedOffset>> {
    offset
        .from_local_datetime(&local)
        .single()
        .ok_or_else(|| PrimerError::invalid_datetime(format!("{local} at {offset}")))
}

/// Re-render the same instant in UTC.
pub fn same_instant_utc(zoned: DateTime<FixedOffset>) -> DateTime<Utc> {
    zoned.with_timezone(&Utc)
}

/// Keep the wall-clock reading but stamp it UTC (a different instant).
pub fn same_local_utc(zoned: DateTime<FixedOffset>) -> DateTime<Utc> {
    zoned.naive_local().and_utc()
}

/// The instant denoted by a naive reading in a given offset, as UTC.
pub fn instant_of_local(local: NaiveDateTime, offset: FixedOffset) -> PrimerResult<DateTime<Utc>> {
    Ok(same_instant_utc(at_offset(local, offset)?))
}

/// Compact UTC rendering used by the demos: `yyyy-mm-ddThh:mm:ssZ`.
pub fn format_utc(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn local(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn same_instant_moves_the_wall_clock() {
        let east8 = offset_east_hours(8).unwrap();
        let zoned = at_offset(local(2020, 1, 1, 8), east8).unwrap();
        assert_eq!(format_utc(same_instant_utc(zoned)), "2020-01-01T00:00:00Z");
    }

    #[test]
    fn same_local_moves_the_instant() {
        let east8 = offset_east_hours(8).unwrap();
        let zoned = at_offset(local(2020, 1, 1, 8), east8).unwrap();
        assert_eq!(format_utc(same_local_utc(zoned)), "2020-01-01T08:00:00Z");

        // the two conversions differ by exactly the offset
        let delta = same_local_utc(zoned) - same_instant_utc(zoned);
        assert_eq!(delta, Duration::hours(8));
    }

    #[test]
    fn instants_from_local_readings() {
        let east8 = offset_east_hours(8).unwrap();
        let instant = instant_of_local(local(2020, 1, 1, 0), east8).unwrap();
        assert_eq!(format_utc(instant), "2019-12-31T16:00:00Z");
    }

    #[test]
    fn epoch_seconds_and_millis() {
        let east8 = offset_east_hours(8).unwrap();
        let instant = instant_of_local(local(2020, 1, 1, 0), east8).unwrap();
        assert_eq!(instant.timestamp(), 1_577_808_000);
        assert_eq!(instant.timestamp_millis(), 1_577_808_000_000);
    }

    #[test]
    fn instants_render_back_into_zones() {
        let east8 = offset_east_hours(8).unwrap();
        let instant = instant_of_local(local(2020, 1, 1, 0), east8).unwrap();

        // back into the offset it came from
        let round_tripped = instant.with_timezone(&east8);
        assert_eq!(round_tripped.naive_local(), local(2020, 1, 1, 0));

        // naive parts extract cleanly
        assert_eq!(
            round_tripped.date_naive(),
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        );
    }

    #[test]
    fn zoned_arithmetic_stays_in_zone() {
        let east8 = offset_east_hours(8).unwrap();
        let zoned = at_offset(local(2020, 1, 1, 8), east8).unwrap();
        let shifted = zoned + Duration::days(30) - Duration::days(1);
        assert_eq!(shifted.naive_local(), local(2020, 1, 30, 8));
        assert_eq!(shifted.offset(), &east8);
    }

    #[test]
    fn invalid_offsets_are_rejected() {
        assert!(offset_east_hours(99).is_err());
    }
}
