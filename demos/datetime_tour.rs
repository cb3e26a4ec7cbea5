// Copyright 2025 Cowboy AI, LLC.

//! A tour of the date/time material: naive arithmetic, calendar adjusters,
//! zone conversion, spans, and clocks.

use anyhow::Result;
use chrono::{Duration, NaiveDate, NaiveTime, Weekday};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use api_primer::datetime::{naive, spans::CalendarSpan, zoned};
use api_primer::datetime::{Clock, OffsetClock, SystemClock, TickClock};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    println!("=== Naive Dates ===");
    let new_year = naive::parse_date("2020-01-01")?;
    println!("parsed: {new_year}");
    println!("day 32 of 2020: {}", naive::date_from_year_day(2020, 32)?);
    println!("as US format: {}", new_year.format("%m/%d/%Y"));

    let adjusted = naive::next_weekday(new_year, Weekday::Fri)?;
    println!("next Friday: {adjusted}");
    println!("last day of its month: {}", naive::last_day_of_month(adjusted)?);
    println!(
        "February 2020 has {} days",
        naive::days_in_month(naive::parse_date("2020-02-01")?)?
    );

    println!("\n=== Naive Times ===");
    let eight = NaiveTime::from_hms_opt(8, 0, 0).expect("valid time");
    let shifted = eight + Duration::hours(1) - Duration::minutes(30);
    println!("08:00 + 1h - 30min = {}", shifted.format("%H:%M:%S"));

    println!("\n=== Zone Conversion ===");
    let east8 = zoned::offset_east_hours(8)?;
    let local = new_year.and_hms_opt(8, 0, 0).expect("valid time");
    let zoned_reading = zoned::at_offset(local, east8)?;
    println!("local reading: {zoned_reading}");
    println!(
        "same instant in UTC:  {}",
        zoned::format_utc(zoned::same_instant_utc(zoned_reading))
    );
    println!(
        "same wall clock, UTC: {}",
        zoned::format_utc(zoned::same_local_utc(zoned_reading))
    );
    println!(
        "epoch seconds: {}",
        zoned::same_instant_utc(zoned_reading).timestamp()
    );

    println!("\n=== Calendar Spans ===");
    let span = CalendarSpan::between(
        NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date"),
        NaiveDate::from_ymd_opt(2021, 3, 4).expect("valid date"),
    );
    println!("2020-01-01 → 2021-03-04 is {span:?}");
    println!(
        "applied back: {}",
        span.added_to(NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date"))?
    );

    println!("\n=== Clocks ===");
    let system = SystemClock;
    let ahead = OffsetClock::ahead_of(SystemClock, Duration::hours(1));
    let ticking = TickClock::with_tick(SystemClock, Duration::seconds(5))?;
    println!("system: {}", system.now());
    println!("one hour ahead: {}", ahead.now());
    println!("ticking every 5s: {}", ticking.now());
    println!("system in +08:00: {}", system.now_in(east8));

    println!("\n✅ Date/time tour completed successfully!");
    Ok(())
}
