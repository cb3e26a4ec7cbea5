// Copyright 2025 Cowboy AI, LLC.

//! Date/time arithmetic demonstrations, all on `chrono`.
//!
//! - [`naive`]: zone-free dates, times, and datetimes
//! - [`zoned`]: fixed-offset/UTC datetimes and instants
//! - [`spans`]: exact durations and calendar spans
//! - [`clock`]: a substitutable "now" source

pub mod clock;
pub mod naive;
pub mod spans;
pub mod zoned;

pub use clock::{Clock, FixedClock, OffsetClock, SystemClock, TickClock};
pub use spans::CalendarSpan;
