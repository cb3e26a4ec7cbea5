// Copyright 2025 Cowboy AI, LLC.

//! Clocks: a small trait over "what time is it now" with system, offset,
//! tick, and fixed implementations, so time-dependent demonstrations can be
//! tested against a clock that does not move.

use chrono::{DateTime, Duration, FixedOffset, Utc};

use crate::errors::{PrimerError, PrimerResult};

/// A source of the current instant.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;

    /// The current instant viewed in a fixed offset.
    fn now_in(&self, offset: FixedOffset) -> DateTime<FixedOffset> {
        self.now().with_timezone(&offset)
    }
}

/// The real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to one instant. Test double for everything below.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Pin the clock to `instant`
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

/// A clock running a constant duration ahead of (or behind) its base.
#[derive(Debug, Clone)]
pub struct OffsetClock<C> {
    base: C,
    offset: Duration,
}

impl<C: Clock> OffsetClock<C> {
    /// A clock reading `offset` ahead of `base`
    pub fn ahead_of(base: C, offset: Duration) -> Self {
        Self { base, offset }
    }
}

impl<C: Clock> Clock for OffsetClock<C> {
    fn now(&self) -> DateTime<Utc> {
        self.base.now() + self.offset
    }
}

/// A clock whose readings advance only in whole ticks: each reading is the
/// base clock's reading floored to a multiple of the tick interval.
#[derive(Debug, Clone)]
pub struct TickClock<C> {
    base: C,
    tick_millis: i64,
}

impl<C: Clock> TickClock<C> {
    /// A clock ticking every `tick`; the interval must be positive.
    pub fn with_tick(base: C, tick: Duration) -> PrimerResult<Self> {
        let tick_millis = tick.num_milliseconds();
        if tick_millis <= 0 {
            return Err(PrimerError::InvalidOperation {
                reason: format!("tick interval must be positive, got {tick}"),
            });
        }
        Ok(Self { base, tick_millis })
    }
}

impl<C: Clock> Clock for TickClock<C> {
    fn now(&self) -> DateTime<Utc> {
        let now = self.base.now();
        let floored = now.timestamp_millis().div_euclid(self.tick_millis) * self.tick_millis;
        DateTime::<Utc>::from_timestamp_millis(floored).unwrap_or(now)
    }
}
