//! The simulated clock that paces the record stream.

use rand::Rng;
use time::{macros::format_description, Duration, PrimitiveDateTime};

use crate::err::{Error, Result};

/// Largest gap between consecutive records, in whole seconds.
const MAX_STEP_SECS: i64 = 2;

/// An in-memory timestamp advanced between records, independent of real
/// wall-clock time. Never runs backwards.
#[derive(Debug)]
pub struct SimClock {
    now: PrimitiveDateTime,
}

impl SimClock {
    /// Parses a `YYYY-MM-DD HH:MM:SS` start string into a clock.
    pub fn from_start(start: &str) -> Result<Self> {
        let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
        let now = PrimitiveDateTime::parse(start, format).map_err(|source| Error::StartTime {
            input: start.to_owned(),
            source,
        })?;
        Ok(Self { now })
    }

    #[inline]
    pub fn now(&self) -> PrimitiveDateTime {
        self.now
    }

    /// Steps forward by a random 0..=2 whole seconds and returns the new
    /// instant.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> PrimitiveDateTime {
        self.now += Duration::seconds(rng.random_range(0..=MAX_STEP_SECS));
        self.now
    }
}

/// Formats an instant the way nginx stamps its access logs.
///
/// The `-0300` offset is a fixed literal, not derived from the start time.
pub fn format_nginx(ts: PrimitiveDateTime) -> std::result::Result<String, time::error::Format> {
    let format =
        format_description!("[day]/[month repr:short]/[year]:[hour]:[minute]:[second] -0300");
    ts.format(format)
}
