use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::anyhow;
use chrono::{NaiveTime, Timelike};

use crate::foundation::error::{RingclockError, RingclockResult};

/// Degrees of ring rotation per unit of time value (60 units per revolution).
pub const DEGREES_PER_UNIT: f64 = 6.0;

/// Wall-clock reading broken into the values the clock face animates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimeSample {
    /// Whole hours, 24-hour format.
    pub hour: u32,
    /// Minute plus the fractional minute contributed by `second_value`.
    pub minute_value: f64,
    /// Second plus microsecond fraction, always in `[0, 60)`.
    pub second_value: f64,
}

impl TimeSample {
    /// Derive a sample from any time-of-day value.
    ///
    /// Precision is truncated to microseconds. Leap-second readings (nanoseconds past
    /// 1e9) are clamped to the last microsecond of the second.
    pub fn from_time<T: Timelike>(t: &T) -> Self {
        let micros = (t.nanosecond() / 1_000).min(999_999);
        let second_value = f64::from(t.second()) + f64::from(micros) / 1_000_000.0;
        let minute_value = f64::from(t.minute()) + second_value / 60.0;
        Self {
            hour: t.hour(),
            minute_value,
            second_value,
        }
    }

    /// Build a sample from explicit components.
    pub fn from_hms_micro(hour: u32, minute: u32, second: u32, micro: u32) -> RingclockResult<Self> {
        let t = NaiveTime::from_hms_micro_opt(hour, minute, second, micro).ok_or_else(|| {
            anyhow!("invalid time of day {hour:02}:{minute:02}:{second:02}.{micro:06}")
        })?;
        Ok(Self::from_time(&t))
    }

    /// Rotation of the seconds ring in degrees.
    pub fn seconds_rotation(&self) -> f64 {
        self.second_value * DEGREES_PER_UNIT
    }

    /// Rotation of the minutes ring in degrees.
    pub fn minutes_rotation(&self) -> f64 {
        self.minute_value * DEGREES_PER_UNIT
    }

    /// Two-digit hour read-out shown at the center of the face.
    pub fn hour_label(&self) -> String {
        format!("{:02}", self.hour)
    }
}

/// Source of the current time of day.
pub trait TimeSource {
    /// Read the clock once.
    fn sample(&mut self) -> RingclockResult<TimeSample>;
}

/// Local wall-clock time from the operating system.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn sample(&mut self) -> RingclockResult<TimeSample> {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| RingclockError::clock_unavailable(format!("system clock: {e}")))?;
        let secs = i64::try_from(since_epoch.as_secs())
            .map_err(|_| RingclockError::clock_unavailable("system clock out of range"))?;
        let utc = chrono::DateTime::<chrono::Utc>::from_timestamp(secs, since_epoch.subsec_nanos())
            .ok_or_else(|| RingclockError::clock_unavailable("system clock out of range"))?;
        let local = utc.with_timezone(&chrono::Local);
        Ok(TimeSample::from_time(&local))
    }
}

/// A clock pinned to one time of day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedTimeSource {
    time: NaiveTime,
}

impl FixedTimeSource {
    pub fn new(time: NaiveTime) -> Self {
        Self { time }
    }

    /// Parse `HH:MM:SS` with an optional fractional part, e.g. `00:30:15.5`.
    pub fn parse(s: &str) -> RingclockResult<Self> {
        let time = NaiveTime::parse_from_str(s.trim(), "%H:%M:%S%.f")
            .map_err(|e| anyhow!("cannot parse time '{s}': {e}"))?;
        Ok(Self::new(time))
    }
}

impl TimeSource for FixedTimeSource {
    fn sample(&mut self) -> RingclockResult<TimeSample> {
        Ok(TimeSample::from_time(&self.time))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/time/sampler.rs"]
mod tests;
