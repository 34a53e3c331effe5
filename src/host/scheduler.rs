use std::time::{Duration, Instant};

use anyhow::anyhow;

use crate::foundation::error::RingclockResult;

/// Default frame period, roughly 60 Hz.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(16);

/// What the scheduler should do after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    /// The tick produced no frame; keep going.
    Skip,
    Stop,
}

/// Time and sleeping for the scheduler.
pub trait Pacer {
    fn now(&self) -> Instant;
    fn sleep(&self, d: Duration);
}

/// Real time on the current thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, d: Duration) {
        std::thread::sleep(d);
    }
}

/// Counters from a finished [`FixedRateScheduler::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SchedulerStats {
    /// Ticks whose callback ran.
    pub ticks: u64,
    /// Ticks that produced a frame.
    pub frames: u64,
    /// Ticks that reported [`TickControl::Skip`].
    pub skipped_frames: u64,
    /// Deadlines skipped because a previous tick overran.
    pub dropped_ticks: u64,
}

/// Calls a tick callback on a fixed period on the calling thread.
///
/// Deadlines stay on the `start + n * interval` grid. When a tick overruns, deadlines
/// that already passed are dropped rather than replayed, so at most one late tick runs.
#[derive(Clone, Debug)]
pub struct FixedRateScheduler<P = ThreadPacer> {
    interval: Duration,
    max_ticks: Option<u64>,
    pacer: P,
}

impl FixedRateScheduler<ThreadPacer> {
    pub fn new(interval: Duration) -> RingclockResult<Self> {
        Self::with_pacer(interval, ThreadPacer)
    }
}

impl<P: Pacer> FixedRateScheduler<P> {
    pub fn with_pacer(interval: Duration, pacer: P) -> RingclockResult<Self> {
        if interval.is_zero() {
            return Err(anyhow!("scheduler interval must be > 0").into());
        }
        Ok(Self {
            interval,
            max_ticks: None,
            pacer,
        })
    }

    /// Stop after `n` ticks, skipped ones included. `None` runs until the callback stops
    /// or fails.
    pub fn with_max_ticks(mut self, n: Option<u64>) -> Self {
        self.max_ticks = n;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn run<F>(&self, mut on_tick: F) -> RingclockResult<SchedulerStats>
    where
        F: FnMut(u64) -> RingclockResult<TickControl>,
    {
        let mut stats = SchedulerStats::default();
        let mut deadline = self.pacer.now();

        loop {
            if self.max_ticks.is_some_and(|max| stats.ticks >= max) {
                break;
            }

            let now = self.pacer.now();
            if now < deadline {
                self.pacer.sleep(deadline - now);
            }

            let control = on_tick(stats.ticks)?;
            stats.ticks += 1;
            match control {
                TickControl::Skip => stats.skipped_frames += 1,
                TickControl::Continue | TickControl::Stop => stats.frames += 1,
            }
            if control == TickControl::Stop {
                break;
            }

            deadline += self.interval;
            let now = self.pacer.now();
            if now > deadline {
                let behind = (now - deadline).as_nanos() / self.interval.as_nanos();
                let skipped = u32::try_from(behind).unwrap_or(u32::MAX);
                if skipped > 0 {
                    deadline += self.interval * skipped;
                    stats.dropped_ticks += u64::from(skipped);
                    tracing::debug!(skipped, "frame overran, dropping ticks");
                }
            }
        }

        tracing::debug!(
            ticks = stats.ticks,
            frames = stats.frames,
            skipped = stats.skipped_frames,
            dropped = stats.dropped_ticks,
            "scheduler stopped"
        );
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/scheduler.rs"]
mod tests;
