//! Host-side glue: frame pacing, background layer attachment and frame publishing.

use crate::{
    foundation::error::RingclockResult,
    render::{RenderBackend, pipeline::ClockFace},
    time::sampler::TimeSource,
};

pub mod layer;
pub mod scheduler;
pub mod sink;

use layer::BackgroundLayer;
use scheduler::{FixedRateScheduler, Pacer, SchedulerStats, TickControl};
use sink::FrameSink;

/// Attach to the background layer once, then render and publish on every tick.
///
/// Clock and geometry failures end the loop. Any other failure drops that frame only and
/// is counted in [`SchedulerStats::skipped_frames`]; the next tick starts over with a fresh
/// time sample.
pub fn run_clock<S, B, L, K, P>(
    face: &mut ClockFace<S, B>,
    layer: &mut L,
    sink: &mut K,
    scheduler: &FixedRateScheduler<P>,
) -> RingclockResult<SchedulerStats>
where
    S: TimeSource,
    B: RenderBackend,
    L: BackgroundLayer + ?Sized,
    K: FrameSink + ?Sized,
    P: Pacer,
{
    layer.attach(face.canvas())?;

    scheduler.run(|frame_no| {
        let frame = match face.render_frame() {
            Ok(frame) => frame,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                tracing::warn!(frame_no, error = %e, "frame render failed, skipping");
                return Ok(TickControl::Skip);
            }
        };
        match sink.publish(&frame) {
            Ok(()) => Ok(TickControl::Continue),
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => {
                tracing::warn!(frame_no, error = %e, "frame publish failed, skipping");
                Ok(TickControl::Skip)
            }
        }
    })
}

#[cfg(test)]
#[path = "../tests/unit/host/run.rs"]
mod tests;
