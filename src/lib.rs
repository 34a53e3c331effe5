//! Ringclock renders an animated radial clock face meant to sit on the desktop background.
//!
//! Two concentric rings of 60 ticks (seconds outside, minutes inside and dimmed) rotate
//! backwards past a fixed read-out box at 3 o'clock, and the current hour sits in the middle.
//!
//! # Pipeline overview
//!
//! 1. **Sample**: `TimeSource -> TimeSample` (hour, fractional minute, fractional second)
//! 2. **Compile**: `Canvas + TimeSample -> FramePlan` (a backend-agnostic display list)
//! 3. **Render**: `FramePlan -> FrameRGBA` (CPU backend, premultiplied RGBA8)
//! 4. **Host**: a fixed-rate scheduler repeats 1-3 and publishes each frame
//!
//! Nothing carries over between frames except backend caches, so a failed frame is simply
//! replaced by the next one.
#![forbid(unsafe_code)]

mod compile;
mod foundation;
mod geometry;
mod render;
mod time;

pub mod host;
pub mod style;

pub use compile::plan::{DrawOp, FaceLayout, FramePlan, TextAnchor, compile_frame};
pub use foundation::core::{Affine, BezPath, Canvas, MAX_CANVAS_DIM, Point, Rect, Rgba8, Vec2};
pub use foundation::error::{RingclockError, RingclockResult};
pub use geometry::indicator::IndicatorBox;
pub use geometry::ring::{
    BOX_WIDTH_UNITS, HIGHLIGHT_HALF_WIDTH_DEG, MAJOR_TICK_EVERY, RingSpec, TICKS_PER_RING,
    TickGeometry, TickLabel, base_angle, is_highlighted, relative_angle,
};
pub use host::layer::{BackgroundLayer, HeadlessLayer};
pub use host::run_clock;
pub use host::scheduler::{
    DEFAULT_INTERVAL, FixedRateScheduler, Pacer, SchedulerStats, ThreadPacer, TickControl,
};
pub use host::sink::{FrameSink, PngFrameSink, write_png};
pub use render::cpu::{CpuBackend, RenderSettings};
pub use render::pipeline::{ClockFace, render_frame};
pub use render::text::{FontSource, LabelFont, ShapedText, TextLayoutEngine};
pub use render::{FrameRGBA, RenderBackend, execute_plan};
pub use time::sampler::{
    DEGREES_PER_UNIT, FixedTimeSource, SystemTimeSource, TimeSample, TimeSource,
};
