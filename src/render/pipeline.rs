use crate::{
    compile::plan::compile_frame,
    foundation::core::Canvas,
    foundation::error::RingclockResult,
    render::{FrameRGBA, RenderBackend, execute_plan},
    time::sampler::{TimeSample, TimeSource},
};

/// Compile and render the face for one time sample.
///
/// Returns a [`FrameRGBA`] containing **premultiplied** RGBA8 pixels.
pub fn render_frame(
    canvas: Canvas,
    sample: &TimeSample,
    backend: &mut dyn RenderBackend,
) -> RingclockResult<FrameRGBA> {
    let plan = compile_frame(canvas, sample)?;
    execute_plan(backend, &plan)
}

/// Frame orchestrator: owns the clock and the surface, renders whatever time is current.
pub struct ClockFace<S, B> {
    canvas: Canvas,
    source: S,
    backend: B,
}

impl<S: TimeSource, B: RenderBackend> ClockFace<S, B> {
    pub fn new(canvas: Canvas, source: S, backend: B) -> Self {
        Self {
            canvas,
            source,
            backend,
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Sample the clock once and render it.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn render_frame(&mut self) -> RingclockResult<FrameRGBA> {
        let sample = self.source.sample()?;
        render_frame(self.canvas, &sample, &mut self.backend)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_parts(self) -> (S, B) {
        (self.source, self.backend)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
