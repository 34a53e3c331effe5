use crate::{
    compile::plan::{DrawOp, FramePlan},
    foundation::core::Canvas,
    foundation::error::{RingclockError, RingclockResult},
};

pub mod cpu;
pub mod pipeline;
pub mod text;

/// Pixels of one rendered frame.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8.
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)` as stored.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }

    /// Copy of the pixels with straight (non-premultiplied) alpha, as PNG expects.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }
}

/// Host surface contract: anything that can clear, draw a [`DrawOp`] and hand back pixels.
pub trait RenderBackend {
    /// Prepare a surface of `canvas` size, optionally cleared to transparent.
    fn begin_frame(&mut self, canvas: Canvas, clear_to_transparent: bool) -> RingclockResult<()>;

    fn draw_op(&mut self, op: &DrawOp) -> RingclockResult<()>;

    /// Finish the frame and read it back.
    fn readback_rgba8(&mut self) -> RingclockResult<FrameRGBA>;
}

/// Execute a [`FramePlan`] on `backend` from clear to readback.
pub fn execute_plan<B: RenderBackend + ?Sized>(
    backend: &mut B,
    plan: &FramePlan,
) -> RingclockResult<FrameRGBA> {
    backend.begin_frame(plan.canvas, plan.clear_to_transparent)?;
    for op in &plan.ops {
        backend.draw_op(op)?;
    }
    let frame = backend.readback_rgba8()?;
    if frame.width != plan.canvas.width || frame.height != plan.canvas.height {
        return Err(RingclockError::render(format!(
            "backend returned {}x{} for a {}x{} plan",
            frame.width, frame.height, plan.canvas.width, plan.canvas.height
        )));
    }
    Ok(frame)
}

#[cfg(test)]
#[path = "../tests/unit/render/passes.rs"]
mod tests;
