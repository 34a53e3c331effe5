use crate::{foundation::core::Canvas, foundation::error::RingclockResult};

/// Places the rendered surface behind desktop icons and foreground windows.
///
/// Called once at startup. Implementations also make the surface ignore input.
pub trait BackgroundLayer {
    fn attach(&mut self, canvas: Canvas) -> RingclockResult<()>;
}

/// Layer for hosts with no window: frames only go to a [`FrameSink`](super::sink::FrameSink).
#[derive(Clone, Copy, Debug, Default)]
pub struct HeadlessLayer {
    attached: bool,
}

impl HeadlessLayer {
    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

impl BackgroundLayer for HeadlessLayer {
    fn attach(&mut self, canvas: Canvas) -> RingclockResult<()> {
        if self.attached {
            tracing::debug!("headless layer already attached");
            return Ok(());
        }
        tracing::info!(
            width = canvas.width,
            height = canvas.height,
            "headless host, no desktop layer to attach to"
        );
        self.attached = true;
        Ok(())
    }
}
