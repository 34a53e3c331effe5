use crate::{
    foundation::core::{Point, Rect, Rgba8},
    foundation::error::{RingclockError, RingclockResult},
    style,
};

/// Stationary read-out box at 3 o'clock on the seconds ring.
///
/// Depends only on the ring center and radius; time never moves it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorBox {
    pub rect: Rect,
    pub corner_radius: f64,
    pub stroke_width: f64,
    pub color: Rgba8,
}

impl IndicatorBox {
    pub fn new(center: Point, radius: f64) -> RingclockResult<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(RingclockError::invalid_geometry(format!(
                "indicator radius must be finite and > 0, got {radius}"
            )));
        }

        let w = (radius * style::BOX_WIDTH).floor();
        let h = (radius * style::BOX_HEIGHT).floor();
        let shift = (radius * style::BOX_SHIFT).floor();
        let x0 = center.x + radius - (w / 2.0).floor() - shift;
        let y0 = center.y - (h / 2.0).floor();

        Ok(Self {
            rect: Rect::new(x0, y0, x0 + w, y0 + h),
            corner_radius: (h / 2.0).floor(),
            stroke_width: (radius * style::BOX_STROKE).floor().max(style::BOX_MIN_STROKE),
            color: style::ACCENT,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/indicator.rs"]
mod tests;
