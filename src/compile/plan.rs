use crate::{
    foundation::core::{Canvas, Point, Rect, Rgba8},
    foundation::error::{RingclockError, RingclockResult},
    geometry::indicator::IndicatorBox,
    geometry::ring::RingSpec,
    style,
    time::sampler::TimeSample,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Backend-agnostic display list for one frame of the clock face.
///
/// Ops are drawn in order on top of a surface cleared to transparent.
pub struct FramePlan {
    pub canvas: Canvas,
    pub clear_to_transparent: bool,
    pub ops: Vec<DrawOp>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Draw operation emitted by [`compile_frame`].
pub enum DrawOp {
    Line {
        from: Point,
        to: Point,
        width: f64,
        color: Rgba8,
    },
    RoundedRectStroke {
        rect: Rect,
        corner_radius: f64,
        width: f64,
        color: Rgba8,
    },
    Text {
        text: String,
        anchor: TextAnchor,
        size_px: f64,
        color: Rgba8,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Where a text op is positioned.
pub enum TextAnchor {
    /// Left end of the first line's baseline.
    Baseline(Point),
    /// Center of the laid-out text box.
    Center(Point),
}

/// Radii and sizes of the face for a given surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceLayout {
    pub center: Point,
    pub seconds_radius: f64,
    pub minutes_radius: f64,
    pub hour_font_px: f64,
}

impl FaceLayout {
    pub fn for_canvas(canvas: Canvas) -> RingclockResult<Self> {
        let min_dim = f64::from(canvas.min_dim());
        let layout = Self {
            center: canvas.center(),
            seconds_radius: (min_dim * style::SECONDS_RADIUS).floor(),
            minutes_radius: (min_dim * style::MINUTES_RADIUS).floor(),
            hour_font_px: (min_dim * style::HOUR_FONT).floor(),
        };
        if layout.minutes_radius <= 0.0 {
            return Err(RingclockError::invalid_geometry(format!(
                "canvas {}x{} is too small for the clock face",
                canvas.width, canvas.height
            )));
        }
        Ok(layout)
    }
}

/// Compile one frame: seconds ring, dimmed minutes ring, indicator box, hour label.
#[tracing::instrument(level = "trace", skip(sample))]
pub fn compile_frame(canvas: Canvas, sample: &TimeSample) -> RingclockResult<FramePlan> {
    let layout = FaceLayout::for_canvas(canvas)?;

    // 60 ticks per ring, 12 of them labeled
    let mut ops = Vec::with_capacity(2 * (60 + 12) + 2);

    let seconds = RingSpec::new(
        layout.center,
        layout.seconds_radius,
        sample.second_value,
        false,
    )?;
    push_ring(&mut ops, &seconds);

    let minutes = RingSpec::new(layout.center, layout.minutes_radius, sample.minute_value, true)?;
    push_ring(&mut ops, &minutes);

    let indicator = IndicatorBox::new(layout.center, layout.seconds_radius)?;
    ops.push(DrawOp::RoundedRectStroke {
        rect: indicator.rect,
        corner_radius: indicator.corner_radius,
        width: indicator.stroke_width,
        color: indicator.color,
    });

    if layout.hour_font_px >= 1.0 {
        ops.push(DrawOp::Text {
            text: sample.hour_label(),
            anchor: TextAnchor::Center(layout.center),
            size_px: layout.hour_font_px,
            color: style::HOUR_TEXT,
        });
    }

    Ok(FramePlan {
        canvas,
        clear_to_transparent: true,
        ops,
    })
}

fn push_ring(ops: &mut Vec<DrawOp>, ring: &RingSpec) {
    for tick in ring.ticks() {
        let color = tick.color();
        ops.push(DrawOp::Line {
            from: tick.inner_point,
            to: tick.outer_point,
            width: tick.stroke_width,
            color,
        });
        if let Some(label) = tick.label {
            ops.push(DrawOp::Text {
                text: label.text,
                anchor: TextAnchor::Baseline(label.baseline_origin),
                size_px: label.font_size,
                color,
            });
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/plan.rs"]
mod tests;
