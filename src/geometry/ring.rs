use crate::{
    foundation::core::{Point, Rgba8},
    foundation::error::{RingclockError, RingclockResult},
    foundation::math::{angular_distance_deg, polar_point, wrap_degrees},
    style,
    time::sampler::DEGREES_PER_UNIT,
};

/// Ticks on one ring.
pub const TICKS_PER_RING: usize = 60;
/// Every n-th tick is major (longer, labeled).
pub const MAJOR_TICK_EVERY: usize = 5;
/// Angular width of the read-out window, in ring units.
///
/// Note: this is not derived from the pixel width of the indicator box, so the two can
/// drift apart visually at extreme radii.
pub const BOX_WIDTH_UNITS: f64 = 12.0;
/// A tick glows while it is closer than this to the 3 o'clock direction.
pub const HIGHLIGHT_HALF_WIDTH_DEG: f64 = BOX_WIDTH_UNITS / 2.0;

/// One ring of ticks for a single frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingSpec {
    pub center: Point,
    pub radius: f64,
    pub rotation_degrees: f64,
    pub dim: bool,
}

impl RingSpec {
    /// Ring whose rotation follows `value` (6 degrees per unit).
    pub fn new(center: Point, radius: f64, value: f64, dim: bool) -> RingclockResult<Self> {
        Self::with_rotation(center, radius, value * DEGREES_PER_UNIT, dim)
    }

    pub fn with_rotation(
        center: Point,
        radius: f64,
        rotation_degrees: f64,
        dim: bool,
    ) -> RingclockResult<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(RingclockError::invalid_geometry(format!(
                "ring radius must be finite and > 0, got {radius}"
            )));
        }
        if !rotation_degrees.is_finite() {
            return Err(RingclockError::invalid_geometry(format!(
                "ring rotation must be finite, got {rotation_degrees}"
            )));
        }
        if !center.x.is_finite() || !center.y.is_finite() {
            return Err(RingclockError::invalid_geometry("ring center must be finite"));
        }
        Ok(Self {
            center,
            radius,
            rotation_degrees,
            dim,
        })
    }

    /// Geometry of tick `index` (taken modulo 60).
    pub fn tick(&self, index: usize) -> TickGeometry {
        let index = index % TICKS_PER_RING;
        let base_angle_degrees = base_angle(index);
        let draw_angle_degrees = base_angle_degrees - self.rotation_degrees;
        let is_major = index % MAJOR_TICK_EVERY == 0;
        let is_highlighted = is_highlighted(relative_angle(index, self.rotation_degrees));

        let brightness = match (is_highlighted, self.dim) {
            (true, _) => style::GLOW_HIGHLIGHT,
            (false, true) => style::GLOW_DIM,
            (false, false) => style::GLOW_BASE,
        };

        let tick_len = self.radius
            * if is_major {
                style::MAJOR_TICK_LEN
            } else {
                style::MINOR_TICK_LEN
            };
        let base_stroke = (self.radius * style::TICK_STROKE).floor().max(1.0);
        let stroke_width = if is_major {
            base_stroke * style::MAJOR_STROKE_MULTIPLIER
        } else {
            base_stroke
        };

        let inner_point = polar_point(self.center, self.radius - tick_len, draw_angle_degrees);
        let outer_point = polar_point(self.center, self.radius, draw_angle_degrees);

        let label = is_major.then(|| {
            let scale = if is_highlighted {
                style::HIGHLIGHT_LABEL_SCALE
            } else {
                1.0
            };
            let anchor = polar_point(
                self.center,
                self.radius * (1.0 - style::LABEL_INSET),
                draw_angle_degrees,
            );
            let font_size = (self.radius * style::LABEL_FONT * scale).floor().max(1.0);
            TickLabel {
                text: format!("{index:02}"),
                anchor,
                baseline_origin: Point::new(
                    anchor.x + style::LABEL_OFFSET_X * font_size,
                    anchor.y + style::LABEL_OFFSET_Y * font_size,
                ),
                font_size,
            }
        });

        TickGeometry {
            index,
            base_angle_degrees,
            draw_angle_degrees,
            is_major,
            is_highlighted,
            brightness,
            tick_length: tick_len,
            stroke_width,
            inner_point,
            outer_point,
            label,
        }
    }

    /// All 60 ticks in index order.
    pub fn ticks(&self) -> impl Iterator<Item = TickGeometry> + '_ {
        (0..TICKS_PER_RING).map(|i| self.tick(i))
    }

    /// Tick whose base angle is closest to the rotation.
    ///
    /// When the rotation sits exactly between two ticks the earlier one wins, so the
    /// read-out only advances once the next tick is strictly closer.
    pub fn nearest_index(&self) -> usize {
        let units = wrap_degrees(self.rotation_degrees) / DEGREES_PER_UNIT;
        ((units - 0.5).ceil() as usize) % TICKS_PER_RING
    }

    /// Indices of every glowing tick.
    ///
    /// The glow window is wider than the tick spacing, so between exact alignments the
    /// two ticks straddling the indicator both glow.
    pub fn highlighted_indices(&self) -> Vec<usize> {
        (0..TICKS_PER_RING)
            .filter(|&i| is_highlighted(relative_angle(i, self.rotation_degrees)))
            .collect()
    }
}

/// A numeric label attached to a major tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TickLabel {
    /// Two-digit, zero-padded tick index.
    pub text: String,
    /// Point on the label circle the text should appear around.
    pub anchor: Point,
    /// Left baseline origin after the manual centering offsets.
    pub baseline_origin: Point,
    /// Font size in pixels.
    pub font_size: f64,
}

/// Resolved geometry and state of one tick for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct TickGeometry {
    pub index: usize,
    pub base_angle_degrees: f64,
    pub draw_angle_degrees: f64,
    pub is_major: bool,
    pub is_highlighted: bool,
    pub brightness: u8,
    pub tick_length: f64,
    pub stroke_width: f64,
    pub inner_point: Point,
    pub outer_point: Point,
    pub label: Option<TickLabel>,
}

impl TickGeometry {
    pub fn color(&self) -> Rgba8 {
        Rgba8::gray(self.brightness)
    }
}

/// Base angle of tick `index`, in degrees.
pub fn base_angle(index: usize) -> f64 {
    (index % TICKS_PER_RING) as f64 * DEGREES_PER_UNIT
}

/// Distance in `[0, 180]` between a tick's base angle and the ring rotation.
pub fn relative_angle(index: usize, rotation_degrees: f64) -> f64 {
    angular_distance_deg(base_angle(index), rotation_degrees)
}

/// Whether a tick at relative angle `rel` sits inside the read-out window.
pub fn is_highlighted(rel: f64) -> bool {
    rel < HIGHLIGHT_HALF_WIDTH_DEG
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/ring.rs"]
mod tests;
