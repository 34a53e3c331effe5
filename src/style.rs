//! Fixed palette and proportions of the clock face.
//!
//! All lengths are fractions of a ring radius or of the shorter surface side.

use crate::foundation::core::Rgba8;

/// Gray level of the tick aligned with the indicator box.
pub const GLOW_HIGHLIGHT: u8 = 255;
/// Gray level of ordinary ticks on a bright ring.
pub const GLOW_BASE: u8 = 110;
/// Gray level of ordinary ticks on a dimmed ring.
pub const GLOW_DIM: u8 = 60;
/// Label size multiplier for the highlighted tick.
pub const HIGHLIGHT_LABEL_SCALE: f64 = 1.3;

pub const MAJOR_TICK_LEN: f64 = 0.07;
pub const MINOR_TICK_LEN: f64 = 0.035;
pub const TICK_STROKE: f64 = 0.01;
pub const MAJOR_STROKE_MULTIPLIER: f64 = 3.0;
pub const LABEL_INSET: f64 = 0.154;
pub const LABEL_FONT: f64 = 0.060;

/// Baseline offsets that roughly center a two-digit label on its anchor point.
///
/// These are empirical ratios of the font size, not measured glyph metrics.
pub const LABEL_OFFSET_X: f64 = -0.7;
pub const LABEL_OFFSET_Y: f64 = 0.6;

pub const BOX_WIDTH: f64 = 0.567;
pub const BOX_HEIGHT: f64 = 0.160;
pub const BOX_SHIFT: f64 = 0.23;
pub const BOX_STROKE: f64 = 0.013;
pub const BOX_MIN_STROKE: f64 = 2.0;
pub const ACCENT: Rgba8 = Rgba8::rgb(120, 255, 0);

pub const SECONDS_RADIUS: f64 = 0.416;
pub const MINUTES_RADIUS: f64 = 0.305;
pub const HOUR_FONT: f64 = 0.105;
pub const HOUR_TEXT: Rgba8 = Rgba8::rgb(255, 255, 255);

/// Label font family tried before the generic sans-serif fallback.
pub const DEFAULT_FONT_FAMILY: &str = "Arial";
/// Environment variable overriding [`DEFAULT_FONT_FAMILY`].
pub const FONT_FAMILY_ENV: &str = "RINGCLOCK_FONT_FAMILY";
