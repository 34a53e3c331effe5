use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;

use crate::{
    foundation::core::Rgba8,
    foundation::error::{RingclockError, RingclockResult},
    style,
};

/// Where label glyphs come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontSource {
    /// Bold face of a named installed family, falling back to any sans-serif.
    System { family: String },
    /// A font file on disk (first face).
    File(PathBuf),
    /// Draw no text at all.
    Disabled,
}

impl Default for FontSource {
    fn default() -> Self {
        let family = std::env::var(style::FONT_FAMILY_ENV)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| style::DEFAULT_FONT_FAMILY.to_string());
        Self::System { family }
    }
}

/// Raw bytes of the face used for every label on the clock.
#[derive(Clone)]
pub struct LabelFont {
    pub bytes: Arc<Vec<u8>>,
    pub index: u32,
    pub family: String,
}

impl std::fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelFont")
            .field("bytes_len", &self.bytes.len())
            .field("index", &self.index)
            .field("family", &self.family)
            .finish()
    }
}

impl LabelFont {
    /// Resolve `source`; `Ok(None)` means text is disabled or no usable face exists.
    pub fn resolve(source: &FontSource) -> RingclockResult<Option<Self>> {
        match source {
            FontSource::Disabled => Ok(None),
            FontSource::File(path) => Self::from_file(path).map(Some),
            FontSource::System { family } => Ok(Self::from_system(family)),
        }
    }

    pub fn from_file(path: &Path) -> RingclockResult<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read font file '{}'", path.display()))?;
        let family = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self {
            bytes: Arc::new(bytes),
            index: 0,
            family,
        })
    }

    pub fn from_system(family: &str) -> Option<Self> {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();

        let families = [
            usvg::fontdb::Family::Name(family),
            usvg::fontdb::Family::SansSerif,
        ];
        let query = usvg::fontdb::Query {
            families: &families,
            weight: usvg::fontdb::Weight::BOLD,
            ..usvg::fontdb::Query::default()
        };

        let id = db.query(&query)?;
        let resolved_family = db
            .face(id)
            .and_then(|face| face.families.first().map(|(name, _)| name.clone()))
            .unwrap_or_else(|| family.to_string());
        let (bytes, index) = db.with_face_data(id, |data, index| (data.to_vec(), index))?;

        tracing::debug!(requested = family, resolved = %resolved_family, "label font resolved");
        Some(Self {
            bytes: Arc::new(bytes),
            index,
            family: resolved_family,
        })
    }
}

/// Measured text placed relative to its own top-left corner.
pub struct ShapedText {
    pub layout: parley::Layout<Rgba8>,
    pub width: f64,
    pub height: f64,
    /// Distance from the top of the layout to the first baseline.
    pub first_baseline: f64,
}

/// Shapes label text with one registered bold face.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Rgba8>,
    family_name: String,
}

impl TextLayoutEngine {
    /// Register `font` with a fresh Parley context.
    pub fn new(font: &LabelFont) -> RingclockResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font.bytes.as_ref().clone()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            RingclockError::render(format!("font '{}' registered no families", font.family))
        })?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| RingclockError::render("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
        })
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Shape a single line of text.
    pub fn shape(&mut self, text: &str, size_px: f32, brush: Rgba8) -> RingclockResult<ShapedText> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(RingclockError::invalid_geometry(format!(
                "text size must be finite and > 0, got {size_px}"
            )));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            parley::style::FontWeight::BOLD,
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<Rgba8> = builder.build(text);
        layout.break_all_lines(None);

        let first_baseline = layout
            .lines()
            .next()
            .map(|line| f64::from(line.metrics().baseline))
            .unwrap_or(0.0);

        Ok(ShapedText {
            width: f64::from(layout.width()),
            height: f64::from(layout.height()),
            first_baseline,
            layout,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
