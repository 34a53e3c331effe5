use crate::{
    compile::plan::{DrawOp, TextAnchor},
    foundation::core::{BezPath, Canvas, Point, Rect, Rgba8},
    foundation::error::{RingclockError, RingclockResult},
    render::{
        FrameRGBA, RenderBackend,
        text::{FontSource, LabelFont, TextLayoutEngine},
    },
};

/// Settings for [`CpuBackend`].
#[derive(Clone, Debug, Default)]
pub struct RenderSettings {
    pub font: FontSource,
}

/// Software rasterizer backed by `vello_cpu`.
pub struct CpuBackend {
    surface: Option<CpuSurface>,
    ctx: Option<vello_cpu::RenderContext>,
    text: Option<CpuText>,
}

struct CpuSurface {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

struct CpuText {
    engine: TextLayoutEngine,
    font: vello_cpu::peniko::FontData,
}

impl CpuBackend {
    /// Build a backend, loading the label font up front.
    ///
    /// A missing system font is not an error: the face renders without text.
    pub fn new(settings: RenderSettings) -> RingclockResult<Self> {
        let text = match LabelFont::resolve(&settings.font)? {
            Some(font) => {
                let engine = TextLayoutEngine::new(&font)?;
                let data = vello_cpu::peniko::FontData::new(
                    vello_cpu::peniko::Blob::from(font.bytes.as_ref().clone()),
                    font.index,
                );
                tracing::info!(family = %font.family, "cpu backend text enabled");
                Some(CpuText { engine, font: data })
            }
            None => {
                if settings.font != FontSource::Disabled {
                    tracing::warn!(source = ?settings.font, "no label font found, text disabled");
                }
                None
            }
        };

        Ok(Self {
            surface: None,
            ctx: None,
            text,
        })
    }

    pub fn has_text(&self) -> bool {
        self.text.is_some()
    }
}

impl RenderBackend for CpuBackend {
    fn begin_frame(&mut self, canvas: Canvas, clear_to_transparent: bool) -> RingclockResult<()> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| RingclockError::invalid_geometry("surface width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| RingclockError::invalid_geometry("surface height exceeds u16"))?;

        match self.surface.as_mut() {
            Some(s) if s.width == width && s.height == height => {
                if clear_to_transparent {
                    clear_pixmap(&mut s.pixmap, Rgba8::transparent().to_premul());
                }
            }
            _ => {
                tracing::debug!(width, height, "allocating cpu surface");
                self.surface = Some(CpuSurface {
                    width,
                    height,
                    pixmap: vello_cpu::Pixmap::new(width, height),
                });
            }
        }

        self.ctx = Some(vello_cpu::RenderContext::new(width, height));
        Ok(())
    }

    fn draw_op(&mut self, op: &DrawOp) -> RingclockResult<()> {
        let ctx = self
            .ctx
            .as_mut()
            .ok_or_else(|| RingclockError::render("draw_op called before begin_frame"))?;
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        match op {
            DrawOp::Line {
                from,
                to,
                width,
                color,
            } => {
                let mut path = BezPath::new();
                path.move_to(*from);
                path.line_to(*to);
                // square caps: ticks reach past both endpoints by half the stroke
                let stroke =
                    vello_cpu::kurbo::Stroke::new(*width).with_caps(vello_cpu::kurbo::Cap::Square);
                ctx.set_stroke(stroke);
                ctx.set_paint(color_to_cpu(*color));
                ctx.stroke_path(&bezpath_to_cpu(&path));
                Ok(())
            }
            DrawOp::RoundedRectStroke {
                rect,
                corner_radius,
                width,
                color,
            } => {
                ctx.set_stroke(vello_cpu::kurbo::Stroke::new(*width));
                ctx.set_paint(color_to_cpu(*color));
                ctx.stroke_path(&bezpath_to_cpu(&rounded_rect_path(*rect, *corner_radius)));
                Ok(())
            }
            DrawOp::Text {
                text,
                anchor,
                size_px,
                color,
            } => {
                let Some(cpu_text) = self.text.as_mut() else {
                    return Ok(());
                };
                let shaped = cpu_text.engine.shape(text, *size_px as f32, *color)?;
                let origin = match *anchor {
                    TextAnchor::Baseline(p) => Point::new(p.x, p.y - shaped.first_baseline),
                    TextAnchor::Center(p) => {
                        Point::new(p.x - shaped.width / 2.0, p.y - shaped.height / 2.0)
                    }
                };
                ctx.set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));

                for line in shaped.layout.lines() {
                    for item in line.items() {
                        let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                            continue;
                        };

                        let brush = run.style().brush;
                        ctx.set_paint(color_to_cpu(brush));

                        let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                            id: g.id,
                            x: g.x,
                            y: g.y,
                        });
                        ctx.glyph_run(&cpu_text.font)
                            .font_size(run.run().font_size())
                            .fill_glyphs(glyphs);
                    }
                }
                Ok(())
            }
        }
    }

    fn readback_rgba8(&mut self) -> RingclockResult<FrameRGBA> {
        let mut ctx = self
            .ctx
            .take()
            .ok_or_else(|| RingclockError::render("readback called before begin_frame"))?;
        let surface = self
            .surface
            .as_mut()
            .ok_or_else(|| RingclockError::render("cpu surface missing"))?;

        ctx.flush();
        ctx.render_to_pixmap(&mut surface.pixmap);

        Ok(FrameRGBA {
            width: u32::from(surface.width),
            height: u32::from(surface.height),
            data: surface.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    let data = pixmap.data_as_u8_slice_mut();
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn rounded_rect_path(rect: Rect, corner_radius: f64) -> BezPath {
    use kurbo::Shape as _;

    let radius = corner_radius.min(rect.width() / 2.0).min(rect.height() / 2.0).max(0.0);
    kurbo::RoundedRect::from_rect(rect, radius).to_path(0.1)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
