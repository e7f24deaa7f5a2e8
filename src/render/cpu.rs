use image::RgbImage;

use crate::assets::fonts::OutlineFont;
use crate::foundation::core::{Canvas, Rgb8};
use crate::foundation::error::{AnnotateError, AnnotateResult};

/// Outline stroke around the caption glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Outline {
    pub(crate) color: Rgb8,
    /// Pixels the outline extends beyond the glyph edge.
    pub(crate) width: u32,
}

/// CPU rasterizer for shaped captions.
///
/// Glyphs are drawn into a transparent premultiplied layer the size of the frame, then composited
/// source-over onto the RGB frame. The render context and layer are reused across frames of the
/// same size.
#[derive(Default)]
pub(crate) struct CaptionRasterizer {
    ctx: Option<vello_cpu::RenderContext>,
    layer: Option<vello_cpu::Pixmap>,
}

impl CaptionRasterizer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut vello_cpu::RenderContext, &mut vello_cpu::Pixmap) -> R,
    ) -> R {
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        let mut layer = match self.layer.take() {
            Some(p) if p.width() == width && p.height() == height => p,
            _ => vello_cpu::Pixmap::new(width, height),
        };
        ctx.reset();
        let out = f(&mut ctx, &mut layer);
        self.ctx = Some(ctx);
        self.layer = Some(layer);
        out
    }

    /// Draw `layout` with its top-left corner at `origin`.
    pub(crate) fn draw(
        &mut self,
        frame: &mut RgbImage,
        layout: &parley::Layout<Rgb8>,
        font: &OutlineFont,
        origin: (i64, i64),
        outline: Option<Outline>,
    ) -> AnnotateResult<()> {
        let canvas = Canvas {
            width: frame.width(),
            height: frame.height(),
        };
        if canvas.is_empty() {
            return Ok(());
        }
        let (w, h) = surface_size(canvas)?;

        let glyph_runs = collect_glyph_runs(layout);
        self.with_ctx_mut(w, h, |ctx, layer| {
            ctx.set_transform(vello_cpu::kurbo::Affine::translate((
                origin.0 as f64,
                origin.1 as f64,
            )));

            if let Some(o) = outline {
                ctx.set_stroke(vello_cpu::kurbo::Stroke::new(f64::from(o.width) * 2.0));
                ctx.set_paint(color_to_cpu(o.color));
                for run in &glyph_runs {
                    ctx.glyph_run(&font.data)
                        .font_size(run.font_size)
                        .stroke_glyphs(run.glyphs.iter().copied());
                }
            }

            for run in &glyph_runs {
                ctx.set_paint(color_to_cpu(run.brush));
                ctx.glyph_run(&font.data)
                    .font_size(run.font_size)
                    .fill_glyphs(run.glyphs.iter().copied());
            }

            ctx.flush();
            ctx.render_to_pixmap(layer);
            let dst: &mut [u8] = frame;
            composite_over_rgb8(dst, layer.data_as_u8_slice());
        });
        Ok(())
    }
}

struct GlyphRun {
    font_size: f32,
    brush: Rgb8,
    glyphs: Vec<vello_cpu::Glyph>,
}

fn collect_glyph_runs(layout: &parley::Layout<Rgb8>) -> Vec<GlyphRun> {
    let mut runs = Vec::new();
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let glyphs = run
                .positioned_glyphs()
                .map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                })
                .collect();
            runs.push(GlyphRun {
                font_size: run.run().font_size(),
                brush: run.style().brush,
                glyphs,
            });
        }
    }
    runs
}

/// Surface dimensions for `canvas`, or `InvalidInput` when either side exceeds `u16`.
pub(crate) fn surface_size(canvas: Canvas) -> AnnotateResult<(u16, u16)> {
    let w: u16 = canvas.width.try_into().map_err(|_| {
        AnnotateError::invalid_input(format!("frame width {} exceeds 65535", canvas.width))
    })?;
    let h: u16 = canvas.height.try_into().map_err(|_| {
        AnnotateError::invalid_input(format!("frame height {} exceeds 65535", canvas.height))
    })?;
    Ok((w, h))
}

fn color_to_cpu(c: Rgb8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, 255)
}

/// Composite a premultiplied RGBA8 layer over an opaque RGB8 frame of the same size.
fn composite_over_rgb8(dst_rgb: &mut [u8], src_premul: &[u8]) {
    for (dst, src) in dst_rgb.chunks_exact_mut(3).zip(src_premul.chunks_exact(4)) {
        let a = src[3];
        if a == 0 {
            continue;
        }
        let inv = 255 - u16::from(a);
        for i in 0..3 {
            dst[i] = add_sat_u8(src[i], mul_div255_u8(u16::from(dst[i]), inv));
        }
    }
}

fn mul_div255_u8(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
