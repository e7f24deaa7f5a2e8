use image::RgbImage;
use ndarray::{Array4, Axis};
use tracing::{debug, info, warn};

use crate::assets::builtin_font::BuiltinFont;
use crate::assets::fonts::{FontDiscovery, ResolvedFont, SystemFonts, resolve_font};
use crate::assets::text::{TextLayoutEngine, layout_extent};
use crate::batch::{ImageBatch, frame_to_rgb8, rgb8_to_frame};
use crate::config::RenderConfig;
use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::{AnnotateError, AnnotateResult};
use crate::render::caption::caption_text;
use crate::render::cpu::{CaptionRasterizer, Outline, surface_size};
use crate::render::placement::place_caption;

/// Burns a frame counter into every frame of a batch.
///
/// The annotator itself holds only the font discovery service; every [`FrameAnnotator::render`]
/// call resolves its font and builds its text state from scratch, so repeated calls with the same
/// inputs produce identical output.
#[derive(Clone, Debug)]
pub struct FrameAnnotator<D = SystemFonts> {
    discovery: D,
}

impl Default for FrameAnnotator<SystemFonts> {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameAnnotator<SystemFonts> {
    /// Annotator backed by the system fonts.
    pub fn new() -> Self {
        Self::with_discovery(SystemFonts::new())
    }
}

impl<D: FontDiscovery> FrameAnnotator<D> {
    /// Annotator backed by a custom font discovery service.
    pub fn with_discovery(discovery: D) -> Self {
        Self { discovery }
    }

    /// The font discovery service in use.
    pub fn discovery(&self) -> &D {
        &self.discovery
    }

    /// Font identifiers accepted by [`RenderConfig::font`].
    pub fn font_names(&self) -> Vec<String> {
        self.discovery.font_names()
    }

    /// Return a copy of `images` with a caption drawn onto each frame.
    ///
    /// Frame `i` is captioned with the number `i + 1`. Fails only for invalid configs or
    /// malformed frames; nothing is returned in that case. Missing fonts, frames too large for
    /// outline text and unsupported outlines degrade with a warning instead.
    #[tracing::instrument(skip_all, fields(frames = images.len()))]
    pub fn render(&self, images: &ImageBatch, config: &RenderConfig) -> AnnotateResult<ImageBatch> {
        config.validate()?;

        let canvas = images.canvas();
        let mut engine = TextLayoutEngine::new();
        let font = resolve_font(&mut engine, &self.discovery, &config.font, config.font_size);
        let font = fit_font_to_canvas(font, canvas, config.font_size);
        info!(font = %font.describe(), "annotating batch");

        let mut painter = CaptionPainter {
            config,
            canvas,
            engine,
            font,
            raster: CaptionRasterizer::new(),
            outline_warned: false,
        };

        let mut out = Array4::<f32>::zeros(images.as_array().raw_dim());
        for i in 0..images.len() {
            let mut frame = frame_to_rgb8(images.frame(i))?;
            let text = caption_text(FrameIndex(i as u64), &config.prefix, config.num_padding);
            painter.paint(&mut frame, &text)?;
            out.index_axis_mut(Axis(0), i)
                .assign(&rgb8_to_frame(&frame)?);
        }
        ImageBatch::from_array4(out)
    }
}

/// Annotate `images` using the system fonts.
pub fn render(images: &ImageBatch, config: &RenderConfig) -> AnnotateResult<ImageBatch> {
    FrameAnnotator::new().render(images, config)
}

/// Swap an outline font for the built-in one when the frames are too large to rasterize.
fn fit_font_to_canvas(font: ResolvedFont, canvas: Canvas, font_size: u32) -> ResolvedFont {
    match font {
        ResolvedFont::Outline(f) if surface_size(canvas).is_err() => {
            warn!(
                width = canvas.width,
                height = canvas.height,
                font = %f.family(),
                "Frames too large for outline text, using default font"
            );
            ResolvedFont::Builtin(BuiltinFont::for_size(font_size))
        }
        other => other,
    }
}

struct CaptionPainter<'a> {
    config: &'a RenderConfig,
    canvas: Canvas,
    engine: TextLayoutEngine,
    font: ResolvedFont,
    raster: CaptionRasterizer,
    outline_warned: bool,
}

impl CaptionPainter<'_> {
    fn paint(&mut self, frame: &mut RgbImage, text: &str) -> AnnotateResult<()> {
        let outline = self
            .config
            .outline
            .effective()
            .map(|(color, width)| Outline { color, width });

        match self.draw(frame, text, outline) {
            Err(AnnotateError::OutlineUnsupported(reason)) => {
                if !self.outline_warned {
                    warn!(%reason, "Text outline not supported; rendering without outline");
                    self.outline_warned = true;
                }
                self.draw(frame, text, None)
            }
            other => other,
        }
    }

    fn draw(
        &mut self,
        frame: &mut RgbImage,
        text: &str,
        outline: Option<Outline>,
    ) -> AnnotateResult<()> {
        let cfg = self.config;
        let fill = cfg.font_color.rgb();
        match &self.font {
            ResolvedFont::Outline(font) => {
                let layout = self
                    .engine
                    .layout_line(text, &font.family, font.size_px, fill)?;
                let extent = layout_extent(&layout);
                let origin = place_caption(
                    self.canvas,
                    extent,
                    cfg.h_position,
                    cfg.v_position,
                    cfg.h_padding,
                    cfg.v_padding,
                );
                debug!(text, ?extent, ?origin, "placing caption");
                self.raster.draw(frame, &layout, font, origin, outline)
            }
            ResolvedFont::Builtin(font) => {
                if outline.is_some() {
                    return Err(AnnotateError::outline_unsupported(
                        "the built-in bitmap font cannot be stroked",
                    ));
                }
                let extent = font.measure(text);
                let (x, y) = place_caption(
                    self.canvas,
                    extent,
                    cfg.h_position,
                    cfg.v_position,
                    cfg.h_padding,
                    cfg.v_padding,
                );
                debug!(text, ?extent, origin = ?(x, y), "placing caption");
                font.draw(frame, text, x, y, fill);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/annotator.rs"]
mod tests;
