use crate::foundation::core::Rgb8;
use crate::foundation::error::{AnnotateError, AnnotateResult};
use crate::render::placement::TextExtent;

/// Stateful helper for shaping single-line captions with Parley.
///
/// Fonts are registered once from raw bytes; layouts then refer to them by family name.
pub(crate) struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Rgb8>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    pub(crate) fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Register font bytes and return the family name of the first face.
    ///
    /// Bytes that do not parse as a font yield [`AnnotateError::FontUnavailable`].
    pub(crate) fn register_font(&mut self, font_bytes: &[u8]) -> AnnotateResult<String> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            AnnotateError::font_unavailable("no font families registered from font bytes")
        })?;

        self.font_ctx
            .collection
            .family_name(family_id)
            .map(str::to_owned)
            .ok_or_else(|| AnnotateError::font_unavailable("registered font family has no name"))
    }

    /// Shape `text` on a single unbroken line.
    pub(crate) fn layout_line(
        &mut self,
        text: &str,
        family: &str,
        size_px: f32,
        brush: Rgb8,
    ) -> AnnotateResult<parley::Layout<Rgb8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(AnnotateError::config("font size must be finite and > 0"));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family.to_owned())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<Rgb8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

/// Pixel extent of a shaped caption: advance width by line-box height, rounded up.
pub(crate) fn layout_extent(layout: &parley::Layout<Rgb8>) -> TextExtent {
    TextExtent {
        width: layout.width().ceil() as i64,
        height: layout.height().ceil() as i64,
    }
}
