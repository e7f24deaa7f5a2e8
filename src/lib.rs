//! Burn zero-padded frame counters into batches of RGB frames.
//!
//! - Wrap frames in an [`ImageBatch`] (a `(batch, height, width, 3)` tensor in `[0, 1]`)
//! - Describe the caption with a [`RenderConfig`]
//! - Call [`FrameAnnotator::render`] to get an annotated copy of the batch
//!
//! Fonts are looked up through a [`FontDiscovery`] service; when nothing usable is found the
//! built-in bitmap font is used instead, so rendering only fails on malformed input.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Font discovery, resolution and caption colors.
pub mod assets;
/// Image batches and raster conversion.
pub mod batch;
/// Caption styling options.
pub mod config;
mod foundation;
/// Caption text, placement and rasterization.
pub mod render;

pub use crate::assets::builtin_font::BuiltinFont;
pub use crate::assets::color::{NamedColor, OutlineColor};
pub use crate::assets::fonts::{
    FALLBACK_FONT_NAMES, FontDirs, FontDiscovery, OutlineFont, ResolvedFont, SystemFonts,
    font_file_name,
};
pub use crate::batch::{ImageBatch, frame_to_rgb8, rgb8_to_frame};
pub use crate::config::{Anchor, OutlineConfig, RenderConfig};
pub use crate::foundation::core::{Canvas, FrameIndex, Rgb8};
pub use crate::foundation::error::{AnnotateError, AnnotateResult};
pub use crate::render::annotator::{FrameAnnotator, render};
pub use crate::render::caption::caption_text;
pub use crate::render::placement::{TextExtent, anchor_offset, place_caption};
