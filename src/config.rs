//! Caption styling options.
//!
//! [`RenderConfig`] is an immutable value built once per [`crate::FrameAnnotator::render`] call.
//! It can be constructed in code, or read from JSON where every field is optional:
//!
//! ```json
//! { "font_size": 48, "font_color": "yellow", "h_position": "end",
//!   "prefix": "Shot", "outline": { "enabled": true, "color": "black", "stroke_width": 2 } }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::assets::color::{NamedColor, OutlineColor};
use crate::foundation::core::Rgb8;
use crate::foundation::error::{AnnotateError, AnnotateResult};

/// Accepted `font_size` values.
pub const FONT_SIZE_RANGE: RangeInclusive<u32> = 8..=200;
/// Accepted `h_padding` / `v_padding` values.
pub const PADDING_RANGE: RangeInclusive<u32> = 0..=1000;
/// Accepted `num_padding` values.
pub const NUM_PADDING_RANGE: RangeInclusive<u32> = 1..=5;
/// Accepted `outline.stroke_width` values.
pub const STROKE_WIDTH_RANGE: RangeInclusive<u32> = 0..=5;

/// Relative position along one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    /// Left or top edge, offset by the padding.
    #[default]
    #[serde(alias = "left", alias = "top")]
    Start,
    /// Centered; padding is ignored.
    Center,
    /// Right or bottom edge, offset by the padding.
    #[serde(alias = "right", alias = "bottom")]
    End,
}

impl std::str::FromStr for Anchor {
    type Err = AnnotateError;

    fn from_str(s: &str) -> AnnotateResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" | "left" | "top" => Ok(Self::Start),
            "center" => Ok(Self::Center),
            "end" | "right" | "bottom" => Ok(Self::End),
            other => Err(AnnotateError::config(format!(
                "unknown anchor \"{other}\" (expected start|center|end)"
            ))),
        }
    }
}

/// Optional outline drawn around the caption glyphs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutlineConfig {
    /// Master switch.
    pub enabled: bool,
    /// Stroke color; `none` disables the outline as well.
    pub color: OutlineColor,
    /// Stroke width in pixels; 0 disables the outline.
    pub stroke_width: u32,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            color: OutlineColor::default(),
            stroke_width: 1,
        }
    }
}

impl OutlineConfig {
    /// Outline color and width when an outline should actually be drawn.
    pub fn effective(&self) -> Option<(Rgb8, u32)> {
        if !self.enabled || self.stroke_width == 0 {
            return None;
        }
        self.color.rgb().map(|c| (c, self.stroke_width))
    }
}

/// Full set of caption rendering options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Font size in pixels.
    pub font_size: u32,
    /// Font identifier (family-like name, file stem, or path to a font file).
    pub font: String,
    /// Fill color of the caption.
    pub font_color: NamedColor,
    /// Horizontal anchor.
    #[serde(alias = "h_anchor")]
    pub h_position: Anchor,
    /// Vertical anchor.
    #[serde(alias = "v_anchor")]
    pub v_position: Anchor,
    /// Horizontal padding from the anchored edge.
    pub h_padding: u32,
    /// Vertical padding from the anchored edge.
    pub v_padding: u32,
    /// Minimum digit count of the frame number.
    pub num_padding: u32,
    /// Text shown before the number; blank disables it.
    #[serde(alias = "prefix_text")]
    pub prefix: String,
    /// Outline settings.
    pub outline: OutlineConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_size: 32,
            font: "Arial".to_owned(),
            font_color: NamedColor::White,
            h_position: Anchor::Start,
            v_position: Anchor::Start,
            h_padding: 20,
            v_padding: 20,
            num_padding: 3,
            prefix: "Frame".to_owned(),
            outline: OutlineConfig::default(),
        }
    }
}

impl RenderConfig {
    /// Parse a config from a JSON reader. Missing fields take their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> AnnotateResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| AnnotateError::serde(format!("parse render config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> AnnotateResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            AnnotateError::config(format!("open render config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check every numeric option against its accepted range.
    pub fn validate(&self) -> AnnotateResult<()> {
        check_range("font_size", self.font_size, &FONT_SIZE_RANGE)?;
        check_range("h_padding", self.h_padding, &PADDING_RANGE)?;
        check_range("v_padding", self.v_padding, &PADDING_RANGE)?;
        check_range("num_padding", self.num_padding, &NUM_PADDING_RANGE)?;
        check_range(
            "outline.stroke_width",
            self.outline.stroke_width,
            &STROKE_WIDTH_RANGE,
        )?;
        Ok(())
    }
}

fn check_range(name: &str, v: u32, range: &RangeInclusive<u32>) -> AnnotateResult<()> {
    if range.contains(&v) {
        return Ok(());
    }
    Err(AnnotateError::config(format!(
        "{name} must be in {}..={} (got {v})",
        range.start(),
        range.end()
    )))
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
