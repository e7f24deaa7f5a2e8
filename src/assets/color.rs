use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgb8;
use crate::foundation::error::{AnnotateError, AnnotateResult};

/// One of the eight caption colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NamedColor {
    /// `(255, 255, 255)`
    #[default]
    White,
    /// `(0, 0, 0)`
    Black,
    /// `(255, 0, 0)`
    Red,
    /// `(0, 255, 0)`
    Green,
    /// `(0, 0, 255)`
    Blue,
    /// `(255, 255, 0)`
    Yellow,
    /// `(0, 255, 255)`
    Cyan,
    /// `(255, 0, 255)`
    Magenta,
}

impl NamedColor {
    /// Every color, in the order hosts present them.
    pub const ALL: [NamedColor; 8] = [
        Self::White,
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Cyan,
        Self::Magenta,
    ];

    /// Fixed RGB triple for this color.
    pub fn rgb(self) -> Rgb8 {
        match self {
            Self::White => Rgb8::new(255, 255, 255),
            Self::Black => Rgb8::new(0, 0, 0),
            Self::Red => Rgb8::new(255, 0, 0),
            Self::Green => Rgb8::new(0, 255, 0),
            Self::Blue => Rgb8::new(0, 0, 255),
            Self::Yellow => Rgb8::new(255, 255, 0),
            Self::Cyan => Rgb8::new(0, 255, 255),
            Self::Magenta => Rgb8::new(255, 0, 255),
        }
    }

    /// Lowercase name used in configs and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Cyan => "cyan",
            Self::Magenta => "magenta",
        }
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedColor {
    type Err = AnnotateError;

    fn from_str(s: &str) -> AnnotateResult<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                AnnotateError::config(format!(
                    "unknown color \"{wanted}\" (expected one of: {})",
                    Self::ALL.map(Self::name).join(", ")
                ))
            })
    }
}

/// Outline color: a [`NamedColor`] or `none`, which disables the outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutlineColor {
    /// No outline is drawn.
    None,
    /// Outline drawn in this color.
    Named(NamedColor),
}

impl Default for OutlineColor {
    fn default() -> Self {
        Self::Named(NamedColor::Black)
    }
}

impl OutlineColor {
    /// RGB triple, or `None` for [`OutlineColor::None`].
    pub fn rgb(self) -> Option<Rgb8> {
        match self {
            Self::None => None,
            Self::Named(c) => Some(c.rgb()),
        }
    }
}

impl fmt::Display for OutlineColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Named(c) => c.fmt(f),
        }
    }
}

impl FromStr for OutlineColor {
    type Err = AnnotateError;

    fn from_str(s: &str) -> AnnotateResult<Self> {
        if s.trim().eq_ignore_ascii_case("none") {
            return Ok(Self::None);
        }
        NamedColor::from_str(s).map(Self::Named)
    }
}

macro_rules! serde_via_str {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

serde_via_str!(NamedColor);
serde_via_str!(OutlineColor);

#[cfg(test)]
#[path = "../../tests/unit/assets/color.rs"]
mod tests;
