/// Always-available bitmap font.
pub mod builtin_font;
/// Named caption and outline colors.
pub mod color;
/// Font discovery and resolution.
pub mod fonts;
pub(crate) mod text;
