use crate::config::Anchor;
use crate::foundation::core::Canvas;

/// Measured pixel size of a rendered caption.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextExtent {
    /// Width in pixels.
    pub width: i64,
    /// Height in pixels.
    pub height: i64,
}

/// Coordinate along one axis for a caption of `text_len` inside `image_len`.
///
/// Negative or overflowing results are returned as-is; captions may land partly or fully
/// off-canvas.
pub fn anchor_offset(anchor: Anchor, image_len: i64, text_len: i64, padding: i64) -> i64 {
    match anchor {
        Anchor::Start => padding,
        Anchor::Center => (image_len - text_len).div_euclid(2),
        Anchor::End => image_len - text_len - padding,
    }
}

/// Top-left draw origin for a caption of `extent` on `canvas`.
pub fn place_caption(
    canvas: Canvas,
    extent: TextExtent,
    h: Anchor,
    v: Anchor,
    h_padding: u32,
    v_padding: u32,
) -> (i64, i64) {
    let x = anchor_offset(
        h,
        i64::from(canvas.width),
        extent.width,
        i64::from(h_padding),
    );
    let y = anchor_offset(
        v,
        i64::from(canvas.height),
        extent.height,
        i64::from(v_padding),
    );
    (x, y)
}

#[cfg(test)]
#[path = "../../tests/unit/render/placement.rs"]
mod tests;
