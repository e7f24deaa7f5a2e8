use crate::foundation::core::FrameIndex;

/// Caption text for the frame at `index`.
///
/// The 1-based frame number is zero-padded to `num_padding` digits; wider numbers keep all their
/// digits. A blank or whitespace-only `prefix` yields the bare number, otherwise the prefix is kept
/// verbatim and joined with a single space.
pub fn caption_text(index: FrameIndex, prefix: &str, num_padding: u32) -> String {
    let width = num_padding as usize;
    let number = format!("{:0width$}", index.number());
    if prefix.trim().is_empty() {
        number
    } else {
        format!("{prefix} {number}")
    }
}
