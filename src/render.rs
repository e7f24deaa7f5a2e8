/// Batch annotation entry points.
pub mod annotator;
/// Caption text formatting.
pub mod caption;
pub(crate) mod cpu;
/// Anchor and padding math.
pub mod placement;
