//! Batches of normalized RGB frames and their conversion to 8-bit rasters.

use image::RgbImage;
use ndarray::{Array3, Array4, ArrayD, ArrayView3, Axis, Ix4, IxDyn};

use crate::foundation::core::Canvas;
use crate::foundation::error::{AnnotateError, AnnotateResult};

/// Channel count every frame must have.
pub const CHANNELS: usize = 3;

/// Ordered batch of same-sized RGB frames.
///
/// Backed by a `(batch, height, width, channels)` tensor of `f32` intensities in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageBatch {
    data: Array4<f32>,
}

impl ImageBatch {
    /// Wrap a rank-4 tensor after checking its channel count and frame size.
    pub fn from_array4(data: Array4<f32>) -> AnnotateResult<Self> {
        let (_, h, w, c) = data.dim();
        if c != CHANNELS {
            return Err(AnnotateError::invalid_input(format!(
                "images must have {CHANNELS} channels (RGB), got {c}"
            )));
        }
        if u32::try_from(h).is_err() || u32::try_from(w).is_err() {
            return Err(AnnotateError::invalid_input(format!(
                "frame size {w}x{h} exceeds u32"
            )));
        }
        Ok(Self { data })
    }

    /// Wrap a tensor of any rank; anything other than rank 4 is rejected.
    pub fn from_array(data: ArrayD<f32>) -> AnnotateResult<Self> {
        let ndim = data.ndim();
        let data = data.into_dimensionality::<Ix4>().map_err(|_| {
            AnnotateError::invalid_input(format!(
                "images must be a 4D tensor (batch, height, width, channels), got rank {ndim}"
            ))
        })?;
        Self::from_array4(data)
    }

    /// Build a batch from a flat row-major buffer and its shape.
    pub fn from_shape_vec(shape: &[usize], data: Vec<f32>) -> AnnotateResult<Self> {
        let len = data.len();
        let arr = ArrayD::from_shape_vec(IxDyn(shape), data).map_err(|_| {
            AnnotateError::invalid_input(format!(
                "buffer of {len} values does not match shape {shape:?}"
            ))
        })?;
        Self::from_array(arr)
    }

    /// Stack 8-bit rasters into a batch. All frames must share dimensions.
    pub fn from_rgb_images(frames: &[RgbImage]) -> AnnotateResult<Self> {
        let Some(first) = frames.first() else {
            return Self::from_array4(Array4::zeros((0, 0, 0, CHANNELS)));
        };
        let (w, h) = first.dimensions();
        let mut data = Array4::<f32>::zeros((frames.len(), h as usize, w as usize, CHANNELS));
        for (i, frame) in frames.iter().enumerate() {
            if frame.dimensions() != (w, h) {
                return Err(AnnotateError::invalid_input(format!(
                    "frame {i} is {}x{}, expected {w}x{h}",
                    frame.width(),
                    frame.height()
                )));
            }
            data.index_axis_mut(Axis(0), i)
                .assign(&rgb8_to_frame(frame)?);
        }
        Self::from_array4(data)
    }

    /// Convert every frame to an 8-bit raster.
    pub fn to_rgb_images(&self) -> AnnotateResult<Vec<RgbImage>> {
        (0..self.len()).map(|i| frame_to_rgb8(self.frame(i))).collect()
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.data.len_of(Axis(0))
    }

    /// Return `true` when the batch has no frames.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Frame height in pixels.
    pub fn height(&self) -> usize {
        self.data.len_of(Axis(1))
    }

    /// Frame width in pixels.
    pub fn width(&self) -> usize {
        self.data.len_of(Axis(2))
    }

    /// Channels per pixel (always [`CHANNELS`]).
    pub fn channels(&self) -> usize {
        self.data.len_of(Axis(3))
    }

    /// Frame dimensions shared by the whole batch.
    pub fn canvas(&self) -> Canvas {
        // Both fit in u32, checked on construction.
        Canvas {
            width: self.width() as u32,
            height: self.height() as u32,
        }
    }

    /// `(height, width, channels)` view of frame `i`.
    ///
    /// Panics if `i >= self.len()`.
    pub fn frame(&self, i: usize) -> ArrayView3<'_, f32> {
        self.data.index_axis(Axis(0), i)
    }

    /// Borrow the underlying tensor.
    pub fn as_array(&self) -> &Array4<f32> {
        &self.data
    }

    /// Take the underlying tensor.
    pub fn into_array(self) -> Array4<f32> {
        self.data
    }
}

fn unit_to_u8(v: f32) -> u8 {
    // Truncates like a float-to-uint8 cast; NaN maps to 0.
    (v.clamp(0.0, 1.0) * 255.0) as u8
}

/// Convert a `(height, width, 3)` frame in `[0, 1]` to an 8-bit raster.
pub fn frame_to_rgb8(frame: ArrayView3<'_, f32>) -> AnnotateResult<RgbImage> {
    let (h, w, c) = frame.dim();
    if c != CHANNELS {
        return Err(AnnotateError::invalid_input(format!(
            "images must have {CHANNELS} channels (RGB), got {c}"
        )));
    }
    let (w32, h32) = match (u32::try_from(w), u32::try_from(h)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(AnnotateError::invalid_input(format!(
                "frame size {w}x{h} exceeds u32"
            )));
        }
    };
    let raw: Vec<u8> = frame.iter().copied().map(unit_to_u8).collect();
    RgbImage::from_raw(w32, h32, raw)
        .ok_or_else(|| AnnotateError::invalid_input("frame buffer does not match its dimensions"))
}

/// Convert an 8-bit raster back to a `(height, width, 3)` frame in `[0, 1]`.
pub fn rgb8_to_frame(img: &RgbImage) -> AnnotateResult<Array3<f32>> {
    let (w, h) = img.dimensions();
    let values: Vec<f32> = img.as_raw().iter().map(|&b| f32::from(b) / 255.0).collect();
    Array3::from_shape_vec((h as usize, w as usize, CHANNELS), values)
        .map_err(|e| AnnotateError::invalid_input(format!("raster to frame: {e}")))
}

#[cfg(test)]
#[path = "../tests/unit/batch.rs"]
mod tests;
