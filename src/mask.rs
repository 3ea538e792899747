// Binary mask buffer: a borrowed, length-checked view over caller-owned bytes,
// plus the checks and repairs that keep every byte at 0 or 255.

use image::GrayImage;
use tracing::{debug, warn};

use crate::error::{BrushError, Result};
use crate::types::{MASK_SET, MASK_UNSET};

/// Row-major `width * height` mask owned by the caller and mutated in place.
#[derive(Debug)]
pub struct MaskBuffer<'a> {
    data: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> MaskBuffer<'a> {
    /// Wrap `data`; fails if its length is not `width * height`.
    pub fn new(data: &'a mut [u8], width: usize, height: usize) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .ok_or(BrushError::DimensionMismatch { expected: usize::MAX, actual: data.len() })?;
        if data.len() != expected {
            return Err(BrushError::DimensionMismatch { expected, actual: data.len() });
        }
        Ok(Self { data, width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Value at (x, y), or `None` outside the mask.
    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        self.index(x, y).map(|i| self.data[i])
    }

    /// Byte index for (x, y) when it lies inside `[0, width) x [0, height)`.
    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Write `value` at a known-valid index; true when the byte changed.
    #[inline]
    pub(crate) fn write(&mut self, idx: usize, value: u8) -> bool {
        // skip equal writes so callers learn whether anything really changed
        let px = &mut self.data[idx];
        if *px == value {
            return false;
        }
        *px = value;
        true
    }

    /// Unset every pixel.
    pub fn clear(&mut self) {
        self.data.fill(MASK_UNSET);
    }

    /// Set every pixel.
    pub fn fill(&mut self) {
        self.data.fill(MASK_SET);
    }

    pub fn is_binary(&self) -> bool {
        validate(&*self.data)
    }

    /// Threshold the whole view back to binary; see [`enforce`].
    pub fn enforce(&mut self) -> usize {
        enforce(&mut *self.data)
    }

    pub fn as_slice(&self) -> &[u8] {
        &*self.data
    }
}

/// True iff every byte is exactly 0 or 255.
pub fn validate(mask: &[u8]) -> bool {
    mask.iter().all(|&v| v == MASK_UNSET || v == MASK_SET)
}

/// Threshold at 127 in place: `> 127` becomes 255, everything else 0.
/// Returns how many bytes were rewritten.
pub fn enforce(mask: &mut [u8]) -> usize {
    let mut repaired = 0;
    for v in mask.iter_mut() {
        let bin = if *v > 127 { MASK_SET } else { MASK_UNSET };
        if *v != bin {
            *v = bin;
            repaired += 1;
        }
    }
    if repaired > 0 {
        warn!(repaired, "mask contained non-binary values, thresholded");
    }
    repaired
}

/// Import a grayscale image as a binary mask (thresholded like [`enforce`]).
pub fn mask_from_luma(img: &GrayImage) -> Vec<u8> {
    let mut data = img.as_raw().clone();
    let repaired = enforce(&mut data);
    debug!(
        width = img.width(),
        height = img.height(),
        repaired,
        "imported luma image as mask"
    );
    data
}

/// Copy a mask into a grayscale image for display or hand-off to image tooling.
pub fn mask_to_luma(width: u32, height: u32, mask: &[u8]) -> Result<GrayImage> {
    let expected = width as usize * height as usize;
    if mask.len() != expected {
        return Err(BrushError::DimensionMismatch { expected, actual: mask.len() });
    }
    GrayImage::from_raw(width, height, mask.to_vec())
        .ok_or(BrushError::DimensionMismatch { expected, actual: mask.len() })
}
