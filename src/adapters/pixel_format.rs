//! Conversion from the packed RGB frames the renderer produces to the RGBA
//! layout window framebuffers expect.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelFormatError {
    #[error("rgb source of {0} bytes is not whole pixels")]
    PartialPixel(usize),

    #[error("rgba target holds {target} bytes but {pixels} pixels need {expected}")]
    TargetSizeMismatch {
        pixels: usize,
        expected: usize,
        target: usize,
    },
}

/// Copies RGB pixels into an RGBA target with opaque alpha and returns the
/// number of pixels copied. Nothing is written on error.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<usize, PixelFormatError> {
    if src.len() % 3 != 0 {
        return Err(PixelFormatError::PartialPixel(src.len()));
    }

    let pixels = src.len() / 3;
    if dst.len() != pixels * 4 {
        return Err(PixelFormatError::TargetSizeMismatch {
            pixels,
            expected: pixels * 4,
            target: dst.len(),
        });
    }

    for (rgb, rgba) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        rgba[..3].copy_from_slice(rgb);
        rgba[3] = u8::MAX;
    }

    Ok(pixels)
}
