//! Decoding template bytes via the `image` crate.
//!
//! Available when the `image-io` feature is enabled. The surrounding
//! application fetches template bytes from storage; these helpers turn them
//! into RGBA buffers the detector can scan.

use crate::image::OwnedPixels;
use crate::util::{SlotFitError, SlotFitResult};
use std::path::Path;

/// Decodes encoded image bytes (PNG or JPEG) into an RGBA buffer.
pub fn decode_rgba(bytes: &[u8]) -> SlotFitResult<OwnedPixels> {
    let decoded = image::load_from_memory(bytes).map_err(|err| SlotFitError::DecodeFailed {
        reason: err.to_string(),
    })?;
    owned_from_dynamic_image(&decoded)
}

/// Creates an owned RGBA image from a dynamic image.
pub fn owned_from_dynamic_image(img: &image::DynamicImage) -> SlotFitResult<OwnedPixels> {
    let rgba = img.to_rgba8();
    let width = rgba.width() as usize;
    let height = rgba.height() as usize;
    OwnedPixels::new(rgba.into_raw(), width, height)
}

/// Loads an image from disk and converts it to an owned RGBA buffer.
pub fn load_rgba_image<P: AsRef<Path>>(path: P) -> SlotFitResult<OwnedPixels> {
    let img = image::open(path).map_err(|err| SlotFitError::DecodeFailed {
        reason: err.to_string(),
    })?;
    owned_from_dynamic_image(&img)
}
