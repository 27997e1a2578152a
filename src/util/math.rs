//! Small numeric helpers shared across fit and gap computations.

use crate::util::{SlotFitError, SlotFitResult};

/// Validates that an aspect ratio is finite and strictly positive.
pub(crate) fn ensure_aspect(value: f32) -> SlotFitResult<f32> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SlotFitError::InvalidAspectRatio { value });
    }
    Ok(value)
}

/// Clamps a normalized coordinate to the [0, 1] range.
pub(crate) fn clamp_unit(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// Aspect ratio of a pixel rectangle.
pub(crate) fn aspect_of(width: u32, height: u32) -> f32 {
    width as f32 / height as f32
}
