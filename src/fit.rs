//! Cover-fit transform math.
//!
//! The transform produced here follows "object-cover" semantics: the photo
//! is scaled so it fully fills its hole, cropping whichever dimension
//! overflows. `scale` is normalized so that `1.0` is the minimum covering
//! scale; zoom applied by the user is a multiplier on top of that baseline.
//! The rendered-rect formula below is the single geometric ground truth
//! shared by the gap analyzer and the gesture clamps.

use crate::geom::Hole;
use crate::util::math::{clamp_unit, ensure_aspect};
use crate::util::SlotFitResult;

/// Placement of a photo inside a hole.
///
/// `center_x`/`center_y` are the normalized (0..1) position of the photo's
/// focal point relative to the hole; `0.5` centers the photo. `scale` is a
/// multiplier on the minimum covering scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhotoTransform {
    /// Zoom multiplier; `1.0` exactly covers the hole.
    pub scale: f32,
    /// Normalized horizontal focal point in `[0, 1]`.
    pub center_x: f32,
    /// Normalized vertical focal point in `[0, 1]`.
    pub center_y: f32,
}

impl PhotoTransform {
    /// The centered minimum-cover transform.
    pub fn default_cover() -> Self {
        Self {
            scale: 1.0,
            center_x: 0.5,
            center_y: 0.5,
        }
    }
}

impl Default for PhotoTransform {
    fn default() -> Self {
        Self::default_cover()
    }
}

/// Which hole dimension the photo is fitted to under cover semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitAxis {
    /// Photo width matches the hole width; height overflows.
    ByWidth,
    /// Photo height matches the hole height; width overflows.
    ByHeight,
}

/// Picks the fit axis for a photo inside a hole.
///
/// A photo relatively wider than its hole is fitted by height so its width
/// overflows; otherwise it is fitted by width.
pub fn fit_axis(hole_aspect: f32, photo_aspect: f32) -> SlotFitResult<FitAxis> {
    let hole_aspect = ensure_aspect(hole_aspect)?;
    let photo_aspect = ensure_aspect(photo_aspect)?;
    if photo_aspect > hole_aspect {
        Ok(FitAxis::ByHeight)
    } else {
        Ok(FitAxis::ByWidth)
    }
}

/// Rendered photo size in hole pixels at the minimum covering scale.
pub fn cover_size(hole_w: f32, hole_h: f32, photo_aspect: f32) -> SlotFitResult<(f32, f32)> {
    let hole_aspect = ensure_aspect(hole_w / hole_h)?;
    let photo_aspect = ensure_aspect(photo_aspect)?;
    match fit_axis(hole_aspect, photo_aspect)? {
        FitAxis::ByHeight => Ok((hole_h * photo_aspect, hole_h)),
        FitAxis::ByWidth => Ok((hole_w, hole_w / photo_aspect)),
    }
}

/// Computes the minimum-cover transform for a hole/photo aspect pair.
///
/// The focal point defaults to the center. The returned `scale` is `1.0`
/// in the normalized system where `1.0` already achieves full coverage.
pub fn compute_cover_transform(
    hole_aspect: f32,
    photo_aspect: f32,
) -> SlotFitResult<PhotoTransform> {
    compute_cover_transform_with_focus(hole_aspect, photo_aspect, 0.5, 0.5)
}

/// Minimum-cover transform with a caller-supplied focal point.
///
/// The focal point (e.g. a face-detection hint) is clamped to `[0, 1]` on
/// each axis.
pub fn compute_cover_transform_with_focus(
    hole_aspect: f32,
    photo_aspect: f32,
    focus_x: f32,
    focus_y: f32,
) -> SlotFitResult<PhotoTransform> {
    // The axis choice affects the rendered rect, not the normalized values;
    // validate both inputs through it anyway.
    let _ = fit_axis(hole_aspect, photo_aspect)?;
    let focus_x = if focus_x.is_finite() { focus_x } else { 0.5 };
    let focus_y = if focus_y.is_finite() { focus_y } else { 0.5 };
    Ok(PhotoTransform {
        scale: 1.0,
        center_x: clamp_unit(focus_x),
        center_y: clamp_unit(focus_y),
    })
}

/// Default transform for a photo first assigned to a hole.
pub fn compute_default_transform(hole: &Hole, photo_aspect: f32) -> SlotFitResult<PhotoTransform> {
    compute_cover_transform(hole.aspect_ratio(), photo_aspect)
}

/// Photo edges in hole-local pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderedRect {
    /// Left photo edge relative to the hole's left edge.
    pub left: f32,
    /// Top photo edge relative to the hole's top edge.
    pub top: f32,
    /// Rendered photo width in pixels.
    pub width: f32,
    /// Rendered photo height in pixels.
    pub height: f32,
}

impl RenderedRect {
    /// Right photo edge relative to the hole's left edge.
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Bottom photo edge relative to the hole's top edge.
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Computes the photo's rendered edges for a transform.
///
/// Placement follows the object-position formula: an edge offset is the
/// slack on that axis times the normalized center, so `center == 0` pins
/// the photo to the leading edge and `center == 1` to the trailing edge.
pub fn rendered_rect(
    hole: &Hole,
    transform: &PhotoTransform,
    photo_aspect: f32,
) -> SlotFitResult<RenderedRect> {
    let hole_w = hole.width as f32;
    let hole_h = hole.height as f32;
    let (base_w, base_h) = cover_size(hole_w, hole_h, photo_aspect)?;
    let width = base_w * transform.scale;
    let height = base_h * transform.scale;
    Ok(RenderedRect {
        left: (hole_w - width) * transform.center_x,
        top: (hole_h - height) * transform.center_y,
        width,
        height,
    })
}
