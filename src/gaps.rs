//! Analytic per-side gap computation.
//!
//! A gap is empty hole space between a photo edge and the hole edge on one
//! side. Gaps are derived from the transform parameters through the same
//! rendered-rect math the fit calculator uses, never by sampling rendered
//! pixels, so the result is exact and reproducible in any environment.

use crate::fit::{rendered_rect, PhotoTransform};
use crate::geom::Hole;
use crate::util::SlotFitResult;

/// Signed-empty-margin summary for the four hole edges.
///
/// Each field is a non-negative pixel distance; zero means the photo edge
/// is flush with or overflows that hole edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeGaps {
    /// Empty margin along the hole's left edge.
    pub left: f32,
    /// Empty margin along the hole's right edge.
    pub right: f32,
    /// Empty margin along the hole's top edge.
    pub top: f32,
    /// Empty margin along the hole's bottom edge.
    pub bottom: f32,
}

impl EdgeGaps {
    /// Number of sides with a gap larger than `epsilon`.
    pub fn side_count(&self, epsilon: f32) -> usize {
        [self.left, self.right, self.top, self.bottom]
            .iter()
            .filter(|gap| **gap > epsilon)
            .count()
    }

    /// True when no side has a gap larger than `epsilon`.
    pub fn is_covered(&self, epsilon: f32) -> bool {
        self.side_count(epsilon) == 0
    }

    /// True when both horizontal sides are open: the photo is narrower than
    /// the hole and panning cannot close the deficit.
    pub fn horizontal_pair(&self, epsilon: f32) -> bool {
        self.left > epsilon && self.right > epsilon
    }

    /// True when both vertical sides are open.
    pub fn vertical_pair(&self, epsilon: f32) -> bool {
        self.top > epsilon && self.bottom > epsilon
    }
}

/// Computes the empty margin on each side of the hole for a transform.
pub fn compute_gaps(
    hole: &Hole,
    transform: &PhotoTransform,
    photo_aspect: f32,
) -> SlotFitResult<EdgeGaps> {
    let rect = rendered_rect(hole, transform, photo_aspect)?;
    let hole_w = hole.width as f32;
    let hole_h = hole.height as f32;
    Ok(EdgeGaps {
        left: rect.left.max(0.0),
        right: (hole_w - rect.right()).max(0.0),
        top: rect.top.max(0.0),
        bottom: (hole_h - rect.bottom()).max(0.0),
    })
}
