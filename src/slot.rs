//! Slot model: the binding of one photo to one hole.

use crate::fit::{compute_default_transform, PhotoTransform};
use crate::geom::Hole;
use crate::util::SlotFitResult;

/// One photo assigned to one hole, with its current transform.
///
/// Persistence of the transform belongs to the surrounding application;
/// this type only keeps the binding consistent when photos are assigned,
/// replaced, or reset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slot {
    /// Slot identity in the surrounding application.
    pub id: u64,
    /// Template this slot belongs to.
    pub template_id: u64,
    /// Index of the hole within the template geometry.
    pub hole_index: usize,
    /// Photo currently assigned to the hole.
    pub photo_id: u64,
    /// Current placement of the photo inside the hole.
    pub transform: PhotoTransform,
}

impl Slot {
    /// Binds a photo to a hole with the default cover transform.
    pub fn assign(
        id: u64,
        template_id: u64,
        hole: &Hole,
        photo_id: u64,
        photo_aspect: f32,
    ) -> SlotFitResult<Self> {
        Ok(Self {
            id,
            template_id,
            hole_index: hole.id,
            photo_id,
            transform: compute_default_transform(hole, photo_aspect)?,
        })
    }

    /// Swaps in a different photo, discarding the previous transform.
    pub fn replace_photo(
        &mut self,
        hole: &Hole,
        photo_id: u64,
        photo_aspect: f32,
    ) -> SlotFitResult<()> {
        self.photo_id = photo_id;
        self.transform = compute_default_transform(hole, photo_aspect)?;
        Ok(())
    }

    /// Restores the default cover transform for the current photo.
    pub fn reset_transform(&mut self, hole: &Hole, photo_aspect: f32) -> SlotFitResult<()> {
        self.transform = compute_default_transform(hole, photo_aspect)?;
        Ok(())
    }
}
