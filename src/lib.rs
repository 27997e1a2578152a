//! Slotfit fills fixed print layouts with client photos.
//!
//! A template PNG encodes its photo holes as regions painted in a reserved
//! marker color. This crate detects those holes, computes the cover-fit
//! transform that places a photo over a hole with no visible gap, and keeps
//! user-adjusted placements snapped to full coverage through an analytic
//! gap detector and a debounced auto-correction loop. Image decoding is
//! optional via the `image-io` feature; the detector scan parallelizes
//! under the `rayon` feature.

pub mod detect;
pub mod fit;
pub mod gaps;
pub mod geom;
pub mod gesture;
pub mod image;
pub mod snap;
mod slot;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub use detect::detect_template;
#[cfg(feature = "image-io")]
pub use image::io;
pub use detect::{detect, DetectConfig, DEFAULT_MARKER};
pub use fit::{
    compute_cover_transform, compute_cover_transform_with_focus, compute_default_transform,
    cover_size, fit_axis, rendered_rect, FitAxis, PhotoTransform, RenderedRect,
};
pub use gaps::{compute_gaps, EdgeGaps};
pub use geom::{Hole, TemplateGeometry};
pub use gesture::{
    GestureConfig, GestureEvent, InteractionController, InteractionKind, InteractionState,
};
pub use image::{OwnedPixels, PixelView};
pub use slot::Slot;
pub use snap::{
    evaluate_and_correct, AutoSnapController, SnapAction, SnapConfig, SnapOutcome, SnapPhase,
};
pub use util::{SlotFitError, SlotFitResult};
