//! Pointer, pinch, and double-tap gestures unified into transform updates.
//!
//! The controller consumes a host-fed event stream and produces clamped
//! [`PhotoTransform`] values: scale never drops below the minimum covering
//! scale and the center never leaves `[0, 1]`, so no gesture can reveal
//! hole space. Malformed events (a move without a press, a pinch opening
//! at zero distance, non-finite coordinates) are guarded no-ops rather
//! than errors so the interaction stays responsive.
//!
//! All timestamps are caller-supplied milliseconds. Gesture state lives on
//! the controller of the slot being manipulated, never in shared globals.

use crate::fit::{rendered_rect, PhotoTransform};
use crate::geom::Hole;
use crate::util::math::clamp_unit;
use crate::util::SlotFitResult;

/// Gesture classification reported to the auto-snap debounce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionKind {
    /// Single-pointer pan.
    Drag,
    /// Two-finger zoom/pan.
    Pinch,
    /// Press-and-release or double tap.
    Tap,
}

/// Transient record of the user's most recent manipulation of a slot.
///
/// Not persisted; reset when a gesture ends. The auto-snap controller reads
/// this to avoid fighting a live gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    /// A drag is past its start threshold and actively panning.
    pub is_dragging: bool,
    /// A two-finger pinch is in progress.
    pub is_pinching: bool,
    /// Timestamp of the last accepted event, if any.
    pub last_interaction_ms: Option<u64>,
    /// Kind of the last accepted event.
    pub kind: Option<InteractionKind>,
}

impl InteractionState {
    /// True while a gesture is actively manipulating the photo.
    pub fn is_active(&self) -> bool {
        self.is_dragging || self.is_pinching
    }

    /// True when the last interaction is younger than `window_ms`.
    pub fn within_debounce(&self, now_ms: u64, window_ms: u64) -> bool {
        match self.last_interaction_ms {
            Some(last) => now_ms.saturating_sub(last) < window_ms,
            None => false,
        }
    }

    fn record(&mut self, kind: InteractionKind, at_ms: u64) {
        self.last_interaction_ms = Some(at_ms);
        self.kind = Some(kind);
    }
}

/// Tunable gesture thresholds.
///
/// The original figures are hand-tuned; they are configuration here rather
/// than constants.
#[derive(Clone, Copy, Debug)]
pub struct GestureConfig {
    /// Minimum pointer travel in pixels before a press becomes a drag.
    pub drag_threshold_px: f32,
    /// Horizontal displacement must exceed this ratio times the vertical
    /// displacement before a drag starts, so vertical page scrolls are
    /// never captured as photo drags.
    pub axis_bias_ratio: f32,
    /// Upper zoom bound as a multiple of the minimum covering scale.
    pub max_scale: f32,
    /// Zoom level a double tap toggles to.
    pub double_tap_scale: f32,
    /// Pinches opening below this finger distance are ignored entirely.
    pub min_pinch_distance_px: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            drag_threshold_px: 8.0,
            axis_bias_ratio: 1.2,
            max_scale: 4.0,
            double_tap_scale: 2.0,
            min_pinch_distance_px: 10.0,
        }
    }
}

/// Input event in hole-local pixel coordinates.
///
/// The host layer translates pointer/touch/mouse input into this stream;
/// pinch events carry the two-finger distance and midpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Primary pointer pressed.
    PointerDown {
        /// Pointer x in hole-local pixels.
        x: f32,
        /// Pointer y in hole-local pixels.
        y: f32,
        /// Event timestamp in milliseconds.
        at_ms: u64,
    },
    /// Primary pointer moved while pressed.
    PointerMove {
        /// Pointer x in hole-local pixels.
        x: f32,
        /// Pointer y in hole-local pixels.
        y: f32,
        /// Event timestamp in milliseconds.
        at_ms: u64,
    },
    /// Primary pointer released.
    PointerUp {
        /// Event timestamp in milliseconds.
        at_ms: u64,
    },
    /// Second finger down; a pinch begins.
    PinchStart {
        /// Distance between the two fingers in pixels.
        distance: f32,
        /// Midpoint x in hole-local pixels.
        mid_x: f32,
        /// Midpoint y in hole-local pixels.
        mid_y: f32,
        /// Event timestamp in milliseconds.
        at_ms: u64,
    },
    /// Fingers moved during a pinch.
    PinchMove {
        /// Distance between the two fingers in pixels.
        distance: f32,
        /// Midpoint x in hole-local pixels.
        mid_x: f32,
        /// Midpoint y in hole-local pixels.
        mid_y: f32,
        /// Event timestamp in milliseconds.
        at_ms: u64,
    },
    /// A finger lifted; the pinch ends.
    PinchEnd {
        /// Event timestamp in milliseconds.
        at_ms: u64,
    },
    /// Double tap at a point.
    DoubleTap {
        /// Tap x in hole-local pixels.
        x: f32,
        /// Tap y in hole-local pixels.
        y: f32,
        /// Event timestamp in milliseconds.
        at_ms: u64,
    },
}

#[derive(Clone, Copy, Debug)]
struct PointerTracking {
    origin_x: f32,
    origin_y: f32,
    last_x: f32,
    last_y: f32,
}

#[derive(Clone, Copy, Debug)]
struct PinchTracking {
    start_distance: f32,
    start_mid_x: f32,
    start_mid_y: f32,
    start: PhotoTransform,
}

/// Per-slot gesture state machine.
///
/// One controller serves one slot; it owns the in-flight pointer/pinch
/// tracking and the [`InteractionState`] the snap controller debounces on.
#[derive(Debug, Default)]
pub struct InteractionController {
    config: GestureConfig,
    state: InteractionState,
    pointer: Option<PointerTracking>,
    pinch: Option<PinchTracking>,
}

impl InteractionController {
    /// Creates a controller with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the gesture configuration.
    pub fn with_config(mut self, config: GestureConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the current interaction state for debounce decisions.
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Applies one gesture event to a transform.
    ///
    /// Returns the (possibly unchanged) clamped transform. Events that do
    /// not make sense in the current gesture state leave the transform
    /// untouched.
    pub fn apply(
        &mut self,
        event: GestureEvent,
        hole: &Hole,
        transform: &PhotoTransform,
        photo_aspect: f32,
    ) -> SlotFitResult<PhotoTransform> {
        match event {
            GestureEvent::PointerDown { x, y, at_ms } => {
                if !(x.is_finite() && y.is_finite()) {
                    return Ok(*transform);
                }
                self.pointer = Some(PointerTracking {
                    origin_x: x,
                    origin_y: y,
                    last_x: x,
                    last_y: y,
                });
                self.state.record(InteractionKind::Tap, at_ms);
                Ok(*transform)
            }
            GestureEvent::PointerMove { x, y, at_ms } => {
                if !(x.is_finite() && y.is_finite()) {
                    return Ok(*transform);
                }
                let mut tracking = match self.pointer {
                    Some(tracking) => tracking,
                    None => return Ok(*transform),
                };
                if self.state.is_pinching {
                    // A pinch owns the pointer until it ends.
                    return Ok(*transform);
                }

                if !self.state.is_dragging {
                    let dx = x - tracking.origin_x;
                    let dy = y - tracking.origin_y;
                    let travel = (dx * dx + dy * dy).sqrt();
                    let biased = dx.abs() >= self.config.axis_bias_ratio * dy.abs();
                    if travel < self.config.drag_threshold_px || !biased {
                        self.pointer = Some(tracking);
                        return Ok(*transform);
                    }
                    self.state.is_dragging = true;
                    tracking.last_x = tracking.origin_x;
                    tracking.last_y = tracking.origin_y;
                }

                let dx = x - tracking.last_x;
                let dy = y - tracking.last_y;
                tracking.last_x = x;
                tracking.last_y = y;
                self.pointer = Some(tracking);
                self.state.record(InteractionKind::Drag, at_ms);
                pan_by(hole, transform, photo_aspect, dx, dy)
            }
            GestureEvent::PointerUp { at_ms } => {
                let kind = if self.state.is_dragging {
                    InteractionKind::Drag
                } else {
                    InteractionKind::Tap
                };
                self.pointer = None;
                self.state.is_dragging = false;
                self.state.record(kind, at_ms);
                Ok(*transform)
            }
            GestureEvent::PinchStart {
                distance,
                mid_x,
                mid_y,
                at_ms,
            } => {
                if !(distance.is_finite() && mid_x.is_finite() && mid_y.is_finite())
                    || distance < self.config.min_pinch_distance_px
                {
                    // Degenerate pinch: ignore the whole gesture.
                    return Ok(*transform);
                }
                self.pinch = Some(PinchTracking {
                    start_distance: distance,
                    start_mid_x: mid_x,
                    start_mid_y: mid_y,
                    start: *transform,
                });
                self.state.is_pinching = true;
                self.state.is_dragging = false;
                self.state.record(InteractionKind::Pinch, at_ms);
                Ok(*transform)
            }
            GestureEvent::PinchMove {
                distance,
                mid_x,
                mid_y,
                at_ms,
            } => {
                if !(distance.is_finite() && mid_x.is_finite() && mid_y.is_finite()) {
                    return Ok(*transform);
                }
                let tracking = match self.pinch {
                    Some(tracking) => tracking,
                    None => return Ok(*transform),
                };
                self.state.record(InteractionKind::Pinch, at_ms);

                let ratio = distance / tracking.start_distance;
                let target_scale =
                    (tracking.start.scale * ratio).clamp(1.0, self.config.max_scale);
                let zoomed = zoom_about(
                    hole,
                    &tracking.start,
                    photo_aspect,
                    tracking.start_mid_x,
                    tracking.start_mid_y,
                    target_scale,
                )?;
                pan_by(
                    hole,
                    &zoomed,
                    photo_aspect,
                    mid_x - tracking.start_mid_x,
                    mid_y - tracking.start_mid_y,
                )
            }
            GestureEvent::PinchEnd { at_ms } => {
                self.pinch = None;
                self.state.is_pinching = false;
                self.state.record(InteractionKind::Pinch, at_ms);
                Ok(*transform)
            }
            GestureEvent::DoubleTap { x, y, at_ms } => {
                if !(x.is_finite() && y.is_finite()) {
                    return Ok(*transform);
                }
                self.state.record(InteractionKind::Tap, at_ms);
                if transform.scale > 1.0 + f32::EPSILON {
                    return Ok(PhotoTransform::default_cover());
                }
                zoom_about(
                    hole,
                    transform,
                    photo_aspect,
                    x,
                    y,
                    self.config.double_tap_scale.clamp(1.0, self.config.max_scale),
                )
            }
        }
    }
}

/// Moves the photo by a pixel delta, clamped so no hole space is revealed.
fn pan_by(
    hole: &Hole,
    transform: &PhotoTransform,
    photo_aspect: f32,
    dx: f32,
    dy: f32,
) -> SlotFitResult<PhotoTransform> {
    let rect = rendered_rect(hole, transform, photo_aspect)?;
    let hole_w = hole.width as f32;
    let hole_h = hole.height as f32;

    let slack_x = hole_w - rect.width;
    let slack_y = hole_h - rect.height;
    let center_x = if slack_x.abs() < f32::EPSILON {
        transform.center_x
    } else {
        clamp_unit((rect.left + dx) / slack_x)
    };
    let center_y = if slack_y.abs() < f32::EPSILON {
        transform.center_y
    } else {
        clamp_unit((rect.top + dy) / slack_y)
    };

    Ok(PhotoTransform {
        scale: transform.scale,
        center_x,
        center_y,
    })
}

/// Rescales the photo keeping the content under `(anchor_x, anchor_y)`
/// fixed, then clamps the center back into bounds.
fn zoom_about(
    hole: &Hole,
    transform: &PhotoTransform,
    photo_aspect: f32,
    anchor_x: f32,
    anchor_y: f32,
    new_scale: f32,
) -> SlotFitResult<PhotoTransform> {
    let rect = rendered_rect(hole, transform, photo_aspect)?;
    let hole_w = hole.width as f32;
    let hole_h = hole.height as f32;

    let ratio = new_scale / transform.scale;
    let new_w = rect.width * ratio;
    let new_h = rect.height * ratio;

    // Keep the photo point under the anchor stationary while the photo
    // grows or shrinks around it.
    let frac_x = if rect.width > 0.0 {
        (anchor_x - rect.left) / rect.width
    } else {
        0.5
    };
    let frac_y = if rect.height > 0.0 {
        (anchor_y - rect.top) / rect.height
    } else {
        0.5
    };
    let new_left = anchor_x - frac_x * new_w;
    let new_top = anchor_y - frac_y * new_h;

    let slack_x = hole_w - new_w;
    let slack_y = hole_h - new_h;
    let center_x = if slack_x.abs() < f32::EPSILON {
        0.5
    } else {
        clamp_unit(new_left / slack_x)
    };
    let center_y = if slack_y.abs() < f32::EPSILON {
        0.5
    } else {
        clamp_unit(new_top / slack_y)
    };

    Ok(PhotoTransform {
        scale: new_scale,
        center_x,
        center_y,
    })
}
