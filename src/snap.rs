//! Auto-snap: gap evaluation and correction after interaction settles.
//!
//! The controller is a small state machine over `Idle -> Evaluating ->
//! Correcting`. It only ever runs once the debounce window since the last
//! user interaction has elapsed, classifies the gap pattern by the number
//! of open sides, and applies a correction it has verified gap-free in the
//! same pass. A correction that fails its own verification falls back to
//! the default transform, so corrections can never compound across ticks.

use crate::fit::{rendered_rect, PhotoTransform};
use crate::gaps::{compute_gaps, EdgeGaps};
use crate::geom::Hole;
use crate::gesture::InteractionState;
use crate::trace::trace_event;
use crate::util::math::clamp_unit;
use crate::util::SlotFitResult;

/// Phase of the snap state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SnapPhase {
    /// Waiting for a gap-relevant change.
    #[default]
    Idle,
    /// Gap pattern is being classified.
    Evaluating,
    /// A correction is being applied and verified.
    Correcting,
}

/// Auto-snap tuning parameters.
#[derive(Clone, Copy, Debug)]
pub struct SnapConfig {
    /// Quiet time after the last interaction before evaluation runs.
    pub debounce_ms: u64,
    /// Gaps at or below this many pixels count as closed.
    pub gap_epsilon: f32,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 400,
            gap_epsilon: 0.05,
        }
    }
}

/// Correction chosen for one evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SnapAction {
    /// Full coverage; nothing to do.
    None,
    /// Photo moved by the gap amounts toward the open edges.
    Nudge {
        /// Horizontal movement in hole pixels (negative is left).
        dx: f32,
        /// Vertical movement in hole pixels (negative is up).
        dy: f32,
    },
    /// Photo was under-scaled on an axis and was scaled back up.
    Rescale {
        /// The restored scale (the minimum covering scale).
        scale: f32,
    },
    /// Gap pattern was degenerate; transform reset to the default.
    Reset,
}

/// Result of one snap tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapOutcome {
    /// What the controller did.
    pub action: SnapAction,
    /// The transform after correction (unchanged for [`SnapAction::None`]).
    pub transform: PhotoTransform,
}

/// Per-slot gap corrector.
///
/// One controller serves one slot and only ever reads or writes that
/// slot's transform.
#[derive(Debug, Default)]
pub struct AutoSnapController {
    config: SnapConfig,
    phase: SnapPhase,
}

impl AutoSnapController {
    /// Creates a controller with default debounce and epsilon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the snap configuration.
    pub fn with_config(mut self, config: SnapConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the current machine phase.
    pub fn phase(&self) -> SnapPhase {
        self.phase
    }

    /// Evaluates the slot's gaps and corrects them if interaction has settled.
    ///
    /// A live gesture or an interaction younger than the debounce window
    /// aborts the cycle without touching the transform. The returned
    /// transform is verified gap-free whenever the action is not
    /// [`SnapAction::None`].
    pub fn tick(
        &mut self,
        hole: &Hole,
        transform: &PhotoTransform,
        photo_aspect: f32,
        interaction: &InteractionState,
        now_ms: u64,
    ) -> SlotFitResult<SnapOutcome> {
        if interaction.is_active() || interaction.within_debounce(now_ms, self.config.debounce_ms)
        {
            self.phase = SnapPhase::Idle;
            return Ok(SnapOutcome {
                action: SnapAction::None,
                transform: *transform,
            });
        }

        self.phase = SnapPhase::Evaluating;
        let eps = self.config.gap_epsilon;
        let gaps = compute_gaps(hole, transform, photo_aspect)?;
        let (mut action, mut corrected) = classify(hole, transform, photo_aspect, &gaps, eps)?;

        if action != SnapAction::None {
            self.phase = SnapPhase::Correcting;
            let check = compute_gaps(hole, &corrected, photo_aspect)?;
            if !check.is_covered(eps) {
                // The incremental correction could not restore coverage
                // (photo smaller than the hole on an axis it was nudged
                // along). Reset instead of chasing the gap.
                corrected = PhotoTransform::default_cover();
                action = SnapAction::Reset;
            }
            trace_event!(
                "snap_corrected",
                sides = gaps.side_count(eps),
                reset = matches!(action, SnapAction::Reset)
            );
        }

        self.phase = SnapPhase::Idle;
        Ok(SnapOutcome {
            action,
            transform: corrected,
        })
    }
}

/// Picks a correction from the gap pattern.
///
/// 0 open sides: nothing. 1 side, or 2 on non-opposite sides: move by
/// exactly the gap amounts. Opposite sides open on one axis: the photo is
/// under-scaled there, so restore the minimum covering scale. 3 or more:
/// degenerate, reset.
fn classify(
    hole: &Hole,
    transform: &PhotoTransform,
    photo_aspect: f32,
    gaps: &EdgeGaps,
    eps: f32,
) -> SlotFitResult<(SnapAction, PhotoTransform)> {
    let count = gaps.side_count(eps);
    if count == 0 {
        return Ok((SnapAction::None, *transform));
    }
    if count >= 3 {
        return Ok((SnapAction::Reset, PhotoTransform::default_cover()));
    }
    if gaps.horizontal_pair(eps) || gaps.vertical_pair(eps) {
        let restored = PhotoTransform {
            scale: 1.0,
            center_x: clamp_unit(transform.center_x),
            center_y: clamp_unit(transform.center_y),
        };
        return Ok((SnapAction::Rescale { scale: 1.0 }, restored));
    }

    let dx = if gaps.left > eps {
        -gaps.left
    } else if gaps.right > eps {
        gaps.right
    } else {
        0.0
    };
    let dy = if gaps.top > eps {
        -gaps.top
    } else if gaps.bottom > eps {
        gaps.bottom
    } else {
        0.0
    };
    let nudged = nudge_by(hole, transform, photo_aspect, dx, dy)?;
    Ok((SnapAction::Nudge { dx, dy }, nudged))
}

/// Moves the photo by an exact pixel delta without clamping.
///
/// Exactness matters: a one-sided gap of d must close with a movement of
/// exactly d. The caller verifies the result and falls back to a reset
/// when the movement cannot restore coverage.
fn nudge_by(
    hole: &Hole,
    transform: &PhotoTransform,
    photo_aspect: f32,
    dx: f32,
    dy: f32,
) -> SlotFitResult<PhotoTransform> {
    let rect = rendered_rect(hole, transform, photo_aspect)?;
    let slack_x = hole.width as f32 - rect.width;
    let slack_y = hole.height as f32 - rect.height;
    let center_x = if slack_x.abs() < f32::EPSILON {
        transform.center_x
    } else {
        (rect.left + dx) / slack_x
    };
    let center_y = if slack_y.abs() < f32::EPSILON {
        transform.center_y
    } else {
        (rect.top + dy) / slack_y
    };
    Ok(PhotoTransform {
        scale: transform.scale,
        center_x,
        center_y,
    })
}

/// One-shot evaluate-and-correct with default snap settings.
///
/// Convenience wrapper for callers that do not hold a controller; returns
/// the corrected transform.
pub fn evaluate_and_correct(
    hole: &Hole,
    transform: &PhotoTransform,
    photo_aspect: f32,
    interaction: &InteractionState,
    now_ms: u64,
) -> SlotFitResult<PhotoTransform> {
    let mut controller = AutoSnapController::new();
    let outcome = controller.tick(hole, transform, photo_aspect, interaction, now_ms)?;
    Ok(outcome.transform)
}
