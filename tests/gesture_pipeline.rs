//! Gesture handling: drag thresholds, pinch clamps, double-tap toggling.

use rand::Rng;
use slotfit::{
    compute_gaps, GestureConfig, GestureEvent, Hole, InteractionController, InteractionKind,
    PhotoTransform,
};

const GAP_EPS: f32 = 1e-3;

fn square_hole() -> Hole {
    Hole {
        id: 0,
        x: 0,
        y: 0,
        width: 100,
        height: 100,
    }
}

fn down(x: f32, y: f32, at_ms: u64) -> GestureEvent {
    GestureEvent::PointerDown { x, y, at_ms }
}

fn mv(x: f32, y: f32, at_ms: u64) -> GestureEvent {
    GestureEvent::PointerMove { x, y, at_ms }
}

#[test]
fn small_movement_does_not_start_a_drag() {
    let hole = square_hole();
    let mut ctl = InteractionController::new();
    let start = PhotoTransform::default_cover();

    let t = ctl.apply(down(50.0, 50.0, 0), &hole, &start, 1.5).unwrap();
    let t = ctl.apply(mv(53.0, 50.0, 16), &hole, &t, 1.5).unwrap();
    assert_eq!(t, start);
    assert!(!ctl.state().is_dragging);
}

#[test]
fn vertically_biased_movement_is_left_to_the_scroll() {
    let hole = square_hole();
    let mut ctl = InteractionController::new();
    let start = PhotoTransform::default_cover();

    let t = ctl.apply(down(50.0, 50.0, 0), &hole, &start, 1.5).unwrap();
    // 30px of travel, but mostly vertical: a page scroll, not a drag.
    let t = ctl.apply(mv(55.0, 80.0, 16), &hole, &t, 1.5).unwrap();
    assert_eq!(t, start);
    assert!(!ctl.state().is_dragging);
}

#[test]
fn horizontal_drag_pans_the_photo() {
    // Photo 150x100 in the 100x100 hole: 50px of horizontal slack.
    let hole = square_hole();
    let mut ctl = InteractionController::new();
    let start = PhotoTransform::default_cover();

    let t = ctl.apply(down(50.0, 50.0, 0), &hole, &start, 1.5).unwrap();
    let t = ctl.apply(mv(70.0, 50.0, 16), &hole, &t, 1.5).unwrap();
    assert!(ctl.state().is_dragging);
    assert_eq!(ctl.state().kind, Some(InteractionKind::Drag));
    // Dragging right by 20px moves the photo 20px right: center 0.5 -> 0.1.
    assert!((t.center_x - 0.1).abs() < 1e-4);
    assert_eq!(t.center_y, 0.5);

    let gaps = compute_gaps(&hole, &t, 1.5).unwrap();
    assert!(gaps.is_covered(GAP_EPS));

    let t = ctl
        .apply(GestureEvent::PointerUp { at_ms: 32 }, &hole, &t, 1.5)
        .unwrap();
    assert!(!ctl.state().is_dragging);
    assert!(compute_gaps(&hole, &t, 1.5).unwrap().is_covered(GAP_EPS));
}

#[test]
fn drag_is_clamped_at_the_hole_edge() {
    let hole = square_hole();
    let mut ctl = InteractionController::new();
    let start = PhotoTransform::default_cover();

    let t = ctl.apply(down(50.0, 50.0, 0), &hole, &start, 1.5).unwrap();
    // Way past the available slack.
    let t = ctl.apply(mv(500.0, 50.0, 16), &hole, &t, 1.5).unwrap();
    assert_eq!(t.center_x, 0.0);
    let gaps = compute_gaps(&hole, &t, 1.5).unwrap();
    assert!(gaps.is_covered(GAP_EPS));
}

#[test]
fn move_without_press_is_ignored() {
    let hole = square_hole();
    let mut ctl = InteractionController::new();
    let start = PhotoTransform::default_cover();
    let t = ctl.apply(mv(70.0, 50.0, 16), &hole, &start, 1.5).unwrap();
    assert_eq!(t, start);
    assert_eq!(ctl.state().last_interaction_ms, None);
}

#[test]
fn pinch_scales_by_finger_distance_ratio() {
    let hole = square_hole();
    let mut ctl = InteractionController::new();
    let start = PhotoTransform::default_cover();

    let t = ctl
        .apply(
            GestureEvent::PinchStart {
                distance: 100.0,
                mid_x: 50.0,
                mid_y: 50.0,
                at_ms: 0,
            },
            &hole,
            &start,
            1.5,
        )
        .unwrap();
    assert!(ctl.state().is_pinching);
    let t = ctl
        .apply(
            GestureEvent::PinchMove {
                distance: 200.0,
                mid_x: 50.0,
                mid_y: 50.0,
                at_ms: 16,
            },
            &hole,
            &t,
            1.5,
        )
        .unwrap();
    assert!((t.scale - 2.0).abs() < 1e-4);
    assert!(compute_gaps(&hole, &t, 1.5).unwrap().is_covered(GAP_EPS));

    let t = ctl
        .apply(GestureEvent::PinchEnd { at_ms: 32 }, &hole, &t, 1.5)
        .unwrap();
    assert!(!ctl.state().is_pinching);
    assert_eq!(ctl.state().kind, Some(InteractionKind::Pinch));
    let _ = t;
}

#[test]
fn pinch_scale_is_clamped_to_the_configured_range() {
    let hole = square_hole();
    let mut ctl = InteractionController::new();
    let start = PhotoTransform::default_cover();

    let t = ctl
        .apply(
            GestureEvent::PinchStart {
                distance: 100.0,
                mid_x: 50.0,
                mid_y: 50.0,
                at_ms: 0,
            },
            &hole,
            &start,
            1.5,
        )
        .unwrap();

    // Spreading far beyond max_scale.
    let t = ctl
        .apply(
            GestureEvent::PinchMove {
                distance: 1000.0,
                mid_x: 50.0,
                mid_y: 50.0,
                at_ms: 16,
            },
            &hole,
            &t,
            1.5,
        )
        .unwrap();
    assert_eq!(t.scale, GestureConfig::default().max_scale);

    // Contracting below the covering scale stops at 1.0.
    let t = ctl
        .apply(
            GestureEvent::PinchMove {
                distance: 10.0,
                mid_x: 50.0,
                mid_y: 50.0,
                at_ms: 32,
            },
            &hole,
            &t,
            1.5,
        )
        .unwrap();
    assert_eq!(t.scale, 1.0);
    assert!(compute_gaps(&hole, &t, 1.5).unwrap().is_covered(GAP_EPS));
}

#[test]
fn degenerate_pinch_is_a_guarded_no_op() {
    let hole = square_hole();
    let mut ctl = InteractionController::new();
    let start = PhotoTransform::default_cover();

    // Fingers too close together: the gesture never starts.
    let t = ctl
        .apply(
            GestureEvent::PinchStart {
                distance: 2.0,
                mid_x: 50.0,
                mid_y: 50.0,
                at_ms: 0,
            },
            &hole,
            &start,
            1.5,
        )
        .unwrap();
    assert!(!ctl.state().is_pinching);
    let t = ctl
        .apply(
            GestureEvent::PinchMove {
                distance: 200.0,
                mid_x: 50.0,
                mid_y: 50.0,
                at_ms: 16,
            },
            &hole,
            &t,
            1.5,
        )
        .unwrap();
    assert_eq!(t, start);
}

#[test]
fn double_tap_toggles_between_cover_and_zoom() {
    let hole = square_hole();
    let mut ctl = InteractionController::new();
    let start = PhotoTransform::default_cover();

    let zoomed = ctl
        .apply(
            GestureEvent::DoubleTap {
                x: 25.0,
                y: 50.0,
                at_ms: 0,
            },
            &hole,
            &start,
            1.5,
        )
        .unwrap();
    assert_eq!(zoomed.scale, GestureConfig::default().double_tap_scale);
    assert_eq!(ctl.state().kind, Some(InteractionKind::Tap));
    assert!(compute_gaps(&hole, &zoomed, 1.5).unwrap().is_covered(GAP_EPS));

    let back = ctl
        .apply(
            GestureEvent::DoubleTap {
                x: 25.0,
                y: 50.0,
                at_ms: 400,
            },
            &hole,
            &zoomed,
            1.5,
        )
        .unwrap();
    assert_eq!(back, PhotoTransform::default_cover());
}

#[test]
fn malformed_coordinates_never_corrupt_the_transform() {
    let hole = square_hole();
    let mut ctl = InteractionController::new();
    let start = PhotoTransform {
        scale: 1.5,
        center_x: 0.3,
        center_y: 0.7,
    };

    let t = ctl
        .apply(down(f32::NAN, 50.0, 0), &hole, &start, 1.5)
        .unwrap();
    let t = ctl
        .apply(
            GestureEvent::PinchStart {
                distance: f32::INFINITY,
                mid_x: 50.0,
                mid_y: 50.0,
                at_ms: 16,
            },
            &hole,
            &t,
            1.5,
        )
        .unwrap();
    assert_eq!(t, start);
}

#[test]
fn random_gesture_storm_never_breaks_cover_or_scale_bound() {
    let hole = square_hole();
    let mut rng = rand::rng();

    for _ in 0..50 {
        let photo_aspect = rng.random_range(0.4f32..3.0);
        let mut ctl = InteractionController::new();
        let mut transform = PhotoTransform::default_cover();
        let mut at_ms = 0u64;

        for _ in 0..40 {
            at_ms += 16;
            let event = match rng.random_range(0..7u8) {
                0 => down(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0), at_ms),
                1 | 2 => mv(
                    rng.random_range(-50.0..150.0),
                    rng.random_range(-50.0..150.0),
                    at_ms,
                ),
                3 => GestureEvent::PointerUp { at_ms },
                4 => GestureEvent::PinchStart {
                    distance: rng.random_range(0.0..300.0),
                    mid_x: rng.random_range(0.0..100.0),
                    mid_y: rng.random_range(0.0..100.0),
                    at_ms,
                },
                5 => GestureEvent::PinchMove {
                    distance: rng.random_range(0.0..300.0),
                    mid_x: rng.random_range(0.0..100.0),
                    mid_y: rng.random_range(0.0..100.0),
                    at_ms,
                },
                _ => GestureEvent::PinchEnd { at_ms },
            };
            transform = ctl.apply(event, &hole, &transform, photo_aspect).unwrap();

            assert!(transform.scale >= 1.0, "scale fell below cover: {transform:?}");
            let gaps = compute_gaps(&hole, &transform, photo_aspect).unwrap();
            assert!(gaps.is_covered(GAP_EPS), "gap appeared: {gaps:?} {transform:?}");
        }
    }
}
