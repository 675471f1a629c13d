use crate::{
    AnnotationOverlay, StrokeStyle,
    overlay::Geometry,
    session::OverlayDirective,
    tests::support::{GEOMETRY, SurfaceOp, SurfaceProbe, TraceSurface, point},
};

fn active_overlay() -> (AnnotationOverlay, SurfaceProbe) {
    let (surface, probe) = TraceSurface::new();
    let mut overlay = AnnotationOverlay::new(Box::new(surface), StrokeStyle::default());
    overlay.set_geometry(GEOMETRY);
    overlay.set_active(true);
    (overlay, probe)
}

/// WHAT: Inactive overlay ignores pointer input
/// WHY: Ink is only accepted while a clip is under review
#[test]
fn given_inactive_overlay_when_drawing_then_nothing_recorded() {
    // Given: Sized but inactive overlay
    let (surface, probe) = TraceSurface::new();
    let mut overlay = AnnotationOverlay::new(Box::new(surface), StrokeStyle::default());
    overlay.set_geometry(GEOMETRY);

    // When: A full stroke gesture
    overlay.on_pointer_down(point(10.0, 10.0));
    overlay.on_pointer_move(point(20.0, 20.0));
    overlay.on_pointer_up();

    // Then: No stroke, nothing painted
    assert!(overlay.strokes().is_empty());
    assert_eq!(probe.strokes_painted(), 0);
}

/// WHAT: Down/move/move/up produces one sealed stroke and two painted segments
/// WHY: Each move renders a segment from the previous point
#[test]
fn given_active_overlay_when_drawing_gesture_then_one_stroke_and_segments() {
    // Given: Active overlay
    let (mut overlay, probe) = active_overlay();

    // When: Drawing
    overlay.on_pointer_down(point(10.0, 10.0));
    overlay.on_pointer_move(point(20.0, 15.0));
    overlay.on_pointer_move(point(30.0, 25.0));
    overlay.on_pointer_up();

    // Then: One stroke of three points, two segments in order
    assert_eq!(overlay.strokes().len(), 1);
    let stroke = overlay.strokes().iter().next().unwrap();
    assert_eq!(
        stroke.points(),
        &[point(10.0, 10.0), point(20.0, 15.0), point(30.0, 25.0)]
    );
    assert_eq!(stroke.segment_count(), 2);
    assert_eq!(probe.strokes_painted(), 2);
    let ops = probe.ops();
    let tail = &ops[ops.len() - 4..];
    assert_eq!(
        tail,
        &[
            SurfaceOp::BeginPath,
            SurfaceOp::MoveTo(point(20.0, 15.0)),
            SurfaceOp::LineTo(point(30.0, 25.0)),
            SurfaceOp::Stroke,
        ]
    );
    assert!(!overlay.is_drawing());
}

/// WHAT: Move without a preceding down is ignored
/// WHY: Hovering must not draw
#[test]
fn given_not_drawing_when_pointer_moves_then_no_segment() {
    // Given: Active overlay, pen up
    let (mut overlay, probe) = active_overlay();

    // When: Moving
    overlay.on_pointer_move(point(50.0, 50.0));
    overlay.on_pointer_up();

    // Then: Nothing
    assert!(overlay.strokes().is_empty());
    assert_eq!(probe.strokes_painted(), 0);
}

/// WHAT: Geometry change clears all strokes
/// WHY: Stroke coordinates are only valid for the geometry they were drawn in
#[test]
fn given_strokes_when_geometry_changes_then_log_cleared_and_surface_resized() {
    // Given: Two strokes
    let (mut overlay, probe) = active_overlay();
    for x in [10.0, 100.0] {
        overlay.on_pointer_down(point(x, 10.0));
        overlay.on_pointer_move(point(x + 5.0, 20.0));
        overlay.on_pointer_up();
    }
    assert_eq!(overlay.strokes().len(), 2);

    // When: Resizing
    let smaller = Geometry::new(320, 240);
    overlay.set_geometry(smaller);

    // Then: No strokes, surface resized, geometry updated
    assert!(overlay.strokes().is_empty());
    assert_eq!(overlay.geometry(), Some(smaller));
    assert_eq!(probe.ops().last(), Some(&SurfaceOp::Resize(smaller)));
}

/// WHAT: Points outside the surface are clamped into [0,w) x [0,h)
/// WHY: Ink must only land inside the video frame
#[test]
fn given_small_geometry_when_drawing_past_edges_then_points_clamped() {
    // Given: Active overlay resized to 100x50
    let (mut overlay, probe) = active_overlay();
    let geometry = Geometry::new(100, 50);
    overlay.set_geometry(geometry);

    // When: Drawing from outside to outside
    overlay.on_pointer_down(point(-15.0, -3.0));
    overlay.on_pointer_move(point(640.0, 480.0));
    overlay.on_pointer_up();

    // Then: All points and segment ends lie inside the geometry
    let stroke = overlay.strokes().iter().next().unwrap();
    assert!(stroke.points().iter().all(|p| geometry.contains(*p)));
    assert!(probe.line_targets().iter().all(|p| geometry.contains(*p)));
    assert_eq!(stroke.points()[0], point(0.0, 0.0));
    assert_eq!(stroke.points()[1], point(99.0, 49.0));
}

/// WHAT: Deactivating mid-stroke seals it and blocks extension
/// WHY: Disabled overlays keep ink but accept no more
#[test]
fn given_stroke_in_progress_when_deactivated_then_sealed_and_not_extendable() {
    // Given: A stroke in progress
    let (mut overlay, probe) = active_overlay();
    overlay.on_pointer_down(point(10.0, 10.0));
    overlay.on_pointer_move(point(20.0, 20.0));

    // When: Deactivating then moving
    overlay.set_active(false);
    overlay.on_pointer_move(point(30.0, 30.0));
    overlay.on_pointer_up();

    // Then: The stroke is sealed with two points and stays logged
    assert!(!overlay.is_active());
    assert_eq!(overlay.strokes().len(), 1);
    assert_eq!(overlay.strokes().iter().next().unwrap().points().len(), 2);
    assert_eq!(probe.strokes_painted(), 1);
}

/// WHAT: A second pointer-down without up starts a new stroke
/// WHY: A lost pointer-up must not join two gestures
#[test]
fn given_missed_pointer_up_when_pointer_down_again_then_previous_sealed() {
    // Given: A stroke whose pointer-up never arrived
    let (mut overlay, _probe) = active_overlay();
    overlay.on_pointer_down(point(1.0, 1.0));
    overlay.on_pointer_move(point(2.0, 2.0));

    // When: Pointer goes down elsewhere
    overlay.on_pointer_down(point(50.0, 50.0));
    overlay.on_pointer_up();

    // Then: Two separate strokes
    assert_eq!(overlay.strokes().len(), 2);
}

/// WHAT: Directives map onto overlay operations
/// WHY: The controller drives the overlay only through directives
#[test]
fn given_directives_when_applied_then_overlay_follows() {
    // Given: Fresh overlay
    let (surface, probe) = TraceSurface::new();
    let mut overlay = AnnotationOverlay::new(Box::new(surface), StrokeStyle::default());

    // When/Then: Resize, activate, draw, clear, deactivate
    overlay.apply(OverlayDirective::Resize(GEOMETRY));
    assert_eq!(overlay.geometry(), Some(GEOMETRY));
    overlay.apply(OverlayDirective::Activate);
    assert!(overlay.is_active());
    overlay.on_pointer_down(point(5.0, 5.0));
    overlay.on_pointer_up();
    overlay.apply(OverlayDirective::ClearStrokes);
    assert!(overlay.strokes().is_empty());
    assert_eq!(probe.ops().last(), Some(&SurfaceOp::Clear));
    overlay.apply(OverlayDirective::Deactivate);
    assert!(!overlay.is_active());
}
