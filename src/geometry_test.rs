#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn rect_approx_eq(a: Rect, b: Rect) -> bool {
    point_approx_eq(a.origin, b.origin) && approx_eq(a.size.width, b.size.width) && approx_eq(a.size.height, b.size.height)
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_add_and_sub() {
    let a = Point::new(10.0, 20.0);
    let b = Point::new(3.0, -4.0);
    assert_eq!(a.add(b), Point::new(13.0, 16.0));
    assert_eq!(a.sub(b), Point::new(7.0, 24.0));
}

#[test]
fn point_is_finite_rejects_nan_and_infinity() {
    assert!(Point::new(1.0, 2.0).is_finite());
    assert!(!Point::new(f64::NAN, 2.0).is_finite());
    assert!(!Point::new(1.0, f64::INFINITY).is_finite());
}

// --- Size / Rect ---

#[test]
fn size_scaled_multiplies_both_dimensions() {
    assert_eq!(Size::new(100.0, 40.0).scaled(2.5), Size::new(250.0, 100.0));
}

#[test]
fn rect_mid_is_geometric_center() {
    let r = Rect::new(10.0, 20.0, 100.0, 50.0);
    assert!(point_approx_eq(r.mid(), Point::new(60.0, 45.0)));
}

#[test]
fn rect_lerp_endpoints_and_midpoint() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(50.0, -50.0, 300.0, 200.0);
    assert!(rect_approx_eq(a.lerp(&b, 0.0), a));
    assert!(rect_approx_eq(a.lerp(&b, 1.0), b));
    assert!(rect_approx_eq(a.lerp(&b, 0.5), Rect::new(25.0, -25.0, 200.0, 150.0)));
}

#[test]
fn rect_lerp_overshoots_past_one() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(10.0, 0.0, 100.0, 100.0);
    assert!(approx_eq(a.lerp(&b, 1.1).origin.x, 11.0));
}

// --- HostGeometry ---

#[test]
fn host_geometry_frame_in_window_offsets_by_parent() {
    let host = HostGeometry { element_frame: Rect::new(10.0, 20.0, 100.0, 80.0), parent_origin: Point::new(5.0, 100.0) };
    assert!(rect_approx_eq(host.frame_in_window(), Rect::new(15.0, 120.0, 100.0, 80.0)));
}

#[test]
fn host_geometry_local_to_window() {
    let host = HostGeometry { element_frame: Rect::new(10.0, 20.0, 100.0, 80.0), parent_origin: Point::new(5.0, 100.0) };
    assert!(point_approx_eq(host.local_to_window(Point::new(50.0, 40.0)), Point::new(65.0, 160.0)));
}

#[test]
fn host_geometry_in_window_has_zero_parent_origin() {
    let host = HostGeometry::in_window(Rect::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(host.parent_origin, Point::ZERO);
    assert_eq!(host.frame_in_window(), Rect::new(1.0, 2.0, 3.0, 4.0));
}

// --- OverlayGeometry ---

#[test]
fn overlay_default_anchor_is_centered() {
    let g = OverlayGeometry::default();
    assert_eq!(g.anchor, Point::new(0.5, 0.5));
}

#[test]
fn overlay_with_frame_round_trips_frame() {
    let frame = Rect::new(10.0, 20.0, 100.0, 60.0);
    let g = OverlayGeometry::with_frame(frame);
    assert!(rect_approx_eq(g.frame(), frame));
    assert!(point_approx_eq(g.center(), Point::new(60.0, 50.0)));
}

#[test]
fn overlay_set_anchor_shifts_frame_but_not_position() {
    let mut g = OverlayGeometry::with_frame(Rect::new(0.0, 0.0, 100.0, 100.0));
    let before = g.position;
    g.set_anchor(Point::new(0.0, 0.0));
    assert_eq!(g.position, before);
    assert!(rect_approx_eq(g.frame(), Rect::new(50.0, 50.0, 100.0, 100.0)));
}

#[test]
fn overlay_reasserting_frame_after_anchor_moves_position_to_pivot() {
    let frame = Rect::new(100.0, 200.0, 100.0, 100.0);
    let mut g = OverlayGeometry::with_frame(frame);
    g.set_anchor(Point::new(0.25, 0.75));
    g.set_frame(frame);
    assert!(rect_approx_eq(g.frame(), frame));
    assert!(point_approx_eq(g.center(), Point::new(125.0, 275.0)));
}

#[test]
fn overlay_set_center_translates_frame() {
    let mut g = OverlayGeometry::with_frame(Rect::new(0.0, 0.0, 40.0, 40.0));
    g.set_center(Point::new(100.0, 100.0));
    assert!(rect_approx_eq(g.frame(), Rect::new(80.0, 80.0, 40.0, 40.0)));
}

#[test]
fn overlay_resize_keeps_origin_when_set_via_frame() {
    let mut g = OverlayGeometry::with_frame(Rect::new(10.0, 10.0, 50.0, 50.0));
    g.set_anchor(Point::new(0.2, 0.4));
    let origin = g.frame().origin;
    g.set_frame(Rect::from_origin_size(origin, Size::new(150.0, 150.0)));
    assert!(point_approx_eq(g.frame().origin, origin));
    assert!(approx_eq(g.frame().width(), 150.0));
}
