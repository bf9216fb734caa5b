//! Plain geometry types and the pivot-aware overlay model.
//!
//! Overlay placement follows the layer model most retained-view toolkits use:
//! a visual has a `position` (where its pivot sits in window space), a `size`,
//! and a normalized `anchor` that says where inside the visual the pivot is.
//! Changing the anchor moves the frame while the position stays put, which is
//! why the engine reasserts the frame right after setting a pivot.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A point in element-local or window space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn sub(self, other: Self) -> Self {
        Self { x: self.x - other.x, y: self.y - other.y }
    }

    /// Component-wise sum `self + other`.
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self { x: self.x + other.x, y: self.y + other.y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self { width: 0.0, height: 0.0 };

    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both dimensions multiplied by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self { width: self.width * factor, height: self.height * factor }
    }
}

/// An axis-aligned rectangle: origin is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Self = Self { origin: Point::ZERO, size: Size::ZERO };

    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { origin: Point::new(x, y), size: Size::new(width, height) }
    }

    #[must_use]
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.size.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Geometric center of the rectangle.
    #[must_use]
    pub fn mid(&self) -> Point {
        Point::new(self.origin.x + self.size.width * 0.5, self.origin.y + self.size.height * 0.5)
    }

    /// Linear interpolation between `self` (t = 0) and `to` (t = 1). `t` is not clamped.
    #[must_use]
    pub fn lerp(&self, to: &Rect, t: f64) -> Rect {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Rect::new(
            mix(self.origin.x, to.origin.x),
            mix(self.origin.y, to.origin.y),
            mix(self.size.width, to.size.width),
            mix(self.size.height, to.size.height),
        )
    }
}

/// Geometry the host reports for the source element at event time.
///
/// `element_frame` is expressed in the coordinate space of the element's
/// parent; `parent_origin` is that parent's origin in window space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HostGeometry {
    pub element_frame: Rect,
    pub parent_origin: Point,
}

impl HostGeometry {
    /// Geometry for an element whose parent is the window itself.
    #[must_use]
    pub fn in_window(element_frame: Rect) -> Self {
        Self { element_frame, parent_origin: Point::ZERO }
    }

    /// The element's frame converted into window space.
    #[must_use]
    pub fn frame_in_window(&self) -> Rect {
        Rect::from_origin_size(self.element_frame.origin.add(self.parent_origin), self.element_frame.size)
    }

    /// Convert an element-local point into window space.
    #[must_use]
    pub fn local_to_window(&self, local: Point) -> Point {
        self.frame_in_window().origin.add(local)
    }
}

/// Placement of the overlay visual: pivot position, size, and normalized pivot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayGeometry {
    /// Window-space location of the pivot. Toolkits usually call this the center.
    pub position: Point,
    pub size: Size,
    /// Pivot inside the visual, `(0, 0)` top-left to `(1, 1)` bottom-right.
    pub anchor: Point,
}

impl Default for OverlayGeometry {
    fn default() -> Self {
        Self { position: Point::ZERO, size: Size::ZERO, anchor: Point::new(0.5, 0.5) }
    }
}

impl OverlayGeometry {
    /// Overlay occupying `frame` with a centered pivot.
    #[must_use]
    pub fn with_frame(frame: Rect) -> Self {
        let mut geometry = Self::default();
        geometry.set_frame(frame);
        geometry
    }

    #[must_use]
    pub fn frame(&self) -> Rect {
        Rect::from_origin_size(
            Point::new(
                self.position.x - self.anchor.x * self.size.width,
                self.position.y - self.anchor.y * self.size.height,
            ),
            self.size,
        )
    }

    /// Place the visual so it covers `frame` exactly, keeping the current pivot.
    pub fn set_frame(&mut self, frame: Rect) {
        self.size = frame.size;
        self.position = Point::new(
            frame.origin.x + self.anchor.x * frame.size.width,
            frame.origin.y + self.anchor.y * frame.size.height,
        );
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.position
    }

    pub fn set_center(&mut self, center: Point) {
        self.position = center;
    }

    /// Move the pivot. The position is unchanged, so the frame shifts.
    pub fn set_anchor(&mut self, anchor: Point) {
        self.anchor = anchor;
    }
}
