//! Pinch recognition from raw touch points.
//!
//! Hosts that already have a platform pinch recognizer can feed its reports
//! straight into the engine. Hosts that only see individual touches (browsers,
//! custom input stacks) report the element-local points of every finger on
//! each touch change and let [`PinchRecognizer`] turn them into phased
//! [`GestureEvent`]s with a resettable scale accumulator.

#[cfg(test)]
#[path = "recognizer_test.rs"]
mod recognizer_test;

use crate::consts::{PINCH_BEGIN_THRESHOLD, PINCH_MIN_SPREAD};
use crate::geometry::Point;
use crate::gesture::{GestureEvent, GesturePhase};

/// Turns touch point sets into pinch phases.
///
/// The pinch begins once two or more fingers are down and their spread has
/// changed by [`PINCH_BEGIN_THRESHOLD`]. After that, every touch change yields
/// a `Changed` event until all fingers lift. A change in finger count only
/// re-baselines the spread, so adding or lifting a finger never registers as
/// a scale jump.
#[derive(Debug, Clone)]
pub struct PinchRecognizer {
    began: bool,
    scale: f64,
    last_spread: Option<f64>,
    touch_count: usize,
    last_location: Point,
}

impl Default for PinchRecognizer {
    fn default() -> Self {
        Self { began: false, scale: 1.0, last_spread: None, touch_count: 0, last_location: Point::ZERO }
    }
}

impl PinchRecognizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a pinch has begun and not yet finished.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.began
    }

    /// Scale accumulated since the last [`reset_scale`](Self::reset_scale).
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Restart accumulation so the next report is relative to now.
    pub fn reset_scale(&mut self) {
        self.scale = 1.0;
    }

    /// Report the element-local positions of every finger currently down.
    pub fn touches(&mut self, points: &[Point]) -> Option<GestureEvent> {
        if points.is_empty() {
            let event = self.finish(GesturePhase::Ended);
            self.clear();
            return event;
        }

        let centroid = centroid(points);
        let spread = spread(points, centroid);
        self.accumulate(points.len(), spread);
        self.last_location = centroid;

        if self.began {
            return Some(self.event(GesturePhase::Changed));
        }
        if points.len() < 2 {
            self.scale = 1.0;
            return None;
        }
        if (self.scale - 1.0).abs() < PINCH_BEGIN_THRESHOLD {
            return None;
        }
        self.began = true;
        Some(self.event(GesturePhase::Began))
    }

    /// The host interrupted the touch sequence (system gesture, focus loss).
    pub fn cancel(&mut self) -> Option<GestureEvent> {
        let event = self.finish(GesturePhase::Cancelled);
        self.clear();
        event
    }

    /// The host lost track of the touches and cannot report their end.
    pub fn fail(&mut self) -> Option<GestureEvent> {
        let event = self.finish(GesturePhase::Failed);
        self.clear();
        event
    }

    fn accumulate(&mut self, count: usize, spread: Option<f64>) {
        if count == self.touch_count {
            if let (Some(previous), Some(current)) = (self.last_spread, spread) {
                self.scale *= current / previous;
            }
        }
        self.last_spread = spread;
        self.touch_count = count;
    }

    fn finish(&self, phase: GesturePhase) -> Option<GestureEvent> {
        self.began.then(|| GestureEvent::new(phase, self.scale, self.last_location, 0))
    }

    fn event(&self, phase: GesturePhase) -> GestureEvent {
        GestureEvent::new(phase, self.scale, self.last_location, self.touch_count)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

#[allow(clippy::cast_precision_loss)]
fn centroid(points: &[Point]) -> Point {
    let n = points.len() as f64;
    let sum = points.iter().fold(Point::ZERO, |acc, p| acc.add(*p));
    Point::new(sum.x / n, sum.y / n)
}

/// Mean distance of the points from their centroid, or `None` when too small to divide by.
#[allow(clippy::cast_precision_loss)]
fn spread(points: &[Point], centroid: Point) -> Option<f64> {
    if points.len() < 2 {
        return None;
    }
    let total: f64 = points
        .iter()
        .map(|p| {
            let d = p.sub(centroid);
            d.x.hypot(d.y)
        })
        .sum();
    let mean = total / points.len() as f64;
    (mean.is_finite() && mean >= PINCH_MIN_SPREAD).then_some(mean)
}
