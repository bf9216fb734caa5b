//! Shared numeric constants for the zoom engine.

// ── Configuration ───────────────────────────────────────────────

/// Default lower bound for the overlay scale.
pub const DEFAULT_MIN_ZOOM_SCALE: f64 = 1.0;

/// Default upper bound for the overlay scale.
pub const DEFAULT_MAX_ZOOM_SCALE: f64 = 3.0;

/// Default duration of the reset animation, in seconds.
pub const DEFAULT_RESET_ANIMATION_DURATION: f64 = 0.3;

/// Smallest value `min_zoom_scale` may be set to.
pub const MIN_ZOOM_SCALE_FLOOR: f64 = 0.1;

/// Smallest value `max_zoom_scale` may be set to.
pub const MAX_ZOOM_SCALE_FLOOR: f64 = 1.0;

/// Smallest value `reset_animation_duration` may be set to.
pub const RESET_DURATION_FLOOR: f64 = 0.0;

// ── Geometry ────────────────────────────────────────────────────

/// Lower bound on the denominator when normalizing a touch into an anchor point.
pub const ANCHOR_MIN_EXTENT: f64 = 1.0;

// ── Reset curve ─────────────────────────────────────────────────

/// Damping ratio of the spring used for the reset animation.
pub const RESET_SPRING_DAMPING: f64 = 0.8;

/// Initial velocity of the reset spring, relative to the full travel distance per second.
pub const RESET_SPRING_VELOCITY: f64 = 0.5;

// ── Recognizer ──────────────────────────────────────────────────

/// Relative change in finger spread required before a pinch begins.
pub const PINCH_BEGIN_THRESHOLD: f64 = 0.02;

/// Finger spread (in points) below which spread ratios are too noisy to use.
pub const PINCH_MIN_SPREAD: f64 = 1.0;
