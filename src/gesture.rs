//! Gesture model: pinch phases, incoming events, and the zoom session state.
//!
//! `GestureEvent` is what a pinch recognizer reports on every phase change.
//! `ZoomState` is the engine's state machine; the active variants carry the
//! session context needed to compute incremental scale and pan deltas.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use serde::{Deserialize, Serialize};

use crate::geometry::{OverlayGeometry, Point, Rect};

/// Phase of a continuous pinch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
    Failed,
}

impl GesturePhase {
    /// Whether this phase finishes the gesture (ended, cancelled, or failed).
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled | Self::Failed)
    }
}

/// One pinch report from the host recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureEvent {
    pub phase: GesturePhase,
    /// Scale accumulated since the recognizer's last reset.
    pub scale: f64,
    /// Focal point in element-local coordinates.
    pub location: Point,
    /// Number of fingers currently down.
    pub touch_count: usize,
}

impl GestureEvent {
    #[must_use]
    pub fn new(phase: GesturePhase, scale: f64, location: Point, touch_count: usize) -> Self {
        Self { phase, scale, location, touch_count }
    }
}

/// Single-shot token that ties a reset animation to the session it finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResetTicket(pub u64);

/// Context captured when a zoom session is accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomSession {
    /// Source element frame in window space. Fixed for the whole session.
    pub initial_rect: Rect,
    /// Normalized pivot derived from the first touch.
    pub anchor: Point,
    /// Authoritative overlay placement.
    pub overlay: OverlayGeometry,
    /// Element-local touch location at the previous event.
    pub last_touch_location: Point,
    /// Overlay pivot position at the previous event.
    pub last_overlay_center: Point,
    pub last_touch_count: usize,
}

impl ZoomSession {
    /// Current overlay scale relative to the element's original width.
    ///
    /// A zero-width overlay reads as 1.0.
    #[must_use]
    pub fn current_scale(&self) -> f64 {
        if self.overlay.size.width == 0.0 {
            1.0
        } else {
            self.overlay.size.width / self.initial_rect.width()
        }
    }
}

/// Engine state machine.
#[derive(Debug, Clone, Default)]
pub enum ZoomState {
    /// No session; waiting for a pinch to begin.
    #[default]
    Idle,
    /// The user is pinching and panning the overlay.
    Active(ZoomSession),
    /// The gesture finished and the overlay is animating back into place.
    Resetting {
        session: ZoomSession,
        /// Completion must present this ticket.
        ticket: ResetTicket,
    },
}

impl ZoomState {
    /// The session, if one exists in either active or resetting form.
    #[must_use]
    pub fn session(&self) -> Option<&ZoomSession> {
        match self {
            Self::Idle => None,
            Self::Active(session) | Self::Resetting { session, .. } => Some(session),
        }
    }
}
