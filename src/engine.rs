use tracing::{debug, trace, warn};

use crate::animation::ResetCurve;
use crate::config::{ConfigError, ZoomConfig};
use crate::consts::ANCHOR_MIN_EXTENT;
use crate::geometry::{HostGeometry, OverlayGeometry, Point, Rect};
use crate::gesture::{GestureEvent, GesturePhase, ResetTicket, ZoomSession, ZoomState};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from gesture handlers for the host to carry out, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Create the overlay visual from the source element's content and place it.
    CreateOverlay { geometry: OverlayGeometry },
    /// Move or resize the existing overlay.
    PlaceOverlay { geometry: OverlayGeometry },
    /// Remove the overlay from the window.
    RemoveOverlay,
    /// Set the source element's opacity (0.0 hidden, 1.0 visible).
    SetSourceAlpha(f64),
    /// Enable or disable touch handling on the source element.
    SetSourceInteraction(bool),
    /// Reset the recognizer's scale accumulator to 1.0.
    ResetGestureScale,
    /// Animate the overlay frame from `from` to `to`, then report `ticket` back
    /// through [`ZoomEngine::complete_reset`].
    AnimateReset { ticket: ResetTicket, from: Rect, to: Rect, duration: f64, curve: ResetCurve },
    /// Notify the delegate that zooming began.
    ZoomBegan,
    /// Notify the delegate that zooming ended and the element is restored.
    ZoomEnded,
}

/// Pinch-to-zoom state machine and geometry calculator for one element.
///
/// Pure: it never touches a UI toolkit. Every handler returns the [`Action`]s
/// the host must apply. Out-of-order or duplicate phases and degenerate scale
/// values are absorbed as no-ops.
#[derive(Debug, Default)]
pub struct ZoomEngine {
    config: ZoomConfig,
    state: ZoomState,
    next_ticket: u64,
}

impl ZoomEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: ZoomConfig) -> Self {
        let mut engine = Self::new();
        engine.configure(config);
        engine
    }

    // --- Configuration ---

    /// Apply all three settings, floor-clamping each independently.
    ///
    /// Takes effect for the next clamp; an in-flight session keeps its
    /// `initial_rect`. Re-applying the current values changes nothing, and a
    /// non-finite field keeps its current value.
    pub fn configure(&mut self, config: ZoomConfig) {
        let mut next = self.config;
        next.set_min_zoom_scale(config.min_zoom_scale);
        next.set_max_zoom_scale(config.max_zoom_scale);
        next.set_reset_animation_duration(config.reset_animation_duration);
        if next == self.config {
            return;
        }
        if next.is_inverted() {
            warn!(min = next.min_zoom_scale, max = next.max_zoom_scale, "zoom bounds inverted; max bound wins");
        }
        self.config = next;
    }

    /// Like [`configure`](Self::configure), but rejects inverted or non-finite
    /// bounds and leaves the current config untouched on error.
    pub fn try_configure(&mut self, config: ZoomConfig) -> Result<(), ConfigError> {
        self.config = config.validated()?;
        Ok(())
    }

    pub fn set_min_zoom_scale(&mut self, value: f64) {
        self.config.set_min_zoom_scale(value);
    }

    pub fn set_max_zoom_scale(&mut self, value: f64) {
        self.config.set_max_zoom_scale(value);
    }

    pub fn set_reset_animation_duration(&mut self, value: f64) {
        self.config.set_reset_animation_duration(value);
    }

    #[must_use]
    pub fn config(&self) -> ZoomConfig {
        self.config
    }

    // --- Queries ---

    /// True from an accepted begin until the reset animation completes.
    #[must_use]
    pub fn is_zooming_active(&self) -> bool {
        !matches!(self.state, ZoomState::Idle)
    }

    #[must_use]
    pub fn state(&self) -> &ZoomState {
        &self.state
    }

    #[must_use]
    pub fn session(&self) -> Option<&ZoomSession> {
        self.state.session()
    }

    /// Current overlay scale, if a session exists.
    #[must_use]
    pub fn current_scale(&self) -> Option<f64> {
        self.session().map(ZoomSession::current_scale)
    }

    // --- Gesture input ---

    /// Feed one pinch report. `host` is the source element's geometry at the
    /// time of the event.
    pub fn on_gesture_event(&mut self, event: &GestureEvent, host: &HostGeometry) -> Vec<Action> {
        match event.phase {
            GesturePhase::Began => self.begin(event, host),
            GesturePhase::Changed => self.change(event),
            GesturePhase::Ended | GesturePhase::Cancelled | GesturePhase::Failed => self.end(event.phase),
        }
    }

    /// Finish the reset animation identified by `ticket`.
    ///
    /// Stale or repeated tickets are ignored, so completion runs at most once
    /// per session.
    pub fn complete_reset(&mut self, ticket: ResetTicket) -> Vec<Action> {
        match self.state {
            ZoomState::Resetting { ticket: pending, .. } if pending == ticket => {}
            _ => {
                debug!(ticket = ticket.0, "reset completion does not match a pending reset; ignoring");
                return Vec::new();
            }
        }
        self.state = ZoomState::Idle;
        debug!(ticket = ticket.0, "zoom session finished");
        vec![Action::RemoveOverlay, Action::SetSourceAlpha(1.0), Action::SetSourceInteraction(true), Action::ZoomEnded]
    }

    /// Drop an active session without animating, e.g. when the host could not
    /// create the overlay. Returns the actions that restore the source element
    /// if it was already hidden.
    ///
    /// Only an `Active` session can be abandoned; a reset in flight must
    /// complete through its ticket.
    pub fn abandon(&mut self) -> Vec<Action> {
        if !matches!(self.state, ZoomState::Active(_)) {
            return Vec::new();
        }
        self.state = ZoomState::Idle;
        debug!("zoom session abandoned");
        vec![Action::RemoveOverlay, Action::SetSourceAlpha(1.0)]
    }

    fn begin(&mut self, event: &GestureEvent, host: &HostGeometry) -> Vec<Action> {
        if self.is_zooming_active() {
            debug!("pinch began during an existing zoom session; ignoring");
            return Vec::new();
        }
        if event.scale.is_nan() || event.scale < self.config.min_zoom_scale {
            debug!(scale = event.scale, min = self.config.min_zoom_scale, "pinch began below min zoom scale; ignoring");
            return Vec::new();
        }
        let initial_rect = host.frame_in_window();
        let touch = event.location;
        if !touch.is_finite() || !initial_rect.origin.is_finite() {
            debug!("pinch began with non-finite geometry; ignoring");
            return Vec::new();
        }

        let anchor = Point::new(
            touch.x / initial_rect.width().max(ANCHOR_MIN_EXTENT),
            touch.y / initial_rect.height().max(ANCHOR_MIN_EXTENT),
        );
        let mut overlay = OverlayGeometry::with_frame(initial_rect);
        overlay.set_anchor(anchor);
        overlay.set_center(host.local_to_window(touch));
        // the pivot change moved the frame; put it back over the element
        overlay.set_frame(initial_rect);

        self.state = ZoomState::Active(ZoomSession {
            initial_rect,
            anchor,
            overlay,
            last_touch_location: touch,
            last_overlay_center: overlay.center(),
            last_touch_count: event.touch_count,
        });
        debug!(
            x = initial_rect.origin.x,
            y = initial_rect.origin.y,
            width = initial_rect.width(),
            height = initial_rect.height(),
            anchor_x = anchor.x,
            anchor_y = anchor.y,
            "zoom session began"
        );

        vec![Action::CreateOverlay { geometry: overlay }, Action::SetSourceAlpha(0.0), Action::ZoomBegan]
    }

    fn change(&mut self, event: &GestureEvent) -> Vec<Action> {
        let ZoomState::Active(session) = &mut self.state else {
            return Vec::new();
        };

        if event.touch_count != session.last_touch_count {
            // Finger lifted or added: the centroid jumps, so start panning from here.
            session.last_touch_location = event.location;
            session.last_touch_count = event.touch_count;
            return Vec::new();
        }

        let before = session.current_scale();
        let proposed = before * event.scale;
        if !before.is_finite() || !proposed.is_finite() || !event.location.is_finite() {
            debug!(before, delta = event.scale, "degenerate pinch update; holding last geometry");
            return Vec::new();
        }
        let scale = self.config.clamp_scale(proposed);

        let origin = session.overlay.frame().origin;
        session.overlay.set_frame(Rect::from_origin_size(origin, session.initial_rect.size.scaled(scale)));

        let pan = session.last_touch_location.sub(event.location);
        session.overlay.set_center(session.last_overlay_center.sub(pan));

        session.last_touch_count = event.touch_count;
        session.last_overlay_center = session.overlay.center();
        session.last_touch_location = event.location;
        trace!(scale, x = session.overlay.position.x, y = session.overlay.position.y, "zoom updated");

        vec![Action::PlaceOverlay { geometry: session.overlay }, Action::ResetGestureScale]
    }

    fn end(&mut self, phase: GesturePhase) -> Vec<Action> {
        let ZoomState::Active(session) = self.state else {
            return Vec::new();
        };
        self.next_ticket += 1;
        let ticket = ResetTicket(self.next_ticket);
        self.state = ZoomState::Resetting { session, ticket };
        debug!(?phase, ticket = ticket.0, "zoom gesture finished; resetting");

        vec![
            Action::SetSourceInteraction(false),
            Action::AnimateReset {
                ticket,
                from: session.overlay.frame(),
                to: session.initial_rect,
                duration: self.config.reset_animation_duration,
                curve: ResetCurve::default(),
            },
        ]
    }
}
