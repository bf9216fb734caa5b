//! Reset curves and a tick-driven animator.
//!
//! Hosts with a native animation system can implement [`crate::host::Animator`]
//! on top of it and only need [`ResetCurve`] for the timing. Hosts without one
//! (canvas renderers, tests) can use [`TickAnimator`] and drive it from their
//! frame callback.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

use serde::{Deserialize, Serialize};

use crate::consts::{RESET_SPRING_DAMPING, RESET_SPRING_VELOCITY};
use crate::geometry::Rect;
use crate::gesture::ResetTicket;
use crate::host::{AnimationRequest, AnimationStatus, Animator};

/// Residual spring amplitude left at the end of the duration.
const SPRING_SETTLE_RESIDUAL: f64 = 1e-3;

/// Timing curve of the reset animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResetCurve {
    /// Cubic deceleration.
    EaseOut,
    /// Damped spring that settles by the end of the duration.
    Spring {
        /// Damping ratio in `(0, 1]`; lower values overshoot more.
        damping: f64,
        /// Initial velocity as a fraction of the travel distance per unit time.
        initial_velocity: f64,
    },
}

impl Default for ResetCurve {
    fn default() -> Self {
        Self::Spring { damping: RESET_SPRING_DAMPING, initial_velocity: RESET_SPRING_VELOCITY }
    }
}

impl ResetCurve {
    /// Progress at normalized time `t` (0 start, 1 end). Values outside
    /// `[0, 1]` are clamped; the spring may overshoot 1.0 in between.
    #[must_use]
    pub fn progress(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Self::EaseOut => 1.0 - (1.0 - t).powi(3),
            Self::Spring { damping, initial_velocity } => spring(damping, initial_velocity, t),
        }
    }
}

fn spring(damping: f64, initial_velocity: f64, t: f64) -> f64 {
    let zeta = damping.clamp(0.05, 1.0);
    // pick the natural frequency so the envelope has decayed by t = 1
    let omega = -SPRING_SETTLE_RESIDUAL.ln() / zeta;
    let envelope = (-zeta * omega * t).exp();
    if zeta >= 1.0 {
        // critically damped
        return 1.0 - envelope * (1.0 + (omega - initial_velocity) * t);
    }
    let omega_d = omega * (1.0 - zeta * zeta).sqrt();
    let b = (zeta * omega - initial_velocity) / omega_d;
    1.0 - envelope * ((omega_d * t).cos() + b * (omega_d * t).sin())
}

/// One interpolated step reported by [`TickAnimator::advance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    pub ticket: ResetTicket,
    pub frame: Rect,
    /// The animation reached its target; `ticket` will not be reported again.
    pub finished: bool,
}

#[derive(Debug, Clone, Copy)]
struct Running {
    request: AnimationRequest,
    elapsed: f64,
}

/// Animator advanced explicitly by elapsed time.
#[derive(Debug, Default)]
pub struct TickAnimator {
    running: Vec<Running>,
}

impl TickAnimator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no animation is in flight.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.running.is_empty()
    }

    /// Advance every running animation by `dt` seconds.
    ///
    /// Finished animations are reported once with `finished: true` and the
    /// exact target frame, then dropped.
    pub fn advance(&mut self, dt: f64) -> Vec<AnimationFrame> {
        let dt = dt.max(0.0);
        let mut frames = Vec::with_capacity(self.running.len());
        for running in &mut self.running {
            running.elapsed += dt;
            let request = running.request;
            let finished = running.elapsed >= request.duration;
            let frame = if finished {
                request.to
            } else {
                request.from.lerp(&request.to, request.curve.progress(running.elapsed / request.duration))
            };
            frames.push(AnimationFrame { ticket: request.ticket, frame, finished });
        }
        self.running.retain(|r| r.elapsed < r.request.duration);
        frames
    }
}

impl Animator for TickAnimator {
    fn start(&mut self, request: AnimationRequest) -> AnimationStatus {
        if request.duration.is_nan() || request.duration <= 0.0 {
            return AnimationStatus::Finished;
        }
        self.running.push(Running { request, elapsed: 0.0 });
        AnimationStatus::Running
    }
}
