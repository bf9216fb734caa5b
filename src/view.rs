//! Element binding and declarative props.
//!
//! [`ZoomView`] is what a host element holds: one engine, one recognizer, the
//! host surface and animator it dispatches [`Action`]s to, and a weak
//! delegate. [`ZoomableImage`] is the declarative description a reactive UI
//! layer constructs a view from and re-applies on every update.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use tracing::{debug, warn};

use crate::animation::TickAnimator;
use crate::config::{ConfigError, ZoomConfig};
use crate::consts::{DEFAULT_MAX_ZOOM_SCALE, DEFAULT_MIN_ZOOM_SCALE};
use crate::engine::{Action, ZoomEngine};
use crate::geometry::{HostGeometry, Point};
use crate::gesture::{GestureEvent, GesturePhase, ResetTicket};
use crate::host::{
    AnimationRequest, AnimationStatus, Animator, ContentMode, ElementId, HostSurface, ImageContent, OverlayId,
    ZoomDelegate,
};
use crate::recognizer::PinchRecognizer;

/// A zoomable element: binds one [`ZoomEngine`] to one host element.
pub struct ZoomView<H: HostSurface, A: Animator> {
    element: ElementId,
    host: H,
    animator: A,
    engine: ZoomEngine,
    recognizer: PinchRecognizer,
    delegate: Option<Weak<dyn ZoomDelegate>>,
    overlay: Option<OverlayId>,
    content: Option<ImageContent<H::Image>>,
}

impl<H: HostSurface, A: Animator> ZoomView<H, A> {
    /// Bind to `element` and enable touch handling on it.
    pub fn new(element: ElementId, mut host: H, animator: A) -> Self {
        if !host.set_element_interaction(element, true) {
            warn!(%element, "binding zoom to an element the host does not know");
        }
        Self {
            element,
            host,
            animator,
            engine: ZoomEngine::new(),
            recognizer: PinchRecognizer::new(),
            delegate: None,
            overlay: None,
            content: None,
        }
    }

    // --- Accessors ---

    #[must_use]
    pub fn element(&self) -> ElementId {
        self.element
    }

    #[must_use]
    pub fn engine(&self) -> &ZoomEngine {
        &self.engine
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn animator(&self) -> &A {
        &self.animator
    }

    #[must_use]
    pub fn content(&self) -> Option<&ImageContent<H::Image>> {
        self.content.as_ref()
    }

    /// The live overlay, if one was created for the current session.
    #[must_use]
    pub fn overlay(&self) -> Option<OverlayId> {
        self.overlay
    }

    #[must_use]
    pub fn is_zooming_active(&self) -> bool {
        self.engine.is_zooming_active()
    }

    // --- Delegate ---

    /// Register the delegate without keeping it alive.
    pub fn set_delegate<D: ZoomDelegate + 'static>(&mut self, delegate: &Rc<D>) {
        let weak: Weak<D> = Rc::downgrade(delegate);
        let weak: Weak<dyn ZoomDelegate> = weak;
        self.delegate = Some(weak);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    // --- Configuration ---

    #[must_use]
    pub fn min_zoom_scale(&self) -> f64 {
        self.engine.config().min_zoom_scale
    }

    pub fn set_min_zoom_scale(&mut self, value: f64) {
        self.engine.set_min_zoom_scale(value);
    }

    #[must_use]
    pub fn max_zoom_scale(&self) -> f64 {
        self.engine.config().max_zoom_scale
    }

    pub fn set_max_zoom_scale(&mut self, value: f64) {
        self.engine.set_max_zoom_scale(value);
    }

    #[must_use]
    pub fn reset_animation_duration(&self) -> f64 {
        self.engine.config().reset_animation_duration
    }

    pub fn set_reset_animation_duration(&mut self, value: f64) {
        self.engine.set_reset_animation_duration(value);
    }

    pub fn configure(&mut self, config: ZoomConfig) {
        self.engine.configure(config);
    }

    pub fn try_configure(&mut self, config: ZoomConfig) -> Result<(), ConfigError> {
        self.engine.try_configure(config)
    }

    /// Push new image content to the host. Identical content is not re-applied.
    pub fn set_content(&mut self, content: ImageContent<H::Image>) {
        if self.content.as_ref() == Some(&content) {
            return;
        }
        self.host.set_element_content(self.element, &content);
        self.content = Some(content);
    }

    // --- Input ---

    /// Feed a pinch report from a platform recognizer.
    ///
    /// Element geometry is read from the host; it is only required when a
    /// pinch begins, so a session can still wind down after the element
    /// leaves its window.
    pub fn on_gesture(&mut self, event: &GestureEvent) {
        let geometry = match self.host.element_geometry(self.element) {
            Some(geometry) => geometry,
            None if event.phase == GesturePhase::Began => {
                debug!(element = %self.element, "element not in a window; ignoring pinch");
                return;
            }
            None => HostGeometry::default(),
        };
        let actions = self.engine.on_gesture_event(event, &geometry);
        self.dispatch(actions);
    }

    /// Feed the element-local positions of every finger currently down.
    pub fn on_touches(&mut self, points: &[Point]) {
        if let Some(event) = self.recognizer.touches(points) {
            self.on_gesture(&event);
        }
    }

    /// The host interrupted the touch sequence.
    pub fn cancel_touches(&mut self) {
        if let Some(event) = self.recognizer.cancel() {
            self.on_gesture(&event);
        }
    }

    /// Report that the reset animation for `ticket` finished.
    pub fn complete_reset(&mut self, ticket: ResetTicket) {
        let actions = self.engine.complete_reset(ticket);
        self.dispatch(actions);
    }

    fn dispatch(&mut self, actions: Vec<Action>) {
        let mut queue: VecDeque<Action> = actions.into();
        while let Some(action) = queue.pop_front() {
            match action {
                Action::CreateOverlay { geometry } => {
                    self.overlay = self.host.create_overlay(self.element, &geometry);
                    if self.overlay.is_none() {
                        warn!(element = %self.element, "host could not create zoom overlay; abandoning pinch");
                        // drop the queued SetSourceAlpha(0.0) and ZoomBegan
                        queue.clear();
                        queue.extend(self.engine.abandon());
                    }
                }
                Action::PlaceOverlay { geometry } => {
                    if let Some(overlay) = self.overlay {
                        self.host.place_overlay(overlay, &geometry);
                    }
                }
                Action::RemoveOverlay => {
                    if let Some(overlay) = self.overlay.take() {
                        self.host.remove_overlay(overlay);
                    }
                }
                Action::SetSourceAlpha(alpha) => {
                    if !self.host.set_element_alpha(self.element, alpha) {
                        warn!(element = %self.element, alpha, "source element gone; skipping alpha change");
                    }
                }
                Action::SetSourceInteraction(enabled) => {
                    if !self.host.set_element_interaction(self.element, enabled) {
                        warn!(element = %self.element, enabled, "source element gone; skipping interaction change");
                    }
                }
                Action::ResetGestureScale => self.recognizer.reset_scale(),
                Action::AnimateReset { ticket, from, to, duration, curve } => {
                    let status = match self.overlay {
                        Some(overlay) => {
                            self.animator.start(AnimationRequest { ticket, overlay, from, to, duration, curve })
                        }
                        None => AnimationStatus::Finished,
                    };
                    if status == AnimationStatus::Finished {
                        queue.extend(self.engine.complete_reset(ticket));
                    }
                }
                Action::ZoomBegan => {
                    if let Some(delegate) = self.delegate.as_ref().and_then(Weak::upgrade) {
                        delegate.zoom_did_begin(self.element);
                    }
                }
                Action::ZoomEnded => {
                    if let Some(delegate) = self.delegate.as_ref().and_then(Weak::upgrade) {
                        delegate.zoom_did_end(self.element);
                    }
                }
            }
        }
    }
}

impl<H: HostSurface> ZoomView<H, TickAnimator> {
    /// Advance the reset animation by `dt` seconds and place the overlay at
    /// the interpolated frame. Finalizes the session when the animation ends.
    pub fn advance(&mut self, dt: f64) {
        for step in self.animator.advance(dt) {
            if let (Some(overlay), Some(session)) = (self.overlay, self.engine.session()) {
                let mut geometry = session.overlay;
                geometry.set_frame(step.frame);
                self.host.place_overlay(overlay, &geometry);
            }
            if step.finished {
                self.complete_reset(step.ticket);
            }
        }
    }
}

/// Declarative description of a zoomable image.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomableImage<I> {
    pub image: I,
    pub content_mode: ContentMode,
    pub min_zoom_scale: f64,
    pub max_zoom_scale: f64,
}

impl<I: Clone + PartialEq> ZoomableImage<I> {
    #[must_use]
    pub fn new(image: I) -> Self {
        Self {
            image,
            content_mode: ContentMode::default(),
            min_zoom_scale: DEFAULT_MIN_ZOOM_SCALE,
            max_zoom_scale: DEFAULT_MAX_ZOOM_SCALE,
        }
    }

    #[must_use]
    pub fn content_mode(mut self, content_mode: ContentMode) -> Self {
        self.content_mode = content_mode;
        self
    }

    #[must_use]
    pub fn zoom_scales(mut self, min_zoom_scale: f64, max_zoom_scale: f64) -> Self {
        self.min_zoom_scale = min_zoom_scale;
        self.max_zoom_scale = max_zoom_scale;
        self
    }

    /// Construct a clipped, zoomable element from these props.
    pub fn make_view<H, A>(&self, element: ElementId, host: H, animator: A) -> ZoomView<H, A>
    where
        H: HostSurface<Image = I>,
        A: Animator,
    {
        let mut view = ZoomView::new(element, host, animator);
        view.set_content(ImageContent { image: self.image.clone(), content_mode: self.content_mode, clips_to_bounds: true });
        view.set_min_zoom_scale(self.min_zoom_scale);
        view.set_max_zoom_scale(self.max_zoom_scale);
        view
    }

    /// Re-apply these props. Unchanged values cause no host calls and never
    /// disturb a live session.
    pub fn update_view<H, A>(&self, view: &mut ZoomView<H, A>)
    where
        H: HostSurface<Image = I>,
        A: Animator,
    {
        let clips_to_bounds = view.content().map_or(true, |c| c.clips_to_bounds);
        view.set_content(ImageContent { image: self.image.clone(), content_mode: self.content_mode, clips_to_bounds });
        view.set_min_zoom_scale(self.min_zoom_scale);
        view.set_max_zoom_scale(self.max_zoom_scale);
    }
}
