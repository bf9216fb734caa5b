//! Seams to the surrounding UI toolkit: the host surface that owns real
//! visuals, the animator that runs the reset transition, and the delegate
//! that hears about session begin/end.
//!
//! Elements and overlays are referred to by id. The engine never owns the
//! source element; a host that has dropped an element reports `None`/`false`
//! and the binding carries on without it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::animation::ResetCurve;
use crate::geometry::{HostGeometry, OverlayGeometry, Rect};
use crate::gesture::ResetTicket;

/// Host-assigned identifier of a source element.
pub type ElementId = Uuid;

/// Host-assigned identifier of an overlay visual.
pub type OverlayId = Uuid;

/// How image content is laid out inside its element's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentMode {
    ScaleToFill,
    #[default]
    ScaleAspectFit,
    ScaleAspectFill,
    Center,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Visual content of an image element, copied onto the overlay at begin.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageContent<I> {
    pub image: I,
    pub content_mode: ContentMode,
    pub clips_to_bounds: bool,
}

/// The UI toolkit side of a zoomable element.
pub trait HostSurface {
    /// Host-native image handle.
    type Image: Clone + PartialEq;

    /// Current geometry of `element`, or `None` if it is gone or not attached to a window.
    fn element_geometry(&self, element: ElementId) -> Option<HostGeometry>;

    /// Create an overlay in window space showing `source`'s content, placed at `geometry`.
    fn create_overlay(&mut self, source: ElementId, geometry: &OverlayGeometry) -> Option<OverlayId>;

    fn place_overlay(&mut self, overlay: OverlayId, geometry: &OverlayGeometry);

    fn remove_overlay(&mut self, overlay: OverlayId);

    /// Returns `false` if the element no longer exists.
    fn set_element_alpha(&mut self, element: ElementId, alpha: f64) -> bool;

    /// Returns `false` if the element no longer exists.
    fn set_element_interaction(&mut self, element: ElementId, enabled: bool) -> bool;

    /// Replace the element's image and layout settings.
    fn set_element_content(&mut self, element: ElementId, content: &ImageContent<Self::Image>);
}

/// A reset animation the binding asks an [`Animator`] to run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationRequest {
    pub ticket: ResetTicket,
    pub overlay: OverlayId,
    pub from: Rect,
    pub to: Rect,
    /// Seconds.
    pub duration: f64,
    pub curve: ResetCurve,
}

/// Outcome of [`Animator::start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStatus {
    /// Completed synchronously; the caller finalizes immediately.
    Finished,
    /// Still running; the host must report the ticket once it completes.
    Running,
}

/// Runs the overlay's reset transition.
pub trait Animator {
    /// Begin interpolating the overlay frame. Zero-duration requests must
    /// return [`AnimationStatus::Finished`].
    fn start(&mut self, request: AnimationRequest) -> AnimationStatus;
}

/// Receives zoom lifecycle notifications. Held weakly by the binding.
pub trait ZoomDelegate {
    fn zoom_did_begin(&self, element: ElementId);

    fn zoom_did_end(&self, element: ElementId);
}
