//! Browser host surface.
//!
//! [`DomSurface`] maps element ids to live `HtmlElement`s and carries out
//! overlay and source-element changes through inline styles. Overlays are deep
//! clones of the source appended to `<body>` with `position: fixed`, so their
//! coordinates are viewport coordinates, the same space
//! `getBoundingClientRect` reports.
//!
//! Fallible DOM calls propagate `Result<(), JsValue>` internally; the trait
//! methods log failures and carry on.

use std::collections::HashMap;

use tracing::warn;
use uuid::Uuid;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use crate::geometry::{HostGeometry, OverlayGeometry, Rect};
use crate::host::{ContentMode, ElementId, HostSurface, ImageContent, OverlayId};

/// Host surface backed by the document of the current window.
#[derive(Debug, Default)]
pub struct DomSurface {
    elements: HashMap<ElementId, HtmlElement>,
    overlays: HashMap<OverlayId, HtmlElement>,
}

impl DomSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking `element` and return the id to bind a view to.
    pub fn register(&mut self, element: HtmlElement) -> ElementId {
        let id = Uuid::new_v4();
        self.elements.insert(id, element);
        id
    }

    /// Stop tracking an element. Later calls for `id` report it as gone.
    pub fn unregister(&mut self, id: ElementId) -> Option<HtmlElement> {
        self.elements.remove(&id)
    }

    fn live_element(&self, id: ElementId) -> Option<&HtmlElement> {
        self.elements.get(&id).filter(|el| el.is_connected())
    }
}

impl HostSurface for DomSurface {
    /// Image URL.
    type Image = String;

    fn element_geometry(&self, element: ElementId) -> Option<HostGeometry> {
        let el = self.live_element(element)?;
        let rect = el.get_bounding_client_rect();
        Some(HostGeometry::in_window(Rect::new(rect.x(), rect.y(), rect.width(), rect.height())))
    }

    fn create_overlay(&mut self, source: ElementId, geometry: &OverlayGeometry) -> Option<OverlayId> {
        let el = self.live_element(source)?;
        match build_overlay(el, geometry) {
            Ok(overlay) => {
                let id = Uuid::new_v4();
                self.overlays.insert(id, overlay);
                Some(id)
            }
            Err(err) => {
                warn!(%source, ?err, "failed to build zoom overlay");
                None
            }
        }
    }

    fn place_overlay(&mut self, overlay: OverlayId, geometry: &OverlayGeometry) {
        let Some(el) = self.overlays.get(&overlay) else {
            return;
        };
        if let Err(err) = apply_geometry(el, geometry) {
            warn!(%overlay, ?err, "failed to place zoom overlay");
        }
    }

    fn remove_overlay(&mut self, overlay: OverlayId) {
        if let Some(el) = self.overlays.remove(&overlay) {
            el.remove();
        }
    }

    fn set_element_alpha(&mut self, element: ElementId, alpha: f64) -> bool {
        let Some(el) = self.elements.get(&element) else {
            return false;
        };
        if let Err(err) = el.style().set_property("opacity", &alpha.to_string()) {
            warn!(%element, ?err, "failed to set opacity");
        }
        true
    }

    fn set_element_interaction(&mut self, element: ElementId, enabled: bool) -> bool {
        let Some(el) = self.elements.get(&element) else {
            return false;
        };
        let value = if enabled { "auto" } else { "none" };
        if let Err(err) = el.style().set_property("pointer-events", value) {
            warn!(%element, ?err, "failed to set pointer-events");
        }
        true
    }

    fn set_element_content(&mut self, element: ElementId, content: &ImageContent<String>) {
        let Some(el) = self.elements.get(&element) else {
            return;
        };
        if let Err(err) = apply_content(el, content) {
            warn!(%element, ?err, "failed to apply image content");
        }
    }
}

fn build_overlay(source: &HtmlElement, geometry: &OverlayGeometry) -> Result<HtmlElement, JsValue> {
    let overlay = source.clone_node_with_deep(true)?.dyn_into::<HtmlElement>().map_err(JsValue::from)?;
    overlay.remove_attribute("id")?;
    let style = overlay.style();
    style.set_property("position", "fixed")?;
    style.set_property("margin", "0")?;
    style.set_property("opacity", "1")?;
    style.set_property("pointer-events", "none")?;
    style.set_property("z-index", "2147483647")?;
    apply_geometry(&overlay, geometry)?;

    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.append_child(&overlay)?;
    Ok(overlay)
}

/// The pivot is already resolved into the frame, so no CSS transform is used.
fn apply_geometry(el: &HtmlElement, geometry: &OverlayGeometry) -> Result<(), JsValue> {
    let frame = geometry.frame();
    let style = el.style();
    style.set_property("left", &format!("{}px", frame.origin.x))?;
    style.set_property("top", &format!("{}px", frame.origin.y))?;
    style.set_property("width", &format!("{}px", frame.width()))?;
    style.set_property("height", &format!("{}px", frame.height()))?;
    Ok(())
}

fn apply_content(el: &HtmlElement, content: &ImageContent<String>) -> Result<(), JsValue> {
    let (size, position) = background_layout(content.content_mode);
    let style = el.style();
    style.set_property("background-image", &format!("url(\"{}\")", content.image))?;
    style.set_property("background-repeat", "no-repeat")?;
    style.set_property("background-size", size)?;
    style.set_property("background-position", position)?;
    style.set_property("overflow", if content.clips_to_bounds { "hidden" } else { "visible" })?;
    Ok(())
}

/// CSS `background-size` and `background-position` for a content mode.
fn background_layout(mode: ContentMode) -> (&'static str, &'static str) {
    match mode {
        ContentMode::ScaleToFill => ("100% 100%", "center"),
        ContentMode::ScaleAspectFit => ("contain", "center"),
        ContentMode::ScaleAspectFill => ("cover", "center"),
        ContentMode::Center => ("auto", "center"),
        ContentMode::Top => ("auto", "center top"),
        ContentMode::Bottom => ("auto", "center bottom"),
        ContentMode::Left => ("auto", "left center"),
        ContentMode::Right => ("auto", "right center"),
        ContentMode::TopLeft => ("auto", "left top"),
        ContentMode::TopRight => ("auto", "right top"),
        ContentMode::BottomLeft => ("auto", "left bottom"),
        ContentMode::BottomRight => ("auto", "right bottom"),
    }
}
