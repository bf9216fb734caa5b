//! Pinch-to-zoom gesture engine for a single image element.
//!
//! The crate turns a pinch gesture stream into a magnified overlay that is
//! anchored at the pinch focal point, follows combined pinch and pan while the
//! gesture is live, and animates back to the element's original rectangle when
//! the gesture ends. The host UI layer is responsible only for reporting
//! element geometry and carrying out the [`engine::Action`]s the engine emits.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Gesture state machine and geometry math ([`engine::ZoomEngine`]) |
//! | [`gesture`] | Gesture phases, events, and session state |
//! | [`recognizer`] | Raw touch points to pinch gesture events |
//! | [`geometry`] | Points, sizes, rects, and pivot-aware overlay geometry |
//! | [`config`] | Scale bounds and reset duration, with floor-clamping |
//! | [`host`] | Host surface, animator, and delegate traits |
//! | [`animation`] | Reset curves and a tick-driven animator |
//! | [`view`] | Element binding and declarative props |
//! | [`dom`] | Browser host surface (feature `web`) |
//! | [`consts`] | Shared numeric constants |

pub mod animation;
pub mod config;
pub mod consts;
#[cfg(feature = "web")]
pub mod dom;
pub mod engine;
pub mod geometry;
pub mod gesture;
pub mod host;
pub mod recognizer;
pub mod view;
