//! timeline-rs: time-axis interaction engine for a scrubbable timeline.
//!
//! The crate turns pointer, wheel, key and timer callbacks into a view window,
//! a snapped playhead time and a backend-agnostic render plan. Drawing is left
//! to a [`render::Renderer`] implementation supplied by the host.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{TimelineEngine, TimelineEngineConfig, TimelineStyle};
pub use error::{TimelineError, TimelineResult};
