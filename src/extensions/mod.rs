//! Hooks for host code that observes the engine without owning it.

pub mod listeners;

pub use listeners::{ListenerContext, TimelineEvent, TimelineListener};
