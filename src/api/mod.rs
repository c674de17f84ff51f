mod data_controller;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod engine_init;
mod interaction_controller;
mod json_contract;
mod listener_dispatch;
mod listener_registry;
mod playback_controller;
mod render_frame_builder;
mod render_style;
mod validation;

pub use engine::TimelineEngine;
pub use engine_config::TimelineEngineConfig;
pub use json_contract::{RENDER_FRAME_JSON_SCHEMA_V1, RenderFrameJsonContractV1};
pub use render_style::TimelineStyle;
