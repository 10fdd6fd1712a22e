//! # Pipeline Common
//!
//! This crate drives chunked media through a chain of render plugins into a
//! renderer.
//!
//! ## Features
//!
//! - `Render` capability and `RenderPlugin` decorators (watermark, subtitles)
//! - `Renderer` strategies with an explicit start/render/stop lifecycle
//! - `Pipeline` driver that brackets every run with start and stop
//! - Common error type and configuration
//!
//! ## License
//!
//! MIT License
//!
//! ## Authors
//!
//! - hua0512
//!

use media_source::SourceError;
use media_types::RendererKind;
use thiserror::Error;

pub mod config;
pub mod pipeline;
pub mod plugin;
pub mod render;
pub mod renderer;
pub mod test_utils;

/// Re-export key traits and types
pub use config::PlayerConfig;
pub use pipeline::{Pipeline, PlaybackStats};
pub use plugin::{SubtitlePlugin, WatermarkPlugin};
pub use render::{Render, RenderPlugin, RendererSink, compose};
pub use renderer::{Renderer, RendererState, StrategyRenderer};

/// Common error type for pipeline operations
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("{renderer} renderer cannot {operation} while {state}")]
    InvalidState {
        renderer: RendererKind,
        state: RendererState,
        operation: &'static str,
    },

    #[error("Invalid plugin: {0}")]
    InvalidPlugin(String),
}
