//! # Playback Pipeline
//!
//! The driver that wires a media item through a chain of render plugins into
//! one renderer.
//!
//! ## Usage
//!
//! Create a `Pipeline`, add plugins, then call [`Pipeline::run`] with the item
//! to play and the renderer to play it on. Each plugin added wraps the chain
//! built so far, so the plugin added last runs first for every chunk.
//!
//! A run always brackets playback with `start` and `stop`, even when the item
//! yields no chunks. Chunks are re-streamed from their sources on every run.

use media_source::MediaItem;
use media_types::{Chunk, OnEvent, PlaybackEvent, notify};
use tracing::{error, info};

use crate::PipelineError;
use crate::render::{RenderPlugin, RendererSink, compose};
use crate::renderer::Renderer;

/// Totals for a single run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackStats {
    pub chunks_rendered: usize,
    pub bytes_rendered: u64,
}

#[derive(Default)]
pub struct Pipeline {
    plugins: Vec<Box<dyn RenderPlugin>>,
    on_event: Option<OnEvent>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the chain built so far with `plugin`.
    ///
    /// Returns self for method chaining.
    pub fn add_plugin<P: RenderPlugin + 'static>(mut self, plugin: P) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    pub fn with_observer(mut self, on_event: OnEvent) -> Self {
        self.on_event = Some(on_event);
        self
    }

    /// Plugin names in execution order, outermost first.
    pub fn plugin_names(&self) -> Vec<&'static str> {
        self.plugins.iter().rev().map(|plugin| plugin.name()).collect()
    }

    /// Play every chunk of `item` on `renderer`.
    ///
    /// A source or render failure aborts the run; the renderer is stopped
    /// before the error is returned.
    pub fn run(
        &self,
        item: &MediaItem,
        renderer: &mut dyn Renderer,
    ) -> Result<PlaybackStats, PipelineError> {
        info!(
            item = item.title(),
            renderer = %renderer.kind(),
            plugins = ?self.plugin_names(),
            "Starting playback"
        );
        renderer.start()?;

        let chunks = match item.stream() {
            Ok(chunks) => chunks,
            Err(e) => {
                error!(item = item.title(), error = %e, "Failed to stream item, aborting playback");
                renderer.stop()?;
                return Err(e.into());
            }
        };

        let rendered = self.render_chunks(chunks, renderer);
        renderer.stop()?;
        let stats = rendered?;

        info!(
            chunks = stats.chunks_rendered,
            bytes = stats.bytes_rendered,
            "Playback finished"
        );
        notify(self.on_event.as_ref(), || PlaybackEvent::PlaybackFinished {
            chunks: stats.chunks_rendered,
            bytes: stats.bytes_rendered,
        });
        Ok(stats)
    }

    fn render_chunks(
        &self,
        chunks: Vec<Chunk>,
        renderer: &mut dyn Renderer,
    ) -> Result<PlaybackStats, PipelineError> {
        let mut stats = PlaybackStats::default();
        let mut chain = compose(Box::new(RendererSink::new(renderer)), &self.plugins);
        for chunk in chunks {
            let (payload, mut metadata) = chunk.into_parts();
            chain.render(&payload, &mut metadata)?;
            stats.chunks_rendered += 1;
            stats.bytes_rendered += payload.len() as u64;
        }
        Ok(stats)
    }
}
