//! Playback events.
//!
//! Components never print directly. They report what happened through an
//! injected [`OnEvent`] callback and log the same fact through `tracing`.

use std::fmt;
use std::sync::Arc;

use crate::Metadata;

/// Presentation strategy of a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RendererKind {
    Software,
    Hardware,
}

impl RendererKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RendererKind::Software => "Software",
            RendererKind::Hardware => "Hardware",
        }
    }
}

impl fmt::Display for RendererKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something observable that happened during playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// A renderer moved from idle to started.
    RendererStarted { renderer: RendererKind },
    /// A chunk reached the renderer.
    ChunkRendered {
        renderer: RendererKind,
        bytes: usize,
        metadata: Metadata,
    },
    /// A renderer moved from started to stopped.
    RendererStopped { renderer: RendererKind },
    /// A plugin ran for one chunk. `detail` is the watermark text or subtitle line.
    PluginApplied {
        plugin: &'static str,
        detail: String,
    },
    /// A source failed to read its origin and yielded a partial stream.
    SourceError { origin: String, error: String },
    /// A pipeline run completed.
    PlaybackFinished { chunks: usize, bytes: u64 },
}

/// A callback for playback events.
pub type OnEvent = Arc<dyn Fn(PlaybackEvent) + Send + Sync>;

/// Report an event if an observer is installed.
///
/// The event is only built when somebody listens.
#[inline]
pub fn notify(on_event: Option<&OnEvent>, event: impl FnOnce() -> PlaybackEvent) {
    if let Some(on_event) = on_event {
        on_event(event());
    }
}
