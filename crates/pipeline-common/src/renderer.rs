//! # Renderers
//!
//! A renderer is the terminal consumer of chunks. Every renderer goes through
//! `Idle -> Started -> Stopped`; chunks may only be rendered while started.
//!
//! Out-of-order calls (double start, render before start, double stop) are
//! rejected with [`PipelineError::InvalidState`] and leave the state as it
//! was.

use std::fmt;

use bytes::Bytes;
use media_types::{Metadata, OnEvent, PlaybackEvent, RendererKind, notify};
use tracing::info;

use crate::PipelineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererState {
    Idle,
    Started,
    Stopped,
}

impl fmt::Display for RendererState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RendererState::Idle => "idle",
            RendererState::Started => "started",
            RendererState::Stopped => "stopped",
        };
        f.write_str(s)
    }
}

/// A presentation strategy.
///
/// Call sites hold a `&mut dyn Renderer` and never branch on the concrete
/// strategy.
pub trait Renderer {
    fn kind(&self) -> RendererKind;

    fn state(&self) -> RendererState;

    fn start(&mut self) -> Result<(), PipelineError>;

    fn render(&mut self, payload: &Bytes, metadata: &mut Metadata) -> Result<(), PipelineError>;

    fn stop(&mut self) -> Result<(), PipelineError>;
}

/// The shared state machine behind the software and hardware strategies.
///
/// The strategies differ only in the label they report.
pub struct StrategyRenderer {
    kind: RendererKind,
    state: RendererState,
    on_event: Option<OnEvent>,
}

impl StrategyRenderer {
    pub fn new(kind: RendererKind) -> Self {
        Self {
            kind,
            state: RendererState::Idle,
            on_event: None,
        }
    }

    pub fn software() -> Self {
        Self::new(RendererKind::Software)
    }

    pub fn hardware() -> Self {
        Self::new(RendererKind::Hardware)
    }

    pub fn with_observer(mut self, on_event: OnEvent) -> Self {
        self.on_event = Some(on_event);
        self
    }

    fn expect_state(
        &self,
        expected: RendererState,
        operation: &'static str,
    ) -> Result<(), PipelineError> {
        if self.state != expected {
            return Err(PipelineError::InvalidState {
                renderer: self.kind,
                state: self.state,
                operation,
            });
        }
        Ok(())
    }
}

impl Renderer for StrategyRenderer {
    fn kind(&self) -> RendererKind {
        self.kind
    }

    fn state(&self) -> RendererState {
        self.state
    }

    fn start(&mut self) -> Result<(), PipelineError> {
        self.expect_state(RendererState::Idle, "start")?;
        self.state = RendererState::Started;
        info!(renderer = %self.kind, "Renderer started");
        notify(self.on_event.as_ref(), || PlaybackEvent::RendererStarted {
            renderer: self.kind,
        });
        Ok(())
    }

    fn render(&mut self, payload: &Bytes, metadata: &mut Metadata) -> Result<(), PipelineError> {
        self.expect_state(RendererState::Started, "render")?;
        info!(
            renderer = %self.kind,
            bytes = payload.len(),
            metadata = ?metadata,
            "Rendering chunk"
        );
        notify(self.on_event.as_ref(), || PlaybackEvent::ChunkRendered {
            renderer: self.kind,
            bytes: payload.len(),
            metadata: metadata.clone(),
        });
        Ok(())
    }

    fn stop(&mut self) -> Result<(), PipelineError> {
        self.expect_state(RendererState::Started, "stop")?;
        self.state = RendererState::Stopped;
        info!(renderer = %self.kind, "Renderer stopped");
        notify(self.on_event.as_ref(), || PlaybackEvent::RendererStopped {
            renderer: self.kind,
        });
        Ok(())
    }
}
