//! # Render Capability
//!
//! [`Render`] is the single operation every stage of the render chain
//! exposes. A [`RenderPlugin`] turns one `Render` into another that runs the
//! plugin's side effect and then delegates to the wrapped capability.
//!
//! ## Ordering
//!
//! Wrapping happens inside-out and execution outside-in:
//! `p1.wrap(p2.wrap(base))` runs `p1`, then `p2`, then `base` for every chunk.
//! [`compose`] applies plugins in slice order, so the last plugin of the
//! slice ends up outermost and runs first.

use bytes::Bytes;
use media_types::Metadata;

use crate::PipelineError;
use crate::renderer::Renderer;

/// A single-method render capability.
///
/// The payload is read-only. Metadata is mutable so that stages can annotate
/// it before the chunk reaches the renderer.
pub trait Render {
    fn render(&mut self, payload: &Bytes, metadata: &mut Metadata) -> Result<(), PipelineError>;
}

impl<F> Render for F
where
    F: FnMut(&Bytes, &mut Metadata) -> Result<(), PipelineError>,
{
    fn render(&mut self, payload: &Bytes, metadata: &mut Metadata) -> Result<(), PipelineError> {
        self(payload, metadata)
    }
}

/// A decorator over a render capability.
pub trait RenderPlugin {
    /// Get the name of this plugin for logging and debugging.
    fn name(&self) -> &'static str;

    /// Wrap `inner` into a new capability.
    ///
    /// The returned capability owns `inner` and borrows the plugin, so any
    /// state the plugin keeps (a subtitle cursor for instance) is shared by
    /// every capability it has produced.
    fn wrap<'a>(&'a self, inner: Box<dyn Render + 'a>) -> Box<dyn Render + 'a>;
}

/// Adapts a renderer into the innermost stage of a chain.
pub struct RendererSink<'r> {
    renderer: &'r mut dyn Renderer,
}

impl<'r> RendererSink<'r> {
    pub fn new(renderer: &'r mut dyn Renderer) -> Self {
        Self { renderer }
    }
}

impl Render for RendererSink<'_> {
    fn render(&mut self, payload: &Bytes, metadata: &mut Metadata) -> Result<(), PipelineError> {
        self.renderer.render(payload, metadata)
    }
}

/// Wrap `base` with every plugin in order. The last plugin executes first.
pub fn compose<'a>(
    base: Box<dyn Render + 'a>,
    plugins: &'a [Box<dyn RenderPlugin>],
) -> Box<dyn Render + 'a> {
    plugins.iter().fold(base, |inner, plugin| plugin.wrap(inner))
}
