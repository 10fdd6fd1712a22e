//! # Render Plugins
//!
//! Decorators that add behavior around a render call:
//!
//! - [`WatermarkPlugin`] stamps `metadata["watermark"]` before delegating
//! - [`SubtitlePlugin`] emits one caption per chunk, cycling through its lines

use std::cell::Cell;

use bytes::Bytes;
use media_types::{Metadata, OnEvent, PlaybackEvent, keys, notify};
use tracing::info;

use crate::PipelineError;
use crate::render::{Render, RenderPlugin};

pub struct WatermarkPlugin {
    text: String,
    on_event: Option<OnEvent>,
}

impl WatermarkPlugin {
    pub const NAME: &'static str = "watermark";

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            on_event: None,
        }
    }

    pub fn with_observer(mut self, on_event: OnEvent) -> Self {
        self.on_event = Some(on_event);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl RenderPlugin for WatermarkPlugin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn wrap<'a>(&'a self, inner: Box<dyn Render + 'a>) -> Box<dyn Render + 'a> {
        Box::new(Watermarked {
            plugin: self,
            inner,
        })
    }
}

struct Watermarked<'a> {
    plugin: &'a WatermarkPlugin,
    inner: Box<dyn Render + 'a>,
}

impl Render for Watermarked<'_> {
    fn render(&mut self, payload: &Bytes, metadata: &mut Metadata) -> Result<(), PipelineError> {
        let text = &self.plugin.text;
        metadata.insert(keys::WATERMARK.to_string(), text.clone());
        info!(plugin = WatermarkPlugin::NAME, text = %text, "Watermark applied");
        notify(self.plugin.on_event.as_ref(), || PlaybackEvent::PluginApplied {
            plugin: WatermarkPlugin::NAME,
            detail: text.clone(),
        });
        self.inner.render(payload, metadata)
    }
}

/// Cycles through a fixed list of captions, one per rendered chunk.
///
/// The cursor belongs to the plugin, not to a wrapped chain: wrapping the
/// same plugin again, or running the same pipeline twice, continues where
/// the previous chain left off.
pub struct SubtitlePlugin {
    lines: Vec<String>,
    cursor: Cell<usize>,
    on_event: Option<OnEvent>,
}

impl SubtitlePlugin {
    pub const NAME: &'static str = "subtitle";

    /// Create a plugin over `lines`. An empty list is rejected.
    pub fn new<I, S>(lines: I) -> Result<Self, PipelineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            return Err(PipelineError::InvalidPlugin(
                "subtitle plugin needs at least one caption line".to_string(),
            ));
        }
        Ok(Self {
            lines,
            cursor: Cell::new(0),
            on_event: None,
        })
    }

    pub fn with_observer(mut self, on_event: OnEvent) -> Self {
        self.on_event = Some(on_event);
        self
    }

    /// Number of captions emitted so far.
    pub fn cursor(&self) -> usize {
        self.cursor.get()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn next_line(&self) -> &str {
        let index = self.cursor.get();
        self.cursor.set(index.wrapping_add(1));
        &self.lines[index % self.lines.len()]
    }
}

impl RenderPlugin for SubtitlePlugin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn wrap<'a>(&'a self, inner: Box<dyn Render + 'a>) -> Box<dyn Render + 'a> {
        Box::new(Subtitled {
            plugin: self,
            inner,
        })
    }
}

struct Subtitled<'a> {
    plugin: &'a SubtitlePlugin,
    inner: Box<dyn Render + 'a>,
}

impl Render for Subtitled<'_> {
    fn render(&mut self, payload: &Bytes, metadata: &mut Metadata) -> Result<(), PipelineError> {
        let line = self.plugin.next_line();
        info!(plugin = SubtitlePlugin::NAME, line = %line, "Subtitle shown");
        notify(self.plugin.on_event.as_ref(), || PlaybackEvent::PluginApplied {
            plugin: SubtitlePlugin::NAME,
            detail: line.to_string(),
        });
        self.inner.render(payload, metadata)
    }
}
