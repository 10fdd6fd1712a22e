use bytes::Bytes;
use media_source::{MediaItem, Playlist, SegmentSource};
use media_types::Metadata;
use pipeline_common::{
    Pipeline, PipelineError, Render, RenderPlugin, StrategyRenderer, WatermarkPlugin,
};

// A plugin that counts bytes and tags each chunk with its running offset
struct OffsetPlugin {
    offset: std::cell::Cell<usize>,
}

impl OffsetPlugin {
    fn new() -> Self {
        Self {
            offset: std::cell::Cell::new(0),
        }
    }
}

impl RenderPlugin for OffsetPlugin {
    fn name(&self) -> &'static str {
        "offset"
    }

    fn wrap<'a>(&'a self, mut inner: Box<dyn Render + 'a>) -> Box<dyn Render + 'a> {
        Box::new(
            move |payload: &Bytes, metadata: &mut Metadata| -> Result<(), PipelineError> {
                let start = self.offset.get();
                self.offset.set(start + payload.len());
                metadata.insert("offset".to_string(), start.to_string());
                println!("offset: chunk at byte {start}");
                inner.render(payload, metadata)
            },
        )
    }
}

fn main() -> Result<(), PipelineError> {
    let _ = tracing_subscriber::fmt().with_target(false).try_init();

    // A nested playlist
    let intro = Playlist::new("Intro").with_item(MediaItem::leaf(
        SegmentSource::new([&b"intro-0"[..], &b"intro-1"[..]]),
        "Intro segments",
    ));
    let playlist: MediaItem = Playlist::new("Show")
        .with_item(intro)
        .with_item(MediaItem::leaf(
            SegmentSource::new([&b"episode"[..]]),
            "Episode",
        ))
        .into();

    // Offset runs first, then the watermark, then the renderer
    let pipeline = Pipeline::new()
        .add_plugin(WatermarkPlugin::new("example"))
        .add_plugin(OffsetPlugin::new());

    let stats = pipeline.run(&playlist, &mut StrategyRenderer::software())?;
    println!(
        "\nRendered {} chunks, {} bytes",
        stats.chunks_rendered, stats.bytes_rendered
    );

    Ok(())
}
