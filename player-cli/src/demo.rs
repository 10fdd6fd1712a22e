//! The demonstration script: one playlist, played twice.
//!
//! The first run uses the software renderer behind a watermark and subtitle
//! chain, the second the hardware renderer with no plugins. Both runs stream
//! the playlist from its sources again.

use bytes::Bytes;
use media_source::{MediaItem, Playlist, SegmentSource};
use media_types::OnEvent;
use pipeline_common::{Pipeline, PlaybackStats, StrategyRenderer, SubtitlePlugin, WatermarkPlugin};
use tracing::info;

use crate::config::ProgramConfig;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoReport {
    pub software: PlaybackStats,
    pub hardware: PlaybackStats,
}

fn attach<T>(component: T, on_event: Option<&OnEvent>, with: fn(T, OnEvent) -> T) -> T {
    match on_event {
        Some(on_event) => with(component, on_event.clone()),
        None => component,
    }
}

/// Build "My Playlist" from a local file, a segment list and a remote fetch.
pub fn build_playlist(
    config: &ProgramConfig,
    on_event: Option<&OnEvent>,
) -> Result<MediaItem, AppError> {
    let local = config
        .player
        .file_source(&config.local_file, on_event.cloned())?;
    let hls = SegmentSource::new(config.segments.iter().map(|s| Bytes::from(s.clone())));
    let payload = Bytes::from(config.remote_payload.clone());
    let remote = config.player.fetch_source(move || Ok(payload.clone()))?;

    let playlist = Playlist::new("My Playlist")
        .with_item(MediaItem::leaf(local, "Local File"))
        .with_item(MediaItem::leaf(hls, "HLS Stream"))
        .with_item(MediaItem::leaf(remote, "Remote API"));
    Ok(playlist.into())
}

fn log_outline(item: &MediaItem) {
    item.walk(|depth, item| {
        let kind = match item {
            MediaItem::Leaf(_) => "item",
            MediaItem::Playlist(_) => "playlist",
        };
        info!("{:indent$}- {} ({kind})", "", item.title(), indent = depth * 2);
    });
}

pub fn run(config: &ProgramConfig, on_event: Option<&OnEvent>) -> Result<DemoReport, AppError> {
    info!("{}", config.player);
    let playlist = build_playlist(config, on_event)?;
    log_outline(&playlist);

    let watermark = attach(
        WatermarkPlugin::new(&config.watermark),
        on_event,
        WatermarkPlugin::with_observer,
    );
    let subtitles = attach(
        SubtitlePlugin::new(config.subtitles.iter().cloned())?,
        on_event,
        SubtitlePlugin::with_observer,
    );
    let pipeline = attach(
        Pipeline::new().add_plugin(watermark).add_plugin(subtitles),
        on_event,
        Pipeline::with_observer,
    );
    let mut renderer = attach(
        StrategyRenderer::software(),
        on_event,
        StrategyRenderer::with_observer,
    );
    let software = pipeline.run(&playlist, &mut renderer)?;

    info!("");
    info!("=== Switching Renderer to Hardware ===");
    let pipeline = attach(Pipeline::new(), on_event, Pipeline::with_observer);
    let mut renderer = attach(
        StrategyRenderer::hardware(),
        on_event,
        StrategyRenderer::with_observer,
    );
    let hardware = pipeline.run(&playlist, &mut renderer)?;

    Ok(DemoReport { software, hardware })
}
