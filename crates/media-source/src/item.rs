//! # Media Items
//!
//! A [`MediaItem`] is either a single titled source or a [`Playlist`] of
//! further items. Streaming an item flattens it depth-first, left to right.
//!
//! Items are moved into a playlist when added, so a playlist can never
//! contain one of its ancestors. Flattening walks an explicit stack instead
//! of recursing, which keeps arbitrarily deep nesting off the call stack.

use std::fmt;

use media_types::Chunk;

use crate::{MediaSource, SourceError};

/// A single titled source.
pub struct MediaFileItem {
    title: String,
    source: Box<dyn MediaSource>,
}

impl MediaFileItem {
    pub fn new(source: impl MediaSource + 'static, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            source: Box::new(source),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn source(&self) -> &dyn MediaSource {
        self.source.as_ref()
    }

    pub fn stream(&self) -> Result<Vec<Chunk>, SourceError> {
        self.source.stream()
    }
}

impl fmt::Debug for MediaFileItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaFileItem")
            .field("title", &self.title)
            .field("source", &self.source.describe())
            .finish()
    }
}

/// An ordered, nestable collection of items.
pub struct Playlist {
    title: String,
    items: Vec<MediaItem>,
}

impl Playlist {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Append an item. Insertion order is playback order.
    pub fn add(&mut self, item: impl Into<MediaItem>) {
        self.items.push(item.into());
    }

    pub fn with_item(mut self, item: impl Into<MediaItem>) -> Self {
        self.add(item);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn stream(&self) -> Result<Vec<Chunk>, SourceError> {
        flatten(self.items.iter().rev().collect())
    }
}

impl fmt::Debug for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Playlist")
            .field("title", &self.title)
            .field("items", &self.items.len())
            .finish()
    }
}

impl Drop for Playlist {
    /// Tear the tree down from a heap stack. Each nested playlist is emptied
    /// before it drops, so the generated drop glue never goes deeper than one level.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.items);
        while let Some(item) = pending.pop() {
            if let MediaItem::Playlist(mut playlist) = item {
                pending.append(&mut playlist.items);
            }
        }
    }
}

#[derive(Debug)]
pub enum MediaItem {
    Leaf(MediaFileItem),
    Playlist(Playlist),
}

impl MediaItem {
    pub fn leaf(source: impl MediaSource + 'static, title: impl Into<String>) -> Self {
        MediaItem::Leaf(MediaFileItem::new(source, title))
    }

    pub fn title(&self) -> &str {
        match self {
            MediaItem::Leaf(leaf) => leaf.title(),
            MediaItem::Playlist(playlist) => playlist.title(),
        }
    }

    /// Stream every chunk below this item in playback order.
    ///
    /// Stops at the first source that returns an error.
    pub fn stream(&self) -> Result<Vec<Chunk>, SourceError> {
        flatten(vec![self])
    }

    /// Visit this item and its descendants in pre-order, with their depth.
    pub fn walk(&self, mut visit: impl FnMut(usize, &MediaItem)) {
        let mut pending = vec![(0usize, self)];
        while let Some((depth, item)) = pending.pop() {
            visit(depth, item);
            if let MediaItem::Playlist(playlist) = item {
                pending.extend(playlist.items.iter().rev().map(|child| (depth + 1, child)));
            }
        }
    }

    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        self.walk(|_, item| {
            if matches!(item, MediaItem::Leaf(_)) {
                count += 1;
            }
        });
        count
    }

    /// Nesting depth. A leaf or an empty playlist has depth 0.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        self.walk(|depth, _| max = max.max(depth));
        max
    }
}

impl From<MediaFileItem> for MediaItem {
    fn from(item: MediaFileItem) -> Self {
        MediaItem::Leaf(item)
    }
}

impl From<Playlist> for MediaItem {
    fn from(playlist: Playlist) -> Self {
        MediaItem::Playlist(playlist)
    }
}

/// Drain `pending` (top of stack is the next item to play) into one chunk list.
fn flatten(mut pending: Vec<&MediaItem>) -> Result<Vec<Chunk>, SourceError> {
    let mut chunks = Vec::new();
    while let Some(item) = pending.pop() {
        match item {
            MediaItem::Leaf(leaf) => chunks.extend(leaf.stream()?),
            MediaItem::Playlist(playlist) => pending.extend(playlist.items.iter().rev()),
        }
    }
    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FetchSource, SegmentSource};
    use bytes::Bytes;
    use media_types::keys;

    fn segments(prefix: &str, count: usize) -> SegmentSource {
        SegmentSource::new((0..count).map(|i| format!("{prefix}{i}").into_bytes()))
    }

    fn payloads(chunks: &[Chunk]) -> Vec<String> {
        chunks
            .iter()
            .map(|c| String::from_utf8_lossy(&c.payload).into_owned())
            .collect()
    }

    #[test]
    fn test_leaf_streams_source_unchanged() {
        let item = MediaItem::leaf(segments("a", 2), "A");
        assert_eq!(item.title(), "A");
        assert_eq!(payloads(&item.stream().unwrap()), ["a0", "a1"]);
    }

    #[test]
    fn test_playlist_concatenates_children_in_order() {
        let playlist = Playlist::new("root")
            .with_item(MediaItem::leaf(segments("a", 2), "A"))
            .with_item(MediaItem::leaf(segments("b", 3), "B"))
            .with_item(MediaItem::leaf(segments("c", 1), "C"));

        let chunks = playlist.stream().unwrap();
        assert_eq!(chunks.len(), 2 + 3 + 1);
        assert_eq!(payloads(&chunks), ["a0", "a1", "b0", "b1", "b2", "c0"]);
    }

    #[test]
    fn test_nested_playlists_flatten_depth_first() {
        let inner = Playlist::new("inner")
            .with_item(MediaItem::leaf(segments("b", 1), "B"))
            .with_item(Playlist::new("empty"))
            .with_item(MediaItem::leaf(segments("c", 1), "C"));
        let root: MediaItem = Playlist::new("root")
            .with_item(MediaItem::leaf(segments("a", 1), "A"))
            .with_item(inner)
            .with_item(MediaItem::leaf(segments("d", 1), "D"))
            .into();

        assert_eq!(payloads(&root.stream().unwrap()), ["a0", "b0", "c0", "d0"]);
        assert_eq!(root.leaf_count(), 4);
        assert_eq!(root.depth(), 2);
    }

    #[test]
    fn test_walk_is_pre_order() {
        let root: MediaItem = Playlist::new("root")
            .with_item(Playlist::new("sub").with_item(MediaItem::leaf(segments("x", 1), "X")))
            .with_item(MediaItem::leaf(segments("y", 1), "Y"))
            .into();

        let mut seen = Vec::new();
        root.walk(|depth, item| seen.push((depth, item.title().to_string())));
        assert_eq!(
            seen,
            [
                (0, "root".to_string()),
                (1, "sub".to_string()),
                (2, "X".to_string()),
                (1, "Y".to_string()),
            ]
        );
    }

    #[test]
    fn test_deep_nesting_does_not_recurse() {
        let mut item: MediaItem = MediaItem::leaf(segments("z", 1), "leaf");
        for level in 0..200_000 {
            item = Playlist::new(format!("level-{level}")).with_item(item).into();
        }

        assert_eq!(payloads(&item.stream().unwrap()), ["z0"]);
        assert_eq!(item.depth(), 200_000);
        assert_eq!(item.leaf_count(), 1);
        assert!(format!("{item:?}").contains("level-199999"));
        drop(item);
    }

    #[test]
    fn test_debug_shows_title_and_child_count() {
        let playlist = Playlist::new("root")
            .with_item(MediaItem::leaf(segments("a", 1), "A"))
            .with_item(Playlist::new("sub"));
        assert_eq!(format!("{playlist:?}"), r#"Playlist { title: "root", items: 2 }"#);
    }

    #[test]
    fn test_wide_and_deep_tree_drops() {
        let mut root = Playlist::new("root");
        for branch in 0..100 {
            let mut item: MediaItem = MediaItem::leaf(segments("w", 1), format!("leaf-{branch}"));
            for level in 0..1_000 {
                item = Playlist::new(format!("b{branch}-{level}")).with_item(item).into();
            }
            root.add(item);
        }
        let root: MediaItem = root.into();
        assert_eq!(root.leaf_count(), 100);
        drop(root);
    }

    #[test]
    fn test_restream_yields_same_sequence() {
        let playlist = Playlist::new("root")
            .with_item(MediaItem::leaf(segments("a", 2), "A"))
            .with_item(MediaItem::leaf(
                FetchSource::from_fn(|| Ok(Bytes::from_static(b"XYZ"))).with_chunk_size(2),
                "remote",
            ));

        let first = playlist.stream().unwrap();
        let second = playlist.stream().unwrap();
        assert_eq!(first, second);
        assert_eq!(first[2].metadata[keys::REMOTE], "true");
    }

    #[test]
    fn test_fetch_failure_aborts_flattening() {
        let playlist = Playlist::new("root")
            .with_item(MediaItem::leaf(segments("a", 1), "A"))
            .with_item(MediaItem::leaf(
                FetchSource::from_fn(|| Err(SourceError::fetch("timeout"))),
                "remote",
            ));

        assert!(matches!(playlist.stream(), Err(SourceError::Fetch(_))));
    }

    #[test]
    fn test_empty_playlist() {
        let playlist = Playlist::new("empty");
        assert!(playlist.is_empty());
        assert!(playlist.stream().unwrap().is_empty());
    }
}
