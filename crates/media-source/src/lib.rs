//! # Media Source
//!
//! Adapters that turn different origins into a uniform chunk sequence, and a
//! composite playlist that can mix single items with nested playlists.
//!
//! ## Component Overview
//!
//! - `source`: the [`MediaSource`] trait and fixed-size chunking
//! - `file`: local file read in fixed blocks
//! - `segment`: pre-split segment list, one chunk per segment
//! - `fetch`: a fetch capability whose blob is split into sub-chunks
//! - `item`: [`MediaItem`] / [`Playlist`] composite
//!
//! ## License
//!
//! MIT License

pub mod error;
pub mod fetch;
pub mod file;
pub mod item;
pub mod segment;
pub mod source;

pub use error::SourceError;
pub use fetch::{FetchSource, Fetcher};
pub use file::FileSource;
pub use item::{MediaFileItem, MediaItem, Playlist};
pub use segment::SegmentSource;
pub use source::{DEFAULT_FETCH_CHUNK_SIZE, DEFAULT_FILE_CHUNK_SIZE, MediaSource, split_fixed};
