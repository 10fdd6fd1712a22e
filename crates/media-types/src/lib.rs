//! # Media Types
//!
//! Shared data types for the playback pipeline.
//!
//! - [`Chunk`]: a unit of payload bytes with attached metadata
//! - [`Metadata`]: the string map that travels with a chunk
//! - [`PlaybackEvent`] / [`OnEvent`]: the observer seam every component reports through
//!
//! ## License
//!
//! MIT License

pub mod chunk;
pub mod event;

pub use chunk::{Chunk, Metadata, keys};
pub use event::{OnEvent, PlaybackEvent, RendererKind, notify};
