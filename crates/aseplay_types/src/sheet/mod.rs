//! Spritesheet data model and ingestion.
//!
//! A [`SpriteSheet`] is produced once, either by decoding an Aseprite JSON
//! export ([`aseprite`]), by parsing a plain-text listing ([`listing`]) or by
//! hand through a [`SheetBuilder`]. It is immutable afterwards.

mod error;
mod file;
mod frame;
mod geometry;
mod meta;
mod tag;

pub mod aseprite;
pub mod listing;

// Re-export unified error type
pub use error::SheetError;

pub use file::{SheetBuilder, SpriteSheet};
pub use frame::Frame;
pub use geometry::{Rect, Uv};
pub use meta::{Layer, Slice, SliceKey, parse_color};
pub use tag::{Direction, Tag};
