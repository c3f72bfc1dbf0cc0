//! This crate provides the spritesheet data model and ingestion for the `aseplay-rs` project.
//!
//! # Sources
//!
//! - **Aseprite JSON**: the document written by "Export Sprite Sheet", in either the
//!   hash or the array layout ([`sheet::aseprite`])
//! - **Listing**: plain-text `tag/name = x y w h` lines with a uniform frame duration
//!   ([`sheet::listing`])
//!
//! Both produce the same immutable [`SpriteSheet`](sheet::SpriteSheet).
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use aseplay_types::prelude::*;
//!
//! # fn main() -> Result<(), SheetError> {
//! let sheet = aseprite::open("assets/hero.json")?;
//! for tag in sheet.tags() {
//!     println!("{tag}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use aseplay_types::sheet::listing::{self, ParseConfig};
//!
//! let sheet = listing::open("assets/explosion.txt", &ParseConfig::from_fps(24.0));
//! // ...
//! ```

pub mod sheet;

/// `use aseplay_types::prelude::*;` to import commonly used items.
pub mod prelude;
