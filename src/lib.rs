#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `aseplay-rs` loads Aseprite spritesheet exports and plays their tags.
//!
//! A [`SpriteSheet`] is decoded once and shared behind an `Arc`; each
//! [`Player`] advances its own cursor through it by a caller-supplied time
//! delta and reports loop completion, frame changes and tag boundary
//! crossings to its observers.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use aseplay_rs::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let sheet = Arc::new(aseprite::open("assets/hero.json")?);
//! let mut player = Player::new(sheet);
//! player.on_tag_enter(|_, tag| println!("entered {}", tag.name()));
//! player.play("run")?;
//!
//! loop {
//!     player.advance(1.0 / 60.0);
//!     let (x0, y0, x1, y1) = player.current_frame_rect().to_tuple();
//!     // blit (x0, y0)..(x1, y1) from the sheet image
//! #   break;
//! }
//! # Ok(())
//! # }
//! ```
pub use aseplay_internal::*;
