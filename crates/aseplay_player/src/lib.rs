//! Tag-aware frame playback for `aseplay-rs` spritesheets.
//!
//! A [`Player`] holds a shared, immutable
//! [`SpriteSheet`](aseplay_types::sheet::SpriteSheet) plus its own cursor and
//! timing state. Each tick the caller advances it by a time delta; the player
//! steps zero or more frames and notifies its observers of loop completion,
//! frame changes and tag boundary crossings.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use aseplay_player::Player;
//! use aseplay_types::sheet::{Direction, Frame, SheetBuilder, Tag};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut builder = SheetBuilder::new(64, 16);
//! builder.frame_size(16, 16);
//! for i in 0..4 {
//!     builder.add_frame(Frame::new(i * 16, 0, 0.25));
//! }
//! builder.add_tag(Tag::new("walk", 1, 3, Direction::Forward));
//! let sheet = Arc::new(builder.build()?);
//!
//! let mut player = Player::new(sheet);
//! player.on_loop(|p| println!("'{}' looped", p.current_tag().map_or("", |t| t.name())));
//! player.play("walk")?;
//! player.advance(0.5);
//!
//! assert_eq!(player.frame_index(), 3);
//! assert_eq!(player.current_frame_rect().to_tuple(), (48, 0, 64, 16));
//! # Ok(())
//! # }
//! ```

mod error;
mod observer;
mod player;
mod render;

pub use error::PlayerError;
pub use observer::{DrawHandler, FrameChangeHandler, LoopHandler, TagHandler};
pub use player::{PlayDirection, Player};
pub use render::Renderer;
