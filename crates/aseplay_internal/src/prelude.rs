//! Prelude module for `aseplay_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use aseplay_internal::prelude::*;
//!
//! // Now you can use all common types directly
//! let mut builder = SheetBuilder::new(32, 16);
//! builder.frame_size(16, 16);
//! builder.add_frame(Frame::new(0, 0, 0.1)).add_frame(Frame::new(16, 0, 0.1));
//! let sheet = Arc::new(builder.build().unwrap());
//!
//! // Drive playback
//! let mut player = Player::new(sheet);
//! player.play("").unwrap();
//! player.advance(0.1);
//! assert_eq!(player.current_frame_rect(), Rect::from_origin_size(16, 0, 16, 16));
//! ```

// Re-export everything from aseplay_types::prelude
#[doc(inline)]
pub use aseplay_types::prelude::*;

// Playback
#[doc(inline)]
pub use aseplay_player::{
	DrawHandler, FrameChangeHandler, LoopHandler, PlayDirection, Player, PlayerError, Renderer,
	TagHandler,
};

// Re-export the entire member crates for advanced usage
#[doc(inline)]
pub use aseplay_player;
#[doc(inline)]
pub use aseplay_types;
