//! This module is separated into its own crate to keep the `aseplay-rs` facade thin, and should not be used directly.

/// `use aseplay_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export member crates for convenience
pub use aseplay_player;
pub use aseplay_types;

// Re-export commonly used types at crate root
pub use aseplay_player::{PlayDirection, Player, PlayerError, Renderer};
pub use aseplay_types::sheet::{Direction, Frame, Rect, SheetError, SpriteSheet, Tag, Uv};
