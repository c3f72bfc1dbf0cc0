//! Seam between playback and whatever puts pixels on screen.

use aseplay_types::sheet::{Rect, SpriteSheet};
use log::trace;

use crate::Player;

/// Draws sub-rectangles of a sheet image.
///
/// Implementations own the image and the drawing target; the player only
/// decides which rectangle is visible.
pub trait Renderer {
	/// Draws the `rect` region of `sheet`'s image.
	fn draw_frame(&mut self, sheet: &SpriteSheet, rect: Rect);
}

impl Player {
	/// Draws the current frame through `renderer`.
	///
	/// Draw hooks run first, in registration order; the first one returning
	/// `true` vetoes the draw. Returns whether the frame was drawn. An idle
	/// player never draws.
	pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) -> bool {
		let rect = self.current_frame_rect();
		if rect.is_none() {
			return false;
		}

		if self.observers.on_draw.iter().any(|hook| hook(self, &rect)) {
			trace!("Draw of frame {} vetoed", self.frame_index());
			return false;
		}

		renderer.draw_frame(self.sheet(), rect);
		true
	}
}
