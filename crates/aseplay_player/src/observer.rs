//! Observer registration and dispatch.
//!
//! Each event class holds any number of handlers, invoked synchronously in
//! registration order. Handlers are reference counted so a cloned
//! [`Player`] keeps the same bindings.

use std::sync::Arc;

use aseplay_types::sheet::{Rect, Tag};

use crate::Player;

/// Called when the active tag completes a revolution
pub type LoopHandler = Arc<dyn Fn(&Player) + Send + Sync>;

/// Called with the new frame index whenever the visible frame changes
pub type FrameChangeHandler = Arc<dyn Fn(&Player, usize) + Send + Sync>;

/// Called when playback enters or exits a tag's range
pub type TagHandler = Arc<dyn Fn(&Player, &Tag) + Send + Sync>;

/// Called before drawing; returning `true` vetoes the draw
pub type DrawHandler = Arc<dyn Fn(&Player, &Rect) -> bool + Send + Sync>;

#[derive(Clone, Default)]
pub(crate) struct Observers {
	pub(crate) on_loop: Vec<LoopHandler>,
	pub(crate) on_frame_change: Vec<FrameChangeHandler>,
	pub(crate) on_tag_enter: Vec<TagHandler>,
	pub(crate) on_tag_exit: Vec<TagHandler>,
	pub(crate) on_draw: Vec<DrawHandler>,
}

impl std::fmt::Debug for Observers {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Observers")
			.field("on_loop", &self.on_loop.len())
			.field("on_frame_change", &self.on_frame_change.len())
			.field("on_tag_enter", &self.on_tag_enter.len())
			.field("on_tag_exit", &self.on_tag_exit.len())
			.field("on_draw", &self.on_draw.len())
			.finish()
	}
}

impl Player {
	/// Registers a handler for loop completion.
	///
	/// Forward and backward tags complete a loop each time they wrap. A
	/// ping-pong tag completes one only after a full forward and back cycle.
	pub fn on_loop(&mut self, handler: impl Fn(&Player) + Send + Sync + 'static) -> &mut Self {
		self.observers.on_loop.push(Arc::new(handler));
		self
	}

	/// Registers a handler for frame changes.
	pub fn on_frame_change(
		&mut self,
		handler: impl Fn(&Player, usize) + Send + Sync + 'static,
	) -> &mut Self {
		self.observers.on_frame_change.push(Arc::new(handler));
		self
	}

	/// Registers a handler called when playback moves into a tag's range.
	///
	/// Every tag of the sheet is checked, not only the one being played.
	pub fn on_tag_enter(
		&mut self,
		handler: impl Fn(&Player, &Tag) + Send + Sync + 'static,
	) -> &mut Self {
		self.observers.on_tag_enter.push(Arc::new(handler));
		self
	}

	/// Registers a handler called when playback leaves a tag's range.
	pub fn on_tag_exit(
		&mut self,
		handler: impl Fn(&Player, &Tag) + Send + Sync + 'static,
	) -> &mut Self {
		self.observers.on_tag_exit.push(Arc::new(handler));
		self
	}

	/// Registers a draw hook. A hook returning `true` vetoes the draw.
	pub fn on_draw(
		&mut self,
		handler: impl Fn(&Player, &Rect) -> bool + Send + Sync + 'static,
	) -> &mut Self {
		self.observers.on_draw.push(Arc::new(handler));
		self
	}

	pub(crate) fn emit_loop(&self) {
		for handler in &self.observers.on_loop {
			handler(self);
		}
	}

	pub(crate) fn emit_frame_change(&self) {
		for handler in &self.observers.on_frame_change {
			handler(self, self.frame_index());
		}
	}

	/// Runs tag edge detection for the last `(prev, current)` frame pair.
	///
	/// All exits fire before any enter. A missing previous index lies
	/// outside every tag.
	pub(crate) fn poll_tag_changes(&self) {
		let prev = self.prev_frame_index();
		let current = self.frame_index();
		let was_inside = |tag: &Tag| prev.is_some_and(|index| tag.contains(index));

		if !self.observers.on_tag_exit.is_empty() {
			for tag in self.sheet().tags() {
				if was_inside(tag) && !tag.contains(current) {
					for handler in &self.observers.on_tag_exit {
						handler(self, tag);
					}
				}
			}
		}

		if !self.observers.on_tag_enter.is_empty() {
			for tag in self.sheet().tags() {
				if !was_inside(tag) && tag.contains(current) {
					for handler in &self.observers.on_tag_enter {
						handler(self, tag);
					}
				}
			}
		}
	}
}
