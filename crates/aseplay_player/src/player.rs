//! The playback state machine.

use std::sync::Arc;

use aseplay_types::sheet::{Direction, Frame, Rect, SpriteSheet, Tag, Uv};
use log::{debug, trace, warn};

use crate::{PlayerError, observer::Observers};

/// Relative slack when comparing the frame counter against a frame duration
const STEP_TOLERANCE: f32 = 1.0e-4;

/// Direction the frame cursor currently moves in.
///
/// Unlike [`Direction`], this is the instantaneous heading: a ping-pong tag
/// alternates between both values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayDirection {
	/// Toward higher frame indices
	#[default]
	Forward,
	/// Toward lower frame indices
	Backward,
}

impl PlayDirection {
	/// Signed index step, `+1` or `-1`
	pub fn step(self) -> isize {
		match self {
			Self::Forward => 1,
			Self::Backward => -1,
		}
	}

	/// The opposite heading
	pub fn reversed(self) -> Self {
		match self {
			Self::Forward => Self::Backward,
			Self::Backward => Self::Forward,
		}
	}
}

/// Plays the tags of a shared [`SpriteSheet`].
///
/// A player is idle until [`play`](Self::play) selects a tag, and stays
/// playing from then on; there is no terminal state. While a tag is active
/// the frame index always lies inside that tag.
///
/// Every query is pure. Notifications are only emitted from
/// [`play`](Self::play), [`advance`](Self::advance) and
/// [`draw`](Self::draw), in this order within one frame step:
///
/// 1. loop completion
/// 2. frame change
/// 3. tag exits, in tag declaration order
/// 4. tag enters, in tag declaration order
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use aseplay_player::Player;
/// use aseplay_types::sheet::{Direction, Frame, SheetBuilder, Tag};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut builder = SheetBuilder::new(96, 16);
/// builder.frame_size(16, 16);
/// for i in 0..6 {
///     builder.add_frame(Frame::new(i * 16, 0, 0.5));
/// }
/// builder.add_tag(Tag::new("swing", 2, 4, Direction::PingPong));
/// let sheet = Arc::new(builder.build()?);
///
/// let mut player = Player::new(Arc::clone(&sheet));
/// player.play("swing")?;
/// player.advance(1.5);
/// assert_eq!(player.frame_index(), 3);
/// assert_eq!(player.frame_index_in_animation(), Some(1));
///
/// // Players are independent cursors over the same sheet
/// let other = Player::new(sheet);
/// assert!(other.current_tag().is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Player {
	sheet: Arc<SpriteSheet>,
	play_speed: f32,

	/// Index of the active tag in the sheet's tag list
	current_tag: Option<usize>,
	frame_index: usize,
	/// `None` lies outside every tag
	prev_frame_index: Option<usize>,
	frame_counter: f32,
	play_direction: PlayDirection,

	/// UV origin captured at the start of the last advance
	prev_uv: Uv,

	pub(crate) observers: Observers,
}

impl Player {
	/// Creates an idle player at normal speed.
	pub fn new(sheet: Arc<SpriteSheet>) -> Self {
		Self {
			sheet,
			play_speed: 1.0,
			current_tag: None,
			frame_index: 0,
			prev_frame_index: None,
			frame_counter: 0.0,
			play_direction: PlayDirection::Forward,
			prev_uv: Uv::default(),
			observers: Observers::default(),
		}
	}

	/// Starts playing the tag named `name`. The empty name plays every frame.
	///
	/// Playing the tag that is already active does nothing. Otherwise the
	/// cursor moves to the tag's first frame (last frame for backward tags)
	/// and tag enter/exit notifications fire immediately.
	///
	/// The very first call compares against the idle frame index, so tags
	/// covering it are not entered again. Switching from another tag clears
	/// the previous index, so every tag touching the new frame is entered.
	///
	/// # Errors
	///
	/// Returns [`PlayerError::UnknownTag`] if the sheet has no such tag. The
	/// player is left untouched.
	pub fn play(&mut self, name: &str) -> Result<(), PlayerError> {
		let Some(index) = self.sheet.tag_index(name) else {
			return Err(PlayerError::UnknownTag {
				name: name.to_string(),
			});
		};

		if self.current_tag == Some(index) {
			return Ok(());
		}

		let Some((start, end, direction)) = self.tag_bounds_at(index) else {
			return Err(PlayerError::UnknownTag {
				name: name.to_string(),
			});
		};

		self.prev_frame_index = match self.current_tag {
			Some(_) => None,
			None => Some(self.frame_index),
		};
		self.current_tag = Some(index);
		self.frame_counter = 0.0;

		if direction == Direction::Backward {
			self.play_direction = PlayDirection::Backward;
			self.frame_index = end;
		} else {
			self.play_direction = PlayDirection::Forward;
			self.frame_index = start;
		}

		debug!("Playing tag '{name}' [{start}, {end}] {direction} from frame {}", self.frame_index);
		self.poll_tag_changes();
		Ok(())
	}

	/// Advances playback by `dt` seconds, scaled by the play speed.
	///
	/// Steps as many frames as the accumulated time covers, emitting
	/// notifications for each step. Does nothing while idle. A delta that is
	/// not finite once scaled is ignored.
	pub fn advance(&mut self, dt: f32) {
		let Some((start, end, direction)) = self.tag_bounds() else {
			return;
		};

		let elapsed = dt * self.play_speed;
		if !elapsed.is_finite() {
			warn!("Ignoring non-finite time delta {dt} at speed {}", self.play_speed);
			return;
		}

		self.frame_counter += elapsed;
		self.prev_uv = self.current_uv();

		while let Some(duration) = self.sheet.frame(self.frame_index).map(Frame::duration) {
			// Millisecond durations are inexact in f32; subtracting them leaves
			// the counter a few ulps short of the frame it should complete
			if self.frame_counter < duration - duration * STEP_TOLERANCE {
				break;
			}

			let remaining = (self.frame_counter - duration).max(0.0);
			if remaining >= self.frame_counter {
				// Counter too large for f32 to step through
				warn!("Dropping time delta of {}s, too large to step", self.frame_counter);
				self.frame_counter = 0.0;
				break;
			}
			self.frame_counter = remaining;
			self.step(start, end, direction);
		}
	}

	/// Moves one frame and applies the tag's boundary policy.
	fn step(&mut self, start: usize, end: usize, direction: Direction) {
		let prev = self.frame_index;
		self.prev_frame_index = Some(prev);

		let (first, last) = (start as isize, end as isize);
		let mut index = prev as isize + self.play_direction.step();
		let mut looped = false;

		match direction {
			Direction::PingPong => {
				if index > last {
					index = last - 1;
					self.play_direction = self.play_direction.reversed();
				} else if index < first {
					index = first + 1;
					self.play_direction = self.play_direction.reversed();
					looped = true;
				}
			}
			Direction::Forward | Direction::Backward => match self.play_direction {
				PlayDirection::Forward if index > last => {
					index -= last - first + 1;
					looped = true;
				}
				PlayDirection::Backward if index < first => {
					index += last - first + 1;
					looped = true;
				}
				_ => {}
			},
		}

		// Single-frame ping-pong tags overshoot both ways
		self.frame_index = index.clamp(first, last) as usize;
		trace!("Frame {prev} -> {}", self.frame_index);

		if looped {
			self.emit_loop();
		}
		if self.frame_index != prev {
			self.emit_frame_change();
		}
		self.poll_tag_changes();
	}

	fn tag_bounds_at(&self, index: usize) -> Option<(usize, usize, Direction)> {
		self.sheet.tags().get(index).map(|tag| (tag.start(), tag.end(), tag.direction()))
	}

	fn tag_bounds(&self) -> Option<(usize, usize, Direction)> {
		self.current_tag.and_then(|index| self.tag_bounds_at(index))
	}

	/// The shared sheet
	pub fn sheet(&self) -> &Arc<SpriteSheet> {
		&self.sheet
	}

	/// The active tag, or `None` while idle.
	pub fn current_tag(&self) -> Option<&Tag> {
		self.current_tag.and_then(|index| self.sheet.tags().get(index))
	}

	/// Returns `true` once a tag has been played.
	pub fn is_playing(&self) -> bool {
		self.current_tag.is_some()
	}

	/// Absolute index of the visible frame in the sheet
	pub fn frame_index(&self) -> usize {
		self.frame_index
	}

	/// Frame index before the last step or tag switch
	pub fn prev_frame_index(&self) -> Option<usize> {
		self.prev_frame_index
	}

	/// Seconds accumulated toward the next frame step
	pub fn frame_counter(&self) -> f32 {
		self.frame_counter
	}

	/// Current heading of the frame cursor
	pub fn play_direction(&self) -> PlayDirection {
		self.play_direction
	}

	/// Playback speed multiplier
	pub fn play_speed(&self) -> f32 {
		self.play_speed
	}

	/// Sets the playback speed multiplier applied to every advance.
	pub fn set_play_speed(&mut self, speed: f32) -> &mut Self {
		self.play_speed = speed;
		self
	}

	/// The visible frame, or `None` while idle.
	pub fn current_frame(&self) -> Option<&Frame> {
		self.current_tag?;
		self.sheet.frame(self.frame_index)
	}

	/// Pixel rectangle of the visible frame, or [`Rect::NONE`] while idle.
	pub fn current_frame_rect(&self) -> Rect {
		self.current_tag
			.and_then(|_| self.sheet.frame_rect(self.frame_index))
			.unwrap_or(Rect::NONE)
	}

	/// UV origin of the visible frame, or [`Uv::NONE`] while idle.
	pub fn current_uv(&self) -> Uv {
		self.current_tag.and_then(|_| self.sheet.frame_uv(self.frame_index)).unwrap_or(Uv::NONE)
	}

	/// Change of the UV origin over the last [`advance`](Self::advance).
	///
	/// For a strip whose U coordinates read `[0, 0, 0.5, 0.5]`, advancing one
	/// frame at a time yields deltas of `0`, `0.5`, `0` and finally `-0.5` when
	/// playback wraps.
	pub fn current_uv_delta(&self) -> Uv {
		self.current_uv().delta_from(self.prev_uv)
	}

	/// Jumps to the `index`-th frame of the active tag, clamped to its last
	/// frame, and restarts the frame timer.
	///
	/// Does nothing while idle. No notifications are emitted.
	pub fn set_frame_index(&mut self, index: usize) {
		let Some((start, end, _)) = self.tag_bounds() else {
			return;
		};
		self.frame_index = start.saturating_add(index).min(end);
		self.frame_counter = 0.0;
	}

	/// Position of the visible frame within the active tag, or `None` while
	/// idle.
	pub fn frame_index_in_animation(&self) -> Option<usize> {
		self.tag_bounds().map(|(start, _, _)| self.frame_index - start)
	}

	/// Every tag whose range contains the visible frame, in declaration order.
	pub fn touching_tags(&self) -> Vec<&Tag> {
		self.sheet.tags_at(self.frame_index).collect()
	}

	/// Returns `true` if the named tag contains the visible frame.
	pub fn is_touching_tag(&self, name: &str) -> bool {
		self.sheet.tag(name).is_some_and(|tag| tag.contains(self.frame_index))
	}
}

/// Clones the playback position, speed and observer bindings.
///
/// The step history is not carried over: the clone has no previous frame
/// index and a zero previous UV.
impl Clone for Player {
	fn clone(&self) -> Self {
		Self {
			sheet: Arc::clone(&self.sheet),
			play_speed: self.play_speed,
			current_tag: self.current_tag,
			frame_index: self.frame_index,
			prev_frame_index: None,
			frame_counter: self.frame_counter,
			play_direction: self.play_direction,
			prev_uv: Uv::default(),
			observers: self.observers.clone(),
		}
	}
}
