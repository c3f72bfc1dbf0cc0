//! Frame type for spritesheet animations.

/// A single animation frame on the spritesheet.
///
/// A frame only stores where it sits on the sheet and how long it stays on
/// screen. Its size is shared by every frame of the sheet and lives on
/// [`SpriteSheet`](super::SpriteSheet).
///
/// # Examples
///
/// ```
/// use aseplay_types::sheet::Frame;
///
/// let frame = Frame::new(32, 0, 0.1);
/// assert_eq!(frame.x(), 32);
/// assert_eq!(frame.duration_ms(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
	x: i32,
	y: i32,
	duration: f32,
}

impl Frame {
	/// Creates a frame at pixel offset `(x, y)` shown for `duration` seconds.
	pub fn new(x: i32, y: i32, duration: f32) -> Self {
		Self {
			x,
			y,
			duration,
		}
	}

	/// Creates a frame from a duration in milliseconds, as found in exports.
	pub fn from_millis(x: i32, y: i32, duration_ms: u32) -> Self {
		Self::new(x, y, duration_ms as f32 / 1000.0)
	}

	/// Horizontal pixel offset on the sheet
	pub fn x(&self) -> i32 {
		self.x
	}

	/// Vertical pixel offset on the sheet
	pub fn y(&self) -> i32 {
		self.y
	}

	/// Display duration in seconds
	pub fn duration(&self) -> f32 {
		self.duration
	}

	/// Display duration rounded to whole milliseconds
	pub fn duration_ms(&self) -> u32 {
		(self.duration * 1000.0).round() as u32
	}

	/// Returns `true` if the frame can be played back.
	pub fn is_playable(&self) -> bool {
		self.duration.is_finite() && self.duration > 0.0
	}
}

impl std::fmt::Display for Frame {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Frame(x={}, y={}, dur={}ms)", self.x, self.y, self.duration_ms())
	}
}
