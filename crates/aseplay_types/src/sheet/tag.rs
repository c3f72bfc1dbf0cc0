//! Tags: named frame ranges with a playback direction.

/// Playback direction of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
	/// Play from the first frame to the last, then wrap
	#[default]
	Forward,
	/// Play from the last frame to the first, then wrap
	Backward,
	/// Play forward, then backward, then forward again
	PingPong,
}

impl Direction {
	/// Maps an Aseprite export direction string.
	///
	/// Returns `None` for strings other than `forward`, `reverse` and `pingpong`.
	///
	/// # Examples
	///
	/// ```
	/// use aseplay_types::sheet::Direction;
	///
	/// assert_eq!(Direction::from_export_str("reverse"), Some(Direction::Backward));
	/// assert_eq!(Direction::from_export_str("sideways"), None);
	/// ```
	pub fn from_export_str(value: &str) -> Option<Self> {
		match value {
			"forward" => Some(Self::Forward),
			"reverse" => Some(Self::Backward),
			"pingpong" => Some(Self::PingPong),
			_ => None,
		}
	}

	/// The export string for this direction
	pub fn as_export_str(&self) -> &'static str {
		match self {
			Self::Forward => "forward",
			Self::Backward => "reverse",
			Self::PingPong => "pingpong",
		}
	}
}

impl std::fmt::Display for Direction {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_export_str())
	}
}

/// A named, inclusive range of frames.
///
/// Every [`SpriteSheet`](super::SpriteSheet) carries a tag with the empty name
/// spanning all of its frames. Tags may overlap each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
	name: String,
	start: usize,
	end: usize,
	direction: Direction,
}

impl Tag {
	/// Creates a tag covering frames `start..=end`.
	///
	/// The range is checked when the tag is added to a sheet.
	pub fn new(name: impl Into<String>, start: usize, end: usize, direction: Direction) -> Self {
		Self {
			name: name.into(),
			start,
			end,
			direction,
		}
	}

	/// Tag name
	pub fn name(&self) -> &str {
		&self.name
	}

	/// First frame index
	pub fn start(&self) -> usize {
		self.start
	}

	/// Last frame index (inclusive)
	pub fn end(&self) -> usize {
		self.end
	}

	/// Playback direction
	pub fn direction(&self) -> Direction {
		self.direction
	}

	/// Number of frames in the tag
	pub fn len(&self) -> usize {
		self.end - self.start + 1
	}

	/// Always `false`: a tag spans at least one frame.
	pub fn is_empty(&self) -> bool {
		false
	}

	/// Returns `true` if `frame_index` lies inside the tag.
	pub fn contains(&self, frame_index: usize) -> bool {
		(self.start..=self.end).contains(&frame_index)
	}
}

impl std::fmt::Display for Tag {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Tag('{}', {}..={}, {})", self.name, self.start, self.end, self.direction)
	}
}
