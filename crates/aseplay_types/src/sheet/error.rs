//! Error types for spritesheet ingestion and validation.

use thiserror::Error;

/// Errors that can occur when decoding or building a spritesheet
#[derive(Debug, Error)]
pub enum SheetError {
	/// The sheet has no frames
	#[error("Sheet has no frames")]
	NoFrames,

	/// A frame duration is not a finite positive number of seconds
	#[error("Frame {index} has invalid duration {duration}s (must be finite and greater than 0)")]
	InvalidDuration {
		/// Index of the offending frame
		index: usize,
		/// Duration in seconds
		duration: f32,
	},

	/// Overall sheet dimensions are degenerate
	#[error("Invalid sheet size {width}x{height}")]
	InvalidSheetSize {
		/// Sheet width in pixels
		width: u32,
		/// Sheet height in pixels
		height: u32,
	},

	/// Tag range is inverted or lies outside the frame list
	#[error("Tag '{name}' has invalid range [{start}, {end}] (frame count: {frame_count})")]
	InvalidTagRange {
		/// Tag name
		name: String,
		/// First frame of the tag
		start: usize,
		/// Last frame of the tag (inclusive)
		end: usize,
		/// Number of frames in the sheet
		frame_count: usize,
	},

	/// Tag name is already taken (the empty name is reserved for the whole sheet)
	#[error("Duplicate tag name '{0}'")]
	DuplicateTag(String),

	/// A listing tag prefix reappears after lines of another tag
	#[error("Line {line}: tag '{name}' is not contiguous")]
	NonContiguousTag {
		/// 1-based line number
		line: usize,
		/// Tag name
		name: String,
	},

	/// A listing line could not be parsed
	#[error("Line {line}: {message}")]
	MalformedLine {
		/// 1-based line number
		line: usize,
		/// Description of the problem
		message: String,
	},

	/// A slice color is not of the form `#rrggbbaa`
	#[error("Invalid color '{0}'")]
	InvalidColor(String),

	/// Malformed JSON export
	#[error(transparent)]
	Json(#[from] serde_json::Error),

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

impl SheetError {
	/// Creates a [`SheetError::MalformedLine`] error
	pub fn malformed_line(line: usize, message: impl Into<String>) -> Self {
		Self::MalformedLine {
			line,
			message: message.into(),
		}
	}
}
