//! Plain-text spritesheet listing support.
//!
//! Some packers emit a bare listing of frame rectangles instead of an Aseprite
//! export. Each non-blank line names one frame:
//!
//! ```text
//! idle/frame0000 = 0 0 32 32
//! idle/frame0001 = 32 0 32 32
//! run/frame0002 = 64 0 32 32
//! frame0003 = 96 0 32 32
//! ```
//!
//! - Frames are added in file order.
//! - An optional `tag/` prefix groups the line into a tag. Consecutive lines
//!   with the same prefix form that tag's range; a prefix may not come back
//!   after another group has started.
//! - The four numbers are `x y w h` in pixels. Frame size is taken from the
//!   first line, and the sheet size is the bounding box of all frames.
//! - Durations are uniform and come from [`ParseConfig`]; every tag plays
//!   forward.
//! - The image path is the listing name with its extension replaced by
//!   [`ParseConfig::image_extension`].
//!
//! # Examples
//!
//! ```
//! use aseplay_types::sheet::listing::{self, ParseConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let text = "walk/f0 = 0 0 16 16\nwalk/f1 = 16 0 16 16\nf2 = 32 0 16 16\n";
//! let sheet = listing::from_str(text, "hero.txt", &ParseConfig::new(0.08))?;
//!
//! assert_eq!(sheet.frame_count(), 3);
//! assert_eq!(sheet.image_path().to_str(), Some("hero.png"));
//! let walk = sheet.tag("walk").unwrap();
//! assert_eq!((walk.start(), walk.end()), (0, 1));
//! # Ok(())
//! # }
//! ```

pub mod parse_config;

use std::{
	collections::HashSet,
	io::{BufRead, BufReader, Read},
	path::Path,
};

use log::{debug, warn};

use super::{
	error::SheetError,
	file::{SheetBuilder, SpriteSheet},
	frame::Frame,
	tag::{Direction, Tag},
};

pub use self::parse_config::ParseConfig;

/// One parsed listing line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
	tag: Option<String>,
	x: i32,
	y: i32,
	w: u32,
	h: u32,
}

/// Parses a single non-blank line.
fn parse_line(line_no: usize, line: &str) -> Result<Entry, SheetError> {
	let Some((name, numbers)) = line.split_once('=') else {
		return Err(SheetError::malformed_line(line_no, "expected 'name = x y w h'"));
	};

	let tag = name
		.trim()
		.split_once('/')
		.map(|(tag, _)| tag.trim())
		.filter(|tag| !tag.is_empty())
		.map(str::to_string);

	let fields: Vec<&str> = numbers.split_whitespace().collect();
	let &[x, y, w, h] = fields.as_slice() else {
		return Err(SheetError::malformed_line(
			line_no,
			format!("expected 4 values after '=', found {}", fields.len()),
		));
	};

	let int = |value: &str| {
		value
			.parse::<i32>()
			.map_err(|e| SheetError::malformed_line(line_no, format!("'{value}': {e}")))
	};
	let size = |value: &str| {
		value
			.parse::<u32>()
			.map_err(|e| SheetError::malformed_line(line_no, format!("'{value}': {e}")))
	};

	Ok(Entry {
		tag,
		x: int(x)?,
		y: int(y)?,
		w: size(w)?,
		h: size(h)?,
	})
}

/// Parses a listing from any reader.
///
/// `name` is the listing's file name; it only serves to derive the image path.
///
/// # Errors
///
/// Returns an error if:
/// - reading fails
/// - a line is malformed ([`SheetError::MalformedLine`])
/// - a tag prefix comes back after a gap ([`SheetError::NonContiguousTag`])
/// - the listing is empty or the configured duration is invalid
pub fn from_reader<R: Read>(
	reader: R,
	name: impl AsRef<Path>,
	config: &ParseConfig,
) -> Result<SpriteSheet, SheetError> {
	parse(reader, name.as_ref(), config, None)
}

/// Parses a listing held in memory.
pub fn from_str(
	text: &str,
	name: impl AsRef<Path>,
	config: &ParseConfig,
) -> Result<SpriteSheet, SheetError> {
	parse(text.as_bytes(), name.as_ref(), config, None)
}

/// Opens and parses a listing file, recording `path` on the sheet.
///
/// # Examples
///
/// ```no_run
/// use aseplay_types::sheet::listing::{self, ParseConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let sheet = listing::open("assets/explosion.txt", &ParseConfig::from_fps(24.0))?;
/// assert_eq!(sheet.image_path().to_str(), Some("assets/explosion.png"));
/// # Ok(())
/// # }
/// ```
pub fn open(path: impl AsRef<Path>, config: &ParseConfig) -> Result<SpriteSheet, SheetError> {
	let path = path.as_ref();
	let file = std::fs::File::open(path)?;
	parse(file, path, config, Some(path))
}

fn parse<R: Read>(
	reader: R,
	name: &Path,
	config: &ParseConfig,
	source_path: Option<&Path>,
) -> Result<SpriteSheet, SheetError> {
	let image_path = name.with_extension(config.image_extension);

	let mut entries = Vec::new();
	let mut line_numbers = Vec::new();
	for (index, line) in BufReader::new(reader).lines().enumerate() {
		let line = line?;
		let line = line.trim();
		if line.is_empty() {
			continue;
		}
		entries.push(parse_line(index + 1, line)?);
		line_numbers.push(index + 1);
	}

	let Some(first) = entries.first() else {
		return Err(SheetError::NoFrames);
	};
	let (frame_width, frame_height) = (first.w, first.h);

	let mut sheet_width = 0i64;
	let mut sheet_height = 0i64;
	let mut size_mismatch = false;
	for entry in &entries {
		sheet_width = sheet_width.max(i64::from(entry.x) + i64::from(entry.w));
		sheet_height = sheet_height.max(i64::from(entry.y) + i64::from(entry.h));
		size_mismatch |= entry.w != frame_width || entry.h != frame_height;
	}
	if size_mismatch {
		warn!(
			"Listing {} has frames of different sizes, using {}x{}",
			name.display(),
			frame_width,
			frame_height
		);
	}

	let clamp = |value: i64| u32::try_from(value.max(0)).unwrap_or(u32::MAX);
	let mut builder = SheetBuilder::new(clamp(sheet_width), clamp(sheet_height));
	builder.frame_size(frame_width, frame_height).image_path(image_path);
	if let Some(path) = source_path {
		builder.source_path(path);
	}

	// Current group: tag name and first frame index
	let mut group: Option<(String, usize)> = None;
	let mut finished = HashSet::new();

	for (index, entry) in entries.iter().enumerate() {
		builder.add_frame(Frame::new(entry.x, entry.y, config.frame_duration));

		if group.as_ref().map(|(name, _)| name) == entry.tag.as_ref() {
			continue;
		}

		if let Some((name, start)) = group.take() {
			builder.add_tag(Tag::new(name.clone(), start, index - 1, Direction::Forward));
			finished.insert(name);
		}

		if let Some(name) = &entry.tag {
			if finished.contains(name) {
				return Err(SheetError::NonContiguousTag {
					line: line_numbers[index],
					name: name.clone(),
				});
			}
			group = Some((name.clone(), index));
		}
	}

	if let Some((name, start)) = group {
		builder.add_tag(Tag::new(name, start, entries.len() - 1, Direction::Forward));
	}

	let sheet = builder.build()?;
	debug!(
		"Parsed listing {}: {} frames, {} tags",
		name.display(),
		sheet.frame_count(),
		sheet.tags().len() - 1
	);
	Ok(sheet)
}
