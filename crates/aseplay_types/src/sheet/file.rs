//! Spritesheet structure shared by every player.
//!
//! This module defines [`SpriteSheet`], the immutable animation descriptor,
//! and [`SheetBuilder`], the only way to create one. The builder validates
//! everything the playback code relies on, so a built sheet never needs to be
//! checked again.

use std::{
	collections::HashMap,
	path::{Path, PathBuf},
};

use super::{
	error::SheetError,
	frame::Frame,
	geometry::{Rect, Uv},
	meta::{Layer, Slice},
	tag::{Direction, Tag},
};

/// Immutable animation descriptor: frames, tags and sheet metadata.
///
/// A sheet is built once (by [`aseprite`](super::aseprite),
/// [`listing`](super::listing) or a [`SheetBuilder`]) and then shared,
/// typically behind an `Arc`, by any number of players.
///
/// Invariants upheld by construction:
/// - there is at least one frame, and every frame has a positive duration
/// - the tag with the empty name exists and spans every frame
/// - every tag range lies inside the frame list and tag names are unique
/// - the sheet size is non-zero
///
/// # Examples
///
/// ```
/// use aseplay_types::sheet::{Direction, Frame, SheetBuilder, Tag};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut builder = SheetBuilder::new(64, 16);
/// builder.frame_size(16, 16);
/// for i in 0..4 {
///     builder.add_frame(Frame::new(i * 16, 0, 0.1));
/// }
/// builder.add_tag(Tag::new("blink", 2, 3, Direction::PingPong));
/// let sheet = builder.build()?;
///
/// assert_eq!(sheet.frame_count(), 4);
/// assert_eq!(sheet.tag("").map(|t| (t.start(), t.end())), Some((0, 3)));
/// assert_eq!(sheet.tags_at(2).count(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSheet {
	/// Path the sheet was opened from, if it was loaded from disk
	path: Option<PathBuf>,

	/// Path of the image the frames refer to
	image_path: PathBuf,

	/// Overall sheet size in pixels
	width: u32,
	height: u32,

	/// Size shared by every frame
	frame_width: u32,
	frame_height: u32,

	frames: Vec<Frame>,

	/// Tags in declaration order, the full-range tag first
	tags: Vec<Tag>,
	tag_lookup: HashMap<String, usize>,

	layers: Vec<Layer>,
	slices: Vec<Slice>,
}

impl SpriteSheet {
	/// Path the sheet was opened from; `None` when decoded from memory.
	pub fn path(&self) -> Option<&Path> {
		self.path.as_deref()
	}

	/// Path of the sheet image
	pub fn image_path(&self) -> &Path {
		&self.image_path
	}

	/// Sheet width in pixels
	pub fn width(&self) -> u32 {
		self.width
	}

	/// Sheet height in pixels
	pub fn height(&self) -> u32 {
		self.height
	}

	/// Frame width in pixels
	pub fn frame_width(&self) -> u32 {
		self.frame_width
	}

	/// Frame height in pixels
	pub fn frame_height(&self) -> u32 {
		self.frame_height
	}

	/// Number of frames (always at least one)
	pub fn frame_count(&self) -> usize {
		self.frames.len()
	}

	/// All frames in playback order
	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// Frame at `index`, or `None` when out of bounds.
	pub fn frame(&self, index: usize) -> Option<&Frame> {
		self.frames.get(index)
	}

	/// All tags, the full-range tag first.
	pub fn tags(&self) -> &[Tag] {
		&self.tags
	}

	/// Looks up a tag by name. The empty name always resolves.
	pub fn tag(&self, name: &str) -> Option<&Tag> {
		self.tag_index(name).map(|index| &self.tags[index])
	}

	/// Position of the named tag in [`tags`](Self::tags).
	pub fn tag_index(&self, name: &str) -> Option<usize> {
		self.tag_lookup.get(name).copied()
	}

	/// Every tag whose range contains `frame_index`.
	pub fn tags_at(&self, frame_index: usize) -> impl Iterator<Item = &Tag> {
		self.tags.iter().filter(move |tag| tag.contains(frame_index))
	}

	/// Layers in export order
	pub fn layers(&self) -> &[Layer] {
		&self.layers
	}

	/// Slices in export order
	pub fn slices(&self) -> &[Slice] {
		&self.slices
	}

	/// First slice with the given name. Slice names are not unique.
	pub fn slice_by_name(&self, name: &str) -> Option<&Slice> {
		self.slices.iter().find(|slice| slice.name == name)
	}

	/// Returns `true` if a slice with the given name exists.
	pub fn has_slice(&self, name: &str) -> bool {
		self.slice_by_name(name).is_some()
	}

	/// Pixel rectangle of the frame at `index`.
	pub fn frame_rect(&self, index: usize) -> Option<Rect> {
		self.frame(index).map(|frame| {
			Rect::from_origin_size(frame.x(), frame.y(), self.frame_width, self.frame_height)
		})
	}

	/// UV origin of the frame at `index`.
	pub fn frame_uv(&self, index: usize) -> Option<Uv> {
		self.frame(index).map(|frame| Uv::from_pixel(frame.x(), frame.y(), self.width, self.height))
	}
}

impl std::fmt::Display for SpriteSheet {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"SpriteSheet({}x{}, {} frames of {}x{}, {} tags)",
			self.width,
			self.height,
			self.frames.len(),
			self.frame_width,
			self.frame_height,
			self.tags.len()
		)
	}
}

/// Builder for [`SpriteSheet`].
///
/// Collects frames, tags and metadata, then validates them all at once in
/// [`build`](Self::build). The full-range tag is added automatically and must
/// not be added by hand.
#[derive(Debug, Clone, Default)]
pub struct SheetBuilder {
	path: Option<PathBuf>,
	image_path: PathBuf,
	width: u32,
	height: u32,
	frame_width: u32,
	frame_height: u32,
	frames: Vec<Frame>,
	tags: Vec<Tag>,
	layers: Vec<Layer>,
	slices: Vec<Slice>,
}

impl SheetBuilder {
	/// Creates a builder for a sheet of `width` x `height` pixels.
	pub fn new(width: u32, height: u32) -> Self {
		Self {
			width,
			height,
			..Self::default()
		}
	}

	/// Sets the size shared by every frame.
	pub fn frame_size(&mut self, width: u32, height: u32) -> &mut Self {
		self.frame_width = width;
		self.frame_height = height;
		self
	}

	/// Sets the image path.
	pub fn image_path(&mut self, path: impl Into<PathBuf>) -> &mut Self {
		self.image_path = path.into();
		self
	}

	/// Records the path the sheet was read from.
	pub fn source_path(&mut self, path: impl Into<PathBuf>) -> &mut Self {
		self.path = Some(path.into());
		self
	}

	/// Appends a frame.
	pub fn add_frame(&mut self, frame: Frame) -> &mut Self {
		self.frames.push(frame);
		self
	}

	/// Appends a tag.
	pub fn add_tag(&mut self, tag: Tag) -> &mut Self {
		self.tags.push(tag);
		self
	}

	/// Appends a layer.
	pub fn add_layer(&mut self, layer: Layer) -> &mut Self {
		self.layers.push(layer);
		self
	}

	/// Appends a slice.
	pub fn add_slice(&mut self, slice: Slice) -> &mut Self {
		self.slices.push(slice);
		self
	}

	/// Number of frames added so far
	pub fn frame_count(&self) -> usize {
		self.frames.len()
	}

	/// Validates the collected data and builds the sheet.
	///
	/// # Errors
	///
	/// Returns an error if:
	/// - no frame was added
	/// - a frame duration is not finite and positive
	/// - the sheet size is zero in either dimension
	/// - a tag range is inverted or exceeds the frame list
	/// - a tag name repeats or is empty
	pub fn build(self) -> Result<SpriteSheet, SheetError> {
		if self.frames.is_empty() {
			return Err(SheetError::NoFrames);
		}

		if let Some((index, frame)) =
			self.frames.iter().enumerate().find(|(_, frame)| !frame.is_playable())
		{
			return Err(SheetError::InvalidDuration {
				index,
				duration: frame.duration(),
			});
		}

		if self.width == 0 || self.height == 0 {
			return Err(SheetError::InvalidSheetSize {
				width: self.width,
				height: self.height,
			});
		}

		let frame_count = self.frames.len();
		let mut tags = Vec::with_capacity(self.tags.len() + 1);
		tags.push(Tag::new("", 0, frame_count - 1, Direction::Forward));

		let mut tag_lookup = HashMap::with_capacity(self.tags.len() + 1);
		tag_lookup.insert(String::new(), 0);

		for tag in self.tags {
			if tag.start() > tag.end() || tag.end() >= frame_count {
				return Err(SheetError::InvalidTagRange {
					name: tag.name().to_string(),
					start: tag.start(),
					end: tag.end(),
					frame_count,
				});
			}
			if tag_lookup.contains_key(tag.name()) {
				return Err(SheetError::DuplicateTag(tag.name().to_string()));
			}
			tag_lookup.insert(tag.name().to_string(), tags.len());
			tags.push(tag);
		}

		Ok(SpriteSheet {
			path: self.path,
			image_path: self.image_path,
			width: self.width,
			height: self.height,
			frame_width: self.frame_width,
			frame_height: self.frame_height,
			frames: self.frames,
			tags,
			tag_lookup,
			layers: self.layers,
			slices: self.slices,
		})
	}
}
