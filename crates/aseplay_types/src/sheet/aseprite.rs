//! Aseprite JSON export support.
//!
//! Aseprite's "Export Sprite Sheet" writes a JSON document next to the sheet
//! image. Two layouts exist for the `frames` field and both are accepted:
//!
//! ```text
//! "frames": { "hero 0.aseprite": { ... }, "hero 1.aseprite": { ... } }   // hash
//! "frames": [ { "filename": "hero 0.aseprite", ... }, ... ]              // array
//! ```
//!
//! Hash entries carry no order of their own, so they are sorted by the frame
//! number Aseprite embeds between the last space and the last dot of the
//! name. Array entries are taken in export order.
//!
//! Per frame, only `frame.x`, `frame.y`, `duration` (milliseconds) and, for the
//! first frame, `sourceSize` are read. From `meta`: `size`, `image`,
//! `frameTags`, `layers` and `slices`.
//!
//! # Examples
//!
//! ```
//! use aseplay_types::sheet::aseprite;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let json = r#"{
//!     "frames": {
//!         "hero 1.aseprite": { "frame": { "x": 16, "y": 0, "w": 16, "h": 16 },
//!                              "sourceSize": { "w": 16, "h": 16 }, "duration": 100 },
//!         "hero 0.aseprite": { "frame": { "x": 0, "y": 0, "w": 16, "h": 16 },
//!                              "sourceSize": { "w": 16, "h": 16 }, "duration": 150 }
//!     },
//!     "meta": {
//!         "image": "hero.png",
//!         "size": { "w": 32, "h": 16 },
//!         "frameTags": [ { "name": "idle", "from": 0, "to": 1, "direction": "pingpong" } ]
//!     }
//! }"#;
//!
//! let sheet = aseprite::from_slice(json.as_bytes())?;
//! assert_eq!(sheet.frame_count(), 2);
//! assert_eq!(sheet.frame(0).map(|f| f.duration_ms()), Some(150));
//! assert!(sheet.tag("idle").is_some());
//! # Ok(())
//! # }
//! ```

use std::{collections::HashMap, io::Read, path::Path};

use log::{debug, warn};
use serde::Deserialize;

use super::{
	error::SheetError,
	file::{SheetBuilder, SpriteSheet},
	frame::Frame,
	meta::{Layer, Slice, SliceKey, parse_color},
	tag::{Direction, Tag},
};

#[derive(Debug, Deserialize)]
struct RawExport {
	frames: RawFrames,
	meta: RawMeta,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawFrames {
	Hash(HashMap<String, RawFrame>),
	Array(Vec<RawFrame>),
}

#[derive(Debug, Deserialize)]
struct RawFrame {
	frame: RawRect,
	#[serde(default, rename = "sourceSize")]
	source_size: Option<RawSize>,
	duration: u32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct RawRect {
	x: i32,
	y: i32,
	w: i32,
	h: i32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct RawSize {
	w: u32,
	h: u32,
}

#[derive(Debug, Deserialize)]
struct RawMeta {
	#[serde(default)]
	image: String,
	size: RawSize,
	#[serde(default, rename = "frameTags")]
	frame_tags: Vec<RawTag>,
	#[serde(default)]
	layers: Vec<RawLayer>,
	#[serde(default)]
	slices: Vec<RawSlice>,
}

#[derive(Debug, Deserialize)]
struct RawTag {
	name: String,
	from: usize,
	to: usize,
	#[serde(default)]
	direction: String,
}

#[derive(Debug, Deserialize)]
struct RawLayer {
	name: String,
	#[serde(default = "opaque")]
	opacity: u8,
	#[serde(default, rename = "blendMode")]
	blend_mode: String,
}

fn opaque() -> u8 {
	u8::MAX
}

#[derive(Debug, Deserialize)]
struct RawSlice {
	name: String,
	#[serde(default)]
	data: String,
	color: String,
	#[serde(default)]
	keys: Vec<RawSliceKey>,
}

#[derive(Debug, Deserialize)]
struct RawSliceKey {
	frame: u32,
	bounds: RawRect,
}

/// Decodes an Aseprite JSON export from a byte slice.
///
/// # Errors
///
/// Returns [`SheetError::Json`] for malformed or incomplete JSON, and any
/// validation error of [`SheetBuilder::build`].
pub fn from_slice(data: &[u8]) -> Result<SpriteSheet, SheetError> {
	let raw: RawExport = serde_json::from_slice(data)?;
	decode(raw, None)
}

/// Decodes an Aseprite JSON export from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<SpriteSheet, SheetError> {
	let raw: RawExport = serde_json::from_reader(reader)?;
	decode(raw, None)
}

/// Opens and decodes an Aseprite JSON export, recording `path` on the sheet.
///
/// # Examples
///
/// ```no_run
/// use aseplay_types::sheet::aseprite;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let sheet = aseprite::open("hero.json")?;
/// println!("{} -> {}", sheet, sheet.image_path().display());
/// # Ok(())
/// # }
/// ```
pub fn open(path: impl AsRef<Path>) -> Result<SpriteSheet, SheetError> {
	let path = path.as_ref();
	let data = std::fs::read(path)?;
	let raw: RawExport = serde_json::from_slice(&data)?;
	decode(raw, Some(path))
}

/// Frame number embedded in an Aseprite frame name, e.g. `12` in `"hero 12.aseprite"`.
fn frame_number(name: &str) -> Option<u64> {
	let start = name.rfind(' ').map_or(0, |i| i + 1);
	let end = name.rfind('.')?;
	name.get(start..end)?.parse().ok()
}

fn ordered_frames(frames: RawFrames) -> Vec<RawFrame> {
	match frames {
		RawFrames::Array(frames) => frames,
		RawFrames::Hash(frames) => {
			let mut named: Vec<(String, RawFrame)> = frames.into_iter().collect();
			named.sort_by(|(a, _), (b, _)| (frame_number(a), a).cmp(&(frame_number(b), b)));
			named.into_iter().map(|(_, frame)| frame).collect()
		}
	}
}

fn decode(raw: RawExport, path: Option<&Path>) -> Result<SpriteSheet, SheetError> {
	let RawExport {
		frames,
		meta,
	} = raw;

	let mut builder = SheetBuilder::new(meta.size.w, meta.size.h);
	builder.image_path(meta.image);
	if let Some(path) = path {
		builder.source_path(path);
	}

	let frames = ordered_frames(frames);
	if let Some(first) = frames.first() {
		let size = first.source_size.unwrap_or(RawSize {
			w: first.frame.w.max(0) as u32,
			h: first.frame.h.max(0) as u32,
		});
		builder.frame_size(size.w, size.h);
	}
	for frame in &frames {
		builder.add_frame(Frame::from_millis(frame.frame.x, frame.frame.y, frame.duration));
	}

	let tag_count = meta.frame_tags.len();
	for tag in meta.frame_tags {
		let direction = Direction::from_export_str(&tag.direction).unwrap_or_else(|| {
			warn!("Tag '{}' has unknown direction '{}', playing forward", tag.name, tag.direction);
			Direction::Forward
		});
		builder.add_tag(Tag::new(tag.name, tag.from, tag.to, direction));
	}

	for layer in meta.layers {
		builder.add_layer(Layer {
			name: layer.name,
			opacity: layer.opacity,
			blend_mode: layer.blend_mode,
		});
	}

	for slice in meta.slices {
		let color = parse_color(&slice.color)?;
		let keys = slice
			.keys
			.iter()
			.map(|key| SliceKey {
				frame: key.frame,
				x: key.bounds.x,
				y: key.bounds.y,
				w: key.bounds.w,
				h: key.bounds.h,
			})
			.collect();
		builder.add_slice(Slice {
			name: slice.name,
			data: slice.data,
			color,
			keys,
		});
	}

	let sheet = builder.build()?;
	debug!("Decoded Aseprite export: {} frames, {} tags", sheet.frame_count(), tag_count);
	Ok(sheet)
}
