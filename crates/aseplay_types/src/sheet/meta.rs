//! Layer and slice metadata carried by Aseprite exports.
//!
//! None of this is needed for playback; it is kept on the sheet so callers can
//! look up hitboxes, pivots and similar authoring data by name.

use super::error::SheetError;

/// A layer as exported by Aseprite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
	/// Layer name
	pub name: String,
	/// Opacity (0-255)
	pub opacity: u8,
	/// Blend mode name, e.g. `normal` or `multiply`
	pub blend_mode: String,
}

/// Position and size of a [`Slice`] on one specific frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceKey {
	/// Frame the key applies from
	pub frame: u32,
	/// Left edge in pixels
	pub x: i32,
	/// Top edge in pixels
	pub y: i32,
	/// Width in pixels
	pub w: i32,
	/// Height in pixels
	pub h: i32,
}

impl SliceKey {
	/// Center of the key's bounds, rounded toward the top-left.
	///
	/// # Examples
	///
	/// ```
	/// use aseplay_types::sheet::SliceKey;
	///
	/// let key = SliceKey { frame: 0, x: 10, y: 20, w: 5, h: 8 };
	/// assert_eq!(key.center(), (12, 24));
	/// ```
	pub fn center(&self) -> (i32, i32) {
		(self.x + self.w / 2, self.y + self.h / 2)
	}
}

/// A named rectangle defined in Aseprite, optionally animated through keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slice {
	/// Slice name; several slices may share a name
	pub name: String,
	/// User data attached on export (empty by default)
	pub data: String,
	/// Color as `0xRRGGBBAA`
	pub color: u32,
	/// Per-frame positions and sizes
	pub keys: Vec<SliceKey>,
}

/// Parses an Aseprite `#rrggbbaa` color string into `0xRRGGBBAA`.
///
/// Six-digit colors are accepted and treated as fully opaque.
pub fn parse_color(value: &str) -> Result<u32, SheetError> {
	let invalid = || SheetError::InvalidColor(value.to_string());
	let Some(hex) = value.strip_prefix('#') else {
		return Err(invalid());
	};

	let rgba = match hex.len() {
		8 => u32::from_str_radix(hex, 16).map_err(|_| invalid())?,
		6 => (u32::from_str_radix(hex, 16).map_err(|_| invalid())? << 8) | 0xFF,
		_ => return Err(invalid()),
	};
	Ok(rgba)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_color() {
		assert_eq!(parse_color("#0000ffff").unwrap(), 0x0000_FFFF);
		assert_eq!(parse_color("#ff8000").unwrap(), 0xFF80_00FF);
	}

	#[test]
	fn test_parse_color_invalid() {
		assert!(matches!(parse_color("0000ffff"), Err(SheetError::InvalidColor(_))));
		assert!(matches!(parse_color("#00ff"), Err(SheetError::InvalidColor(_))));
		assert!(matches!(parse_color("#zz00ffff"), Err(SheetError::InvalidColor(_))));
	}
}
