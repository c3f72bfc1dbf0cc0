//! Frame addressing helpers for rendering collaborators.
//!
//! Rectangles are in sheet pixels; UV coordinates are the frame origin divided
//! by the sheet size. Both types carry a `NONE` sentinel (all components `-1`)
//! that players hand out while idle, so render loops can skip an explicit
//! "no animation" branch.

/// Pixel rectangle of a frame, as `(x0, y0)` inclusive to `(x1, y1)` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
	/// Left edge
	pub x0: i32,
	/// Top edge
	pub y0: i32,
	/// Right edge (exclusive)
	pub x1: i32,
	/// Bottom edge (exclusive)
	pub y1: i32,
}

impl Rect {
	/// Sentinel returned when there is no current frame
	pub const NONE: Self = Self {
		x0: -1,
		y0: -1,
		x1: -1,
		y1: -1,
	};

	/// Creates a rectangle from its origin and size.
	///
	/// Far edges saturate at `i32::MAX`.
	pub fn from_origin_size(x: i32, y: i32, width: u32, height: u32) -> Self {
		Self {
			x0: x,
			y0: y,
			x1: x.saturating_add(i32::try_from(width).unwrap_or(i32::MAX)),
			y1: y.saturating_add(i32::try_from(height).unwrap_or(i32::MAX)),
		}
	}

	/// Returns `true` for the [`Rect::NONE`] sentinel.
	pub fn is_none(&self) -> bool {
		*self == Self::NONE
	}

	/// Width in pixels
	pub fn width(&self) -> i32 {
		self.x1.saturating_sub(self.x0)
	}

	/// Height in pixels
	pub fn height(&self) -> i32 {
		self.y1.saturating_sub(self.y0)
	}

	/// The rectangle as an `(x0, y0, x1, y1)` tuple.
	pub fn to_tuple(self) -> (i32, i32, i32, i32) {
		(self.x0, self.y0, self.x1, self.y1)
	}
}

/// Normalized sheet coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Uv {
	/// Horizontal coordinate, `0.0..1.0` for points on the sheet
	pub u: f64,
	/// Vertical coordinate, `0.0..1.0` for points on the sheet
	pub v: f64,
}

impl Uv {
	/// Sentinel returned when there is no current frame
	pub const NONE: Self = Self {
		u: -1.0,
		v: -1.0,
	};

	/// Creates a UV coordinate.
	pub fn new(u: f64, v: f64) -> Self {
		Self {
			u,
			v,
		}
	}

	/// UV of pixel `(x, y)` on a sheet of `width` x `height` pixels.
	pub fn from_pixel(x: i32, y: i32, width: u32, height: u32) -> Self {
		Self::new(f64::from(x) / f64::from(width), f64::from(y) / f64::from(height))
	}

	/// Returns `true` for the [`Uv::NONE`] sentinel.
	pub fn is_none(&self) -> bool {
		*self == Self::NONE
	}

	/// Movement from `previous` to `self`.
	///
	/// # Examples
	///
	/// ```
	/// use aseplay_types::sheet::Uv;
	///
	/// let delta = Uv::new(0.5, 0.0).delta_from(Uv::new(0.25, 0.0));
	/// assert_eq!(delta, Uv::new(0.25, 0.0));
	/// ```
	pub fn delta_from(self, previous: Self) -> Self {
		Self::new(self.u - previous.u, self.v - previous.v)
	}
}
