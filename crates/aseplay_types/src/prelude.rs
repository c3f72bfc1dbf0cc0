//! Prelude module for `aseplay_types`.
//!
//! This module provides a convenient way to import commonly used types.
//!
//! # Examples
//!
//! ```
//! use aseplay_types::prelude::*;
//!
//! // Now you can use all common types directly
//! let mut builder = SheetBuilder::new(32, 16);
//! builder.add_frame(Frame::new(0, 0, 0.1)).add_frame(Frame::new(16, 0, 0.1));
//! let sheet = builder.build().unwrap();
//! assert_eq!(sheet.tag("").map(Tag::len), Some(2));
//! ```

#[doc(inline)]
pub use crate::sheet::{
	// Geometry
	Rect,
	Uv,

	// Sheet types
	Direction,
	Frame,
	SheetBuilder,
	SheetError,
	SpriteSheet,
	Tag,

	// Metadata
	Layer,
	Slice,
	SliceKey,
};

// Ingestion
#[doc(inline)]
pub use crate::sheet::listing::ParseConfig;
#[doc(inline)]
pub use crate::sheet::{aseprite, listing};

// Re-export the sheet module for advanced usage
#[doc(inline)]
pub use crate::sheet;
