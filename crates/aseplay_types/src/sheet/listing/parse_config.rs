//! Parse configuration for plain-text spritesheet listings.
//!
//! A listing only describes where frames sit on the sheet, so everything
//! else a [`SpriteSheet`](crate::sheet::SpriteSheet) needs comes from here.

/// Configuration for parsing spritesheet listings.
///
/// # Presets
///
/// - `default()`: 100 ms per frame, `png` images
/// - `from_fps(fps)`: uniform duration derived from a frame rate
///
/// # Examples
///
/// ```
/// use aseplay_types::sheet::listing::ParseConfig;
///
/// // Use default configuration
/// let config = ParseConfig::default();
/// assert_eq!(config.image_extension, "png");
///
/// // 12 frames per second, sheets stored as WebP
/// let config = ParseConfig::from_fps(12.0).with_image_extension("webp");
/// assert_eq!(config.image_extension, "webp");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParseConfig {
	/// Duration of every frame in seconds
	pub frame_duration: f32,
	/// Extension substituted into the listing name to derive the image path
	pub image_extension: &'static str,
}

impl Default for ParseConfig {
	fn default() -> Self {
		Self {
			frame_duration: 0.1,
			image_extension: "png",
		}
	}
}

impl ParseConfig {
	/// Create a configuration with a uniform frame duration in seconds.
	pub fn new(frame_duration: f32) -> Self {
		Self {
			frame_duration,
			..Self::default()
		}
	}

	/// Create a configuration playing `fps` frames per second.
	pub fn from_fps(fps: f32) -> Self {
		Self::new(1.0 / fps)
	}

	/// Replace the image extension.
	pub fn with_image_extension(mut self, extension: &'static str) -> Self {
		self.image_extension = extension;
		self
	}
}
