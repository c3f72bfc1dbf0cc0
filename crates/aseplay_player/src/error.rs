//! Error types for playback control.

use thiserror::Error;

/// Errors returned by [`Player`](crate::Player) operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
	/// The sheet has no tag with this name; the player state is unchanged
	#[error("No tag named '{name}'")]
	UnknownTag {
		/// Requested tag name
		name: String,
	},
}
