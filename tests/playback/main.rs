//! Playback tests for `aseplay-rs`

mod aseprite;
mod listing;

use std::{
	path::PathBuf,
	sync::{Arc, Mutex},
};

use aseplay_rs::Player;

/// Path of a file under `tests/data`
pub(crate) fn data_path(name: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data").join(name)
}

/// Notifications rendered as short strings, in emission order
pub(crate) type Journal = Arc<Mutex<Vec<String>>>;

/// Records every notification of `player`.
pub(crate) fn journal(player: &mut Player) -> Journal {
	let journal = Journal::default();

	let sink = Arc::clone(&journal);
	player.on_loop(move |_| sink.lock().unwrap().push("loop".to_string()));
	let sink = Arc::clone(&journal);
	player.on_frame_change(move |_, index| sink.lock().unwrap().push(format!("frame {index}")));
	let sink = Arc::clone(&journal);
	player.on_tag_exit(move |_, tag| sink.lock().unwrap().push(format!("exit {}", tag.name())));
	let sink = Arc::clone(&journal);
	player.on_tag_enter(move |_, tag| sink.lock().unwrap().push(format!("enter {}", tag.name())));

	journal
}

/// Drains the recorded notifications.
pub(crate) fn drain(journal: &Journal) -> Vec<String> {
	std::mem::take(&mut *journal.lock().unwrap())
}
