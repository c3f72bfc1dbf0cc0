//! Aseprite export decoding and playback

use std::sync::Arc;

use aseplay_rs::prelude::*;

use crate::{data_path, drain, journal};

fn hero() -> Arc<SpriteSheet> {
	Arc::new(aseprite::open(data_path("hero.json")).unwrap())
}

#[test_log::test]
fn test_open_hero_export() {
	let sheet = hero();

	assert_eq!(sheet.path(), Some(data_path("hero.json").as_path()));
	assert_eq!(sheet.image_path().to_str(), Some("hero.png"));
	assert_eq!((sheet.width(), sheet.height()), (176, 16));
	assert_eq!((sheet.frame_width(), sheet.frame_height()), (16, 16));
	assert_eq!(sheet.frame_count(), 11);

	// Hash frames are ordered by frame number, not by name
	let xs: Vec<i32> = sheet.frames().iter().map(Frame::x).collect();
	assert_eq!(xs, (0..11).map(|i| i * 16).collect::<Vec<_>>());
	assert_eq!(sheet.frame(4).map(Frame::duration_ms), Some(500));

	let tags: Vec<(&str, usize, usize, Direction)> = sheet
		.tags()
		.iter()
		.map(|tag| (tag.name(), tag.start(), tag.end(), tag.direction()))
		.collect();
	assert_eq!(
		tags,
		vec![
			("", 0, 10, Direction::Forward),
			("idle", 0, 1, Direction::Forward),
			("run", 2, 7, Direction::Forward),
			("slash", 6, 8, Direction::Backward),
			("hover", 9, 10, Direction::PingPong),
		]
	);

	assert_eq!(sheet.layers().len(), 2);
	assert_eq!(sheet.layers()[0].opacity, 128);
	assert_eq!(sheet.layers()[0].blend_mode, "multiply");

	let pivot = sheet.slice_by_name("pivot").unwrap();
	assert_eq!(pivot.color, 0xFF00_00FF);
	assert_eq!(pivot.data, "feet");
	assert_eq!(sheet.slice_by_name("hitbox").map(|s| s.keys[0].center()), Some((8, 9)));
}

#[test]
fn test_reader_and_file_agree() {
	let opened = aseprite::open(data_path("hero.json")).unwrap();
	let file = std::fs::File::open(data_path("hero.json")).unwrap();
	let read = aseprite::from_reader(file).unwrap();

	assert_eq!(read.path(), None);
	assert_eq!(read.frames(), opened.frames());
	assert_eq!(read.tags(), opened.tags());
	assert_eq!(read.slices(), opened.slices());
}

#[test_log::test]
fn test_run_with_uneven_durations() {
	let mut player = Player::new(hero());
	let journal = journal(&mut player);

	player.play("run").unwrap();
	assert_eq!(drain(&journal), vec!["exit idle", "enter run"]);

	// Frames 2 and 3 last 0.125s, frame 4 lasts 0.5s
	player.advance(0.25);
	assert_eq!(player.frame_index(), 4);
	player.advance(0.375);
	assert_eq!(player.frame_index(), 4);
	player.advance(0.125);
	assert_eq!(player.frame_index(), 5);
	assert_eq!(drain(&journal), vec!["frame 3", "frame 4", "frame 5"]);

	player.advance(0.375);
	assert_eq!(player.frame_index(), 2);
	assert_eq!(
		drain(&journal),
		vec!["frame 6", "enter slash", "frame 7", "loop", "frame 2", "exit slash"]
	);
}

#[test]
fn test_slash_plays_backward() {
	let mut player = Player::new(hero());
	let journal = journal(&mut player);

	player.play("slash").unwrap();
	assert_eq!(player.frame_index(), 8);
	assert_eq!(player.play_direction(), PlayDirection::Backward);
	assert!(drain(&journal).contains(&"enter slash".to_string()));

	player.advance(0.375);
	assert_eq!(player.frame_index(), 8);
	assert_eq!(
		drain(&journal),
		vec!["frame 7", "enter run", "frame 6", "loop", "frame 8", "exit run"]
	);
}

#[test]
fn test_switching_tags_enters_every_covering_tag() {
	let mut player = Player::new(hero());
	let journal = journal(&mut player);

	player.play("idle").unwrap();
	drain(&journal);

	player.play("slash").unwrap();
	assert_eq!(drain(&journal), vec!["enter ", "enter slash"]);
	assert_eq!(player.prev_frame_index(), None);
}

#[test]
fn test_hover_pingpong() {
	let mut player = Player::new(hero());
	let journal = journal(&mut player);
	player.play("hover").unwrap();
	drain(&journal);

	for expected in [10, 9, 10, 9] {
		player.advance(0.125);
		assert_eq!(player.frame_index(), expected);
	}
	assert_eq!(
		drain(&journal),
		vec!["frame 10", "frame 9", "loop", "frame 10", "frame 9"]
	);
}

#[test]
fn test_players_share_one_sheet() {
	let sheet = hero();
	let mut idle = Player::new(Arc::clone(&sheet));
	let mut run = Player::new(Arc::clone(&sheet));
	assert_eq!(Arc::strong_count(&sheet), 3);

	idle.play("idle").unwrap();
	run.play("run").unwrap();
	for _ in 0..4 {
		idle.advance(0.125);
		run.advance(0.125);
	}

	assert_eq!(idle.frame_index(), 0);
	assert_eq!(run.frame_index(), 4);
	assert_eq!(idle.current_frame_rect().to_tuple(), (0, 0, 16, 16));
	assert_eq!(run.current_frame_rect().to_tuple(), (64, 0, 80, 16));
}
