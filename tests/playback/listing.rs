//! Plain-text listing parsing and playback

use std::sync::Arc;

use aseplay_rs::prelude::*;

use crate::{data_path, drain, journal};

fn explosion() -> Arc<SpriteSheet> {
	Arc::new(listing::open(data_path("explosion.txt"), &ParseConfig::from_fps(8.0)).unwrap())
}

#[test_log::test]
fn test_open_explosion_listing() {
	let sheet = explosion();

	assert_eq!(sheet.path(), Some(data_path("explosion.txt").as_path()));
	assert_eq!(sheet.image_path(), data_path("explosion.png").as_path());
	assert_eq!(sheet.frame_count(), 8);
	assert_eq!((sheet.width(), sheet.height()), (96, 96));
	assert_eq!((sheet.frame_width(), sheet.frame_height()), (32, 32));
	assert!(sheet.frames().iter().all(|frame| frame.duration() == 0.125));

	let spark = sheet.tag("spark").unwrap();
	assert_eq!((spark.start(), spark.end()), (0, 2));
	let burst = sheet.tag("burst").unwrap();
	assert_eq!((burst.start(), burst.end()), (3, 6));
	assert_eq!(burst.len(), 4);
	assert!(sheet.tag("smoke0007").is_none());
}

#[test]
fn test_burst_loops() {
	let mut player = Player::new(explosion());
	let journal = journal(&mut player);
	player.play("burst").unwrap();
	assert_eq!(drain(&journal), vec!["exit spark", "enter burst"]);

	player.advance(0.5);
	assert_eq!(player.frame_index(), 3);
	assert_eq!(player.current_frame_rect().to_tuple(), (0, 32, 32, 64));
	assert_eq!(drain(&journal), vec!["frame 4", "frame 5", "frame 6", "loop", "frame 3"]);

	let touching: Vec<&str> = player.touching_tags().into_iter().map(Tag::name).collect();
	assert_eq!(touching, vec!["", "burst"]);
}

#[test]
fn test_full_sequence_crosses_groups() {
	let mut player = Player::new(explosion());
	let journal = journal(&mut player);
	player.play("").unwrap();
	assert!(drain(&journal).is_empty());

	player.advance(1.0);
	assert_eq!(player.frame_index(), 0);
	assert_eq!(
		drain(&journal),
		vec![
			"frame 1",
			"frame 2",
			"frame 3",
			"exit spark",
			"enter burst",
			"frame 4",
			"frame 5",
			"frame 6",
			"frame 7",
			"exit burst",
			"loop",
			"frame 0",
			"enter spark",
		]
	);
}

#[test]
fn test_uv_walks_the_grid() {
	let mut player = Player::new(explosion());
	player.play("burst").unwrap();
	player.set_frame_index(3);

	assert_eq!(player.frame_index(), 6);
	assert_eq!(player.current_uv(), Uv::from_pixel(0, 64, 96, 96));
	assert!((player.current_uv().v - 2.0 / 3.0).abs() < 1e-12);

	player.advance(0.125);
	assert_eq!(player.frame_index(), 3);
	let delta = player.current_uv_delta();
	assert_eq!(delta.u, 0.0);
	assert!((delta.v + 1.0 / 3.0).abs() < 1e-12);
}
