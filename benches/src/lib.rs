//! Benchmark helper utilities for aseplay-rs
//!
//! This module provides generators for synthetic spritesheets, as JSON
//! exports, listings and ready-built sheets, so benchmarks do not depend on
//! asset files.

use std::fmt::Write;

use aseplay_types::sheet::{Direction, Frame, SheetBuilder, SpriteSheet, Tag};

/// Side length of every generated frame in pixels
pub const FRAME_SIZE: u32 = 32;

/// Frames per row of a generated sheet
pub const COLUMNS: usize = 16;

fn frame_origin(index: usize) -> (i32, i32) {
	let column = (index % COLUMNS) as i32;
	let row = (index / COLUMNS) as i32;
	(column * FRAME_SIZE as i32, row * FRAME_SIZE as i32)
}

fn sheet_size(frame_count: usize) -> (u32, u32) {
	let rows = frame_count.div_ceil(COLUMNS) as u32;
	(COLUMNS as u32 * FRAME_SIZE, rows.max(1) * FRAME_SIZE)
}

/// Tags covering `frame_count` frames in groups of `tag_len`, cycling
/// through every direction. Consecutive groups overlap by one frame.
pub fn generate_tags(frame_count: usize, tag_len: usize) -> Vec<Tag> {
	let directions = [Direction::Forward, Direction::Backward, Direction::PingPong];
	let tag_len = tag_len.max(1);
	let step = (tag_len - 1).max(1);

	(0..frame_count)
		.step_by(step)
		.enumerate()
		.filter(|&(_, start)| start + 1 < frame_count)
		.map(|(i, start)| {
			let end = (start + tag_len - 1).min(frame_count - 1);
			Tag::new(format!("tag{i}"), start, end, directions[i % directions.len()])
		})
		.collect()
}

/// Builds a sheet of `frame_count` frames with overlapping tags of `tag_len` frames.
pub fn generate_sheet(frame_count: usize, tag_len: usize, duration: f32) -> SpriteSheet {
	let (width, height) = sheet_size(frame_count);
	let mut builder = SheetBuilder::new(width, height);
	builder.frame_size(FRAME_SIZE, FRAME_SIZE).image_path("bench.png");

	for index in 0..frame_count {
		let (x, y) = frame_origin(index);
		builder.add_frame(Frame::new(x, y, duration));
	}
	for tag in generate_tags(frame_count, tag_len) {
		builder.add_tag(tag);
	}

	builder.build().expect("generated sheet is valid")
}

/// Generates an Aseprite JSON export in the hash layout.
pub fn generate_aseprite_json(frame_count: usize, tag_len: usize, duration_ms: u32) -> String {
	let (width, height) = sheet_size(frame_count);

	let frames: Vec<String> = (0..frame_count)
		.map(|index| {
			let (x, y) = frame_origin(index);
			format!(
				r#""bench {index}.aseprite": {{ "frame": {{ "x": {x}, "y": {y}, "w": {FRAME_SIZE}, "h": {FRAME_SIZE} }}, "sourceSize": {{ "w": {FRAME_SIZE}, "h": {FRAME_SIZE} }}, "duration": {duration_ms} }}"#
			)
		})
		.collect();

	let tags: Vec<String> = generate_tags(frame_count, tag_len)
		.iter()
		.map(|tag| {
			format!(
				r#"{{ "name": "{}", "from": {}, "to": {}, "direction": "{}" }}"#,
				tag.name(),
				tag.start(),
				tag.end(),
				tag.direction().as_export_str()
			)
		})
		.collect();

	format!(
		r#"{{ "frames": {{ {} }}, "meta": {{ "image": "bench.png", "size": {{ "w": {width}, "h": {height} }}, "frameTags": [ {} ] }} }}"#,
		frames.join(", "),
		tags.join(", ")
	)
}

/// Generates a listing with runs of `tag_len` lines sharing a tag prefix.
pub fn generate_listing(frame_count: usize, tag_len: usize) -> String {
	let mut text = String::with_capacity(frame_count * 40);
	for index in 0..frame_count {
		let (x, y) = frame_origin(index);
		let group = index / tag_len.max(1);
		let _ = writeln!(text, "group{group}/frame{index:05} = {x} {y} {FRAME_SIZE} {FRAME_SIZE}");
	}
	text
}
