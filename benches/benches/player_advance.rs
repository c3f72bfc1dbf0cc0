//! Benchmark suite for sheet ingestion and frame playback
//!
//! Measures decoding of both input formats and the cost of
//! `Player::advance`, from the common one-step tick to long catch-ups
//! across many overlapping tags.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use std::{hint::black_box, sync::Arc};

use aseplay_benches::{generate_aseprite_json, generate_listing, generate_sheet};
use aseplay_player::Player;
use aseplay_types::sheet::{aseprite, listing};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const FRAME_DURATION: f32 = 0.125;

/// Benchmark JSON export decoding
fn bench_aseprite_decode(c: &mut Criterion) {
	let mut group = c.benchmark_group("aseprite_decode");

	for frame_count in [16, 256, 2048] {
		let json = generate_aseprite_json(frame_count, 8, 125);
		group.throughput(Throughput::Bytes(json.len() as u64));
		group.bench_with_input(BenchmarkId::from_parameter(frame_count), &json, |b, json| {
			b.iter(|| aseprite::from_slice(black_box(json.as_bytes())));
		});
	}

	group.finish();
}

/// Benchmark listing parsing
fn bench_listing_parse(c: &mut Criterion) {
	let mut group = c.benchmark_group("listing_parse");
	let config = listing::ParseConfig::new(FRAME_DURATION);

	for frame_count in [16, 256, 2048] {
		let text = generate_listing(frame_count, 8);
		group.throughput(Throughput::Bytes(text.len() as u64));
		group.bench_with_input(BenchmarkId::from_parameter(frame_count), &text, |b, text| {
			b.iter(|| listing::from_str(black_box(text), "bench.txt", &config));
		});
	}

	group.finish();
}

/// Benchmark a single-step tick, the common case in a game loop
fn bench_advance_tick(c: &mut Criterion) {
	let mut group = c.benchmark_group("advance_tick");

	for tag_count in [1, 16, 128] {
		let sheet = Arc::new(generate_sheet(tag_count * 7 + 1, 8, FRAME_DURATION));
		let mut player = Player::new(sheet);
		player.on_frame_change(|_, index| {
			black_box(index);
		});
		player.play("").expect("full-range tag exists");

		group.bench_with_input(BenchmarkId::from_parameter(tag_count), &(), |b, _| {
			b.iter(|| player.advance(black_box(FRAME_DURATION)));
		});
	}

	group.finish();
}

/// Benchmark catching up many frames in one advance
fn bench_advance_catch_up(c: &mut Criterion) {
	let mut group = c.benchmark_group("advance_catch_up");
	let sheet = Arc::new(generate_sheet(64, 8, FRAME_DURATION));

	for steps in [10u32, 100, 1000] {
		let dt = FRAME_DURATION * steps as f32;
		group.throughput(Throughput::Elements(u64::from(steps)));
		group.bench_with_input(BenchmarkId::from_parameter(steps), &dt, |b, &dt| {
			let mut player = Player::new(Arc::clone(&sheet));
			player.on_tag_enter(|_, tag| {
				black_box(tag);
			});
			player.play("tag2").expect("generated tag exists");
			b.iter(|| player.advance(black_box(dt)));
		});
	}

	group.finish();
}

criterion_group!(
	benches,
	bench_aseprite_decode,
	bench_listing_parse,
	bench_advance_tick,
	bench_advance_catch_up
);
criterion_main!(benches);
