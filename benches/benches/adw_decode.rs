//! Benchmark suite for ADW container decoding
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use adw_benches::{compress_tile, generate_alpha_plane, generate_test_adw_data, sizes};
use adw_types::file::adw::{File, LoadOptions, TileDecoder};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Benchmark inflating single tiles through a reused decoder
fn bench_tile_decode(c: &mut Criterion) {
	let mut group = c.benchmark_group("adw_tile");
	let plane = generate_alpha_plane(0);
	let payload = compress_tile(&plane);
	let mut decoder = TileDecoder::new();

	group.throughput(Throughput::Bytes(plane.len() as u64));
	group.bench_function("raw", |b| {
		b.iter(|| {
			let alpha = decoder.decode(black_box(&plane)).map(<[u8]>::len);
			black_box(alpha)
		});
	});
	group.bench_function("zlib", |b| {
		b.iter(|| {
			let alpha = decoder.decode(black_box(&payload)).map(<[u8]>::len);
			black_box(alpha)
		});
	});

	group.finish();
}

/// Benchmark full container loads in both modes
fn bench_container_load(c: &mut Criterion) {
	let mut group = c.benchmark_group("adw_load");

	for (name, (width, height)) in [("tiny", sizes::TINY), ("small", sizes::SMALL), ("medium", sizes::MEDIUM)] {
		let data = generate_test_adw_data(width, height, 12);
		group.throughput(Throughput::Elements(u64::from(width) * u64::from(height) * 12));

		for (mode, options) in [("still", LoadOptions::still()), ("animated", LoadOptions::animated())] {
			group.bench_with_input(BenchmarkId::new(mode, name), &data, |b, data| {
				b.iter(|| {
					let result = File::from_bytes(black_box(data), &options);
					black_box(result)
				});
			});
		}
	}

	group.finish();
}

criterion_group!(benches, bench_tile_decode, bench_container_load);
criterion_main!(benches);
