use std::io::Cursor;

use adw_rs::prelude::*;
use adw_rs::adw_types::file::adw::TileDecoder;

use crate::fixture::{Payload, Record, TILE_AREA, build};

fn checker() -> Vec<u8> {
	(0..TILE_AREA).map(|i| if (i / 64 + i % 64) % 2 == 0 { 0xFF } else { 0x00 }).collect()
}

#[test]
fn test_still_load_from_disk() {
	let path = std::env::temp_dir().join(format!("adw-rs-still-{}.adw", std::process::id()));
	std::fs::write(&path, build(64, 64, &[Record::new(0, 1)])).unwrap();

	let adw = AdwFile::open(&path, &LoadOptions::default());
	std::fs::remove_file(&path).unwrap();
	let adw = adw.unwrap();

	assert_eq!(adw.header().width(), 64);
	assert_eq!(adw.header().dpi(), 96);
	let sprite = adw.sprite();
	assert_eq!(sprite.total_frames(), 1);
	assert_eq!(sprite.layers().len(), 1);
	assert_eq!(sprite.layers()[0].name(), "record 0");

	let frame = sprite.render_frame(0);
	assert!(frame.to_rgba8().chunks_exact(4).all(|p| p == [0x00, 0xFF, 0x00, 0xFF]));
}

#[test]
fn test_animation_with_compressed_tiles() {
	let mut walk = Record::new(0, 2);
	walk.tiles = vec![(0, 0, Payload::Zlib(checker()))];
	let mut overlay = Record::new(1, 0);
	overlay.corners = [16, 16, 48, 48];
	overlay.bgra = [0xFF, 0x00, 0x00, 0x00];
	let records = [Record::new(0, 1), overlay, walk];

	let sprite = AdwFile::from_bytes(&build(64, 64, &records), &LoadOptions::animated())
		.unwrap()
		.into_sprite();

	assert_eq!(sprite.total_frames(), 3);

	let main = sprite.layer(0).unwrap();
	let overlay = sprite.layer(1).unwrap();
	assert_eq!(main.cels().map(Cel::frame).collect::<Vec<_>>(), vec![0, 1, 2]);
	assert_eq!(overlay.cels().map(Cel::frame).collect::<Vec<_>>(), vec![1, 2]);
	assert_eq!(overlay.cel(2).unwrap().kind(), CelKind::Linked {
		source_frame: 1
	});

	let frame = sprite.render_frame(2);
	// blue overlay in the middle, checkerboard green around it
	assert_eq!(frame.pixel(20, 20), Some(sprite_rgba(0, 0, 0xFF, 0xFF)));
	assert_eq!(frame.pixel(0, 0), Some(sprite_rgba(0, 0xFF, 0, 0xFF)));
	assert_eq!(frame.pixel(1, 0), Some(0));
}

fn sprite_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
	adw_rs::adw_types::sprite::rgba(r, g, b, a)
}

#[test]
fn test_failure_after_successful_records() {
	let mut broken = Record::new(0, 1);
	broken.tiles.push((0, 0, Payload::Bytes(vec![0x78, 0x9C, 0x03, 0x00])));
	let records = [Record::new(0, 4), Record::new(2, 0), broken];

	let result = AdwFile::from_reader(&mut Cursor::new(build(64, 64, &records)), &LoadOptions::animated());
	assert!(matches!(result, Err(AdwError::DecompressionError(_))));
}

#[test]
fn test_oversized_tile_payload() {
	let mut record = Record::new(0, 1);
	record.tiles = vec![(0, 0, Payload::Bytes(vec![0; 4097]))];
	let result = AdwFile::from_bytes(&build(64, 64, &[record]), &LoadOptions::default());
	assert!(matches!(result, Err(AdwError::InvalidTileSize(4097))));
}

#[test]
fn test_raw_tile_matches_input_bytes() {
	let plane: Vec<u8> = (0..TILE_AREA).map(|i| (i * 7 % 256) as u8).collect();
	let mut decoder = TileDecoder::new();
	assert_eq!(decoder.decode(&plane).unwrap(), plane.as_slice());

	let mut record = Record::new(0, 1);
	record.tiles = vec![(0, 0, Payload::Raw(plane.clone()))];
	let sprite = AdwFile::from_bytes(&build(64, 64, &[record]), &LoadOptions::default())
		.unwrap()
		.into_sprite();

	let image = sprite.layer(0).unwrap().cel(0).unwrap().image();
	for (i, &alpha) in plane.iter().enumerate() {
		let pixel = image.pixel((i % 64) as u32, (i / 64) as u32).unwrap();
		assert_eq!((pixel >> 24) as u8, alpha);
	}
}

#[test]
fn test_options_from_json() {
	let options: LoadOptions = serde_json::from_str(r#"{ "animation": true }"#).unwrap();
	assert_eq!(options, LoadOptions::animated());

	let options: LoadOptions = serde_json::from_str("{}").unwrap();
	assert_eq!(options, LoadOptions::still());
}
