//! Filesystem-backed tests: decode/encode, library scanning, caching,
//! and full CLI-level runs against temporary directories

use tesserae::color::Rgb8;
use tesserae::io::cache::TileCache;
use tesserae::io::cli::{Cli, MosaicProcessor};
use tesserae::io::image::{load_bitmap, save_bitmap};
use tesserae::io::library;
use tesserae::palette::TileFootprint;
use tesserae::raster::Bitmap;
use tesserae::MosaicError;

fn temp_dir() -> tempfile::TempDir {
    match tempfile::tempdir() {
        Ok(dir) => dir,
        Err(error) => unreachable!("tempdir failed: {error}"),
    }
}

#[test]
fn test_save_load_round_trip_preserves_pixels() {
    let dir = temp_dir();
    let path = dir.path().join("round_trip.png");
    let bitmap = Bitmap::from_fn(5, 3, |x, y| Rgb8::new(x as u8 * 40, y as u8 * 80, 7));

    assert!(save_bitmap(&bitmap, &path).is_ok());
    let loaded = load_bitmap(&path);
    assert!(loaded.is_ok_and(|reloaded| reloaded == bitmap));
}

#[test]
fn test_sixteen_bit_sources_normalize_to_eight_bit() {
    let dir = temp_dir();
    let deep_path = dir.path().join("deep.png");

    // A 16-bit PNG whose channels are 8-bit values scaled by 257 must
    // load identically to its 8-bit counterpart
    let deep = image::ImageBuffer::from_fn(4, 2, |x, y| {
        let value = u16::from((x as u8).wrapping_mul(60).wrapping_add(y as u8));
        image::Rgb([value * 257, value * 257 / 2, 257 * 7])
    });
    assert!(deep.save(&deep_path).is_ok());

    let loaded = match load_bitmap(&deep_path) {
        Ok(bitmap) => bitmap,
        Err(error) => unreachable!("16-bit load failed: {error}"),
    };
    for (x, y, color) in loaded.enumerate_pixels() {
        let value = u16::from((x as u8).wrapping_mul(60).wrapping_add(y as u8));
        let expected = Rgb8::new(
            (value * 257 / 256) as u8,
            (value * 257 / 2 / 256) as u8,
            7,
        );
        assert_eq!(color, expected, "pixel ({x},{y})");
    }
}

#[test]
fn test_missing_image_reports_its_path() {
    let dir = temp_dir();
    let path = dir.path().join("nope.png");
    let result = load_bitmap(&path);
    match result {
        Err(MosaicError::ImageLoad { path: reported, .. }) => {
            assert!(reported.ends_with("nope.png"));
        }
        other => unreachable!("expected ImageLoad error, got {other:?}"),
    }
}

#[test]
fn test_library_scan_orders_keys_and_reports_duplicates() {
    let dir = temp_dir();
    let tile = Bitmap::filled(4, 4, Rgb8::new(1, 2, 3));
    for name in ["zebra.png", "apple.png", "mango.png"] {
        assert!(save_bitmap(&tile, dir.path().join(name)).is_ok());
    }
    // Same stem under two extensions: the lexicographically first path wins
    assert!(save_bitmap(&tile, dir.path().join("apple.bmp")).is_ok());
    // Unsupported extensions are ignored outright
    assert!(std::fs::write(dir.path().join("notes.txt"), b"not an image").is_ok());

    let scan = match library::scan(dir.path()) {
        Ok(scan) => scan,
        Err(error) => unreachable!("scan failed: {error}"),
    };
    let keys: Vec<&str> = scan.entries.iter().map(|entry| entry.key.as_str()).collect();
    assert_eq!(keys, vec!["apple", "mango", "zebra"]);

    let apple = scan.entries.iter().find(|entry| entry.key == "apple");
    assert!(apple.is_some_and(|entry| entry.path.ends_with("apple.bmp")));
    assert_eq!(scan.duplicates.len(), 1);
}

#[test]
fn test_scan_of_missing_directory_fails() {
    let dir = temp_dir();
    let result = library::scan(&dir.path().join("absent"));
    assert!(matches!(result, Err(MosaicError::FileSystem { .. })));
}

#[test]
fn test_cache_round_trip_and_footprint_invalidation() {
    let dir = temp_dir();
    let cache = match TileCache::open(dir.path()) {
        Ok(cache) => cache,
        Err(error) => unreachable!("cache open failed: {error}"),
    };

    let bitmap = Bitmap::filled(4, 4, Rgb8::new(8, 8, 8));
    assert!(cache.store("stone", &bitmap).is_ok());

    let hit = cache.load("stone", TileFootprint::new(4, 4));
    assert!(hit.is_some_and(|cached| cached == bitmap));

    // A different footprint must read as a miss, not an error
    assert!(cache.load("stone", TileFootprint::new(8, 8)).is_none());
    assert!(cache.load("absent", TileFootprint::new(4, 4)).is_none());
}

fn run_cli(cli: Cli) -> tesserae::Result<()> {
    let mut processor = MosaicProcessor::new(cli);
    processor.process()
}

#[test]
fn test_full_run_writes_expected_mosaic() {
    let dir = temp_dir();
    let tiles_dir = dir.path().join("tiles");
    let red = Bitmap::filled(8, 8, Rgb8::new(255, 0, 0));
    let blue = Bitmap::filled(8, 8, Rgb8::new(0, 0, 255));
    assert!(save_bitmap(&red, tiles_dir.join("red.png")).is_ok());
    assert!(save_bitmap(&blue, tiles_dir.join("blue.png")).is_ok());
    // A corrupt candidate is reported and skipped, never fatal
    assert!(std::fs::write(tiles_dir.join("broken.png"), b"garbage").is_ok());

    let target_path = dir.path().join("target.png");
    let target = Bitmap::from_fn(8, 8, |x, _| {
        if x < 4 {
            Rgb8::new(255, 0, 0)
        } else {
            Rgb8::new(0, 0, 255)
        }
    });
    assert!(save_bitmap(&target, &target_path).is_ok());

    let output_path = dir.path().join("out.png");
    let cache_dir = dir.path().join("cache");
    let cli = Cli {
        target: target_path,
        tiles: tiles_dir.clone(),
        grid_width: 2,
        grid_height: 2,
        tile_width: 4,
        tile_height: 4,
        output: Some(output_path.clone()),
        cache: Some(cache_dir.clone()),
        quiet: true,
        force: false,
    };
    assert!(run_cli(cli).is_ok());

    let canvas = match load_bitmap(&output_path) {
        Ok(canvas) => canvas,
        Err(error) => unreachable!("output unreadable: {error}"),
    };
    assert_eq!(canvas.width(), 8);
    assert_eq!(canvas.height(), 8);
    // Left cells matched the red tile, right cells the blue tile
    assert_eq!(canvas.get(0, 0), Some(Rgb8::new(255, 0, 0)));
    assert_eq!(canvas.get(3, 7), Some(Rgb8::new(255, 0, 0)));
    assert_eq!(canvas.get(4, 0), Some(Rgb8::new(0, 0, 255)));
    assert_eq!(canvas.get(7, 7), Some(Rgb8::new(0, 0, 255)));

    // Resized tiles were persisted for the next run
    assert!(cache_dir.join("red.png").exists());
    assert!(cache_dir.join("blue.png").exists());
    assert!(!cache_dir.join("broken.png").exists());
}

#[test]
fn test_existing_output_is_skipped_without_force() {
    let dir = temp_dir();
    let tiles_dir = dir.path().join("tiles");
    let tile = Bitmap::filled(4, 4, Rgb8::new(128, 128, 128));
    assert!(save_bitmap(&tile, tiles_dir.join("gray.png")).is_ok());

    let target_path = dir.path().join("target.png");
    assert!(save_bitmap(&Bitmap::filled(4, 4, Rgb8::new(1, 2, 3)), &target_path).is_ok());

    let output_path = dir.path().join("out.png");
    assert!(std::fs::write(&output_path, b"sentinel").is_ok());

    let cli = Cli {
        target: target_path,
        tiles: tiles_dir,
        grid_width: 2,
        grid_height: 2,
        tile_width: 2,
        tile_height: 2,
        output: Some(output_path.clone()),
        cache: None,
        quiet: true,
        force: false,
    };
    assert!(run_cli(cli).is_ok());

    // The sentinel survives: nothing overwrote the existing output
    let contents = std::fs::read(&output_path);
    assert!(contents.is_ok_and(|bytes| bytes == b"sentinel"));
}

#[test]
fn test_tile_library_with_no_usable_tiles_is_fatal() {
    let dir = temp_dir();
    let tiles_dir = dir.path().join("tiles");
    assert!(std::fs::create_dir_all(&tiles_dir).is_ok());
    assert!(std::fs::write(tiles_dir.join("only.png"), b"garbage").is_ok());

    let target_path = dir.path().join("target.png");
    assert!(save_bitmap(&Bitmap::filled(4, 4, Rgb8::new(1, 2, 3)), &target_path).is_ok());

    let cli = Cli {
        target: target_path,
        tiles: tiles_dir,
        grid_width: 2,
        grid_height: 2,
        tile_width: 2,
        tile_height: 2,
        output: Some(dir.path().join("out.png")),
        cache: None,
        quiet: true,
        force: true,
    };
    let result = run_cli(cli);
    assert!(matches!(
        result,
        Err(MosaicError::EmptyPalette {
            candidates: 1,
            skipped: 1
        })
    ));
}
