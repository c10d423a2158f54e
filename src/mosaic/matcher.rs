//! Nearest-color assignment of grid cells to palette tiles

use crate::io::error::{Result, empty_palette};
use crate::palette::Palette;
use crate::raster::Bitmap;
use ndarray::Array2;

/// Palette indices per grid cell, `grid_height × grid_width`
///
/// Produced once by [`assign_tiles`] and consumed once by the compositor;
/// entries index into the palette's fixed key order.
pub type Assignment = Array2<usize>;

/// Assign every cell of a downsampled grid its nearest palette tile
///
/// A brute-force `O(cells · palette)` scan over the palette's ordered
/// tiles; each cell depends only on its own color, so the search is
/// independent across cells. The contract permits substituting a spatial
/// index over the color space without observable change at expected
/// palette sizes.
///
/// # Errors
///
/// Returns [`crate::MosaicError::EmptyPalette`] for an empty palette,
/// before any cell is examined. A cell that cannot be matched aborts the
/// run; no cell ever defaults to an arbitrary tile.
pub fn assign_tiles(grid: &Bitmap, palette: &Palette) -> Result<Assignment> {
    if palette.is_empty() {
        return Err(empty_palette(0, 0));
    }

    let mut assignment = Array2::from_elem(
        (grid.height() as usize, grid.width() as usize),
        0usize,
    );
    for (x, y, color) in grid.enumerate_pixels() {
        let index = palette.nearest(color)?;
        if let Some(slot) = assignment.get_mut((y as usize, x as usize)) {
            *slot = index;
        }
    }

    Ok(assignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MosaicError;
    use crate::color::Rgb8;
    use crate::palette::{PaletteBuilder, Tile, TileFootprint};

    fn palette_of(colors: &[(&str, Rgb8)]) -> Palette {
        let mut builder = match PaletteBuilder::new(TileFootprint::new(1, 1)) {
            Ok(builder) => builder,
            Err(error) => unreachable!("footprint rejected: {error}"),
        };
        for (key, color) in colors {
            let image = Bitmap::filled(1, 1, *color);
            assert!(builder.insert_image(key, &image).is_ok());
        }
        match builder.finish() {
            Ok(palette) => palette,
            Err(error) => unreachable!("palette empty: {error}"),
        }
    }

    #[test]
    fn test_singleton_palette_matches_everything() {
        let palette = palette_of(&[("only", Rgb8::new(1, 2, 3))]);
        let grid = Bitmap::from_fn(3, 2, |x, y| Rgb8::new(x as u8 * 80, y as u8 * 120, 200));
        let assignment = assign_tiles(&grid, &palette);
        assert!(assignment.is_ok_and(|a| a.iter().all(|&index| index == 0)));
    }

    #[test]
    fn test_worked_example_prefers_red_tile() {
        let palette = palette_of(&[("A", Rgb8::new(255, 0, 0)), ("B", Rgb8::new(0, 0, 255))]);
        let grid = Bitmap::filled(1, 1, Rgb8::new(250, 10, 5));
        let assignment = match assign_tiles(&grid, &palette) {
            Ok(assignment) => assignment,
            Err(error) => unreachable!("matching failed: {error}"),
        };
        let chosen = assignment
            .get((0, 0))
            .and_then(|&index| palette.get(index))
            .map(Tile::key);
        assert_eq!(chosen, Some("A"));
    }

    #[test]
    fn test_weighting_flips_with_channel_deltas() {
        let cell = Rgb8::new(100, 100, 100);
        let grid = Bitmap::filled(1, 1, cell);

        // Equidistant in unweighted RGB; the blue deviation is cheapest
        let palette = palette_of(&[
            ("off_blue", Rgb8::new(100, 100, 110)),
            ("off_red", Rgb8::new(110, 100, 100)),
        ]);
        let first = assign_tiles(&grid, &palette)
            .ok()
            .and_then(|a| a.get((0, 0)).copied())
            .and_then(|index| palette.get(index).map(|t| t.key().to_string()));
        assert_eq!(first.as_deref(), Some("off_blue"));

        // Swap the deltas: red deviation now beats green
        let swapped = palette_of(&[
            ("off_green", Rgb8::new(100, 110, 100)),
            ("off_red", Rgb8::new(110, 100, 100)),
        ]);
        let second = assign_tiles(&grid, &swapped)
            .ok()
            .and_then(|a| a.get((0, 0)).copied())
            .and_then(|index| swapped.get(index).map(|t| t.key().to_string()));
        assert_eq!(second.as_deref(), Some("off_red"));
    }

    #[test]
    fn test_empty_palette_is_fatal() {
        let builder = match PaletteBuilder::new(TileFootprint::new(1, 1)) {
            Ok(builder) => builder,
            Err(error) => unreachable!("footprint rejected: {error}"),
        };
        // An empty builder cannot produce a palette at all
        assert!(matches!(
            builder.finish(),
            Err(MosaicError::EmptyPalette { .. })
        ));
    }
}
