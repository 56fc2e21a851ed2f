//! Tile grid stitching.
//!
//! Composes a complete rectangle of equally sized tiles into one image
//! by exact pixel placement. No resampling, no blending; the output is
//! deterministic for a given grid.

use super::types::TileGrid;
use image::{GenericImage, GenericImageView, RgbaImage};

/// Stitches a tile grid into a single image.
///
/// The tile at grid position (row, col) occupies the pixel rectangle
/// starting at `(col × W, row × H)` where W×H are the shared tile
/// dimensions. Output dimensions are `(cols × W) × (rows × H)`.
///
/// # Panics
///
/// Panics if the grid is empty or the tiles do not all share the same
/// pixel dimensions. Both indicate a caller bug, not a runtime
/// condition: the grid fetcher only produces complete, uniform grids.
pub fn stitch(grid: &TileGrid) -> RgbaImage {
    let rows = grid.rows();
    let cols = grid.cols();
    assert!(rows > 0 && cols > 0, "cannot stitch an empty tile grid");

    let (tile_width, tile_height) = grid.get(0, 0).dimensions();
    let mut canvas = RgbaImage::new(cols as u32 * tile_width, rows as u32 * tile_height);

    for row in 0..rows {
        for col in 0..cols {
            let tile = grid.get(row, col);
            let (width, height) = tile.dimensions();
            assert!(
                width == tile_width && height == tile_height,
                "tile at (row {}, col {}) is {}x{}, expected {}x{}",
                row,
                col,
                width,
                height,
                tile_width,
                tile_height
            );

            canvas
                .copy_from(
                    &tile.to_rgba8(),
                    col as u32 * tile_width,
                    row as u32 * tile_height,
                )
                .expect("tile blit stays within canvas bounds");
        }
    }

    canvas
}
