//! Maps module: raster tile retrieval, caching, grid fetch and
//! stitching.
//!
//! [`Maps::get_tile`] fetches and decodes one tile, consulting an
//! optional [`TileCache`] read-through (write-back on miss).
//! [`Maps::get_enclosing_tiles`] fetches the whole rectangle of tiles
//! enclosing two corner locations with a bounded worker pool, and
//! [`stitch`] composes the resulting [`TileGrid`] into a single image.

mod cache;
mod stitch;
mod types;

pub use cache::{CacheError, FileCache, MemoryCache, TileCache};
pub use stitch::stitch;
pub use types::{MapId, MapsError, TileFormat, TileGrid, TileKey};

use crate::base::{AsyncHttpClient, Base, Location};
use crate::coord::{to_tile_index, CoordError, MAX_ZOOM};
use futures::stream::{self, StreamExt};
use image::{DynamicImage, Rgba};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Default bound on concurrent tile fetches in a grid fetch.
///
/// Unbounded concurrency against a rate-limited remote API is a
/// correctness risk, not just a performance concern.
pub const DEFAULT_FETCH_CONCURRENCY: usize = 8;

/// Maps API wrapper: tile fetching and grid assembly.
pub struct Maps<C> {
    base: Arc<Base<C>>,
    cache: Option<Arc<dyn TileCache>>,
    fetch_concurrency: usize,
}

impl<C: AsyncHttpClient> Maps<C> {
    /// Creates a new Maps API wrapper sharing the given base.
    pub fn new(base: Arc<Base<C>>) -> Self {
        Self {
            base,
            cache: None,
            fetch_concurrency: DEFAULT_FETCH_CONCURRENCY,
        }
    }

    /// Installs a tile cache consulted before the network.
    pub fn set_cache(&mut self, cache: Arc<dyn TileCache>) {
        self.cache = Some(cache);
    }

    /// Bounds the number of concurrent tile fetches in
    /// [`get_enclosing_tiles`](Self::get_enclosing_tiles). Clamped to at
    /// least 1.
    pub fn set_fetch_concurrency(&mut self, concurrency: usize) {
        self.fetch_concurrency = concurrency.max(1);
    }

    /// Current grid-fetch concurrency bound.
    pub fn fetch_concurrency(&self) -> usize {
        self.fetch_concurrency
    }

    /// Fetches and decodes a single tile.
    ///
    /// `x` is wrapped modulo `2^zoom`, so columns produced from
    /// antimeridian-crossing spans are valid inputs.
    pub async fn get_tile(
        &self,
        map_id: MapId,
        x: u32,
        y: u32,
        zoom: u8,
        format: TileFormat,
        high_dpi: bool,
    ) -> Result<DynamicImage, MapsError> {
        if zoom > MAX_ZOOM {
            return Err(CoordError::InvalidZoom(zoom).into());
        }

        let n = 1u32 << zoom;
        let key = TileKey::new(map_id, zoom, x % n, y, format, high_dpi);
        self.fetch_tile(&key).await
    }

    /// Fetches raw tile bytes, read-through the cache when one is
    /// installed, and decodes them per the key's format.
    async fn fetch_tile(&self, key: &TileKey) -> Result<DynamicImage, MapsError> {
        let bytes = self.fetch_raw(key).await?;
        let image = image::load_from_memory_with_format(&bytes, key.format.image_format())?;
        Ok(image)
    }

    async fn fetch_raw(&self, key: &TileKey) -> Result<Vec<u8>, MapsError> {
        if let Some(cache) = &self.cache {
            if let Some(bytes) = cache.get(key) {
                trace!(?key, "tile cache hit");
                return Ok(bytes);
            }
        }

        let bytes = self.base.get(&key.request_path(), &[]).await?;

        if let Some(cache) = &self.cache {
            // Best effort: a failed cache write must not fail the fetch.
            if let Err(error) = cache.put(key, &bytes) {
                warn!(?key, error = %error, "tile cache write failed");
            }
        }

        Ok(bytes)
    }

    /// Fetches every tile in the rectangle enclosing the two corner
    /// locations at the given zoom.
    ///
    /// Corner order is irrelevant; the rectangle is normalized on both
    /// axes. Tiles are fetched concurrently (bounded by
    /// [`set_fetch_concurrency`](Self::set_fetch_concurrency)) and
    /// placed by their computed grid position regardless of completion
    /// order. If any tile fails, the whole call fails with
    /// [`MapsError::PartialGrid`] wrapping the first failure in
    /// row-major grid order; no partial grid is returned.
    pub async fn get_enclosing_tiles(
        &self,
        map_id: MapId,
        corner_a: Location,
        corner_b: Location,
        zoom: u8,
        format: TileFormat,
        high_dpi: bool,
    ) -> Result<TileGrid, MapsError> {
        let tile_a = to_tile_index(corner_a, zoom)?;
        let tile_b = to_tile_index(corner_b, zoom)?;

        let min_x = tile_a.x.min(tile_b.x);
        let max_x = tile_a.x.max(tile_b.x);
        let min_y = tile_a.y.min(tile_b.y);
        let max_y = tile_a.y.max(tile_b.y);

        let cols = (max_x - min_x + 1) as usize;
        let rows = (max_y - min_y + 1) as usize;
        let n = 1u32 << zoom;

        debug!(
            rows,
            cols,
            zoom,
            concurrency = self.fetch_concurrency,
            "fetching enclosing tile grid"
        );

        let jobs: Vec<(usize, usize, TileKey)> = (0..rows)
            .flat_map(|row| {
                let map_id = &map_id;
                (0..cols).map(move |col| {
                    let key = TileKey::new(
                        map_id.clone(),
                        zoom,
                        (min_x + col as u32) % n,
                        min_y + row as u32,
                        format,
                        high_dpi,
                    );
                    (row, col, key)
                })
            })
            .collect();

        let results: Vec<(usize, usize, TileKey, Result<DynamicImage, MapsError>)> =
            stream::iter(jobs.into_iter().map(|(row, col, key)| async move {
                let result = self.fetch_tile(&key).await;
                (row, col, key, result)
            }))
            .buffer_unordered(self.fetch_concurrency)
            .collect()
            .await;

        let mut tiles: Vec<(usize, usize, DynamicImage)> = Vec::with_capacity(rows * cols);
        let mut first_failure: Option<(usize, usize, TileKey, MapsError)> = None;

        for (row, col, key, result) in results {
            match result {
                Ok(image) => tiles.push((row, col, image)),
                Err(error) => {
                    let earlier = match &first_failure {
                        Some((r, c, _, _)) => (row, col) < (*r, *c),
                        None => true,
                    };
                    if earlier {
                        first_failure = Some((row, col, key, error));
                    }
                }
            }
        }

        if let Some((_, _, key, source)) = first_failure {
            return Err(MapsError::PartialGrid {
                x: key.x,
                y: key.y,
                source: Box::new(source),
            });
        }

        tiles.sort_by_key(|(row, col, _)| (*row, *col));

        let mut grid_rows: Vec<Vec<DynamicImage>> = Vec::with_capacity(rows);
        for (row, _, image) in tiles {
            if row == grid_rows.len() {
                grid_rows.push(Vec::with_capacity(cols));
            }
            grid_rows[row].push(image);
        }

        Ok(TileGrid::from_rows(grid_rows))
    }
}

/// Decodes one Terrain-RGB pixel into a height in meters.
///
/// Terrain-RGB packs elevation as
/// `height = -10000 + (R * 65536 + G * 256 + B) * 0.1`; fetch the
/// tiles with [`MapId::TerrainRgb`] and [`TileFormat::PngRaw`].
pub fn terrain_height(pixel: Rgba<u8>) -> f64 {
    let [r, g, b, _] = pixel.0;
    -10000.0 + (u32::from(r) * 65536 + u32::from(g) * 256 + u32::from(b)) as f64 * 0.1
}
