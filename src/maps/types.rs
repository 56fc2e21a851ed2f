//! Tile identification types and the maps error taxonomy.

use crate::base::ApiError;
use crate::coord::CoordError;
use image::DynamicImage;
use std::fmt;
use thiserror::Error;

/// Identifier of a renderable tileset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MapId {
    Streets,
    Outdoors,
    Light,
    Dark,
    Satellite,
    StreetsSatellite,
    /// Terrain-RGB elevation tiles; fetch with [`TileFormat::PngRaw`]
    /// and decode with [`terrain_height`](crate::maps::terrain_height).
    TerrainRgb,
    /// Any other tileset id, e.g. `username.tileset`.
    Custom(String),
}

impl MapId {
    /// The tileset id as it appears in request paths.
    pub fn as_str(&self) -> &str {
        match self {
            MapId::Streets => "mapbox.streets",
            MapId::Outdoors => "mapbox.outdoors",
            MapId::Light => "mapbox.light",
            MapId::Dark => "mapbox.dark",
            MapId::Satellite => "mapbox.satellite",
            MapId::StreetsSatellite => "mapbox.streets-satellite",
            MapId::TerrainRgb => "mapbox.terrain-rgb",
            MapId::Custom(id) => id,
        }
    }
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raster tile encoding requested from the tile endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileFormat {
    /// True-color PNG.
    Png,
    /// Raw-encoded PNG, used for Terrain-RGB elevation data.
    PngRaw,
    /// JPEG at quality 70.
    Jpg70,
    /// JPEG at quality 80.
    Jpg80,
    /// JPEG at quality 90.
    Jpg90,
}

impl TileFormat {
    /// File extension used in request URLs and cache paths.
    pub fn extension(&self) -> &'static str {
        match self {
            TileFormat::Png => "png",
            TileFormat::PngRaw => "pngraw",
            TileFormat::Jpg70 => "jpg70",
            TileFormat::Jpg80 => "jpg80",
            TileFormat::Jpg90 => "jpg90",
        }
    }

    /// The image container the response body is decoded as.
    pub fn image_format(&self) -> image::ImageFormat {
        match self {
            TileFormat::Png | TileFormat::PngRaw => image::ImageFormat::Png,
            TileFormat::Jpg70 | TileFormat::Jpg80 | TileFormat::Jpg90 => image::ImageFormat::Jpeg,
        }
    }
}

/// Uniquely identifies one renderable tile. Immutable once constructed.
///
/// `x` is always stored wrapped into `[0, 2^zoom − 1]`; grid positions
/// are tracked separately by the grid fetcher.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TileKey {
    pub map_id: MapId,
    pub zoom: u8,
    pub x: u32,
    pub y: u32,
    pub format: TileFormat,
    /// Request the double-density `@2x` variant.
    pub high_dpi: bool,
}

impl TileKey {
    pub fn new(
        map_id: MapId,
        zoom: u8,
        x: u32,
        y: u32,
        format: TileFormat,
        high_dpi: bool,
    ) -> Self {
        Self {
            map_id,
            zoom,
            x,
            y,
            format,
            high_dpi,
        }
    }

    /// `@2x` when the key requests the double-density variant.
    pub(crate) fn density_suffix(&self) -> &'static str {
        if self.high_dpi {
            "@2x"
        } else {
            ""
        }
    }

    /// Request path for this tile:
    /// `v4/<map_id>/<zoom>/<x>/<y>[@2x].<ext>`.
    pub(crate) fn request_path(&self) -> String {
        format!(
            "v4/{}/{}/{}/{}{}.{}",
            self.map_id,
            self.zoom,
            self.x,
            self.y,
            self.density_suffix(),
            self.format.extension()
        )
    }
}

/// A complete rectangle of decoded tiles.
///
/// Rows run top to bottom (north to south), columns left to right (west
/// to east). Every row has the same column count; the grid fetcher only
/// constructs complete rectangles.
#[derive(Debug)]
pub struct TileGrid {
    rows: Vec<Vec<DynamicImage>>,
}

impl TileGrid {
    pub(crate) fn from_rows(rows: Vec<Vec<DynamicImage>>) -> Self {
        debug_assert!(
            rows.windows(2).all(|pair| pair[0].len() == pair[1].len()),
            "tile grid rows must have equal length"
        );
        Self { rows }
    }

    /// Number of rows (north to south).
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (west to east).
    pub fn cols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// The tile at the given grid position.
    ///
    /// # Panics
    ///
    /// Panics when the position is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> &DynamicImage {
        &self.rows[row][col]
    }

    /// All rows, top to bottom.
    pub fn as_rows(&self) -> &[Vec<DynamicImage>] {
        &self.rows
    }
}

/// Errors from the maps module.
#[derive(Debug, Error)]
pub enum MapsError {
    /// The underlying API request failed (auth, rate limit, network,
    /// unexpected status).
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The response body was not a valid image for its declared format.
    #[error("failed to decode tile image: {0}")]
    Decode(#[from] image::ImageError),
    /// Invalid zoom level.
    #[error(transparent)]
    Coord(#[from] CoordError),
    /// A grid fetch failed; wraps the first per-tile failure in grid
    /// (row-major) order. No partial grid is returned.
    #[error("tile ({x}, {y}) failed during grid fetch: {source}")]
    PartialGrid {
        x: u32,
        y: u32,
        #[source]
        source: Box<MapsError>,
    },
}
