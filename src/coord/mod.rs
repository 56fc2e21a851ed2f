//! Slippy-map tile coordinate conversion.
//!
//! Converts geographic coordinates to Web Mercator tile indices under
//! the standard XYZ scheme used by the raster tile endpoints: X grows
//! west to east, Y grows north to south, and zoom `z` produces a
//! `2^z × 2^z` grid.

use crate::base::Location;
use std::f64::consts::PI;
use thiserror::Error;

/// Web Mercator valid latitude range. Latitudes outside it are clamped
/// before projection; the projection diverges at the poles.
pub const MIN_LAT: f64 = -85.05112878;
pub const MAX_LAT: f64 = 85.05112878;

/// Maximum zoom level supported by the raster tile endpoints.
pub const MAX_ZOOM: u8 = 22;

/// Integer tile index at a zoom level.
///
/// `x` may exceed `2^zoom − 1` when produced from a longitude beyond
/// +180°, so that spans crossing the antimeridian stay monotonic in
/// grid space. Use [`TileIndex::wrapped`] before building request URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileIndex {
    /// Column (west to east).
    pub x: u32,
    /// Row (north to south).
    pub y: u32,
    /// Zoom level (0 to 22).
    pub zoom: u8,
}

impl TileIndex {
    /// Returns the index with the column reduced modulo `2^zoom`,
    /// mapping antimeridian-wrapped columns back into the tile grid.
    pub fn wrapped(&self) -> TileIndex {
        let n = 1u32 << self.zoom;
        TileIndex {
            x: self.x % n,
            ..*self
        }
    }
}

/// Errors from coordinate conversion.
///
/// Latitude is clamped rather than rejected, so only zoom can fail
/// validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    /// Zoom level outside 0 to 22.
    #[error("invalid zoom level {0} (must be 0 to {MAX_ZOOM})")]
    InvalidZoom(u8),
}

/// Converts a geographic location to its tile index at the given zoom.
///
/// Latitude is clamped silently to the Web Mercator valid range
/// (±85.05112878°); the computed row is clamped into `[0, 2^zoom − 1]`.
/// Longitudes beyond +180° yield columns beyond the wrap boundary (see
/// [`TileIndex`]); longitudes below −180° clamp to column 0.
pub fn to_tile_index(location: Location, zoom: u8) -> Result<TileIndex, CoordError> {
    if zoom > MAX_ZOOM {
        return Err(CoordError::InvalidZoom(zoom));
    }

    let n = 2.0_f64.powi(zoom as i32);
    let max_index = (1u64 << zoom) - 1;

    let x = (((location.longitude + 180.0) / 360.0 * n).floor() as i64).max(0) as u32;

    let lat = location.latitude.clamp(MIN_LAT, MAX_LAT);
    let lat_rad = lat.to_radians();
    let y_raw = ((1.0 - lat_rad.tan().asinh() / PI) / 2.0 * n).floor() as i64;
    // The clamp boundary itself projects to exactly 2^zoom; fold it back
    // into the last row.
    let y = y_raw.clamp(0, max_index as i64) as u32;

    Ok(TileIndex { x, y, zoom })
}

/// Converts a tile index back to the geographic location of its
/// northwest corner.
pub fn tile_to_location(tile: &TileIndex) -> Location {
    let n = 2.0_f64.powi(tile.zoom as i32);

    let longitude = tile.x as f64 / n * 360.0 - 180.0;

    let y = tile.y as f64 / n;
    let lat_rad = (PI * (1.0 - 2.0 * y)).sinh().atan();
    let latitude = lat_rad.to_degrees();

    Location {
        latitude,
        longitude,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn san_francisco_reference_tile_at_zoom_10() {
        // Known reference tile for the standard slippy-map scheme.
        let tile = to_tile_index(Location::new(37.7577, -122.4376), 10).unwrap();
        assert_eq!(tile.x, 163);
        assert_eq!(tile.y, 395);
        assert_eq!(tile.zoom, 10);
    }

    #[test]
    fn new_york_city_at_zoom_16() {
        let tile = to_tile_index(Location::new(40.7128, -74.0060), 16).unwrap();
        assert_eq!(tile.x, 19295);
        assert_eq!(tile.y, 24640);
    }

    #[test]
    fn indices_stay_in_range_for_valid_input() {
        let samples = [
            (0.0, 0.0),
            (85.05112878, -180.0),
            (-85.05112878, 179.999),
            (51.5074, -0.1278),
            (-45.9428, 166.5685),
        ];

        for zoom in [0u8, 1, 5, 10, 18, 22] {
            let max = (1u64 << zoom) - 1;
            for (lat, lon) in samples {
                let tile = to_tile_index(Location::new(lat, lon), zoom).unwrap();
                assert!(
                    u64::from(tile.x) <= max,
                    "x {} out of range at zoom {}",
                    tile.x,
                    zoom
                );
                assert!(
                    u64::from(tile.y) <= max,
                    "y {} out of range at zoom {}",
                    tile.y,
                    zoom
                );
            }
        }
    }

    #[test]
    fn latitude_clamps_to_mercator_range() {
        for zoom in [1u8, 4, 10] {
            let boundary_north = to_tile_index(Location::new(MAX_LAT, 0.0), zoom).unwrap();
            let boundary_south = to_tile_index(Location::new(MIN_LAT, 0.0), zoom).unwrap();

            for lat in [86.0, 90.0] {
                let tile = to_tile_index(Location::new(lat, 0.0), zoom).unwrap();
                assert_eq!(tile.y, boundary_north.y, "lat {} at zoom {}", lat, zoom);
            }
            for lat in [-86.0, -90.0] {
                let tile = to_tile_index(Location::new(lat, 0.0), zoom).unwrap();
                assert_eq!(tile.y, boundary_south.y, "lat {} at zoom {}", lat, zoom);
            }
        }
    }

    #[test]
    fn clamp_boundaries_map_to_first_and_last_row() {
        let north = to_tile_index(Location::new(90.0, 0.0), 4).unwrap();
        let south = to_tile_index(Location::new(-90.0, 0.0), 4).unwrap();
        assert_eq!(north.y, 0);
        assert_eq!(south.y, 15);
    }

    #[test]
    fn zoom_out_of_range_is_an_error() {
        let result = to_tile_index(Location::new(0.0, 0.0), 23);
        assert_eq!(result, Err(CoordError::InvalidZoom(23)));
    }

    #[test]
    fn longitude_beyond_180_stays_monotonic() {
        // A span from Fiordland across the antimeridian: columns must
        // keep increasing so grid enumeration works unchanged.
        let west = to_tile_index(Location::new(-45.9428, 166.5685), 6).unwrap();
        let east = to_tile_index(Location::new(-34.2186, 183.4016), 6).unwrap();

        assert_eq!(west.x, 61);
        assert_eq!(east.x, 64);
        assert!(east.x > west.x);

        // Wrapping folds the overflow column back into the grid.
        assert_eq!(east.wrapped().x, 0);
        assert_eq!(west.wrapped().x, 61);
    }

    #[test]
    fn roundtrip_is_within_one_tile() {
        let original = Location::new(51.5074, -0.1278);

        for zoom in [0u8, 5, 10, 15, 22] {
            let tile = to_tile_index(original, zoom).unwrap();
            let corner = tile_to_location(&tile);

            let tile_size_degrees = 360.0 / 2.0_f64.powi(zoom as i32);
            assert!(
                (corner.latitude - original.latitude).abs() < tile_size_degrees,
                "zoom {}: latitude off by more than one tile",
                zoom
            );
            assert!(
                (corner.longitude - original.longitude).abs() < tile_size_degrees,
                "zoom {}: longitude off by more than one tile",
                zoom
            );
        }
    }
}
