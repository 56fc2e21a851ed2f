//! Typed client for the Mapbox web APIs.
//!
//! One [`Mapbox`] handle binds every API module to a shared access
//! token and HTTP transport:
//!
//! - [`maps`]: raster tile retrieval, caching, grid fetch and stitching
//! - [`geocode`]: forward and reverse geocoding
//! - [`directions`]: routes between waypoints
//! - [`directions_matrix`]: all-pairs travel durations
//! - [`map_matching`]: snapping GPS traces to the road network
//! - [`styles`]: style document management
//!
//! ```no_run
//! use mapbox_client::maps::{MapId, TileFormat};
//! use mapbox_client::Mapbox;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mapbox = Mapbox::new(std::env::var("MAPBOX_TOKEN")?)?;
//! let tile = mapbox
//!     .maps
//!     .get_tile(MapId::Satellite, 163, 395, 10, TileFormat::Jpg90, false)
//!     .await?;
//! tile.save("tile.jpg")?;
//! # Ok(())
//! # }
//! ```
//!
//! The transport is injectable through [`base::AsyncHttpClient`]; tests
//! and embedders with their own HTTP stack use
//! [`Mapbox::with_client`].

pub mod base;
pub mod coord;
pub mod directions;
pub mod directions_matrix;
pub mod geocode;
pub mod map_matching;
pub mod maps;
pub mod styles;

pub use base::{ApiError, Base, Location, ReqwestClient};

use base::AsyncHttpClient;
use std::sync::Arc;

/// Crate version, from the package manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Handle binding every API module to one access token and transport.
///
/// The modules are public fields; `maps` needs a mutable handle to
/// install a tile cache or tune fetch concurrency, everything else is
/// usable through a shared reference.
pub struct Mapbox<C = ReqwestClient> {
    pub maps: maps::Maps<C>,
    pub geocode: geocode::Geocode<C>,
    pub directions: directions::Directions<C>,
    pub directions_matrix: directions_matrix::DirectionsMatrix<C>,
    pub map_matching: map_matching::MapMatching<C>,
    pub styles: styles::Styles<C>,
}

impl Mapbox<ReqwestClient> {
    /// Creates a handle with the default `reqwest` transport.
    ///
    /// Fails on an empty token or if the HTTP client cannot be built.
    pub fn new(token: impl Into<String>) -> Result<Self, ApiError> {
        let client = ReqwestClient::new()?;
        Self::with_client(client, token)
    }
}

impl<C: AsyncHttpClient> Mapbox<C> {
    /// Creates a handle over a caller-supplied transport.
    pub fn with_client(client: C, token: impl Into<String>) -> Result<Self, ApiError> {
        let base = Arc::new(Base::new(client, token)?);

        Ok(Self {
            maps: maps::Maps::new(Arc::clone(&base)),
            geocode: geocode::Geocode::new(Arc::clone(&base)),
            directions: directions::Directions::new(Arc::clone(&base)),
            directions_matrix: directions_matrix::DirectionsMatrix::new(Arc::clone(&base)),
            map_matching: map_matching::MapMatching::new(Arc::clone(&base)),
            styles: styles::Styles::new(base),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base::http::mock::MockClient;
    use base::http::HttpResponse;

    #[test]
    fn empty_token_is_rejected() {
        let result = Mapbox::with_client(MockClient::with_response(200, vec![]), "");
        assert!(matches!(result, Err(ApiError::MissingToken)));
    }

    #[tokio::test]
    async fn modules_share_one_token_and_transport() {
        let mock = MockClient::new(|url| {
            assert!(url.ends_with("access_token=pk.shared"), "url was {}", url);
            Ok(HttpResponse {
                status: 200,
                body: br#"{"type":"FeatureCollection","query":[],"features":[],"attribution":""}"#
                    .to_vec(),
            })
        });
        let mapbox = Mapbox::with_client(mock.clone(), "pk.shared").unwrap();

        mapbox
            .geocode
            .forward("anywhere", &geocode::ForwardGeocodeOpts::default())
            .await
            .unwrap();
        assert_eq!(mock.call_count(), 1);
    }

    #[test]
    fn version_matches_manifest() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }
}
