//! Directions-matrix module: all-pairs travel durations between a set
//! of coordinates.

mod types;

pub use types::{codes, MatrixOpts, MatrixResponse, MatrixWaypoint};

use crate::base::{join_coordinates, ApiError, AsyncHttpClient, Base, Location, RoutingProfile};
use std::sync::Arc;
use tracing::debug;

/// Directions-matrix API wrapper.
pub struct DirectionsMatrix<C> {
    base: Arc<Base<C>>,
}

impl<C: AsyncHttpClient> DirectionsMatrix<C> {
    pub fn new(base: Arc<Base<C>>) -> Self {
        Self { base }
    }

    /// Requests the duration matrix between the given coordinates.
    ///
    /// By default every coordinate is both a source and a destination;
    /// restrict either side with [`MatrixOpts::set_sources`] and
    /// [`MatrixOpts::set_destinations`].
    pub async fn get_matrix(
        &self,
        locations: &[Location],
        profile: RoutingProfile,
        opts: &MatrixOpts,
    ) -> Result<MatrixResponse, ApiError> {
        debug!(
            coordinates = locations.len(),
            profile = %profile,
            "directions matrix request"
        );
        let path = format!(
            "directions-matrix/v1/mapbox/{}/{}",
            profile,
            join_coordinates(locations)
        );
        self.base.get_json(&path, &opts.query_pairs()).await
    }
}
