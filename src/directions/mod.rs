//! Directions module: routes between waypoints for a routing profile.

mod types;

pub use types::{
    codes, DirectionsOpts, DirectionsResponse, Geometry, GeometryEncoding, Leg, Maneuver,
    Overview, Route, Step, Waypoint,
};

use crate::base::{join_coordinates, ApiError, AsyncHttpClient, Base, Location, RoutingProfile};
use std::sync::Arc;
use tracing::debug;

/// Directions API wrapper.
pub struct Directions<C> {
    base: Arc<Base<C>>,
}

impl<C: AsyncHttpClient> Directions<C> {
    pub fn new(base: Arc<Base<C>>) -> Self {
        Self { base }
    }

    /// Requests a route visiting the given locations in order.
    ///
    /// At least two locations (origin and destination) are required;
    /// the API rejects anything shorter with an error response.
    pub async fn get_directions(
        &self,
        locations: &[Location],
        profile: RoutingProfile,
        opts: &DirectionsOpts,
    ) -> Result<DirectionsResponse, ApiError> {
        debug!(
            waypoints = locations.len(),
            profile = %profile,
            "directions request"
        );
        let path = format!(
            "directions/v5/mapbox/{}/{}",
            profile,
            join_coordinates(locations)
        );
        self.base.get_json(&path, &opts.query_pairs()).await
    }
}
