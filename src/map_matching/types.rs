//! Map-matching request options and response documents.

use crate::base::Point;
use crate::directions::{Geometry, GeometryEncoding, Leg, Overview};
use serde::Deserialize;

/// Response codes returned in [`MatchingResponse::code`].
pub mod codes {
    pub const OK: &str = "Ok";
    pub const NO_MATCH: &str = "NoMatch";
    pub const TOO_MANY_COORDINATES: &str = "TooManyCoordinates";
    pub const PROFILE_NOT_FOUND: &str = "ProfileNotFound";
    pub const INVALID_INPUT: &str = "InvalidInput";
}

/// Options for a map-matching request.
#[derive(Debug, Clone, Default)]
pub struct MatchingOpts {
    /// Geometry encoding of matched routes.
    pub geometries: Option<GeometryEncoding>,
    /// Overview geometry granularity.
    pub overview: Option<Overview>,
    /// Return turn-by-turn steps.
    pub steps: Option<bool>,
    /// Remove clusters and redundant trace points before matching.
    pub tidy: Option<bool>,
    /// Per-point GPS accuracy in meters; must match the trace length
    /// when set.
    pub radiuses: Vec<f64>,
    /// Per-point Unix timestamps; must match the trace length when set.
    pub timestamps: Vec<u64>,
}

impl MatchingOpts {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(geometries) = self.geometries {
            pairs.push(("geometries", geometries.as_str().to_string()));
        }
        if let Some(overview) = self.overview {
            pairs.push(("overview", overview.as_str().to_string()));
        }
        if let Some(steps) = self.steps {
            pairs.push(("steps", steps.to_string()));
        }
        if let Some(tidy) = self.tidy {
            pairs.push(("tidy", tidy.to_string()));
        }
        if !self.radiuses.is_empty() {
            pairs.push(("radiuses", join_values(&self.radiuses)));
        }
        if !self.timestamps.is_empty() {
            pairs.push(("timestamps", join_values(&self.timestamps)));
        }
        pairs
    }
}

fn join_values<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(T::to_string)
        .collect::<Vec<_>>()
        .join(";")
}

/// Map-matching response document.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchingResponse {
    /// One of the [`codes`] constants.
    pub code: String,
    #[serde(default)]
    pub matchings: Vec<Matching>,
    /// One entry per input trace point, in order; `None` where the
    /// point could not be matched to the road network.
    #[serde(default)]
    pub tracepoints: Vec<Option<Tracepoint>>,
}

/// One matched route through the road network.
#[derive(Debug, Clone, Deserialize)]
pub struct Matching {
    /// Match confidence between 0 and 1.
    pub confidence: f64,
    pub duration: f64,
    pub distance: f64,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub weight_name: String,
    pub geometry: Geometry,
    #[serde(default)]
    pub legs: Vec<Leg>,
}

/// A trace point snapped to the road network.
#[derive(Debug, Clone, Deserialize)]
pub struct Tracepoint {
    #[serde(default)]
    pub alternatives_count: u32,
    /// Index of this point within the matching's waypoints.
    #[serde(default)]
    pub waypoint_index: u32,
    /// Index of the [`Matching`] this point belongs to.
    #[serde(default)]
    pub matchings_index: u32,
    #[serde(default)]
    pub name: String,
    /// Snapped coordinate as `[lng, lat]`.
    pub location: Point,
}
