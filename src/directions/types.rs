//! Directions request options and response documents.

use crate::base::Point;
use serde::Deserialize;

/// Response codes returned in [`DirectionsResponse::code`].
pub mod codes {
    pub const OK: &str = "Ok";
    pub const NO_ROUTE: &str = "NoRoute";
    pub const NO_SEGMENT: &str = "NoSegment";
    pub const PROFILE_NOT_FOUND: &str = "ProfileNotFound";
    pub const INVALID_INPUT: &str = "InvalidInput";
}

/// Route geometry encodings selectable via
/// [`DirectionsOpts::geometries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryEncoding {
    /// Encoded polyline, precision 5.
    Polyline,
    /// Encoded polyline, precision 6.
    Polyline6,
    /// Plain GeoJSON geometry.
    GeoJson,
}

impl GeometryEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryEncoding::Polyline => "polyline",
            GeometryEncoding::Polyline6 => "polyline6",
            GeometryEncoding::GeoJson => "geojson",
        }
    }
}

/// Level of route overview geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overview {
    Full,
    Simplified,
    None,
}

impl Overview {
    pub fn as_str(&self) -> &'static str {
        match self {
            Overview::Full => "full",
            Overview::Simplified => "simplified",
            Overview::None => "false",
        }
    }
}

/// Options for a directions request.
#[derive(Debug, Clone, Default)]
pub struct DirectionsOpts {
    /// Return alternative routes in addition to the best one.
    pub alternatives: Option<bool>,
    /// Geometry encoding of returned routes.
    pub geometries: Option<GeometryEncoding>,
    /// Overview geometry granularity.
    pub overview: Option<Overview>,
    /// Return turn-by-turn steps.
    pub steps: Option<bool>,
    /// Allow the route to start against the driving direction.
    pub continue_straight: Option<bool>,
}

impl DirectionsOpts {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(alternatives) = self.alternatives {
            pairs.push(("alternatives", alternatives.to_string()));
        }
        if let Some(geometries) = self.geometries {
            pairs.push(("geometries", geometries.as_str().to_string()));
        }
        if let Some(overview) = self.overview {
            pairs.push(("overview", overview.as_str().to_string()));
        }
        if let Some(steps) = self.steps {
            pairs.push(("steps", steps.to_string()));
        }
        if let Some(continue_straight) = self.continue_straight {
            pairs.push(("continue_straight", continue_straight.to_string()));
        }
        pairs
    }
}

/// Route geometry: an encoded polyline string or inline GeoJSON,
/// depending on the requested encoding.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Geometry {
    Polyline(String),
    GeoJson {
        #[serde(rename = "type")]
        geometry_type: String,
        coordinates: Vec<Point>,
    },
}

/// Directions response document.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    /// One of the [`codes`] constants.
    pub code: String,
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default)]
    pub waypoints: Vec<Waypoint>,
}

/// A snapped input coordinate.
#[derive(Debug, Clone, Deserialize)]
pub struct Waypoint {
    #[serde(default)]
    pub name: String,
    /// Snapped coordinate as `[lng, lat]`.
    pub location: Point,
}

/// One route from origin to destination through every waypoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Route {
    /// Travel time in seconds.
    pub duration: f64,
    /// Length in meters.
    pub distance: f64,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub weight_name: String,
    pub geometry: Geometry,
    #[serde(default)]
    pub legs: Vec<Leg>,
}

/// A route section between two waypoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Leg {
    pub duration: f64,
    pub distance: f64,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One turn-by-turn instruction.
#[derive(Debug, Clone, Deserialize)]
pub struct Step {
    pub duration: f64,
    pub distance: f64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mode: String,
    pub maneuver: Maneuver,
    pub geometry: Geometry,
}

/// The maneuver opening a step.
#[derive(Debug, Clone, Deserialize)]
pub struct Maneuver {
    pub location: Point,
    #[serde(default)]
    pub bearing_before: f64,
    #[serde(default)]
    pub bearing_after: f64,
    #[serde(rename = "type")]
    pub maneuver_type: String,
    #[serde(default)]
    pub modifier: Option<String>,
    #[serde(default)]
    pub instruction: String,
}
