//! Shared geographic and routing types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic point as latitude/longitude in degrees.
///
/// Latitude range is not enforced here; the tile math clamps to the
/// Web Mercator valid range. Longitude may exceed ±180 to express spans
/// that cross the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Formats as `longitude,latitude`, the ordering the Mapbox APIs
    /// expect in coordinate path segments.
    pub fn lng_lat(&self) -> String {
        format!("{},{}", self.longitude, self.latitude)
    }
}

/// A 2-D point serialized as a two-element JSON array, as used by the
/// style document (offsets, translations, map centers).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point(pub f64, pub f64);

/// A geographic bounding box serialized as
/// `[min_lng, min_lat, max_lng, max_lat]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox(pub f64, pub f64, pub f64, pub f64);

/// Routing profile shared by the directions, matrix and map-matching
/// APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoutingProfile {
    Driving,
    DrivingTraffic,
    Walking,
    Cycling,
}

impl RoutingProfile {
    /// The profile name as it appears in request paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutingProfile::Driving => "driving",
            RoutingProfile::DrivingTraffic => "driving-traffic",
            RoutingProfile::Walking => "walking",
            RoutingProfile::Cycling => "cycling",
        }
    }
}

impl fmt::Display for RoutingProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
