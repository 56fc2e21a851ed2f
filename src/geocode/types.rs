//! Geocoding request options and response documents.

use crate::base::{BoundingBox, Location, Point};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Place types usable as result filters and returned in
/// [`Feature::place_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceType {
    Country,
    Region,
    Postcode,
    District,
    Place,
    Locality,
    Neighborhood,
    Address,
    Poi,
}

impl PlaceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceType::Country => "country",
            PlaceType::Region => "region",
            PlaceType::Postcode => "postcode",
            PlaceType::District => "district",
            PlaceType::Place => "place",
            PlaceType::Locality => "locality",
            PlaceType::Neighborhood => "neighborhood",
            PlaceType::Address => "address",
            PlaceType::Poi => "poi",
        }
    }
}

impl fmt::Display for PlaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for forward geocoding (place name to coordinates).
#[derive(Debug, Clone, Default)]
pub struct ForwardGeocodeOpts {
    /// Restrict results to one or more ISO 3166-1 alpha-2 countries.
    pub country: Option<String>,
    /// Bias results toward this location.
    pub proximity: Option<Location>,
    /// Restrict results to these place types.
    pub types: Vec<PlaceType>,
    /// Enable autocomplete-style partial matching.
    pub autocomplete: Option<bool>,
    /// Restrict results to this bounding box.
    pub bbox: Option<BoundingBox>,
    /// Maximum number of results.
    pub limit: Option<u32>,
}

impl ForwardGeocodeOpts {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(country) = &self.country {
            pairs.push(("country", country.clone()));
        }
        if let Some(proximity) = &self.proximity {
            pairs.push(("proximity", proximity.lng_lat()));
        }
        if !self.types.is_empty() {
            pairs.push(("types", join_types(&self.types)));
        }
        if let Some(autocomplete) = self.autocomplete {
            pairs.push(("autocomplete", autocomplete.to_string()));
        }
        if let Some(BoundingBox(min_lng, min_lat, max_lng, max_lat)) = self.bbox {
            pairs.push((
                "bbox",
                format!("{},{},{},{}", min_lng, min_lat, max_lng, max_lat),
            ));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

/// Options for reverse geocoding (coordinates to place names).
#[derive(Debug, Clone, Default)]
pub struct ReverseGeocodeOpts {
    /// Restrict results to these place types.
    pub types: Vec<PlaceType>,
    /// Maximum number of results.
    pub limit: Option<u32>,
}

impl ReverseGeocodeOpts {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.types.is_empty() {
            pairs.push(("types", join_types(&self.types)));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

fn join_types(types: &[PlaceType]) -> String {
    types
        .iter()
        .map(PlaceType::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

/// Geocoding response: a GeoJSON feature collection.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    #[serde(rename = "type")]
    pub response_type: String,
    /// The query as interpreted by the API. Strings for forward
    /// geocoding, numbers for reverse.
    #[serde(default)]
    pub query: Vec<serde_json::Value>,
    pub features: Vec<Feature>,
    #[serde(default)]
    pub attribution: String,
}

/// One geocoding result.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub id: String,
    #[serde(rename = "type")]
    pub feature_type: String,
    #[serde(default)]
    pub place_type: Vec<String>,
    #[serde(default)]
    pub relevance: f64,
    /// Short place name.
    #[serde(default)]
    pub text: String,
    /// Fully qualified place name, including context.
    #[serde(default)]
    pub place_name: String,
    #[serde(default)]
    pub bbox: Option<BoundingBox>,
    /// Result coordinates as `[lng, lat]`.
    pub center: Point,
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: serde_json::Map<String, serde_json::Value>,
    /// Enclosing places, most specific first.
    #[serde(default)]
    pub context: Vec<Context>,
}

/// Point geometry of a geocoding result.
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub geometry_type: String,
    pub coordinates: Point,
    #[serde(default)]
    pub interpolated: bool,
}

/// An enclosing place in a feature's context chain.
#[derive(Debug, Clone, Deserialize)]
pub struct Context {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub short_code: Option<String>,
    #[serde(default)]
    pub wikidata: Option<String>,
}

// Serialize is unused by the client itself but lets callers persist
// options alongside results.
impl Serialize for PlaceType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
