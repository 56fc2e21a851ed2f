//! Directions-matrix request options and response documents.

use crate::base::Point;
use serde::Deserialize;

/// Response codes returned in [`MatrixResponse::code`].
pub mod codes {
    pub const OK: &str = "Ok";
    pub const PROFILE_NOT_FOUND: &str = "ProfileNotFound";
    pub const INVALID_INPUT: &str = "InvalidInput";
}

/// Which coordinates act as sources and destinations.
///
/// Unset sides default to `all`: every coordinate participates.
#[derive(Debug, Clone, Default)]
pub struct MatrixOpts {
    sources: Option<String>,
    destinations: Option<String>,
}

impl MatrixOpts {
    /// Restricts matrix sources to the coordinates at these indices.
    pub fn set_sources(&mut self, indices: &[usize]) {
        self.sources = Some(join_indices(indices));
    }

    /// Uses every coordinate as a source (the default).
    pub fn set_all_sources(&mut self) {
        self.sources = Some("all".to_string());
    }

    /// Restricts matrix destinations to the coordinates at these
    /// indices.
    pub fn set_destinations(&mut self, indices: &[usize]) {
        self.destinations = Some(join_indices(indices));
    }

    /// Uses every coordinate as a destination (the default).
    pub fn set_all_destinations(&mut self) {
        self.destinations = Some("all".to_string());
    }

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(sources) = &self.sources {
            pairs.push(("sources", sources.clone()));
        }
        if let Some(destinations) = &self.destinations {
            pairs.push(("destinations", destinations.clone()));
        }
        pairs
    }
}

fn join_indices(indices: &[usize]) -> String {
    indices
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(";")
}

/// Directions-matrix response document.
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixResponse {
    /// One of the [`codes`] constants.
    pub code: String,
    /// Travel time in seconds from each source (row) to each
    /// destination (column). `None` marks unreachable pairs.
    #[serde(default)]
    pub durations: Vec<Vec<Option<f64>>>,
    #[serde(default)]
    pub sources: Vec<MatrixWaypoint>,
    #[serde(default)]
    pub destinations: Vec<MatrixWaypoint>,
}

/// A snapped matrix coordinate.
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixWaypoint {
    #[serde(default)]
    pub name: String,
    /// Snapped coordinate as `[lng, lat]`.
    pub location: Point,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_restrictions_join_with_semicolons() {
        let mut opts = MatrixOpts::default();
        opts.set_sources(&[0, 1]);
        opts.set_destinations(&[2]);

        assert_eq!(
            opts.query_pairs(),
            vec![
                ("sources", "0;1".to_string()),
                ("destinations", "2".to_string()),
            ]
        );
    }

    #[test]
    fn all_keyword_and_defaults() {
        let mut opts = MatrixOpts::default();
        assert!(opts.query_pairs().is_empty());

        opts.set_all_sources();
        opts.set_all_destinations();
        assert_eq!(
            opts.query_pairs(),
            vec![
                ("sources", "all".to_string()),
                ("destinations", "all".to_string()),
            ]
        );
    }

    #[test]
    fn durations_decode_nulls_as_none() {
        let document = r#"{
            "code": "Ok",
            "durations": [[0.0, null], [null, 0.0]],
            "sources": [],
            "destinations": []
        }"#;

        let response: MatrixResponse = serde_json::from_str(document).unwrap();
        assert_eq!(response.durations[0][0], Some(0.0));
        assert_eq!(response.durations[0][1], None);
        assert_eq!(response.durations[1][0], None);
    }
}
