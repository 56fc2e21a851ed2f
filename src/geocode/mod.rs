//! Geocoding module: forward (place name to coordinates) and reverse
//! (coordinates to place names) lookups against the `mapbox.places`
//! dataset.

mod types;

pub use types::{
    Context, Feature, ForwardGeocodeOpts, GeocodeResponse, Geometry, PlaceType,
    ReverseGeocodeOpts,
};

use crate::base::{ApiError, AsyncHttpClient, Base, Location};
use std::sync::Arc;
use tracing::debug;

const ENDPOINT: &str = "geocoding/v5/mapbox.places";

/// Geocoding API wrapper.
pub struct Geocode<C> {
    base: Arc<Base<C>>,
}

impl<C: AsyncHttpClient> Geocode<C> {
    pub fn new(base: Arc<Base<C>>) -> Self {
        Self { base }
    }

    /// Looks up coordinates for a place name or address.
    pub async fn forward(
        &self,
        query: &str,
        opts: &ForwardGeocodeOpts,
    ) -> Result<GeocodeResponse, ApiError> {
        debug!(query, "forward geocode");
        let path = format!("{}/{}.json", ENDPOINT, urlencoding::encode(query));
        self.base.get_json(&path, &opts.query_pairs()).await
    }

    /// Looks up place names for a coordinate.
    pub async fn reverse(
        &self,
        location: Location,
        opts: &ReverseGeocodeOpts,
    ) -> Result<GeocodeResponse, ApiError> {
        debug!(
            latitude = location.latitude,
            longitude = location.longitude,
            "reverse geocode"
        );
        let path = format!("{}/{}.json", ENDPOINT, location.lng_lat());
        self.base.get_json(&path, &opts.query_pairs()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::http::mock::MockClient;
    use crate::base::http::HttpResponse;

    const EMPTY_COLLECTION: &str =
        r#"{"type":"FeatureCollection","query":[],"features":[],"attribution":""}"#;

    fn geocode_over(mock: MockClient) -> Geocode<MockClient> {
        Geocode::new(Arc::new(Base::new(mock, "pk.test").unwrap()))
    }

    #[tokio::test]
    async fn forward_encodes_query_into_path() {
        let mock = MockClient::new(|url| {
            assert_eq!(
                url,
                "https://api.mapbox.com/geocoding/v5/mapbox.places/2%20lincoln%20memorial.json?limit=1&access_token=pk.test"
            );
            Ok(HttpResponse {
                status: 200,
                body: EMPTY_COLLECTION.as_bytes().to_vec(),
            })
        });
        let geocode = geocode_over(mock);

        let opts = ForwardGeocodeOpts {
            limit: Some(1),
            ..Default::default()
        };
        let response = geocode.forward("2 lincoln memorial", &opts).await.unwrap();
        assert!(response.features.is_empty());
    }

    #[tokio::test]
    async fn reverse_builds_lng_lat_path() {
        let mock = MockClient::new(|url| {
            assert!(
                url.starts_with(
                    "https://api.mapbox.com/geocoding/v5/mapbox.places/-77.050636,38.889248.json?"
                ),
                "url was {}",
                url
            );
            Ok(HttpResponse {
                status: 200,
                body: EMPTY_COLLECTION.as_bytes().to_vec(),
            })
        });
        let geocode = geocode_over(mock);

        geocode
            .reverse(
                Location::new(38.889248, -77.050636),
                &ReverseGeocodeOpts::default(),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn unauthorized_propagates() {
        let geocode = geocode_over(MockClient::with_response(401, vec![]));

        let result = geocode
            .forward("anywhere", &ForwardGeocodeOpts::default())
            .await;
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }

    #[tokio::test]
    async fn malformed_body_is_a_json_error() {
        let geocode = geocode_over(MockClient::with_response(200, b"<html>".to_vec()));

        let result = geocode
            .forward("anywhere", &ForwardGeocodeOpts::default())
            .await;
        assert!(matches!(result, Err(ApiError::Json(_))));
    }
}
