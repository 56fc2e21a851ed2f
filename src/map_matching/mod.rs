//! Map-matching module: snaps noisy GPS traces to the road network.

mod types;

pub use types::{codes, Matching, MatchingOpts, MatchingResponse, Tracepoint};

use crate::base::{join_coordinates, ApiError, AsyncHttpClient, Base, Location, RoutingProfile};
use std::sync::Arc;
use tracing::debug;

/// Map-matching API wrapper.
pub struct MapMatching<C> {
    base: Arc<Base<C>>,
}

impl<C: AsyncHttpClient> MapMatching<C> {
    pub fn new(base: Arc<Base<C>>) -> Self {
        Self { base }
    }

    /// Matches an ordered GPS trace to the road network.
    ///
    /// The API accepts between 2 and 100 trace points per request.
    pub async fn get_matching(
        &self,
        trace: &[Location],
        profile: RoutingProfile,
        opts: &MatchingOpts,
    ) -> Result<MatchingResponse, ApiError> {
        debug!(points = trace.len(), profile = %profile, "map matching request");
        let path = format!(
            "matching/v5/mapbox/{}/{}",
            profile,
            join_coordinates(trace)
        );
        self.base.get_json(&path, &opts.query_pairs()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::http::mock::MockClient;
    use crate::base::http::HttpResponse;

    fn matching_over(mock: MockClient) -> MapMatching<MockClient> {
        MapMatching::new(Arc::new(Base::new(mock, "pk.test").unwrap()))
    }

    #[tokio::test]
    async fn request_path_and_response_decode() {
        let mock = MockClient::new(|url| {
            assert!(
                url.starts_with("https://api.mapbox.com/matching/v5/mapbox/driving/"),
                "url was {}",
                url
            );
            assert!(url.contains("tidy=true"), "url was {}", url);
            Ok(HttpResponse {
                status: 200,
                body: br#"{
                    "code": "Ok",
                    "matchings": [{
                        "confidence": 0.94,
                        "duration": 88.5,
                        "distance": 910.2,
                        "weight": 92.1,
                        "weight_name": "routability",
                        "geometry": "matched~polyline",
                        "legs": []
                    }],
                    "tracepoints": [
                        {
                            "alternatives_count": 0,
                            "waypoint_index": 0,
                            "matchings_index": 0,
                            "name": "North Fairfax Drive",
                            "location": [-77.114642, 38.88482]
                        },
                        null
                    ]
                }"#
                .to_vec(),
            })
        });
        let matching = matching_over(mock);

        let mut opts = MatchingOpts::default();
        opts.tidy = Some(true);

        let trace = [
            Location::new(38.88482, -77.114642),
            Location::new(38.884830, -77.114310),
        ];
        let response = matching
            .get_matching(&trace, RoutingProfile::Driving, &opts)
            .await
            .unwrap();

        assert_eq!(response.code, codes::OK);
        assert!((response.matchings[0].confidence - 0.94).abs() < 1e-9);
        // Unmatchable trace points come back as null.
        assert!(response.tracepoints[0].is_some());
        assert!(response.tracepoints[1].is_none());
    }

    #[tokio::test]
    async fn rate_limit_propagates() {
        let matching = matching_over(MockClient::with_response(429, vec![]));

        let trace = [Location::new(0.0, 0.0), Location::new(1.0, 1.0)];
        let result = matching
            .get_matching(&trace, RoutingProfile::Walking, &MatchingOpts::default())
            .await;
        assert!(matches!(result, Err(ApiError::RateLimited)));
    }
}
