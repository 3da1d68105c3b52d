use std::time::Duration;

use async_trait::async_trait;

use crate::models::restaurant::SearchLocation;

/// Resolves free-text location queries to a known city. Injected into the
/// catalog so a real geocoding client can replace the mock without touching
/// catalog logic.
#[async_trait]
pub trait LocationResolver: Send + Sync {
    async fn resolve_location(&self, location_query: &str) -> anyhow::Result<SearchLocation>;
}

/// Stand-in for a real geocoding service. Knows the two cities the seed data
/// covers and falls back to New York for everything else.
pub struct MockGeocodingApi {
    latency: Duration,
}

impl MockGeocodingApi {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl LocationResolver for MockGeocodingApi {
    async fn resolve_location(&self, location_query: &str) -> anyhow::Result<SearchLocation> {
        tokio::time::sleep(self.latency).await;

        if location_query.to_lowercase().contains("los angeles") {
            return Ok(SearchLocation::los_angeles());
        }
        Ok(SearchLocation::new_york())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> MockGeocodingApi {
        MockGeocodingApi::new(Duration::ZERO)
    }

    #[tokio::test]
    async fn matches_los_angeles_anywhere_in_the_query() {
        let resolved = resolver()
            .resolve_location("I live in LOS ANGELES, CA")
            .await
            .unwrap();
        assert_eq!(resolved, SearchLocation::los_angeles());
    }

    #[tokio::test]
    async fn falls_back_to_new_york_for_unknown_places() {
        let resolved = resolver().resolve_location("Chicago").await.unwrap();
        assert_eq!(resolved, SearchLocation::new_york());

        let resolved = resolver().resolve_location("").await.unwrap();
        assert_eq!(resolved, SearchLocation::new_york());
    }
}
