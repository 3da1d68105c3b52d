use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::geocoding_api::LocationResolver;
use crate::models::category::CategoryFilter;
use crate::models::restaurant::{Restaurant, SearchLocation};

/// In-memory restaurant catalog. Holds the fixed restaurant list, the current
/// search location and category filter, and the visible subset derived from
/// them.
pub struct CatalogRepo {
    restaurants: Vec<Restaurant>,
    state: RwLock<CatalogState>,
    loading: AtomicBool,
    search_gate: Mutex<()>,
    location_resolver: Arc<dyn LocationResolver>,
}

struct CatalogState {
    search_location: Option<SearchLocation>,
    category_filter: CategoryFilter,
    visible: Vec<Restaurant>,
}

/// Snapshot of the filter state the frontend needs between requests.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct SearchContext {
    pub loading: bool,
    pub category_filter: CategoryFilter,
    pub search_location: Option<SearchLocation>,
}

impl CatalogRepo {
    pub fn new(restaurants: Vec<Restaurant>, location_resolver: Arc<dyn LocationResolver>) -> Self {
        let visible = restaurants.clone();
        Self {
            restaurants,
            state: RwLock::new(CatalogState {
                search_location: None,
                category_filter: CategoryFilter::All,
                visible,
            }),
            loading: AtomicBool::new(false),
            search_gate: Mutex::new(()),
            location_resolver,
        }
    }

    /// Resolves the query to a city and scopes the visible set to it, keeping
    /// the current category filter applied. A search arriving while another
    /// is in flight queues behind it; the later caller's location wins.
    pub async fn search_restaurants(
        &self,
        location_query: &str,
    ) -> anyhow::Result<(SearchLocation, Vec<Restaurant>)> {
        let _in_flight = self.search_gate.lock().await;
        self.loading.store(true, Ordering::SeqCst);

        let resolved = self.location_resolver.resolve_location(location_query).await;
        let outcome = resolved.map(|location| {
            let mut state = self.state.write().unwrap();
            state.search_location = Some(location.clone());
            state.visible = compute_visible(
                &self.restaurants,
                state.search_location.as_ref(),
                state.category_filter,
            );
            (location, state.visible.clone())
        });

        self.loading.store(false, Ordering::SeqCst);
        outcome
    }

    pub fn filter_by_category(&self, category_filter: CategoryFilter) -> Vec<Restaurant> {
        let mut state = self.state.write().unwrap();
        state.category_filter = category_filter;
        state.visible = compute_visible(
            &self.restaurants,
            state.search_location.as_ref(),
            category_filter,
        );
        state.visible.clone()
    }

    pub fn retrieve_restaurant(&self, id: &str) -> Option<Restaurant> {
        self.restaurants
            .iter()
            .find(|restaurant| restaurant.id == id)
            .cloned()
    }

    pub fn visible_restaurants(&self) -> Vec<Restaurant> {
        self.state.read().unwrap().visible.clone()
    }

    pub fn search_context(&self) -> SearchContext {
        let state = self.state.read().unwrap();
        SearchContext {
            loading: self.is_loading(),
            category_filter: state.category_filter,
            search_location: state.search_location.clone(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }
}

/// Pure recomputation of the visible set. No search location yet means every
/// city matches.
fn compute_visible(
    all: &[Restaurant],
    location: Option<&SearchLocation>,
    filter: CategoryFilter,
) -> Vec<Restaurant> {
    all.iter()
        .filter(|restaurant| location.map_or(true, |l| restaurant.is_in_city(&l.city)))
        .filter(|restaurant| filter.matches(restaurant.category))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::geocoding_api::MockGeocodingApi;
    use crate::models::category::Cuisine;
    use crate::repositories::seed;

    fn catalog() -> CatalogRepo {
        CatalogRepo::new(
            seed::restaurants(),
            Arc::new(MockGeocodingApi::new(Duration::ZERO)),
        )
    }

    fn names(restaurants: &[Restaurant]) -> Vec<&str> {
        restaurants
            .iter()
            .map(|restaurant| restaurant.name.as_str())
            .collect()
    }

    #[test]
    fn retrieve_restaurant_finds_every_seeded_id() {
        let catalog = catalog();
        for seeded in seed::restaurants() {
            let found = catalog.retrieve_restaurant(&seeded.id).unwrap();
            assert_eq!(found.name, seeded.name);
        }
        assert!(catalog.retrieve_restaurant("nonexistent").is_none());
    }

    #[test]
    fn visible_set_starts_as_the_whole_catalog() {
        assert_eq!(catalog().visible_restaurants().len(), 6);
    }

    #[tokio::test]
    async fn search_scopes_visible_set_to_the_resolved_city() {
        let catalog = catalog();

        let (location, visible) = catalog.search_restaurants("Los Angeles").await.unwrap();
        assert_eq!(location.city, "Los Angeles");
        assert_eq!(names(&visible), vec!["Thai Spice"]);

        let (location, visible) = catalog.search_restaurants("New York").await.unwrap();
        assert_eq!(location.city, "New York");
        assert_eq!(visible.len(), 5);
    }

    #[tokio::test]
    async fn search_matches_the_city_substring_case_insensitively() {
        let catalog = catalog();
        let (_, visible) = catalog
            .search_restaurants("I live in LOS ANGELES, CA")
            .await
            .unwrap();
        assert_eq!(names(&visible), vec!["Thai Spice"]);
    }

    #[tokio::test]
    async fn unknown_locations_fall_back_to_new_york() {
        let catalog = catalog();
        let (location, visible) = catalog.search_restaurants("Chicago").await.unwrap();
        assert_eq!(location.city, "New York");
        assert_eq!(
            names(&visible),
            vec![
                "Tasty Pizza Palace",
                "Sushi Haven",
                "Taco Fiesta",
                "The Pasta House",
                "Burger Joint"
            ]
        );
    }

    #[tokio::test]
    async fn category_and_city_filters_combine() {
        let catalog = catalog();
        catalog.search_restaurants("New York").await.unwrap();

        let visible = catalog.filter_by_category(CategoryFilter::Only(Cuisine::Sushi));
        assert_eq!(names(&visible), vec!["Sushi Haven"]);

        // Thai Spice is in Los Angeles, so the intersection is empty.
        let visible = catalog.filter_by_category(CategoryFilter::Only(Cuisine::Thai));
        assert!(visible.is_empty());
    }

    #[tokio::test]
    async fn all_filter_restores_the_city_scoped_set() {
        let catalog = catalog();
        catalog.search_restaurants("New York").await.unwrap();

        catalog.filter_by_category(CategoryFilter::Only(Cuisine::Pizza));
        let visible = catalog.filter_by_category(CategoryFilter::All);
        assert_eq!(visible.len(), 5);
    }

    #[test]
    fn category_filter_without_a_search_spans_all_cities() {
        let catalog = catalog();
        let visible = catalog.filter_by_category(CategoryFilter::Only(Cuisine::Thai));
        assert_eq!(names(&visible), vec!["Thai Spice"]);
    }

    #[test]
    fn repeating_a_filter_is_idempotent() {
        let catalog = catalog();
        let first = catalog.filter_by_category(CategoryFilter::Only(Cuisine::Pizza));
        let second = catalog.filter_by_category(CategoryFilter::Only(Cuisine::Pizza));
        assert_eq!(names(&first), names(&second));
    }

    #[tokio::test]
    async fn loading_clears_once_a_search_completes() {
        let catalog = catalog();
        assert!(!catalog.is_loading());
        catalog.search_restaurants("New York").await.unwrap();
        assert!(!catalog.is_loading());
    }

    #[tokio::test]
    async fn the_later_of_two_searches_wins() {
        let catalog = catalog();
        catalog.search_restaurants("Los Angeles").await.unwrap();
        catalog.search_restaurants("somewhere in Brooklyn").await.unwrap();

        let context = catalog.search_context();
        assert_eq!(context.search_location.unwrap().city, "New York");
        assert_eq!(catalog.visible_restaurants().len(), 5);
    }
}
