use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use anyhow::anyhow;
use time::OffsetDateTime;

use crate::models::review::Review;

/// Append-only in-memory review store, keyed by restaurant id. Newest review
/// first, the order the detail page renders them in.
pub struct ReviewRepo {
    reviews_by_restaurant: RwLock<HashMap<String, Vec<Review>>>,
    next_review_id: AtomicU64,
}

impl ReviewRepo {
    pub fn new(seed_reviews: Vec<Review>) -> Self {
        let mut reviews_by_restaurant: HashMap<String, Vec<Review>> = HashMap::new();
        let mut highest_id = 0;
        for review in seed_reviews {
            if let Ok(numeric_id) = review.id.parse::<u64>() {
                highest_id = highest_id.max(numeric_id);
            }
            reviews_by_restaurant
                .entry(review.restaurant_id.clone())
                .or_default()
                .push(review);
        }

        Self {
            reviews_by_restaurant: RwLock::new(reviews_by_restaurant),
            next_review_id: AtomicU64::new(highest_id + 1),
        }
    }

    pub fn retrieve_restaurant_reviews(&self, restaurant_id: &str) -> Vec<Review> {
        self.reviews_by_restaurant
            .read()
            .unwrap()
            .get(restaurant_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn get_user_reviews(&self, user_id: &str) -> Vec<Review> {
        self.reviews_by_restaurant
            .read()
            .unwrap()
            .values()
            .flatten()
            .filter(|review| review.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn add_review(
        &self,
        restaurant_id: &str,
        user_id: &str,
        user_name: &str,
        rating: u8,
        text: &str,
    ) -> anyhow::Result<Review> {
        if text.trim().is_empty() {
            return Err(anyhow!("Review text must not be empty"));
        }

        let review = Review {
            id: self
                .next_review_id
                .fetch_add(1, Ordering::SeqCst)
                .to_string(),
            restaurant_id: restaurant_id.to_string(),
            user_id: user_id.to_string(),
            user_name: user_name.to_string(),
            rating,
            text: text.to_string(),
            created_at: OffsetDateTime::now_utc(),
        };

        self.reviews_by_restaurant
            .write()
            .unwrap()
            .entry(restaurant_id.to_string())
            .or_default()
            .insert(0, review.clone());

        Ok(review)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::seed;

    fn repo() -> ReviewRepo {
        ReviewRepo::new(seed::reviews())
    }

    #[test]
    fn seeded_reviews_are_grouped_by_restaurant() {
        let repo = repo();
        assert_eq!(repo.retrieve_restaurant_reviews("1").len(), 2);
        assert_eq!(repo.retrieve_restaurant_reviews("2").len(), 1);
        assert!(repo.retrieve_restaurant_reviews("6").is_empty());
    }

    #[test]
    fn new_reviews_land_first_with_a_fresh_id() {
        let repo = repo();
        let added = repo
            .add_review("1", "104", "Jane Doe", 3, "Decent slice, slow service.")
            .unwrap();
        assert_eq!(added.id, "4");

        let reviews = repo.retrieve_restaurant_reviews("1");
        assert_eq!(reviews.len(), 3);
        assert_eq!(reviews[0].user_name, "Jane Doe");
    }

    #[test]
    fn empty_review_text_is_rejected() {
        let repo = repo();
        assert!(repo.add_review("1", "104", "Jane Doe", 3, "   ").is_err());
        assert_eq!(repo.retrieve_restaurant_reviews("1").len(), 2);
    }

    #[test]
    fn user_reviews_span_restaurants() {
        let repo = repo();
        repo.add_review("2", "101", "John Smith", 4, "Solid nigiri.")
            .unwrap();

        let reviews = repo.get_user_reviews("101");
        assert_eq!(reviews.len(), 2);
        assert!(repo.get_user_reviews("999").is_empty());
    }
}
