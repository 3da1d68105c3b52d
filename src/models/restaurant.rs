use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::category::Cuisine;

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub category: Cuisine,
    pub image_url: String,
    pub rating: f64,
    pub review_count: u32,
    pub description: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub coordinates: Location,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub hours: Option<HashMap<String, String>>,
}

impl Restaurant {
    pub fn is_in_city(&self, city: &str) -> bool {
        self.city.eq_ignore_ascii_case(city)
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// City-level location context set by the most recent search.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct SearchLocation {
    pub lat: f64,
    pub lng: f64,
    pub city: String,
}

impl SearchLocation {
    pub fn new_york() -> Self {
        Self {
            lat: 40.7128,
            lng: -74.0060,
            city: "New York".to_string(),
        }
    }

    pub fn los_angeles() -> Self {
        Self {
            lat: 34.0522,
            lng: -118.2437,
            city: "Los Angeles".to_string(),
        }
    }
}
