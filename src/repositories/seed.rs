use std::collections::HashMap;

use time::macros::datetime;

use crate::models::category::Cuisine;
use crate::models::restaurant::{Location, Restaurant};
use crate::models::review::Review;

/// Fixed catalog the app ships with until a real data source lands.
pub fn restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant {
            id: "1".to_string(),
            name: "Tasty Pizza Palace".to_string(),
            category: Cuisine::Pizza,
            image_url: "/placeholder.svg".to_string(),
            rating: 4.5,
            review_count: 128,
            description: "Authentic Italian pizza with a variety of fresh toppings.".to_string(),
            address: "123 Main St".to_string(),
            city: "New York".to_string(),
            zip_code: "10001".to_string(),
            coordinates: Location {
                lat: 40.7128,
                lng: -74.0060,
            },
            phone: Some("(212) 555-1234".to_string()),
            website: Some("https://example.com".to_string()),
            hours: Some(HashMap::from([
                ("Monday".to_string(), "11AM-10PM".to_string()),
                ("Tuesday".to_string(), "11AM-10PM".to_string()),
                ("Wednesday".to_string(), "11AM-10PM".to_string()),
                ("Thursday".to_string(), "11AM-10PM".to_string()),
                ("Friday".to_string(), "11AM-11PM".to_string()),
                ("Saturday".to_string(), "11AM-11PM".to_string()),
                ("Sunday".to_string(), "12PM-9PM".to_string()),
            ])),
        },
        Restaurant {
            id: "2".to_string(),
            name: "Sushi Haven".to_string(),
            category: Cuisine::Sushi,
            image_url: "/placeholder.svg".to_string(),
            rating: 4.8,
            review_count: 256,
            description: "Premium sushi and sashimi prepared by master chefs.".to_string(),
            address: "456 Elm St".to_string(),
            city: "New York".to_string(),
            zip_code: "10001".to_string(),
            coordinates: Location {
                lat: 40.7160,
                lng: -74.0030,
            },
            phone: Some("(212) 555-5678".to_string()),
            website: Some("https://example.com".to_string()),
            hours: None,
        },
        Restaurant {
            id: "3".to_string(),
            name: "Taco Fiesta".to_string(),
            category: Cuisine::Mexican,
            image_url: "/placeholder.svg".to_string(),
            rating: 4.2,
            review_count: 87,
            description: "Authentic Mexican tacos, burritos, and enchiladas.".to_string(),
            address: "789 Oak St".to_string(),
            city: "New York".to_string(),
            zip_code: "10001".to_string(),
            coordinates: Location {
                lat: 40.7200,
                lng: -74.0100,
            },
            phone: Some("(212) 555-9012".to_string()),
            website: None,
            hours: None,
        },
        Restaurant {
            id: "4".to_string(),
            name: "The Pasta House".to_string(),
            category: Cuisine::Italian,
            image_url: "/placeholder.svg".to_string(),
            rating: 4.6,
            review_count: 173,
            description: "Handmade pasta dishes with traditional Italian sauces.".to_string(),
            address: "321 Pine St".to_string(),
            city: "New York".to_string(),
            zip_code: "10002".to_string(),
            coordinates: Location {
                lat: 40.7180,
                lng: -74.0080,
            },
            phone: None,
            website: None,
            hours: None,
        },
        Restaurant {
            id: "5".to_string(),
            name: "Burger Joint".to_string(),
            category: Cuisine::American,
            image_url: "/placeholder.svg".to_string(),
            rating: 4.3,
            review_count: 142,
            description: "Juicy burgers with a variety of toppings and sides.".to_string(),
            address: "555 Maple St".to_string(),
            city: "New York".to_string(),
            zip_code: "10002".to_string(),
            coordinates: Location {
                lat: 40.7220,
                lng: -74.0070,
            },
            phone: None,
            website: None,
            hours: None,
        },
        Restaurant {
            id: "6".to_string(),
            name: "Thai Spice".to_string(),
            category: Cuisine::Thai,
            image_url: "/placeholder.svg".to_string(),
            rating: 4.7,
            review_count: 109,
            description: "Authentic Thai cuisine with fresh ingredients and bold flavors."
                .to_string(),
            address: "888 Walnut St".to_string(),
            city: "Los Angeles".to_string(),
            zip_code: "90001".to_string(),
            coordinates: Location {
                lat: 34.0522,
                lng: -118.2437,
            },
            phone: None,
            website: None,
            hours: None,
        },
    ]
}

pub fn reviews() -> Vec<Review> {
    vec![
        Review {
            id: "1".to_string(),
            restaurant_id: "1".to_string(),
            user_id: "101".to_string(),
            user_name: "John Smith".to_string(),
            rating: 4,
            text: "Great pizza! The crust was perfect and toppings were fresh. Will definitely come back.".to_string(),
            created_at: datetime!(2023-06-15 14:30:00 UTC),
        },
        Review {
            id: "2".to_string(),
            restaurant_id: "1".to_string(),
            user_id: "102".to_string(),
            user_name: "Sarah Johnson".to_string(),
            rating: 5,
            text: "Best pizza in town! Amazing flavors and excellent service.".to_string(),
            created_at: datetime!(2023-07-20 18:45:00 UTC),
        },
        Review {
            id: "3".to_string(),
            restaurant_id: "2".to_string(),
            user_id: "103".to_string(),
            user_name: "Mike Brown".to_string(),
            rating: 5,
            text: "The sushi was incredibly fresh. Chef really knows what he's doing!".to_string(),
            created_at: datetime!(2023-05-10 19:15:00 UTC),
        },
    ]
}
