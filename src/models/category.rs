use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde_with::{DeserializeFromStr, SerializeDisplay};

#[derive(Clone, Copy, PartialEq, Eq, Debug, SerializeDisplay, DeserializeFromStr)]
pub enum Cuisine {
    Pizza,
    Sushi,
    Mexican,
    Italian,
    American,
    Thai,
    Indian,
    Chinese,
}

impl Cuisine {
    pub const ALL: [Cuisine; 8] = [
        Cuisine::Pizza,
        Cuisine::Sushi,
        Cuisine::Mexican,
        Cuisine::Italian,
        Cuisine::American,
        Cuisine::Thai,
        Cuisine::Indian,
        Cuisine::Chinese,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Cuisine::Pizza => "Pizza",
            Cuisine::Sushi => "Sushi",
            Cuisine::Mexican => "Mexican",
            Cuisine::Italian => "Italian",
            Cuisine::American => "American",
            Cuisine::Thai => "Thai",
            Cuisine::Indian => "Indian",
            Cuisine::Chinese => "Chinese",
        }
    }

    /// Icon name the frontend renders next to the category button.
    pub fn icon(&self) -> &'static str {
        match self {
            Cuisine::Pizza => "pizza",
            Cuisine::Sushi
            | Cuisine::Mexican
            | Cuisine::Italian
            | Cuisine::American
            | Cuisine::Thai
            | Cuisine::Indian
            | Cuisine::Chinese => "utensils",
        }
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cuisine {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pizza" => Ok(Cuisine::Pizza),
            "Sushi" => Ok(Cuisine::Sushi),
            "Mexican" => Ok(Cuisine::Mexican),
            "Italian" => Ok(Cuisine::Italian),
            "American" => Ok(Cuisine::American),
            "Thai" => Ok(Cuisine::Thai),
            "Indian" => Ok(Cuisine::Indian),
            "Chinese" => Ok(Cuisine::Chinese),
            other => Err(anyhow!("Unknown cuisine category: {}", other)),
        }
    }
}

/// Either the whole catalog or a single cuisine. Defaults to `All`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, SerializeDisplay, DeserializeFromStr)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Cuisine),
}

impl CategoryFilter {
    pub fn matches(&self, cuisine: Cuisine) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == cuisine,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(cuisine) => f.write_str(cuisine.as_str()),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(CategoryFilter::All);
        }
        Cuisine::from_str(s).map(CategoryFilter::Only)
    }
}
