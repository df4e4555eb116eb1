//! Food entity - Products on the menu, their categories, and size variants.
//!
//! Each food carries an ordered list of size variants (at least one), 1-5
//! image URLs, a set-like list of tag labels, and a derived rating aggregate.
//! Carts snapshot these values at order time, so later edits to a food never
//! retroactively change an order.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Menu category a food belongs to (one-to-one reference).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FoodCategory {
    /// Unique identifier for the category
    pub id: i64,
    /// Human-readable category name (e.g., "Pizza", "Drinks")
    pub name: String,
    /// Optional banner image URL
    pub image: Option<String>,
}

/// A purchasable size variant of a food.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FoodSize {
    /// Unique identifier for the variant
    pub id: i64,
    /// Variant name (e.g., "S", "M", "L")
    pub name: String,
    /// Unit price in dollars
    pub price: f64,
    /// Portion weight in grams
    pub weight: f64,
    /// Free-form note about the variant
    pub note: String,
}

/// Whether a food is currently offered on the storefront.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodStatus {
    /// Visible and orderable
    Active,
    /// Hidden from the storefront
    Disable,
}

impl FromStr for FoodStatus {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "ACTIVE" => Ok(Self::Active),
            "DISABLE" => Ok(Self::Disable),
            other => Err(Error::conversion(format!(
                "unrecognized food status `{other}`"
            ))),
        }
    }
}

impl fmt::Display for FoodStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => f.pad("ACTIVE"),
            Self::Disable => f.pad("DISABLE"),
        }
    }
}

/// A product on the menu.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Food {
    /// Unique identifier for the food
    pub id: i64,
    /// Display name of the food
    pub name: String,
    /// Longer storefront description
    pub description: String,
    /// Category the food belongs to
    pub category: FoodCategory,
    /// Ordered size variants; at least one is required
    pub food_sizes: Vec<FoodSize>,
    /// 1-5 image URLs
    pub images: Vec<String>,
    /// Set-like list of tag labels
    pub tags: Vec<String>,
    /// Storefront visibility
    pub status: FoodStatus,
    /// Derived rating aggregate, always >= 0
    pub rating: f64,
}

impl Food {
    /// Looks up a size variant by its id.
    #[must_use]
    pub fn size_by_id(&self, food_size_id: i64) -> Option<&FoodSize> {
        self.food_sizes.iter().find(|size| size.id == food_size_id)
    }
}
