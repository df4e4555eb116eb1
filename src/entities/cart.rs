//! Cart entity - A single order line item.
//!
//! A cart snapshots the food, the selected size variant, and the price at
//! order time. The `price` field is deliberately decoupled from the live
//! product price, so menu edits never change what a customer was charged.
//! Once attached to an order a cart is owned exclusively by it.

use crate::entities::food::{Food, FoodSize};
use serde::{Deserialize, Serialize};

/// One line item of an order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    /// Unique identifier for the cart line
    pub id: i64,
    /// Snapshot of the ordered food
    pub food: Food,
    /// The size variant the customer selected
    pub food_size: FoodSize,
    /// Number of units ordered; always positive
    pub quantity: u32,
    /// Unit price snapshot taken at order time
    pub price: f64,
    /// Free-form note from the customer (e.g., "no onions")
    pub note: String,
}

impl Cart {
    /// Line total for this item.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}
