//! Order entity - A customer order and its status lifecycle.
//!
//! Orders are created from a cart checkout and afterwards mutate only via
//! status transition; line items are frozen at creation. The client never
//! deletes orders (deletion exists server-side only). Status values travel
//! on the wire as upper-case strings and an unrecognized value is a
//! conversion defect, never silently coerced.

use crate::entities::{cart::Cart, user::User};
use crate::errors::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of an order.
///
/// Transitions are `Pending -> Accepted -> Delivered`, with cancellation
/// allowed from `Pending` and `Accepted`. `Delivered` and `Cancelled` are
/// terminal. The client does not enforce the graph; it requests a target
/// status and trusts the backend's answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Placed, waiting for the store to accept
    Pending,
    /// Accepted by the store, being prepared
    Accepted,
    /// Handed to the customer; terminal
    Delivered,
    /// Cancelled by either side; terminal
    Cancelled,
}

impl OrderStatus {
    /// The wire representation of this status.
    #[must_use]
    pub const fn as_wire(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Accepted => "ACCEPTED",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "PENDING" => Ok(Self::Pending),
            "ACCEPTED" => Ok(Self::Accepted),
            "DELIVERED" => Ok(Self::Delivered),
            "CANCELLED" => Ok(Self::Cancelled),
            other => Err(Error::conversion(format!(
                "unrecognized order status `{other}`"
            ))),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_wire())
    }
}

/// How the customer chose to pay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Cash on delivery
    Cash,
    /// Bank transfer
    Banking,
}

impl PaymentMethod {
    /// The wire representation of this payment method.
    #[must_use]
    pub const fn as_wire(self) -> &'static str {
        match self {
            Self::Cash => "CASH",
            Self::Banking => "BANKING",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "CASH" => Ok(Self::Cash),
            "BANKING" => Ok(Self::Banking),
            other => Err(Error::conversion(format!(
                "unrecognized payment method `{other}`"
            ))),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_wire())
    }
}

/// A customer order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier for the order
    pub id: i64,
    /// Line items; non-empty for any order that reached `Accepted` or later
    pub items: Vec<Cart>,
    /// Snapshot of the customer who placed the order
    pub user: User,
    /// Current lifecycle state
    pub status: OrderStatus,
    /// How the customer pays
    pub payment_method: PaymentMethod,
    /// Free-form note attached at checkout
    pub note: String,
    /// Derived monetary total; computed client-side at checkout, recomputed
    /// server-side afterwards
    pub total: f64,
    /// When the order was created
    pub created_at: DateTime<Utc>,
}

/// Customer feedback on a delivered order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    /// Star rating, 1-5
    pub rating: u8,
    /// Free-form feedback text
    pub content: String,
}
