//! User entity - Denormalized customer snapshot attached to orders.
//!
//! The pipeline never mutates users; the snapshot captures who placed the
//! order at checkout time and feeds the customer-facing filter columns
//! (name, contact, email, address).

use serde::{Deserialize, Serialize};

/// Customer snapshot carried on every order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier of the customer
    pub id: i64,
    /// Display name of the customer
    pub name: String,
    /// Contact phone number
    pub phone_number: String,
    /// Contact e-mail address
    pub email: String,
    /// Delivery address
    pub address: String,
    /// Whether this user may access the back-office pages
    pub is_admin: bool,
}
