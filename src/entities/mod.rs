//! Entity module - Contains the typed domain models of the storefront.
//!
//! All entities are immutable value snapshots from the pipeline's point of
//! view; the only mutation the client performs is the order status
//! transition, and even that goes through whole-value replacement in the
//! order store rather than in-place field edits.

pub mod cart;
pub mod food;
pub mod order;
pub mod report;
pub mod user;

pub use cart::Cart;
pub use food::{Food, FoodCategory, FoodSize, FoodStatus};
pub use order::{Feedback, Order, OrderStatus, PaymentMethod};
pub use report::CustomerReportRow;
pub use user::User;
