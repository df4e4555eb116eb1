//! Shared test utilities.
//!
//! Fixture builders for domain entities and wire records with sensible
//! defaults, plus mock implementations of the API traits so workflow and
//! report tests run without a network.

use crate::api::dto::{
    CartData, FoodCategoryData, FoodData, FoodSizeData, OrderData, OrderToSend, UserData,
};
use crate::api::{OrderApi, ReportApi};
use crate::core::time_filter::DateRange;
use crate::entities::{
    Cart, CustomerReportRow, Feedback, Food, FoodCategory, FoodSize, FoodStatus, Order,
    OrderStatus, PaymentMethod, User,
};
use crate::errors::{Error, Result};
use chrono::{DateTime, TimeZone, Utc};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Builds a UTC timestamp from calendar parts.
pub fn ts(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, hh, mm, 0).unwrap()
}

/// The error a mock returns when it has no scripted response: shaped like a
/// transport failure.
pub fn transport_error() -> Error {
    Error::Io(std::io::Error::other("connection refused"))
}

/// Customer snapshot with sensible defaults.
pub fn sample_user() -> User {
    User {
        id: 1,
        name: "Alice".to_string(),
        phone_number: "555-0101".to_string(),
        email: "alice@example.com".to_string(),
        address: "12 Main St".to_string(),
        is_admin: false,
    }
}

/// Category fixture.
pub fn sample_category() -> FoodCategory {
    FoodCategory {
        id: 1,
        name: "Pizza".to_string(),
        image: None,
    }
}

/// Food fixture with two size variants (ids 1 and 2).
pub fn sample_food(id: i64) -> Food {
    Food {
        id,
        name: "Margherita".to_string(),
        description: "Classic tomato and mozzarella".to_string(),
        category: sample_category(),
        food_sizes: vec![
            FoodSize {
                id: 1,
                name: "M".to_string(),
                price: 9.5,
                weight: 400.0,
                note: String::new(),
            },
            FoodSize {
                id: 2,
                name: "L".to_string(),
                price: 12.5,
                weight: 600.0,
                note: String::new(),
            },
        ],
        images: vec!["https://img.example.com/margherita.jpg".to_string()],
        tags: vec!["pizza".to_string()],
        status: FoodStatus::Active,
        rating: 4.5,
    }
}

/// Cart line fixture: size variant 1 of food 1 with the given price snapshot
/// and quantity.
pub fn sample_cart(id: i64, price: f64, quantity: u32) -> Cart {
    let food = sample_food(1);
    let food_size = food.food_sizes[0].clone();
    Cart {
        id,
        food,
        food_size,
        quantity,
        price,
        note: String::new(),
    }
}

/// Pending cash order fixture with one line item.
pub fn sample_order(id: i64, created_at: DateTime<Utc>) -> Order {
    Order {
        id,
        items: vec![sample_cart(1, 9.5, 1)],
        user: sample_user(),
        status: OrderStatus::Pending,
        payment_method: PaymentMethod::Cash,
        note: String::new(),
        total: 9.5,
        created_at,
    }
}

/// Wire food record matching [`sample_food`].
pub fn sample_food_data(id: i64) -> FoodData {
    FoodData {
        id,
        name: "Margherita".to_string(),
        description: Some("Classic tomato and mozzarella".to_string()),
        category: Some(FoodCategoryData {
            id: 1,
            name: "Pizza".to_string(),
            image: None,
        }),
        food_sizes: vec![
            FoodSizeData {
                id: 1,
                name: "M".to_string(),
                price: 9.5,
                weight: 400.0,
                note: None,
            },
            FoodSizeData {
                id: 2,
                name: "L".to_string(),
                price: 12.5,
                weight: 600.0,
                note: None,
            },
        ],
        images: vec!["https://img.example.com/margherita.jpg".to_string()],
        tags: vec!["pizza".to_string()],
        status: "ACTIVE".to_string(),
        rating: 4.5,
    }
}

/// Wire cart record referencing size variant 1 of [`sample_food_data`].
pub fn sample_cart_data(id: i64) -> CartData {
    CartData {
        id,
        quantity: 1,
        price: 9.5,
        note: None,
        food: Some(sample_food_data(1)),
        food_size_id: Some(1),
    }
}

/// Well-formed pending order record with one line item.
pub fn sample_order_data(id: i64, created_at: &str) -> OrderData {
    OrderData {
        id,
        items: vec![sample_cart_data(1)],
        user: Some(UserData {
            id: 1,
            name: "Alice".to_string(),
            phone_number: "555-0101".to_string(),
            email: "alice@example.com".to_string(),
            address: "12 Main St".to_string(),
            is_admin: false,
        }),
        status: "PENDING".to_string(),
        payment_method: "CASH".to_string(),
        note: None,
        total: 9.5,
        created_at: created_at.to_string(),
    }
}

/// Report row with the given revenue; the other metrics default to values
/// derived from it.
pub fn sample_report_row(customer_id: i64, revenue: f64) -> CustomerReportRow {
    CustomerReportRow {
        customer_id,
        customer_name: format!("Customer {customer_id}"),
        sub_total: revenue,
        discount_value: 0.0,
        revenue,
        return_revenue: 0.0,
        net_revenue: revenue,
    }
}

/// Scriptable in-memory [`OrderApi`] implementation.
///
/// `fetch_orders` serves the `orders` list (or a transport error when
/// `fail_fetch` is set); `update_order_status` pops scripted responses front
/// to back and calls the probe, if any, while the request is "on the wire".
#[derive(Default)]
pub struct MockOrderApi {
    /// Payload served by `fetch_orders`
    pub orders: Mutex<Vec<OrderData>>,
    /// When set, `fetch_orders` fails with a transport error
    pub fail_fetch: Mutex<bool>,
    /// Scripted `update_order_status` responses, popped front to back
    pub update_responses: Mutex<VecDeque<Result<OrderData>>>,
    /// Recorded `(id, status)` update calls
    pub update_calls: Mutex<Vec<(i64, OrderStatus)>>,
    /// Hook invoked mid-update, before the response resolves
    pub update_probe: Mutex<Option<Box<dyn Fn(i64) + Send>>>,
    /// Scripted `create_order` response
    pub create_response: Mutex<Option<Result<OrderData>>>,
    /// Drafts received by `create_order`
    pub created_drafts: Mutex<Vec<OrderToSend>>,
}

impl OrderApi for MockOrderApi {
    async fn fetch_orders(&self) -> Result<Vec<OrderData>> {
        if *self.fail_fetch.lock().unwrap() {
            return Err(transport_error());
        }
        Ok(self.orders.lock().unwrap().clone())
    }

    async fn fetch_order(&self, id: i64) -> Result<OrderData> {
        self.orders
            .lock()
            .unwrap()
            .iter()
            .find(|order| order.id == id)
            .cloned()
            .ok_or_else(transport_error)
    }

    async fn create_order(&self, draft: &OrderToSend) -> Result<OrderData> {
        self.created_drafts.lock().unwrap().push(draft.clone());
        self.create_response
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(transport_error()))
    }

    async fn update_order_status(&self, id: i64, status: OrderStatus) -> Result<OrderData> {
        self.update_calls.lock().unwrap().push((id, status));
        if let Some(probe) = self.update_probe.lock().unwrap().as_ref() {
            probe(id);
        }
        self.update_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(transport_error()))
    }

    async fn delete_order(&self, _id: i64) -> Result<()> {
        Ok(())
    }

    async fn send_feedback(&self, id: i64, _feedback: &Feedback) -> Result<OrderData> {
        self.fetch_order(id).await
    }
}

/// Scriptable in-memory [`ReportApi`] implementation recording the requested
/// range.
#[derive(Default)]
pub struct MockReportApi {
    /// Rows served by `fetch_customer_report`
    pub rows: Mutex<Vec<CustomerReportRow>>,
    /// When set, the fetch fails with a transport error
    pub fail_fetch: Mutex<bool>,
    /// The last requested date range
    pub last_range: Mutex<Option<DateRange>>,
}

impl ReportApi for MockReportApi {
    async fn fetch_customer_report(&self, range: &DateRange) -> Result<Vec<CustomerReportRow>> {
        *self.last_range.lock().unwrap() = Some(range.clone());
        if *self.fail_fetch.lock().unwrap() {
            return Err(transport_error());
        }
        Ok(self.rows.lock().unwrap().clone())
    }
}
