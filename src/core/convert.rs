//! Domain converters - wire records in, typed entities out (and back).
//!
//! `*_from_wire` functions are total over well-formed payloads and fail with
//! [`Error::Conversion`] when a required nested entity is absent or a field
//! value falls outside its domain. Callers must not assume partial success:
//! a failed conversion travels the same path as a failed request.
//! `order_to_wire` is the intended inverse, minus the fields the server
//! computes itself (`total`, `createdAt`, denormalized snapshots).

use crate::api::dto::{CartData, CartToSend, FoodData, OrderData, OrderToSend, UserData};
use crate::entities::{
    Cart, Food, FoodCategory, FoodSize, FoodStatus, Order, OrderStatus, PaymentMethod, User,
};
use crate::errors::{Error, Result};
use chrono::{DateTime, NaiveDateTime, Utc};

/// Parses a wire timestamp: RFC 3339, or the naive `YYYY-MM-DDTHH:MM:SS[.fff]`
/// shape the backend emits for local times.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|err| Error::conversion(format!("unparseable timestamp `{raw}`: {err}")))
}

/// Converts an incoming customer snapshot.
#[must_use]
pub fn user_from_wire(data: UserData) -> User {
    User {
        id: data.id,
        name: data.name,
        phone_number: data.phone_number,
        email: data.email,
        address: data.address,
        is_admin: data.is_admin,
    }
}

/// Converts an incoming food record.
///
/// # Errors
/// Fails if the category is missing, the size list is empty, or the status
/// string is outside the wire domain.
pub fn food_from_wire(data: FoodData) -> Result<Food> {
    let category = data
        .category
        .ok_or_else(|| Error::conversion(format!("food {} is missing its category", data.id)))?;

    if data.food_sizes.is_empty() {
        return Err(Error::conversion(format!(
            "food {} has no size variants",
            data.id
        )));
    }

    Ok(Food {
        id: data.id,
        name: data.name,
        description: data.description.unwrap_or_default(),
        category: FoodCategory {
            id: category.id,
            name: category.name,
            image: category.image,
        },
        food_sizes: data
            .food_sizes
            .into_iter()
            .map(|size| FoodSize {
                id: size.id,
                name: size.name,
                price: size.price,
                weight: size.weight,
                note: size.note.unwrap_or_default(),
            })
            .collect(),
        images: data.images,
        tags: data.tags,
        status: data.status.parse::<FoodStatus>()?,
        rating: data.rating,
    })
}

/// Converts an incoming order line item.
///
/// # Errors
/// Fails if the food snapshot is absent, the referenced size variant cannot
/// be resolved on it, or the quantity is not positive.
pub fn cart_from_wire(data: CartData) -> Result<Cart> {
    let food_data = data
        .food
        .ok_or_else(|| Error::conversion(format!("cart {} is missing its food", data.id)))?;
    let food = food_from_wire(food_data)?;

    let food_size_id = data
        .food_size_id
        .ok_or_else(|| Error::conversion(format!("cart {} is missing its food size", data.id)))?;
    let food_size = food
        .size_by_id(food_size_id)
        .cloned()
        .ok_or_else(|| {
            Error::conversion(format!(
                "food size {food_size_id} not found on food {}",
                food.id
            ))
        })?;

    if data.quantity == 0 {
        return Err(Error::conversion(format!(
            "cart {} has non-positive quantity",
            data.id
        )));
    }

    Ok(Cart {
        id: data.id,
        food,
        food_size,
        quantity: data.quantity,
        price: data.price,
        note: data.note.unwrap_or_default(),
    })
}

/// Converts an incoming order record: parses the timestamp, maps nested cart
/// records through [`cart_from_wire`], and parses the status and payment
/// enums strictly — an unrecognized value is a defect to surface, never
/// silently coerced.
///
/// # Errors
/// Fails on any nested conversion failure, a missing user snapshot, or an
/// `ACCEPTED`/`DELIVERED` order with an empty item list.
pub fn order_from_wire(data: OrderData) -> Result<Order> {
    let created_at = parse_timestamp(&data.created_at)?;
    let status = data.status.parse::<OrderStatus>()?;
    let payment_method = data.payment_method.parse::<PaymentMethod>()?;

    let user = data
        .user
        .map(user_from_wire)
        .ok_or_else(|| Error::conversion(format!("order {} is missing its user", data.id)))?;

    let items = data
        .items
        .into_iter()
        .map(cart_from_wire)
        .collect::<Result<Vec<_>>>()?;

    if items.is_empty() && matches!(status, OrderStatus::Accepted | OrderStatus::Delivered) {
        return Err(Error::conversion(format!(
            "order {} reached {status} with no items",
            data.id
        )));
    }

    Ok(Order {
        id: data.id,
        items,
        user,
        status,
        payment_method,
        note: data.note.unwrap_or_default(),
        total: data.total,
        created_at,
    })
}

/// Builds the outgoing record for an order, stripping everything the server
/// computes: `total`, `createdAt`, and the denormalized snapshots. Line items
/// reduce to the references the server needs to rebuild them.
#[must_use]
pub fn order_to_wire(order: &Order, status: OrderStatus) -> OrderToSend {
    OrderToSend {
        items: order
            .items
            .iter()
            .map(|cart| CartToSend {
                id: cart.id,
                food_size_id: cart.food_size.id,
                quantity: cart.quantity,
                note: cart.note.clone(),
            })
            .collect(),
        status: status.as_wire().to_string(),
        payment_method: order.payment_method.as_wire().to_string(),
        note: order.note.clone(),
    }
}

/// Builds a new order draft from an in-progress cart.
///
/// The total is the sum of `price * quantity` over the carts in insertion
/// order — the values are already rounded currency, so the sum must not be
/// reordered.
#[must_use]
pub fn carts_to_order(
    carts: Vec<Cart>,
    payment_method: PaymentMethod,
    note: String,
    user: User,
) -> Order {
    let total = carts.iter().map(Cart::line_total).sum();

    Order {
        id: 0,
        items: carts,
        user,
        status: OrderStatus::Pending,
        payment_method,
        note,
        total,
        created_at: Utc::now(),
    }
}

/// Flat shape of the back-office food form. Size prices and weights are
/// already numeric at this stage; string validation happens upstream in the
/// form layer.
#[derive(Clone, Debug, PartialEq)]
pub struct FoodForm {
    /// Food name
    pub name: String,
    /// Storefront description
    pub description: String,
    /// Storefront visibility
    pub status: FoodStatus,
    /// Image URLs, 1-5
    pub images: Vec<String>,
    /// Size variants as entered
    pub sizes: Vec<FoodSizeForm>,
    /// Tag labels
    pub tags: Vec<String>,
}

/// One size row of the food form.
#[derive(Clone, Debug, PartialEq)]
pub struct FoodSizeForm {
    /// Variant name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Portion weight
    pub weight: f64,
    /// Variant note
    pub note: String,
}

/// Maps the flat form shape into the nested [`Food`] shape. Ids are 0 until
/// the server assigns them; the rating aggregate starts at zero.
#[must_use]
pub fn food_from_form(form: FoodForm, category: FoodCategory) -> Food {
    Food {
        id: 0,
        name: form.name,
        description: form.description,
        category,
        food_sizes: form
            .sizes
            .into_iter()
            .map(|size| FoodSize {
                id: 0,
                name: size.name,
                price: size.price,
                weight: size.weight,
                note: size.note,
            })
            .collect(),
        images: form.images,
        tags: form.tags,
        status: form.status,
        rating: 0.0,
    }
}
