//! Wire records for the storefront API.
//!
//! These mirror the JSON the server sends and accepts, deliberately loosely
//! typed: enum-like fields travel as strings and timestamps as formatted
//! text, so the strict parsing lives in `core::convert` where a bad value
//! can be reported as a conversion defect instead of an opaque decode error.
//! Incoming records end in `Data`; outgoing ones end in `ToSend` and carry
//! only what the server does not compute itself.

use serde::{Deserialize, Serialize};

/// Incoming customer snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    /// Customer id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Contact phone number
    pub phone_number: String,
    /// Contact e-mail
    pub email: String,
    /// Delivery address
    pub address: String,
    /// Back-office access flag
    #[serde(default)]
    pub is_admin: bool,
}

/// Incoming food category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodCategoryData {
    /// Category id
    pub id: i64,
    /// Category name
    pub name: String,
    /// Optional banner image URL
    #[serde(default)]
    pub image: Option<String>,
}

/// Incoming food size variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodSizeData {
    /// Variant id
    pub id: i64,
    /// Variant name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Portion weight
    pub weight: f64,
    /// Optional variant note
    #[serde(default)]
    pub note: Option<String>,
}

/// Incoming food record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodData {
    /// Food id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Storefront description
    #[serde(default)]
    pub description: Option<String>,
    /// Category reference; required for a well-formed food
    pub category: Option<FoodCategoryData>,
    /// Size variants; a well-formed food has at least one
    #[serde(default)]
    pub food_sizes: Vec<FoodSizeData>,
    /// Image URLs
    #[serde(default)]
    pub images: Vec<String>,
    /// Tag labels
    #[serde(default)]
    pub tags: Vec<String>,
    /// Wire status string (`ACTIVE` / `DISABLE`)
    pub status: String,
    /// Derived rating aggregate
    #[serde(default)]
    pub rating: f64,
}

/// Incoming order line item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartData {
    /// Cart line id
    pub id: i64,
    /// Units ordered
    pub quantity: u32,
    /// Unit price snapshot at order time
    pub price: f64,
    /// Customer note for this line
    #[serde(default)]
    pub note: Option<String>,
    /// Snapshot of the ordered food; required
    pub food: Option<FoodData>,
    /// Id of the selected size variant, resolved against `food.foodSizes`
    pub food_size_id: Option<i64>,
}

/// Incoming order record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderData {
    /// Order id
    pub id: i64,
    /// Line items
    #[serde(default)]
    pub items: Vec<CartData>,
    /// Customer snapshot; required
    pub user: Option<UserData>,
    /// Wire status string (`PENDING`, `ACCEPTED`, `DELIVERED`, `CANCELLED`)
    pub status: String,
    /// Wire payment method string (`CASH` / `BANKING`)
    pub payment_method: String,
    /// Checkout note
    #[serde(default)]
    pub note: Option<String>,
    /// Server-computed monetary total
    #[serde(default)]
    pub total: f64,
    /// Creation timestamp, RFC 3339 or naive `YYYY-MM-DDTHH:MM:SS`
    pub created_at: String,
}

/// Outgoing order line: just the references the server needs to rebuild the
/// cart, snapshots stripped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartToSend {
    /// Cart line id
    pub id: i64,
    /// Selected size variant id
    pub food_size_id: i64,
    /// Units ordered
    pub quantity: u32,
    /// Customer note for this line
    pub note: String,
}

/// Outgoing order draft. The server computes `total` and `createdAt` and
/// attaches the authenticated user, so none of those travel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderToSend {
    /// Line item references
    pub items: Vec<CartToSend>,
    /// Requested initial status
    pub status: String,
    /// Payment method
    pub payment_method: String,
    /// Checkout note
    pub note: String,
}

/// Body of the status-transition PUT.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusToSend {
    /// Target wire status
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_data_decodes_camel_case_payload() {
        let raw = r#"{
            "id": 7,
            "items": [],
            "user": {
                "id": 1,
                "name": "Alice",
                "phoneNumber": "555-0101",
                "email": "alice@example.com",
                "address": "12 Main St",
                "isAdmin": false
            },
            "status": "PENDING",
            "paymentMethod": "CASH",
            "note": "",
            "total": 12.5,
            "createdAt": "2024-01-05T09:30:00"
        }"#;

        let order: OrderData = serde_json::from_str(raw).unwrap();
        assert_eq!(order.id, 7);
        assert_eq!(order.user.as_ref().unwrap().phone_number, "555-0101");
        assert_eq!(order.payment_method, "CASH");
        assert_eq!(order.created_at, "2024-01-05T09:30:00");
    }

    #[test]
    fn test_order_data_tolerates_missing_optional_fields() {
        let raw = r#"{
            "id": 8,
            "user": null,
            "status": "PENDING",
            "paymentMethod": "CASH",
            "createdAt": "2024-01-05T09:30:00"
        }"#;

        let order: OrderData = serde_json::from_str(raw).unwrap();
        assert!(order.items.is_empty());
        assert!(order.user.is_none());
        assert_eq!(order.note, None);
        assert_eq!(order.total, 0.0);
    }

    #[test]
    fn test_status_to_send_shape() {
        let body = StatusToSend {
            status: "CANCELLED".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"status":"CANCELLED"}"#
        );
    }
}
