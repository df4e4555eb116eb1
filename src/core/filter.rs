//! Column filter engine for the order table.
//!
//! Filtering matches a case-preserving substring against a per-column string
//! projection of each row. Columns that resolve through nested objects
//! (customer fields) or require formatting (created date) have dedicated
//! projections; everything else stringifies the field directly. The column
//! key is the exhaustive [`OrderColumn`] enum rather than an ad-hoc string,
//! so a new column cannot be added without deciding how it filters.

use crate::core::format::format_date;
use crate::entities::Order;
use std::collections::HashSet;

/// Column keys of the order table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrderColumn {
    /// Order id
    Id,
    /// Customer name (resolves through `order.user`)
    User,
    /// Customer phone number
    Contact,
    /// Customer e-mail
    Email,
    /// Customer delivery address
    Address,
    /// Monetary total
    Total,
    /// Payment method
    PaymentMethod,
    /// Lifecycle status
    Status,
    /// Checkout note
    Note,
    /// Creation date (matches the displayed formatting)
    CreatedAt,
    /// Food images; displayed but not filterable
    Images,
}

impl OrderColumn {
    /// Every column, in table display order. The order here is also the
    /// column visit order of the all-columns filter.
    pub const ALL: [Self; 11] = [
        Self::Id,
        Self::User,
        Self::Contact,
        Self::Email,
        Self::Address,
        Self::Total,
        Self::PaymentMethod,
        Self::Status,
        Self::Note,
        Self::CreatedAt,
        Self::Images,
    ];

    /// The columns that participate in filtering (everything but images).
    pub fn filterable() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(|column| *column != Self::Images)
    }

    /// Stable string key, used at the interface boundary (CLI arguments,
    /// table configuration).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::User => "user",
            Self::Contact => "contact",
            Self::Email => "email",
            Self::Address => "address",
            Self::Total => "total",
            Self::PaymentMethod => "paymentMethod",
            Self::Status => "status",
            Self::Note => "note",
            Self::CreatedAt => "createdAt",
            Self::Images => "images",
        }
    }

    /// Reverse of [`OrderColumn::key`].
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.key() == key)
    }

    /// Column header shown in the table.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Id => "Order ID",
            Self::User => "Customer",
            Self::Contact => "Contact",
            Self::Email => "Email",
            Self::Address => "Address",
            Self::Total => "Total",
            Self::PaymentMethod => "Payment method",
            Self::Status => "Status",
            Self::Note => "Note",
            Self::CreatedAt => "Order date",
            Self::Images => "Images",
        }
    }

    /// String projection of this column for one row. The created-date
    /// projection goes through the same formatter as display, so filter
    /// input matches what the user sees. Images project to the empty string:
    /// the column shows pictures, there is nothing textual to match.
    #[must_use]
    pub fn project(self, order: &Order) -> String {
        match self {
            Self::Id => order.id.to_string(),
            Self::User => order.user.name.clone(),
            Self::Contact => order.user.phone_number.clone(),
            Self::Email => order.user.email.clone(),
            Self::Address => order.user.address.clone(),
            Self::Total => order.total.to_string(),
            Self::PaymentMethod => order.payment_method.to_string(),
            Self::Status => order.status.to_string(),
            Self::Note => order.note.clone(),
            Self::CreatedAt => format_date(&order.created_at),
            Self::Images => String::new(),
        }
    }
}

/// Returns the stable-order subsequence of `rows` whose projection of
/// `column` contains `input` as a case-preserving substring.
///
/// The empty input trivially matches every row — that is the no-filter
/// resting state, not an error.
#[must_use]
pub fn filter_by_column(input: &str, column: OrderColumn, rows: &[Order]) -> Vec<Order> {
    rows.iter()
        .filter(|order| column.project(order).contains(input))
        .cloned()
        .collect()
}

/// Runs the per-column filter over every filterable column and unions the
/// results by order id.
///
/// A row matches if ANY column's projection contains the input. Results come
/// back in first-seen order across columns — deliberately NOT re-sorted to
/// the original row order.
#[must_use]
pub fn filter_across_all_columns(input: &str, rows: &[Order]) -> Vec<Order> {
    let mut seen: HashSet<i64> = HashSet::new();
    let mut matched = Vec::new();
    for column in OrderColumn::filterable() {
        for order in filter_by_column(input, column, rows) {
            if seen.insert(order.id) {
                matched.push(order);
            }
        }
    }
    matched
}

/// One filter interaction from the table: a column-scoped filter, or the
/// all-columns union when no column is selected.
#[must_use]
pub fn apply_filter_event(input: &str, column: Option<OrderColumn>, rows: &[Order]) -> Vec<Order> {
    match column {
        Some(column) => filter_by_column(input, column, rows),
        None => filter_across_all_columns(input, rows),
    }
}
