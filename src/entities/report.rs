//! Report entity - Pre-aggregated per-customer report rows.
//!
//! Rows are produced entirely server-side and treated as opaque by the
//! client except for the five numeric metrics, which are range-filterable.
//! The wire shape and the domain shape are identical, so these deserialize
//! straight off the report endpoint.

use serde::{Deserialize, Serialize};

/// One row of the customer report: aggregated metrics for one customer over
/// the requested date range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerReportRow {
    /// Identity of the customer the row aggregates
    pub customer_id: i64,
    /// Display name of the customer
    pub customer_name: String,
    /// Gross order value before discounts
    pub sub_total: f64,
    /// Total discount granted
    pub discount_value: f64,
    /// Gross revenue
    pub revenue: f64,
    /// Revenue returned through cancellations
    pub return_revenue: f64,
    /// Revenue net of returns
    pub net_revenue: f64,
}
