//! Report endpoints.
//!
//! Reports are aggregated entirely server-side; the client only parameterizes
//! the date range and decodes the rows.

use crate::api::ApiClient;
use crate::core::time_filter::DateRange;
use crate::entities::CustomerReportRow;
use crate::errors::Result;

/// Query-parameter timestamp format for report endpoints.
const QUERY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Report operations of the storefront API.
#[allow(async_fn_in_trait)]
pub trait ReportApi {
    /// Date-range-parameterized `GET /api/reports/customer` returning
    /// pre-aggregated rows per customer.
    async fn fetch_customer_report(&self, range: &DateRange) -> Result<Vec<CustomerReportRow>>;
}

impl ReportApi for ApiClient {
    async fn fetch_customer_report(&self, range: &DateRange) -> Result<Vec<CustomerReportRow>> {
        let response = self
            .http
            .get(self.url("/api/reports/customer"))
            .query(&[
                ("startDate", range.start.format(QUERY_FORMAT).to_string()),
                ("endDate", range.end.format(QUERY_FORMAT).to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}
