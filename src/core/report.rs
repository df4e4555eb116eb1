//! Customer report pipeline - resolve the range, fetch, filter, summarize.
//!
//! The backend aggregates per customer; this module only parameterizes the
//! fetch with the resolved date range, applies the configured metric ranges
//! to the returned rows, and renders a printable report. Re-running the
//! pipeline whenever the query changes is the caller's responsibility —
//! mode, bucket, static range, and metric ranges are all reactive inputs.

use crate::api::ReportApi;
use crate::core::format::display_number;
use crate::core::range::{ReportMetric, ReportRanges, apply_range_filters};
use crate::core::time_filter::{
    DateRange, FilterBucket, TimeFilterMode, resolve_date_range,
};
use crate::entities::CustomerReportRow;
use crate::errors::Result;
use chrono::{DateTime, NaiveDateTime, Utc};

/// Everything the customer report page feeds the pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomerReportQuery {
    /// Which range source is active
    pub mode: TimeFilterMode,
    /// Relative bucket, used in [`TimeFilterMode::SingleBucket`]
    pub bucket: FilterBucket,
    /// Explicit pair, used in [`TimeFilterMode::StaticRange`]
    pub static_range: DateRange,
    /// Metric range conditions
    pub ranges: ReportRanges,
}

impl CustomerReportQuery {
    /// Query for a relative bucket with no metric constraints.
    #[must_use]
    pub fn for_bucket(bucket: FilterBucket) -> Self {
        Self {
            mode: TimeFilterMode::SingleBucket,
            bucket,
            static_range: DateRange {
                start: DateTime::<Utc>::UNIX_EPOCH.naive_utc(),
                end: DateTime::<Utc>::UNIX_EPOCH.naive_utc(),
            },
            ranges: ReportRanges::default(),
        }
    }

    /// Query for an explicit date range with no metric constraints.
    #[must_use]
    pub fn for_range(range: DateRange) -> Self {
        Self {
            mode: TimeFilterMode::StaticRange,
            bucket: FilterBucket::Today,
            static_range: range,
            ranges: ReportRanges::default(),
        }
    }
}

/// Column totals over the filtered rows.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ReportTotals {
    /// Number of customers in the filtered report
    pub customer_count: usize,
    /// Sum of sub-totals
    pub sub_total: f64,
    /// Sum of discounts
    pub discount_value: f64,
    /// Sum of gross revenue
    pub revenue: f64,
    /// Sum of returned revenue
    pub return_revenue: f64,
    /// Sum of net revenue
    pub net_revenue: f64,
}

/// Sums every metric column over the rows.
#[must_use]
pub fn report_totals(rows: &[CustomerReportRow]) -> ReportTotals {
    let mut totals = ReportTotals {
        customer_count: rows.len(),
        ..ReportTotals::default()
    };
    for row in rows {
        totals.sub_total += row.sub_total;
        totals.discount_value += row.discount_value;
        totals.revenue += row.revenue;
        totals.return_revenue += row.return_revenue;
        totals.net_revenue += row.net_revenue;
    }
    totals
}

/// Runs the full report pipeline: resolve the date range against `now`,
/// fetch the pre-aggregated rows, and keep those passing every metric range.
///
/// # Errors
/// Propagates network and decode failures from the report endpoint.
pub async fn load_customer_report<A: ReportApi>(
    api: &A,
    query: &CustomerReportQuery,
    now: NaiveDateTime,
) -> Result<Vec<CustomerReportRow>> {
    let range = resolve_date_range(query.mode, query.bucket, &query.static_range, now);
    let rows = api.fetch_customer_report(&range).await?;
    Ok(apply_range_filters(&query.ranges, &rows))
}

/// One printable report line.
#[must_use]
pub fn format_report_row(row: &CustomerReportRow) -> String {
    format!(
        "{:>6}  {:<24} {:>12} {:>12} {:>12} {:>12} {:>12}",
        row.customer_id,
        row.customer_name,
        display_number(row.sub_total, "$"),
        display_number(row.discount_value, "$"),
        display_number(row.revenue, "$"),
        display_number(row.return_revenue, "$"),
        display_number(row.net_revenue, "$"),
    )
}

/// Renders the whole report as plain text: title, range, header, rows, and a
/// totals line.
#[must_use]
pub fn render_customer_report(rows: &[CustomerReportRow], range: &DateRange) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "CUSTOMER REPORT  {} - {}\n",
        range.start.format("%Y-%m-%d"),
        range.end.format("%Y-%m-%d"),
    ));
    out.push_str(&format!(
        "{:>6}  {:<24} {:>12} {:>12} {:>12} {:>12} {:>12}\n",
        "ID",
        "Customer",
        ReportMetric::SubTotal.title(),
        "Discount",
        ReportMetric::Revenue.title(),
        "Returns",
        "Net",
    ));
    for row in rows {
        out.push_str(&format_report_row(row));
        out.push('\n');
    }

    let totals = report_totals(rows);
    out.push_str(&format!(
        "{:>6}  {:<24} {:>12} {:>12} {:>12} {:>12} {:>12}\n",
        "",
        format!("TOTAL ({} customers)", totals.customer_count),
        display_number(totals.sub_total, "$"),
        display_number(totals.discount_value, "$"),
        display_number(totals.revenue, "$"),
        display_number(totals.return_revenue, "$"),
        display_number(totals.net_revenue, "$"),
    ));
    out
}
