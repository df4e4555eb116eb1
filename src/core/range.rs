//! Numeric range filters over pre-aggregated report rows.
//!
//! A row passes a metric's range when it is >= the lower bound and <= the
//! upper bound, both inclusive; an absent bound means unconstrained. Bounds
//! are explicit `Option`s — the UI convention of NaN-as-"nothing entered yet"
//! is absorbed at construction, so the comparison logic never sees a NaN
//! bound and cannot silently fail closed on one.

use crate::entities::CustomerReportRow;

/// Inclusive lower/upper bound pair with explicit "unbounded" ends.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ValueRange {
    /// Inclusive lower bound; `None` means no lower constraint
    pub start: Option<f64>,
    /// Inclusive upper bound; `None` means no upper constraint
    pub end: Option<f64>,
}

impl ValueRange {
    /// No constraint on either end.
    pub const UNBOUNDED: Self = Self {
        start: None,
        end: None,
    };

    /// Builds a range from raw bound values, mapping NaN to "unbounded".
    /// This is the bridge from UI state where an empty input field is NaN.
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start: (!start.is_nan()).then_some(start),
            end: (!end.is_nan()).then_some(end),
        }
    }

    /// Whether `value` satisfies both bounds.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        self.start.is_none_or(|start| value >= start) && self.end.is_none_or(|end| value <= end)
    }
}

/// The range-filterable metrics of a customer report row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportMetric {
    /// Gross order value before discounts
    SubTotal,
    /// Total discount granted
    DiscountValue,
    /// Gross revenue
    Revenue,
    /// Revenue returned through cancellations
    ReturnRevenue,
    /// Revenue net of returns
    NetRevenue,
}

impl ReportMetric {
    /// Every metric, in report column order.
    pub const ALL: [Self; 5] = [
        Self::SubTotal,
        Self::DiscountValue,
        Self::Revenue,
        Self::ReturnRevenue,
        Self::NetRevenue,
    ];

    /// Reads this metric off a row.
    #[must_use]
    pub const fn value_of(self, row: &CustomerReportRow) -> f64 {
        match self {
            Self::SubTotal => row.sub_total,
            Self::DiscountValue => row.discount_value,
            Self::Revenue => row.revenue,
            Self::ReturnRevenue => row.return_revenue,
            Self::NetRevenue => row.net_revenue,
        }
    }

    /// Filter panel / report header title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::SubTotal => "Sub Total",
            Self::DiscountValue => "Discount Value",
            Self::Revenue => "Revenue",
            Self::ReturnRevenue => "Return Revenue",
            Self::NetRevenue => "Net Revenue",
        }
    }
}

/// One [`ValueRange`] per metric. A row must pass every configured range
/// simultaneously; the default is fully unconstrained.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ReportRanges {
    /// Range on the sub-total metric
    pub sub_total: ValueRange,
    /// Range on the discount metric
    pub discount_value: ValueRange,
    /// Range on gross revenue
    pub revenue: ValueRange,
    /// Range on returned revenue
    pub return_revenue: ValueRange,
    /// Range on net revenue
    pub net_revenue: ValueRange,
}

impl ReportRanges {
    /// The range configured for one metric.
    #[must_use]
    pub const fn range_for(&self, metric: ReportMetric) -> ValueRange {
        match metric {
            ReportMetric::SubTotal => self.sub_total,
            ReportMetric::DiscountValue => self.discount_value,
            ReportMetric::Revenue => self.revenue,
            ReportMetric::ReturnRevenue => self.return_revenue,
            ReportMetric::NetRevenue => self.net_revenue,
        }
    }

    /// Logical AND across all metric ranges.
    #[must_use]
    pub fn matches(&self, row: &CustomerReportRow) -> bool {
        ReportMetric::ALL
            .into_iter()
            .all(|metric| self.range_for(metric).contains(metric.value_of(row)))
    }
}

/// Keeps the rows that pass every configured metric range, in their original
/// order.
#[must_use]
pub fn apply_range_filters(ranges: &ReportRanges, rows: &[CustomerReportRow]) -> Vec<CustomerReportRow> {
    rows.iter()
        .filter(|row| ranges.matches(row))
        .cloned()
        .collect()
}
