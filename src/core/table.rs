//! Data table adapter contract.
//!
//! The table itself is UI plumbing and lives outside this crate; what the
//! pipeline owns is the configuration the table consumes — which columns
//! exist and in what order, which are visible by default, which can be
//! filtered on, and how rows are colored by status. Filter interactions come
//! back as [`FilterEvent`]s and feed `core::filter::apply_filter_event`.

use crate::core::filter::OrderColumn;
use crate::entities::OrderStatus;

/// One column of a table: key, header, default visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSpec<C> {
    /// Column key
    pub key: C,
    /// Header text
    pub title: &'static str,
    /// Whether the column is shown before the user touches view options
    pub visible: bool,
}

/// Maps one status value to a row border color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowColorRule<V> {
    /// Status value the rule applies to
    pub value: V,
    /// Border color token
    pub border_color: &'static str,
}

/// Row coloring keyed by one column's value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowColorDependence<C, V> {
    /// The column whose value selects the color
    pub key: C,
    /// Value-to-color rules
    pub conditions: Vec<RowColorRule<V>>,
}

/// Generic tabular view configuration consumed by the data table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableConfig<C, V> {
    /// Columns in display order
    pub columns: Vec<ColumnSpec<C>>,
    /// Keys offered in the filter dropdown
    pub filter_options: Vec<C>,
    /// Show the filter button
    pub show_filter_button: bool,
    /// Show the column view options
    pub show_view_options: bool,
    /// Show the selected-row counter
    pub show_row_counter: bool,
    /// Detail tabs under an expanded row
    pub info_tabs: Vec<InfoTab>,
    /// Optional row coloring
    pub row_color_dependence: Option<RowColorDependence<C, V>>,
}

impl<C: Copy + Eq, V: Copy + Eq> TableConfig<C, V> {
    /// The columns visible by default, in display order.
    pub fn visible_columns(&self) -> impl Iterator<Item = &ColumnSpec<C>> {
        self.columns.iter().filter(|column| column.visible)
    }

    /// The border color for a row with the given status value, if a rule
    /// matches.
    #[must_use]
    pub fn row_color(&self, value: V) -> Option<&'static str> {
        self.row_color_dependence.as_ref().and_then(|dependence| {
            dependence
                .conditions
                .iter()
                .find(|rule| rule.value == value)
                .map(|rule| rule.border_color)
        })
    }
}

/// One filter interaction: input text plus the scoped column, or `None` for
/// the all-columns union filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterEvent<C> {
    /// The filter text as typed
    pub input: String,
    /// Selected column; `None` filters across all columns
    pub column: Option<C>,
}

impl FilterEvent<OrderColumn> {
    /// Applies this interaction to the order rows.
    #[must_use]
    pub fn apply(&self, rows: &[crate::entities::Order]) -> Vec<crate::entities::Order> {
        crate::core::filter::apply_filter_event(&self.input, self.column, rows)
    }
}

/// A selectable detail tab rendered under an expanded row. Rendering is the
/// table's business; the configuration only names the tabs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoTab {
    /// Tab label
    pub tab_name: &'static str,
}

/// Configuration of the order-management table: every column titled, the id
/// hidden by default, images displayed but not filterable, and rows bordered
/// by lifecycle status.
#[must_use]
pub fn order_table_config() -> TableConfig<OrderColumn, OrderStatus> {
    TableConfig {
        columns: OrderColumn::ALL
            .into_iter()
            .map(|key| ColumnSpec {
                key,
                title: key.title(),
                visible: key != OrderColumn::Id,
            })
            .collect(),
        filter_options: OrderColumn::filterable().collect(),
        show_filter_button: true,
        show_view_options: true,
        show_row_counter: true,
        info_tabs: vec![InfoTab {
            tab_name: "Order details",
        }],
        row_color_dependence: Some(RowColorDependence {
            key: OrderColumn::Status,
            conditions: vec![
                RowColorRule {
                    value: OrderStatus::Pending,
                    border_color: "yellow",
                },
                RowColorRule {
                    value: OrderStatus::Accepted,
                    border_color: "green",
                },
                RowColorRule {
                    value: OrderStatus::Delivered,
                    border_color: "blue",
                },
                RowColorRule {
                    value: OrderStatus::Cancelled,
                    border_color: "red",
                },
            ],
        }),
    }
}
