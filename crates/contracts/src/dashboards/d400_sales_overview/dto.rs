use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::a001_order::Order;
use crate::enums::{Category, CustomerSegment, PaymentMethod};

// ---------------------------------------------------------------------------
// Filter selections
// ---------------------------------------------------------------------------

/// Payment method selection: the "All" sentinel or one exact method.
///
/// Serialized as a plain string: `"All"` or the method's display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PaymentFilter {
    #[default]
    All,
    Only(PaymentMethod),
}

impl PaymentFilter {
    pub const ALL_LABEL: &'static str = "All";

    pub fn allows(&self, method: PaymentMethod) -> bool {
        match self {
            PaymentFilter::All => true,
            PaymentFilter::Only(selected) => *selected == method,
        }
    }
}

impl TryFrom<String> for PaymentFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == Self::ALL_LABEL {
            return Ok(PaymentFilter::All);
        }
        PaymentMethod::from_display_name(&value)
            .map(PaymentFilter::Only)
            .ok_or_else(|| format!("Unknown payment method: {}", value))
    }
}

impl From<PaymentFilter> for String {
    fn from(value: PaymentFilter) -> Self {
        value.to_string()
    }
}

impl fmt::Display for PaymentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentFilter::All => f.write_str(Self::ALL_LABEL),
            PaymentFilter::Only(method) => f.write_str(method.display_name()),
        }
    }
}

/// User-selected predicates, combined with logical AND.
///
/// An empty `categories` or `segments` list matches no rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Inclusive lower bound on the calendar date of `order_date`
    pub date_from: NaiveDate,
    /// Inclusive upper bound on the calendar date of `order_date`
    pub date_to: NaiveDate,
    pub categories: Vec<Category>,
    pub segments: Vec<CustomerSegment>,
    #[serde(default)]
    pub payment_method: PaymentFilter,
    /// Keep rows with `rating >= min_rating`
    pub min_rating: u8,
}

impl FilterSpec {
    pub fn matches(&self, order: &Order) -> bool {
        let day = order.order_day();
        self.date_from <= day
            && day <= self.date_to
            && self.categories.contains(&order.category)
            && self.segments.contains(&order.customer_segment)
            && self.payment_method.allows(order.payment_method)
            && order.rating >= self.min_rating
    }
}

/// Widget options derived from the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Earliest order date in the dataset, None for an empty dataset
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    /// Values in order of first appearance
    pub categories: Vec<Category>,
    pub segments: Vec<CustomerSegment>,
    /// "All" followed by methods in order of first appearance
    pub payment_methods: Vec<PaymentFilter>,
    pub min_rating: u8,
    pub max_rating: u8,
    /// Selection covering every row
    pub default_filter: FilterSpec,
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

/// KPI scalars over a filtered view.
///
/// Averages are `None` when the view is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSet {
    pub total_revenue: f64,
    pub total_orders: usize,
    pub avg_order_value: Option<f64>,
    pub total_customers: usize,
    pub avg_rating: Option<f64>,
}

/// KPI formatted for a metric card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiCard {
    pub id: String,
    pub label: String,
    pub display: String,
}

/// Revenue of one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// "YYYY-MM"
    pub month: String,
    pub revenue: f64,
}

/// Revenue of one group (category, segment or payment method)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRevenue {
    pub key: String,
    pub revenue: f64,
    /// Percent of the view's total revenue, None when the total is zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_percent: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRevenue {
    pub product_name: String,
    pub revenue: f64,
}

/// Descriptive statistics of one numeric column.
///
/// Undefined values (empty view, std of a single row) are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    pub column: String,
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub q50: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

/// One (category, segment) cell of the cross aggregate, values rounded to 2dp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossAggregateRow {
    pub category: Category,
    pub customer_segment: CustomerSegment,
    pub final_amount_sum: f64,
    pub final_amount_mean: f64,
    pub final_amount_count: usize,
    pub rating_mean: f64,
}

/// Everything the dashboard page renders for one filter selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub filter: FilterSpec,
    pub row_count: usize,
    pub kpis: KpiSet,
    pub kpi_cards: Vec<KpiCard>,
    pub monthly_revenue: Vec<MonthlyRevenue>,
    pub category_revenue: Vec<GroupRevenue>,
    pub segment_revenue: Vec<GroupRevenue>,
    pub payment_revenue: Vec<GroupRevenue>,
    pub summary_stats: Vec<ColumnStats>,
    pub top_products: Vec<ProductRevenue>,
    pub cross_aggregate: Vec<CrossAggregateRow>,
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Downloadable CSV artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportKind {
    /// Full filtered dataset
    Orders,
    /// Descriptive statistics of numeric columns
    SummaryStats,
    /// Cross aggregate by category and segment
    Aggregated,
}

impl ExportKind {
    pub fn code(&self) -> &'static str {
        match self {
            ExportKind::Orders => "orders",
            ExportKind::SummaryStats => "summary_stats",
            ExportKind::Aggregated => "aggregated",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "orders" => Some(ExportKind::Orders),
            "summary_stats" => Some(ExportKind::SummaryStats),
            "aggregated" => Some(ExportKind::Aggregated),
            _ => None,
        }
    }

    /// File name prefix, a timestamp is appended on export
    pub fn file_prefix(&self) -> &'static str {
        match self {
            ExportKind::Orders => "ecommerce_data",
            ExportKind::SummaryStats => "summary_stats",
            ExportKind::Aggregated => "aggregated_data",
        }
    }
}
