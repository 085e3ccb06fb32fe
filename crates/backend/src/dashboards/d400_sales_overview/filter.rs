use contracts::dashboards::d400_sales_overview::{FilterOptions, FilterSpec, PaymentFilter};
use contracts::domain::a001_order::Order;
use contracts::enums::{Category, CustomerSegment};

use crate::shared::data::OrderDataset;

const MIN_RATING: u8 = 1;
const MAX_RATING: u8 = 5;

/// Keeps the rows matching `spec`, preserving their relative order.
///
/// Accepts the dataset itself or a previously filtered view, so filters
/// compose: `apply(apply(rows, a), b)` equals `apply_all(rows, [a, b])`.
pub fn apply<'a, I>(rows: I, spec: &FilterSpec) -> Vec<&'a Order>
where
    I: IntoIterator<Item = &'a Order>,
{
    rows.into_iter().filter(|order| spec.matches(order)).collect()
}

/// Keeps the rows matching every spec (logical AND)
pub fn apply_all<'a, I>(rows: I, specs: &[FilterSpec]) -> Vec<&'a Order>
where
    I: IntoIterator<Item = &'a Order>,
{
    rows.into_iter()
        .filter(|order| specs.iter().all(|spec| spec.matches(order)))
        .collect()
}

/// Widget options for the dataset, including a selection covering every row
pub fn filter_options(dataset: &OrderDataset) -> FilterOptions {
    let orders = dataset.orders();

    let min_date = orders.iter().map(Order::order_day).min();
    let max_date = orders.iter().map(Order::order_day).max();

    let mut categories: Vec<Category> = Vec::new();
    let mut segments: Vec<CustomerSegment> = Vec::new();
    let mut payment_methods = vec![PaymentFilter::All];

    for order in orders {
        if !categories.contains(&order.category) {
            categories.push(order.category);
        }
        if !segments.contains(&order.customer_segment) {
            segments.push(order.customer_segment);
        }
        let payment = PaymentFilter::Only(order.payment_method);
        if !payment_methods.contains(&payment) {
            payment_methods.push(payment);
        }
    }

    // An empty dataset has no dates, fall back to the window end day
    let fallback_day = dataset.window_end().date();
    let default_filter = FilterSpec {
        date_from: min_date.unwrap_or(fallback_day),
        date_to: max_date.unwrap_or(fallback_day),
        categories: categories.clone(),
        segments: segments.clone(),
        payment_method: PaymentFilter::All,
        min_rating: MIN_RATING,
    };

    FilterOptions {
        min_date,
        max_date,
        categories,
        segments,
        payment_methods,
        min_rating: MIN_RATING,
        max_rating: MAX_RATING,
        default_filter,
    }
}
