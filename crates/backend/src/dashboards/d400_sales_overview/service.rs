use contracts::dashboards::d400_sales_overview::{DashboardView, FilterOptions, FilterSpec};
use contracts::domain::a001_order::Order;

use super::aggregation::{self, TOP_PRODUCTS_LIMIT};
use super::filter;
use super::stats::{self, SUMMARY_COLUMNS};
use crate::shared::data::OrderDataset;

/// Builds everything the dashboard renders for one filter selection.
///
/// Pure: the dataset is only read, the result depends on nothing else.
pub fn build_dashboard(dataset: &OrderDataset, spec: &FilterSpec) -> DashboardView {
    let view = filter::apply(dataset.orders(), spec);
    let kpis = aggregation::compute_kpis(&view);

    DashboardView {
        filter: spec.clone(),
        row_count: view.len(),
        kpi_cards: aggregation::kpi_cards(&kpis),
        kpis,
        monthly_revenue: aggregation::monthly_revenue(&view),
        category_revenue: aggregation::revenue_by_category(&view),
        segment_revenue: aggregation::revenue_by_segment(&view),
        payment_revenue: aggregation::revenue_by_payment_method(&view),
        summary_stats: stats::describe(&view, &SUMMARY_COLUMNS),
        top_products: aggregation::top_products(&view, TOP_PRODUCTS_LIMIT),
        cross_aggregate: aggregation::cross_aggregate(&view),
    }
}

/// Filtered rows for the raw data table
pub fn filtered_orders(dataset: &OrderDataset, spec: &FilterSpec) -> Vec<Order> {
    filter::apply(dataset.orders(), spec)
        .into_iter()
        .cloned()
        .collect()
}

pub fn get_filter_options(dataset: &OrderDataset) -> FilterOptions {
    filter::filter_options(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_sales_overview::test_support::*;

    #[test]
    fn test_full_selection_covers_dataset() {
        let dataset = generated_dataset();
        let view = build_dashboard(&dataset, &select_all());

        assert_eq!(view.row_count, 1000);
        assert_eq!(view.kpis.total_orders, 1000);
        assert_eq!(view.kpi_cards.len(), 5);
        assert_eq!(view.category_revenue.len(), 7);
        assert_eq!(view.segment_revenue.len(), 3);
        assert_eq!(view.payment_revenue.len(), 4);
        assert_eq!(view.top_products.len(), TOP_PRODUCTS_LIMIT);
        assert_eq!(view.summary_stats.len(), SUMMARY_COLUMNS.len());
        assert_eq!(view.cross_aggregate.len(), 21);
        assert!(view
            .monthly_revenue
            .windows(2)
            .all(|w| w[0].month < w[1].month));
    }

    #[test]
    fn test_empty_selection_renders_without_failing() {
        let dataset = generated_dataset();
        let mut spec = select_all();
        spec.categories.clear();

        let view = build_dashboard(&dataset, &spec);

        assert_eq!(view.row_count, 0);
        assert_eq!(view.kpis.total_revenue, 0.0);
        assert_eq!(view.kpis.avg_order_value, None);
        assert!(view.monthly_revenue.is_empty());
        assert!(view.top_products.is_empty());
        assert!(view.cross_aggregate.is_empty());
        assert!(view.summary_stats.iter().all(|s| s.count == 0 && s.mean.is_none()));
    }

    #[test]
    fn test_dashboard_is_repeatable() {
        let dataset = generated_dataset();
        let mut spec = select_all();
        spec.min_rating = 4;

        assert_eq!(build_dashboard(&dataset, &spec), build_dashboard(&dataset, &spec));
    }

    #[test]
    fn test_filtered_orders_preserve_order() {
        let dataset = generated_dataset();
        let mut spec = select_all();
        spec.min_rating = 5;

        let rows = filtered_orders(&dataset, &spec);
        let positions: Vec<usize> = rows
            .iter()
            .map(|row| {
                dataset
                    .orders()
                    .iter()
                    .position(|o| o.order_id == row.order_id)
                    .unwrap()
            })
            .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
