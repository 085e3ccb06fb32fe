use contracts::dashboards::d400_sales_overview::{
    CrossAggregateRow, GroupRevenue, KpiCard, KpiSet, MonthlyRevenue, ProductRevenue,
};
use contracts::domain::a001_order::{round_money, Order};
use contracts::enums::{Category, CustomerSegment};
use std::collections::{BTreeMap, HashSet};

use crate::shared::format::{format_count, format_money, format_rating, MISSING_VALUE};

/// Number of products in the top products table
pub const TOP_PRODUCTS_LIMIT: usize = 10;

// ---------------------------------------------------------------------------
// KPIs
// ---------------------------------------------------------------------------

pub fn compute_kpis(view: &[&Order]) -> KpiSet {
    let total_revenue: f64 = view.iter().map(|o| o.final_amount).sum();
    let total_orders = view.len();
    let total_customers = view
        .iter()
        .map(|o| o.customer_id.as_str())
        .collect::<HashSet<_>>()
        .len();

    let (avg_order_value, avg_rating) = if total_orders > 0 {
        let rating_sum: f64 = view.iter().map(|o| o.rating as f64).sum();
        (
            Some(total_revenue / total_orders as f64),
            Some(rating_sum / total_orders as f64),
        )
    } else {
        (None, None)
    };

    KpiSet {
        total_revenue,
        total_orders,
        avg_order_value,
        total_customers,
        avg_rating,
    }
}

/// Metric cards in display order
pub fn kpi_cards(kpis: &KpiSet) -> Vec<KpiCard> {
    let card = |id: &str, label: &str, display: String| KpiCard {
        id: id.to_string(),
        label: label.to_string(),
        display,
    };

    vec![
        card("total_revenue", "Total Revenue", format_money(kpis.total_revenue)),
        card("total_orders", "Total Orders", format_count(kpis.total_orders)),
        card(
            "avg_order_value",
            "Avg Order Value",
            kpis.avg_order_value
                .map(format_money)
                .unwrap_or_else(|| MISSING_VALUE.to_string()),
        ),
        card("total_customers", "Total Customers", format_count(kpis.total_customers)),
        card(
            "avg_rating",
            "Avg Rating",
            kpis.avg_rating
                .map(format_rating)
                .unwrap_or_else(|| MISSING_VALUE.to_string()),
        ),
    ]
}

// ---------------------------------------------------------------------------
// Grouped revenue
// ---------------------------------------------------------------------------

/// Sums `final_amount` per key, keys in ascending order
fn revenue_by<K, F>(view: &[&Order], key: F) -> BTreeMap<K, f64>
where
    K: Ord,
    F: Fn(&Order) -> K,
{
    let mut totals = BTreeMap::new();
    for order in view {
        *totals.entry(key(order)).or_insert(0.0) += order.final_amount;
    }
    totals
}

fn to_group_rows(totals: BTreeMap<&'static str, f64>) -> Vec<GroupRevenue> {
    totals
        .into_iter()
        .map(|(key, revenue)| GroupRevenue {
            key: key.to_string(),
            revenue,
            share_percent: None,
        })
        .collect()
}

/// Revenue per calendar month, chronologically ascending
pub fn monthly_revenue(view: &[&Order]) -> Vec<MonthlyRevenue> {
    revenue_by(view, |o| o.month.clone())
        .into_iter()
        .map(|(month, revenue)| MonthlyRevenue { month, revenue })
        .collect()
}

pub fn revenue_by_category(view: &[&Order]) -> Vec<GroupRevenue> {
    to_group_rows(revenue_by(view, |o| o.category.display_name()))
}

/// Revenue per customer segment with each segment's share of the total
pub fn revenue_by_segment(view: &[&Order]) -> Vec<GroupRevenue> {
    let mut rows = to_group_rows(revenue_by(view, |o| o.customer_segment.display_name()));
    let total: f64 = rows.iter().map(|r| r.revenue).sum();
    if total > 0.0 {
        for row in &mut rows {
            row.share_percent = Some(row.revenue / total * 100.0);
        }
    }
    rows
}

pub fn revenue_by_payment_method(view: &[&Order]) -> Vec<GroupRevenue> {
    to_group_rows(revenue_by(view, |o| o.payment_method.display_name()))
}

/// Products by revenue, descending, at most `limit` rows.
///
/// Products with equal revenue keep their grouping order (ascending name).
pub fn top_products(view: &[&Order], limit: usize) -> Vec<ProductRevenue> {
    let mut rows: Vec<ProductRevenue> = revenue_by(view, |o| o.product_name.display_name())
        .into_iter()
        .map(|(name, revenue)| ProductRevenue {
            product_name: name.to_string(),
            revenue,
        })
        .collect();

    // sort_by is stable, ties stay in grouping order
    rows.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    rows.truncate(limit);
    rows
}

// ---------------------------------------------------------------------------
// Cross aggregate
// ---------------------------------------------------------------------------

struct CrossAccumulator {
    category: Category,
    segment: CustomerSegment,
    amount_sum: f64,
    rating_sum: f64,
    count: usize,
}

/// Sum/mean/count of `final_amount` and mean rating per (category, segment)
pub fn cross_aggregate(view: &[&Order]) -> Vec<CrossAggregateRow> {
    let mut groups: BTreeMap<(&'static str, &'static str), CrossAccumulator> = BTreeMap::new();

    for order in view {
        let key = (
            order.category.display_name(),
            order.customer_segment.display_name(),
        );
        let acc = groups.entry(key).or_insert_with(|| CrossAccumulator {
            category: order.category,
            segment: order.customer_segment,
            amount_sum: 0.0,
            rating_sum: 0.0,
            count: 0,
        });
        acc.amount_sum += order.final_amount;
        acc.rating_sum += order.rating as f64;
        acc.count += 1;
    }

    groups
        .into_values()
        .map(|acc| {
            let count = acc.count as f64;
            CrossAggregateRow {
                category: acc.category,
                customer_segment: acc.segment,
                final_amount_sum: round_money(acc.amount_sum),
                final_amount_mean: round_money(acc.amount_sum / count),
                final_amount_count: acc.count,
                rating_mean: round_money(acc.rating_sum / count),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_sales_overview::filter;
    use crate::dashboards::d400_sales_overview::test_support::*;
    use contracts::enums::ProductName;

    fn view(orders: &[Order]) -> Vec<&Order> {
        orders.iter().collect()
    }

    #[test]
    fn test_kpis_are_consistent_with_view() {
        let dataset = generated_dataset();
        let mut spec = select_all();
        spec.min_rating = 3;
        let filtered = filter::apply(dataset.orders(), &spec);

        let kpis = compute_kpis(&filtered);
        let expected_revenue: f64 = filtered.iter().map(|o| o.final_amount).sum();

        assert_eq!(kpis.total_revenue, expected_revenue);
        assert_eq!(kpis.total_orders, filtered.len());
        assert_eq!(
            kpis.avg_order_value,
            Some(kpis.total_revenue / kpis.total_orders as f64)
        );
        let rating = kpis.avg_rating.unwrap();
        assert!((3.0..=5.0).contains(&rating));
        assert!(kpis.total_customers <= kpis.total_orders);
    }

    #[test]
    fn test_kpis_on_empty_view() {
        let kpis = compute_kpis(&[]);

        assert_eq!(kpis.total_revenue, 0.0);
        assert_eq!(kpis.total_orders, 0);
        assert_eq!(kpis.total_customers, 0);
        assert_eq!(kpis.avg_order_value, None);
        assert_eq!(kpis.avg_rating, None);

        let cards = kpi_cards(&kpis);
        assert_eq!(cards.len(), 5);
        assert_eq!(cards[0].display, "$0.00");
        assert_eq!(cards[2].display, MISSING_VALUE);
        assert_eq!(cards[4].display, MISSING_VALUE);
    }

    #[test]
    fn test_kpi_cards_formatting() {
        let kpis = KpiSet {
            total_revenue: 12345.678,
            total_orders: 1500,
            avg_order_value: Some(8.23),
            total_customers: 250,
            avg_rating: Some(3.0),
        };
        let displays: Vec<String> = kpi_cards(&kpis).into_iter().map(|c| c.display).collect();

        assert_eq!(
            displays,
            vec!["$12,345.68", "1,500", "$8.23", "250", "3.00⭐"]
        );
    }

    #[test]
    fn test_top_products_orders_by_revenue_with_stable_ties() {
        // Dress appears before Board Game in the view, but grouping order is by name
        let orders = vec![
            order(1, date(2025, 1, 5), ProductName::Jeans, 100.0),
            order(2, date(2025, 1, 6), ProductName::Dress, 300.0),
            order(3, date(2025, 1, 7), ProductName::Bicycle, 200.0),
            order(4, date(2025, 1, 8), ProductName::BoardGame, 300.0),
            order(5, date(2025, 1, 9), ProductName::Bicycle, 300.0),
        ];

        let top = top_products(&view(&orders), TOP_PRODUCTS_LIMIT);
        let names: Vec<&str> = top.iter().map(|p| p.product_name.as_str()).collect();

        assert_eq!(names, vec!["Bicycle", "Board Game", "Dress", "Jeans"]);
        assert_eq!(top[0].revenue, 500.0);
    }

    #[test]
    fn test_top_products_limited_to_ten() {
        let orders: Vec<Order> = ProductName::ALL
            .iter()
            .enumerate()
            .map(|(i, product)| order(i as u32 + 1, date(2025, 1, 1), *product, 10.0 * (i + 1) as f64))
            .collect();

        let top = top_products(&view(&orders), TOP_PRODUCTS_LIMIT);

        assert_eq!(top.len(), 10);
        // Highest revenue is the last product in ALL
        assert_eq!(top[0].product_name, "Board Game");
        assert!(top.windows(2).all(|w| w[0].revenue >= w[1].revenue));
        assert!(!top.iter().any(|p| p.product_name == "Wireless Headphones"));
    }

    #[test]
    fn test_monthly_revenue_is_chronological() {
        let orders = vec![
            order(1, date(2025, 3, 10), ProductName::Lamp, 30.0),
            order(2, date(2024, 12, 1), ProductName::Lamp, 10.0),
            order(3, date(2025, 3, 31), ProductName::Sofa, 5.0),
            order(4, date(2025, 1, 15), ProductName::Sofa, 20.0),
        ];

        let months = monthly_revenue(&view(&orders));

        assert_eq!(
            months,
            vec![
                MonthlyRevenue { month: "2024-12".to_string(), revenue: 10.0 },
                MonthlyRevenue { month: "2025-01".to_string(), revenue: 20.0 },
                MonthlyRevenue { month: "2025-03".to_string(), revenue: 35.0 },
            ]
        );
    }

    #[test]
    fn test_group_revenue_sums_to_total() {
        let dataset = generated_dataset();
        let all = filter::apply(dataset.orders(), &select_all());
        let total = compute_kpis(&all).total_revenue;

        for rows in [
            revenue_by_category(&all),
            revenue_by_segment(&all),
            revenue_by_payment_method(&all),
        ] {
            let sum: f64 = rows.iter().map(|r| r.revenue).sum();
            assert!((sum - total).abs() < 1e-6);
        }
        assert_eq!(revenue_by_category(&all).len(), 7);
        assert_eq!(revenue_by_payment_method(&all).len(), 4);
    }

    #[test]
    fn test_segment_shares_add_up() {
        let dataset = generated_dataset();
        let all = filter::apply(dataset.orders(), &select_all());

        let segments = revenue_by_segment(&all);
        let keys: Vec<&str> = segments.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["Budget", "Premium", "Regular"]);

        let share: f64 = segments.iter().filter_map(|s| s.share_percent).sum();
        assert!((share - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_cross_aggregate() {
        let mut a = order(1, date(2025, 1, 1), ProductName::Laptop, 100.0);
        a.rating = 5;
        let mut b = order(2, date(2025, 1, 2), ProductName::Laptop, 50.0);
        b.rating = 2;
        let mut c = order(3, date(2025, 1, 3), ProductName::Novel, 10.0);
        c.category = Category::Books;
        c.customer_segment = CustomerSegment::Premium;
        let orders = vec![a, b, c];

        let rows = cross_aggregate(&view(&orders));

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, Category::Books);
        assert_eq!(rows[0].customer_segment, CustomerSegment::Premium);
        assert_eq!(rows[0].final_amount_count, 1);

        assert_eq!(rows[1].category, Category::Electronics);
        assert_eq!(rows[1].final_amount_sum, 150.0);
        assert_eq!(rows[1].final_amount_mean, 75.0);
        assert_eq!(rows[1].final_amount_count, 2);
        assert_eq!(rows[1].rating_mean, 3.5);
    }

    #[test]
    fn test_empty_view_yields_empty_groupings() {
        assert!(monthly_revenue(&[]).is_empty());
        assert!(revenue_by_category(&[]).is_empty());
        assert!(revenue_by_segment(&[]).is_empty());
        assert!(revenue_by_payment_method(&[]).is_empty());
        assert!(top_products(&[], TOP_PRODUCTS_LIMIT).is_empty());
        assert!(cross_aggregate(&[]).is_empty());
    }
}
