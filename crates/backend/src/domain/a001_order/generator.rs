use chrono::{Duration, NaiveDateTime};
use contracts::domain::a001_order::{round_money, Order, OrderDraft};
use contracts::enums::{Category, CustomerSegment, PaymentMethod, ProductName};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Length of the trailing order window, in days
pub const WINDOW_DAYS: i64 = 365;

/// Largest customer number that fits the `CUST_NNNN` format
const MAX_CUSTOMERS: i64 = 9999;

/// Number of distinct customers drawn for a dataset of `n_records` orders
pub fn customer_pool_size(n_records: i64) -> i64 {
    (n_records / 4).clamp(1, MAX_CUSTOMERS)
}

/// Generates `n_records` synthetic orders.
///
/// The same `(n_records, seed, window_end)` always yields the same sequence.
/// Order dates fall in `[window_end - 365 days, window_end)` with minute
/// granularity. A non-positive `n_records` yields an empty vector.
pub fn generate(n_records: i64, seed: u64, window_end: NaiveDateTime) -> Vec<Order> {
    if n_records <= 0 {
        tracing::warn!("Order generator called with n_records={}, returning no orders", n_records);
        return Vec::new();
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let window_start = window_end - Duration::days(WINDOW_DAYS);
    let customer_pool = customer_pool_size(n_records);

    let orders: Vec<Order> = (0..n_records)
        .map(|i| {
            let order_date = window_start
                + Duration::days(rng.gen_range(0..WINDOW_DAYS))
                + Duration::hours(rng.gen_range(0..24))
                + Duration::minutes(rng.gen_range(0..60));

            let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
            let product_name = ProductName::ALL[rng.gen_range(0..ProductName::ALL.len())];
            let quantity = rng.gen_range(1..=5u32);
            let unit_price = round_money(rng.gen_range(10.0..=500.0));
            let discount_percent = rng.gen_range(0..=30u32);

            let customer_number = rng.gen_range(1..=customer_pool);
            let customer_segment =
                CustomerSegment::ALL[rng.gen_range(0..CustomerSegment::ALL.len())];
            let payment_method = PaymentMethod::ALL[rng.gen_range(0..PaymentMethod::ALL.len())];
            let shipping_cost = round_money(rng.gen_range(5.0..=25.0));
            let rating = rng.gen_range(1..=5u8);

            Order::new(OrderDraft {
                order_id: format!("ORD_{:05}", i + 1),
                customer_id: format!("CUST_{:04}", customer_number),
                order_date,
                category,
                product_name,
                quantity,
                unit_price,
                discount_percent,
                shipping_cost,
                customer_segment,
                payment_method,
                rating,
            })
        })
        .collect();

    tracing::debug!(
        "Generated {} orders (seed={}, window_end={}, customers={})",
        orders.len(),
        seed,
        window_end,
        customer_pool
    );

    orders
}
