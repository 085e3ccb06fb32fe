use chrono::{NaiveDate, NaiveDateTime};
use contracts::dashboards::d400_sales_overview::{FilterSpec, PaymentFilter};
use contracts::domain::a001_order::{Order, OrderDraft};
use contracts::enums::{Category, CustomerSegment, PaymentMethod, ProductName};

use crate::shared::data::OrderDataset;

pub fn window_end() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 30)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub fn generated_dataset() -> OrderDataset {
    OrderDataset::generate(1000, 42, window_end())
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Order with quantity 1 and no discount, so `final_amount == amount`
pub fn order(id: u32, day: NaiveDate, product: ProductName, amount: f64) -> Order {
    Order::new(OrderDraft {
        order_id: format!("ORD_{:05}", id),
        customer_id: format!("CUST_{:04}", id),
        order_date: day.and_hms_opt(10, 30, 0).unwrap(),
        category: Category::Electronics,
        product_name: product,
        quantity: 1,
        unit_price: amount,
        discount_percent: 0,
        shipping_cost: 5.0,
        customer_segment: CustomerSegment::Regular,
        payment_method: PaymentMethod::CreditCard,
        rating: 3,
    })
}

/// Selection covering every generated row
pub fn select_all() -> FilterSpec {
    FilterSpec {
        date_from: date(2024, 1, 1),
        date_to: date(2025, 12, 31),
        categories: Category::ALL.to_vec(),
        segments: CustomerSegment::ALL.to_vec(),
        payment_method: PaymentFilter::All,
        min_rating: 1,
    }
}

pub fn ids(view: &[&Order]) -> Vec<String> {
    view.iter().map(|o| o.order_id.clone()).collect()
}
