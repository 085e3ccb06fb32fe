use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::enums::{Category, CustomerSegment, PaymentMethod, ProductName};

/// Rounds a money amount to 2 decimal places
pub fn round_money(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One synthetic e-commerce order.
///
/// Pricing fields are derived in [`Order::new`]:
/// `total_amount = round(quantity * unit_price)`,
/// `discount_amount = round(total_amount * discount_percent / 100)`,
/// `final_amount = round(total_amount - discount_amount)`.
/// `shipping_cost` is tracked separately and never part of `final_amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// `ORD_NNNNN`, unique within a dataset
    pub order_id: String,
    /// `CUST_NNNN`, shared by many orders
    pub customer_id: String,
    pub order_date: NaiveDateTime,
    pub category: Category,
    pub product_name: ProductName,
    /// 1..=5
    pub quantity: u32,
    pub unit_price: f64,
    pub total_amount: f64,
    /// 0..=30
    pub discount_percent: u32,
    pub discount_amount: f64,
    pub final_amount: f64,
    pub shipping_cost: f64,
    pub customer_segment: CustomerSegment,
    pub payment_method: PaymentMethod,
    /// 1..=5
    pub rating: u8,

    /// Calendar month period, "YYYY-MM"
    pub month: String,
    pub year: i32,
    /// English month name, e.g. "March"
    pub month_name: String,
}

/// Drawn (non-derived) values of an order
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub order_id: String,
    pub customer_id: String,
    pub order_date: NaiveDateTime,
    pub category: Category,
    pub product_name: ProductName,
    pub quantity: u32,
    pub unit_price: f64,
    pub discount_percent: u32,
    pub shipping_cost: f64,
    pub customer_segment: CustomerSegment,
    pub payment_method: PaymentMethod,
    pub rating: u8,
}

impl Order {
    /// Builds an order, computing pricing and calendar fields once
    pub fn new(draft: OrderDraft) -> Self {
        let total_amount = round_money(draft.quantity as f64 * draft.unit_price);
        let discount_amount = round_money(total_amount * draft.discount_percent as f64 / 100.0);
        let final_amount = round_money(total_amount - discount_amount);

        let month = draft.order_date.format("%Y-%m").to_string();
        let year = draft.order_date.year();
        let month_name = draft.order_date.format("%B").to_string();

        Self {
            order_id: draft.order_id,
            customer_id: draft.customer_id,
            order_date: draft.order_date,
            category: draft.category,
            product_name: draft.product_name,
            quantity: draft.quantity,
            unit_price: draft.unit_price,
            total_amount,
            discount_percent: draft.discount_percent,
            discount_amount,
            final_amount,
            shipping_cost: draft.shipping_cost,
            customer_segment: draft.customer_segment,
            payment_method: draft.payment_method,
            rating: draft.rating,
            month,
            year,
            month_name,
        }
    }

    /// Calendar date of the order, used by date range filters
    pub fn order_day(&self) -> chrono::NaiveDate {
        self.order_date.date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn draft() -> OrderDraft {
        OrderDraft {
            order_id: "ORD_00001".to_string(),
            customer_id: "CUST_0001".to_string(),
            order_date: NaiveDate::from_ymd_opt(2024, 3, 15)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
            category: Category::Books,
            product_name: ProductName::Novel,
            quantity: 2,
            unit_price: 20.5,
            discount_percent: 10,
            shipping_cost: 7.5,
            customer_segment: CustomerSegment::Regular,
            payment_method: PaymentMethod::PayPal,
            rating: 4,
        }
    }

    #[test]
    fn test_pricing_fields_are_derived() {
        let order = Order::new(draft());

        assert_eq!(order.total_amount, 41.0);
        assert_eq!(order.discount_amount, 4.1);
        assert_eq!(order.final_amount, 36.9);
        assert!(order.final_amount <= order.total_amount);
    }

    #[test]
    fn test_calendar_fields_are_derived() {
        let order = Order::new(draft());

        assert_eq!(order.month, "2024-03");
        assert_eq!(order.year, 2024);
        assert_eq!(order.month_name, "March");
    }

    #[test]
    fn test_round_money() {
        assert_eq!(round_money(10.004), 10.0);
        assert_eq!(round_money(10.006), 10.01);
        assert_eq!(round_money(0.0), 0.0);
    }
}
