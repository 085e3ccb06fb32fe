pub mod aggregate;

pub use aggregate::{round_money, Order, OrderDraft};
