use chrono::{NaiveDateTime, Timelike};
use contracts::domain::a001_order::Order;

use crate::domain::a001_order::generator;
use crate::shared::config::DatasetConfig;

/// Immutable order dataset, created once per process and shared read-only.
#[derive(Debug, Clone)]
pub struct OrderDataset {
    orders: Vec<Order>,
    seed: u64,
    window_end: NaiveDateTime,
}

impl OrderDataset {
    pub fn generate(n_records: i64, seed: u64, window_end: NaiveDateTime) -> Self {
        Self {
            orders: generator::generate(n_records, seed, window_end),
            seed,
            window_end,
        }
    }

    /// Builds the dataset described by configuration.
    ///
    /// Without a pinned `window_end` the window ends at `now`, truncated to
    /// the minute.
    pub fn from_config(config: &DatasetConfig, now: NaiveDateTime) -> Self {
        let window_end = config.window_end.unwrap_or_else(|| truncate_to_minute(now));
        Self::generate(config.n_records, config.seed, window_end)
    }

    /// Wraps existing orders, e.g. hand-built fixtures
    pub fn from_orders(orders: Vec<Order>, seed: u64, window_end: NaiveDateTime) -> Self {
        Self {
            orders,
            seed,
            window_end,
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn window_end(&self) -> NaiveDateTime {
        self.window_end
    }
}

fn truncate_to_minute(at: NaiveDateTime) -> NaiveDateTime {
    at.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(at)
}
