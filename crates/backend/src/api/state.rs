use std::sync::Arc;

use crate::shared::data::OrderDataset;

/// Shared application state: the dataset, read-only for every request
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<OrderDataset>,
}

impl AppState {
    pub fn new(dataset: OrderDataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }
}
