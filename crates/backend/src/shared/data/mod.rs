pub mod dataset;

pub use dataset::OrderDataset;
