pub mod aggregation;
pub mod export;
pub mod filter;
pub mod service;
pub mod stats;

#[cfg(test)]
pub(crate) mod test_support;
