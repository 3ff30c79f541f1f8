// Data source loaders
pub mod catalog;
pub mod dataset;

pub use catalog::{load_catalog, parse_catalog};
pub use dataset::{load_prices, read_prices};
