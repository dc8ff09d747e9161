#![forbid(unsafe_code)]

pub mod catalog;
pub mod model;
pub mod routes;
pub mod stats;

pub use catalog::{Catalog, CatalogError};
pub use routes::RouteIndex;
pub use stats::{CategoryBreakdown, CategoryTally, Milestone, ProgressStats};
