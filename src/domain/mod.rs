pub mod fields;
pub mod filter;
pub mod models;
pub mod normalizer;

pub use filter::FilterCriteria;
pub use models::*;
