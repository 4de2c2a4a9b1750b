mod catalog_client;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod xml;

pub use catalog_client::{CatalogApi, CatalogClient};
