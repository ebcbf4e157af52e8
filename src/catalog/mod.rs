// Catalog exports
pub mod json;

pub use json::{CatalogError, JsonCatalog};
