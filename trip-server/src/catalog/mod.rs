//! Stop catalog loading.
//!
//! The catalog is a JSON file of stops with the lines serving them, read
//! once at startup and shared read-only with every request.

mod error;
mod loader;

pub use error::CatalogError;
pub use loader::{StopRecord, load_catalog, parse_catalog};
