//! HomeValue Catalog — the renovation enhancement catalog, the quote
//! request stub and the property assessment lead form.
//!
//! All calls are local stand-ins for a future API: fixed data behind
//! fixed artificial delays.

pub mod assessment;
pub mod catalog;
pub mod config;
mod data;
pub mod error;

pub use assessment::validate_assessment;
pub use catalog::{Catalog, QUOTE_ACK_MESSAGE};
pub use config::CatalogConfig;
pub use error::CatalogError;
