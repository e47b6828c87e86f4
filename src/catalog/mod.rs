//! Remote artwork catalog access.
//!
//! - [`CatalogSource`] - Seam between the view and the network
//! - [`HttpCatalog`] - reqwest-backed implementation for the listing endpoint
//! - [`Fetcher`] - Runs fetches on worker threads and hands tagged outcomes
//!   back to the UI thread

pub mod client;
pub mod error;
pub mod fetcher;
pub mod request;

pub use client::{CatalogSource, DEFAULT_ENDPOINT, HttpCatalog};
pub use error::CatalogError;
pub use fetcher::{FetchOutcome, Fetcher};
pub use request::{FetchTicket, PageRequest};
