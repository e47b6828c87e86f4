//! JSON parsing for catalog API responses
//!
//! # Error Handling Strategy
//!
//! The listing endpoint is parsed as a whole: a body that is not JSON, or that
//! lacks `data` / `pagination.total`, fails with [`CatalogError::Decode`] and the
//! view keeps its previous page. Inside a record, `null` or missing text fields
//! decode to empty strings so a sparse record never fails the page. A record
//! without a numeric `id` does fail it, since `id` is the selection key.
//!
//! [`CatalogError::Decode`]: crate::catalog::CatalogError::Decode

pub mod deserializers;
pub mod response;

pub use response::parse_page_response;
