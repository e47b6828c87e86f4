//! Data models for the artwork catalog.
//!
//! - [`Artwork`] - One catalog record, keyed by its numeric `id`
//! - [`ArtworkPage`] - One page of records plus the total reported by the API
//! - [`ArtworksResponse`] - Wire shape of the `/artworks` listing endpoint
//!
//! Text fields go through the null-tolerant deserializers in
//! [`crate::parsers::deserializers`].

pub mod artwork;
pub mod page;

pub use artwork::Artwork;
pub use page::{ArtworkPage, ArtworksResponse, PaginationInfo};
