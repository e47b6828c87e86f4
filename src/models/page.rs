use serde::Deserialize;

use super::Artwork;

/// One page of catalog records as consumed by the view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtworkPage {
    pub records: Vec<Artwork>,
    pub total: u64,
}

/// Body of `GET /artworks`. Everything besides `data` and `pagination.total`
/// is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtworksResponse {
    pub data: Vec<Artwork>,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaginationInfo {
    pub total: u64,
}

impl From<ArtworksResponse> for ArtworkPage {
    fn from(response: ArtworksResponse) -> Self {
        Self { records: response.data, total: response.pagination.total }
    }
}
