use reqwest::Url;

/// Field projection sent with every listing request
pub const FIELDS: &str = "id,title,artist_title,date_display";

/// One slice of the remote catalog. `page` is 1-based, matching the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    /// Build the listing URL: `<endpoint>?page=<page>&limit=<limit>&fields=...`
    pub fn to_url(&self, endpoint: &Url) -> Url {
        let mut url = endpoint.clone();
        url.query_pairs_mut()
            .append_pair("page", &self.page.to_string())
            .append_pair("limit", &self.limit.to_string())
            .append_pair("fields", FIELDS);
        url
    }
}

/// A fetch issued by the view, tagged with the sequence number that decides
/// whether its outcome is still wanted when it arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub request: PageRequest,
}
