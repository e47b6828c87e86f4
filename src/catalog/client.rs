use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use tracing::debug;

use super::error::CatalogError;
use super::request::PageRequest;
use crate::models::ArtworkPage;
use crate::parsers::parse_page_response;

/// Public listing endpoint of the Art Institute of Chicago API
pub const DEFAULT_ENDPOINT: &str = "https://api.artic.edu/api/v1/artworks";

/// Source of catalog pages (allows faking the network in tests)
pub trait CatalogSource: Send + Sync {
    fn fetch_page(&self, request: &PageRequest) -> Result<ArtworkPage, CatalogError>;
}

/// Catalog source backed by the remote HTTP endpoint
pub struct HttpCatalog {
    client: Client,
    endpoint: Url,
}

impl HttpCatalog {
    /// Build a client for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidEndpoint`] if `endpoint` is not an
    /// absolute http(s) URL, or [`CatalogError::Transport`] if the TLS
    /// backend cannot be initialized.
    pub fn new(endpoint: &str, timeout: Duration, user_agent: &str) -> Result<Self, CatalogError> {
        let client = Client::builder().timeout(timeout).user_agent(user_agent).build()?;
        Self::with_client(endpoint, client)
    }

    /// Use a preconfigured client (proxy, TLS or header settings)
    pub fn with_client(endpoint: &str, client: Client) -> Result<Self, CatalogError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| CatalogError::InvalidEndpoint(format!("{}: {}", endpoint, e)))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(CatalogError::InvalidEndpoint(format!(
                "{}: scheme must be http or https",
                endpoint
            )));
        }

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl CatalogSource for HttpCatalog {
    fn fetch_page(&self, request: &PageRequest) -> Result<ArtworkPage, CatalogError> {
        let url = request.to_url(&self.endpoint);
        debug!(%url, "requesting catalog page");

        let response = self.client.get(url.clone()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status { status: status.as_u16(), url: url.to_string() });
        }

        let body = response.text()?;
        let page = parse_page_response(&body)?;
        debug!(page = request.page, records = page.records.len(), total = page.total, "page decoded");
        Ok(page)
    }
}
