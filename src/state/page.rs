use tracing::{debug, warn};

use crate::catalog::{CatalogError, FetchTicket, PageRequest};
use crate::models::{Artwork, ArtworkPage};

/// Loading lifecycle of the current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading { page: u32 },
    Loaded,
    Failed { page: u32, message: String },
}

/// Number of pages the paginator shows for `total` records
pub fn total_pages(total: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(u64::from(page_size))
}

/// Page controller state: which page is shown and what it contains.
///
/// `page` is 1-based like the remote API. The paginator works with 0-based
/// indexes; [`PageState::go_to_page`] does the translation.
#[derive(Debug, Clone)]
pub struct PageState {
    page: u32,
    page_size: u32,
    records: Vec<Artwork>,
    total: u64,
    status: LoadStatus,
    latest_seq: u64,
    // Page the current records belong to; lags `page` while loading or after a failure
    shown_page: u32,
}

impl PageState {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size,
            records: Vec::new(),
            total: 0,
            status: LoadStatus::Idle,
            latest_seq: 0,
            shown_page: 1,
        }
    }

    /// Switch to the page at 0-based `index` and return the fetch to issue.
    /// Bounds are the paginator's job; no validation happens here.
    pub fn go_to_page(&mut self, index: u32) -> FetchTicket {
        self.page = index.saturating_add(1);
        self.issue()
    }

    /// Re-request the current page
    pub fn reload(&mut self) -> FetchTicket {
        self.issue()
    }

    fn issue(&mut self) -> FetchTicket {
        self.latest_seq += 1;
        self.status = LoadStatus::Loading { page: self.page };
        debug!(seq = self.latest_seq, page = self.page, "page requested");
        FetchTicket { seq: self.latest_seq, request: PageRequest::new(self.page, self.page_size) }
    }

    fn is_latest(&self, seq: u64) -> bool {
        seq == self.latest_seq
    }

    /// Apply a completed fetch. Returns `false` when a newer request has been
    /// issued since, in which case nothing changes.
    pub fn data_loaded(&mut self, seq: u64, loaded: ArtworkPage) -> bool {
        if !self.is_latest(seq) {
            debug!(seq, latest = self.latest_seq, "discarding stale page");
            return false;
        }
        self.records = loaded.records;
        self.total = loaded.total;
        self.shown_page = self.page;
        self.status = LoadStatus::Loaded;
        true
    }

    /// Record a failed fetch. Records and total keep their previous values.
    pub fn fetch_failed(&mut self, seq: u64, page: u32, error: &CatalogError) -> bool {
        if !self.is_latest(seq) {
            debug!(seq, latest = self.latest_seq, "discarding stale failure");
            return false;
        }
        warn!(page, %error, "page load failed");
        self.status =
            LoadStatus::Failed { page, message: format!("load failed for page {}: {}", page, error) };
        true
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// 0-based index of the current page, as the paginator sees it
    pub fn page_index(&self) -> u32 {
        self.page.saturating_sub(1)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// 1-based page whose records are currently held
    pub fn shown_page(&self) -> u32 {
        self.shown_page
    }

    pub fn total_pages(&self) -> u64 {
        total_pages(self.total, self.page_size)
    }

    /// 0-based catalog index of the first held record. Equal to
    /// `(page - 1) * page_size` once the current page has loaded.
    pub fn first_row_index(&self) -> u64 {
        u64::from(self.shown_page.saturating_sub(1)) * u64::from(self.page_size)
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}
