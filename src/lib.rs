//! Artwork Browser - page through the Art Institute of Chicago catalog and
//! collect a selection across pages
//!
//! The crate is split into a terminal-independent core and a thin TUI:
//!
//! - [`catalog`] fetches pages from the public `/artworks` listing endpoint
//! - [`state`] holds the page controller and the cross-page selection as an
//!   explicit state machine
//! - [`tui`] renders the table, paginator and selection panel with ratatui
//!
//! # Example
//!
//! ```
//! use artwork_browser::models::{Artwork, ArtworkPage};
//! use artwork_browser::catalog::FetchOutcome;
//! use artwork_browser::state::{SelectionMode, ViewState};
//!
//! let mut view = ViewState::new(5, SelectionMode::Reconcile);
//! let ticket = view.go_to_page(0);
//! assert_eq!(ticket.request.page, 1);
//!
//! let page = ArtworkPage {
//!     records: vec![Artwork::new(1, "A", "X", "2020")],
//!     total: 12,
//! };
//! view.apply_outcome(FetchOutcome { seq: ticket.seq, page: 1, result: Ok(page) });
//! let checked = view.page().records().to_vec();
//! view.merge_selection(&checked);
//!
//! assert_eq!(view.page().total_pages(), 3);
//! assert_eq!(view.selection().labels(), vec!["A by X".to_string()]);
//! ```

pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod models;
pub mod parsers;
pub mod state;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use catalog::{CatalogError, CatalogSource, HttpCatalog};
pub use models::{Artwork, ArtworkPage};
pub use state::{SelectionMode, SelectionSet, ViewState};
