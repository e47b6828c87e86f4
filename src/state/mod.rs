//! View state for the artwork browser, independent of any terminal.
//!
//! [`ViewState`] owns the page controller ([`PageState`]) and the cross-page
//! selection ([`SelectionSet`]). Every change goes through one of its
//! transition methods, so the whole state machine is testable without a
//! terminal or a network.

pub mod page;
pub mod selection;
pub mod view;

pub use page::{LoadStatus, PageState, total_pages};
pub use selection::{SelectionMode, SelectionSet};
pub use view::ViewState;
