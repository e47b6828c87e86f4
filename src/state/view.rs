use tracing::debug;

use super::page::PageState;
use super::selection::{SelectionMode, SelectionSet};
use crate::catalog::{FetchOutcome, FetchTicket};
use crate::models::Artwork;

/// The whole view: current page plus the selection carried across pages
#[derive(Debug, Clone)]
pub struct ViewState {
    page: PageState,
    selection: SelectionSet,
    mode: SelectionMode,
}

impl ViewState {
    pub fn new(page_size: u32, mode: SelectionMode) -> Self {
        Self { page: PageState::new(page_size), selection: SelectionSet::new(), mode }
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Paginator moved to 0-based `index`
    pub fn go_to_page(&mut self, index: u32) -> FetchTicket {
        self.page.go_to_page(index)
    }

    pub fn reload(&mut self) -> FetchTicket {
        self.page.reload()
    }

    /// Apply a fetch outcome. Returns `false` if it was stale.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) -> bool {
        match outcome.result {
            Ok(loaded) => self.page.data_loaded(outcome.seq, loaded),
            Err(error) => self.page.fetch_failed(outcome.seq, outcome.page, &error),
        }
    }

    /// Additively merge `rows` into the selection, whatever the mode
    pub fn merge_selection(&mut self, rows: &[Artwork]) -> usize {
        let added = self.selection.merge(rows);
        debug!(added, selected = self.selection.len(), "selection merged");
        added
    }

    /// Handle a grid selection event carrying the full checked set of the
    /// visible page. Returns whether the selection changed.
    pub fn selection_changed(&mut self, event_rows: &[Artwork]) -> bool {
        match self.mode {
            SelectionMode::Additive => self.merge_selection(event_rows) > 0,
            SelectionMode::Reconcile => {
                let page_ids: Vec<u64> = self.page.records().iter().map(|r| r.id).collect();
                let (added, removed) = self.selection.reconcile_page(&page_ids, event_rows);
                debug!(added, removed, selected = self.selection.len(), "selection reconciled");
                added > 0 || removed > 0
            }
        }
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selection.contains(id)
    }

    /// Rows of the visible page that are currently checked
    pub fn checked_on_page(&self) -> Vec<Artwork> {
        self.page.records().iter().filter(|r| self.selection.contains(r.id)).cloned().collect()
    }

    /// Flip the checkbox of the row at `row_idx` on the visible page
    pub fn toggle_row(&mut self, row_idx: usize) -> bool {
        let Some(target) = self.page.records().get(row_idx).cloned() else {
            return false;
        };

        let mut rows = self.checked_on_page();
        if self.selection.contains(target.id) {
            rows.retain(|r| r.id != target.id);
        } else {
            rows.push(target);
        }
        self.selection_changed(&rows)
    }

    /// Check every row of the visible page, or uncheck them all if they
    /// already are
    pub fn toggle_page(&mut self) -> bool {
        let records = self.page.records();
        if records.is_empty() {
            return false;
        }

        let all_checked = records.iter().all(|r| self.selection.contains(r.id));
        let rows = if all_checked { Vec::new() } else { records.to_vec() };
        self.selection_changed(&rows)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogError, PageRequest};
    use crate::models::ArtworkPage;
    use crate::state::LoadStatus;

    fn art(id: u64) -> Artwork {
        Artwork::new(id, format!("Title {}", id), format!("Artist {}", id), "1900")
    }

    fn loaded(view: &mut ViewState, index: u32, ids: &[u64], total: u64) {
        let ticket = view.go_to_page(index);
        let outcome = FetchOutcome {
            seq: ticket.seq,
            page: ticket.request.page,
            result: Ok(ArtworkPage { records: ids.iter().map(|&id| art(id)).collect(), total }),
        };
        assert!(view.apply_outcome(outcome));
    }

    #[test]
    fn test_go_to_page_returns_one_based_request() {
        let mut view = ViewState::new(5, SelectionMode::Additive);
        let ticket = view.go_to_page(0);
        assert_eq!(ticket.request, PageRequest::new(1, 5));
    }

    #[test]
    fn test_apply_failed_outcome() {
        let mut view = ViewState::new(5, SelectionMode::Reconcile);
        let ticket = view.go_to_page(4);
        let outcome = FetchOutcome {
            seq: ticket.seq,
            page: 5,
            result: Err(CatalogError::Status { status: 500, url: "http://x".to_string() }),
        };

        assert!(view.apply_outcome(outcome));
        assert!(matches!(view.page().status(), LoadStatus::Failed { page: 5, .. }));
    }

    #[test]
    fn test_toggle_row_reconcile() {
        let mut view = ViewState::new(5, SelectionMode::Reconcile);
        loaded(&mut view, 0, &[1, 2, 3], 3);

        assert!(view.toggle_row(0));
        assert!(view.toggle_row(2));
        assert_eq!(view.selection().ids(), vec![1, 3]);

        assert!(view.toggle_row(0));
        assert_eq!(view.selection().ids(), vec![3]);
    }

    #[test]
    fn test_toggle_row_additive_cannot_uncheck() {
        let mut view = ViewState::new(5, SelectionMode::Additive);
        loaded(&mut view, 0, &[1, 2], 2);

        assert!(view.toggle_row(1));
        assert!(!view.toggle_row(1));
        assert!(view.is_selected(2));
    }

    #[test]
    fn test_toggle_row_out_of_range() {
        let mut view = ViewState::new(5, SelectionMode::Reconcile);
        loaded(&mut view, 0, &[1], 1);
        assert!(!view.toggle_row(3));
    }

    #[test]
    fn test_toggle_page() {
        let mut view = ViewState::new(5, SelectionMode::Reconcile);
        loaded(&mut view, 0, &[1, 2, 3], 6);
        view.toggle_row(1);

        assert!(view.toggle_page());
        assert_eq!(view.selection().ids(), vec![2, 1, 3]);

        assert!(view.toggle_page());
        assert!(view.selection().is_empty());
    }

    #[test]
    fn test_toggle_page_keeps_other_pages() {
        let mut view = ViewState::new(3, SelectionMode::Reconcile);
        loaded(&mut view, 0, &[1, 2, 3], 6);
        view.toggle_page();
        loaded(&mut view, 1, &[4, 5, 6], 6);
        view.toggle_row(0);

        view.toggle_page();
        view.toggle_page();

        assert_eq!(view.selection().ids(), vec![1, 2, 3]);
    }

    #[test]
    fn test_checked_on_page_follows_selection() {
        let mut view = ViewState::new(5, SelectionMode::Reconcile);
        loaded(&mut view, 0, &[1, 2, 3], 6);
        view.merge_selection(&[art(3), art(40)]);

        let checked: Vec<u64> = view.checked_on_page().iter().map(|r| r.id).collect();
        assert_eq!(checked, vec![3]);
    }

    #[test]
    fn test_clear_selection() {
        let mut view = ViewState::new(5, SelectionMode::Additive);
        view.merge_selection(&[art(1)]);
        view.clear_selection();
        assert!(view.selection().is_empty());
    }
}
