use std::collections::HashSet;
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::Artwork;

/// How grid selection events update the cross-page selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Rows reported by an event are added; nothing is ever removed
    Additive,
    /// The event replaces the selection for the visible page only
    #[default]
    Reconcile,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::Additive => write!(f, "additive"),
            SelectionMode::Reconcile => write!(f, "reconcile"),
        }
    }
}

/// Insertion-ordered set of selected artworks, unique by `id`
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    entries: Vec<Artwork>,
    ids: HashSet<u64>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every row whose id is not selected yet. Rows already present
    /// keep the values they were first added with.
    ///
    /// Returns the number of rows added.
    pub fn merge(&mut self, rows: &[Artwork]) -> usize {
        let mut added = 0;
        for row in rows {
            if self.ids.insert(row.id) {
                self.entries.push(row.clone());
                added += 1;
            }
        }
        added
    }

    /// Make `rows` the selection for the page whose ids are `page_ids`:
    /// entries from that page missing in `rows` are dropped, then `rows` are
    /// merged. Entries from other pages are untouched.
    ///
    /// Returns `(added, removed)`.
    pub fn reconcile_page(&mut self, page_ids: &[u64], rows: &[Artwork]) -> (usize, usize) {
        let keep: HashSet<u64> = rows.iter().map(|r| r.id).collect();
        let drop: HashSet<u64> =
            page_ids.iter().copied().filter(|id| !keep.contains(id)).collect();

        let before = self.entries.len();
        self.entries.retain(|entry| !drop.contains(&entry.id));
        let removed = before - self.entries.len();
        for id in &drop {
            self.ids.remove(id);
        }

        let added = self.merge(rows);
        (added, removed)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artwork> {
        self.entries.iter()
    }

    pub fn ids(&self) -> Vec<u64> {
        self.entries.iter().map(|e| e.id).collect()
    }

    /// "title by creator" for every entry, in selection order
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(Artwork::label).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.ids.clear();
    }
}
