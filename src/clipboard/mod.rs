use anyhow::{Context, Result, bail};
use arboard::Clipboard;

use crate::state::SelectionSet;

/// Trait for clipboard operations (allows mocking in tests)
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Real clipboard implementation using arboard
struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

/// One "title by creator" line per selected artwork, in selection order
pub fn format_selection(selection: &SelectionSet) -> String {
    selection.labels().join("\n")
}

fn copy_with_provider(selection: &SelectionSet, provider: &mut dyn ClipboardProvider) -> Result<usize> {
    if selection.is_empty() {
        bail!("Nothing selected to copy");
    }
    provider.set_text(&format_selection(selection))?;
    Ok(selection.len())
}

/// Copy the selection list to the system clipboard.
///
/// Returns the number of artworks copied.
///
/// # Errors
/// Returns error if:
/// - The selection is empty
/// - The system clipboard is unavailable (headless environment, denied access)
pub fn copy_selection(selection: &SelectionSet) -> Result<usize> {
    // Check before touching the system clipboard so the message is the same in CI
    if selection.is_empty() {
        bail!("Nothing selected to copy");
    }

    let mut clipboard = SystemClipboard::new()?;
    copy_with_provider(selection, &mut clipboard)
}
