//! Sanitizing remote text for terminal display
//!
//! Titles and artist names come from a public API and are drawn straight into
//! the terminal. Escape sequences in them could move the cursor or recolor the
//! screen, so everything passes through [`strip_ansi_codes`] before rendering.

/// Strips ANSI CSI escape codes and control characters from a string
///
/// Tab, newline and carriage return are kept.
///
/// # Examples
///
/// ```
/// use artwork_browser::utils::terminal::strip_ansi_codes;
///
/// let text = "\x1b[31mRed text\x1b[0m";
/// assert_eq!(strip_ansi_codes(text), "Red text");
/// ```
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // CSI ends at the first letter
            for next_ch in chars.by_ref() {
                if next_ch.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        if ch.is_control() && ch != '\t' && ch != '\n' && ch != '\r' {
            continue;
        }

        result.push(ch);
    }

    result
}

/// Single-line, sanitized text for a table cell, cut to `max_chars` with a
/// trailing ellipsis
///
/// ```
/// use artwork_browser::utils::cell_text;
///
/// assert_eq!(cell_text("Two\nlines", 20), "Two lines");
/// assert_eq!(cell_text("A long title", 6), "A lon…");
/// ```
pub fn cell_text(text: &str, max_chars: usize) -> String {
    let cleaned = strip_ansi_codes(text);
    let single_line: String = cleaned
        .chars()
        .map(|c| if matches!(c, '\n' | '\r' | '\t') { ' ' } else { c })
        .collect();
    let trimmed = single_line.trim();

    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }

    let mut cut: String = trimmed.chars().take(max_chars - 1).collect();
    cut.push('…');
    cut
}
