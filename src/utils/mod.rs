pub mod terminal;

pub use terminal::{cell_text, strip_ansi_codes};
