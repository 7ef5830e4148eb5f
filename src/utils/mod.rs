//! Utility modules supporting rendering and CLI output.

mod display;

pub use display::{is_terminal, terminal_width, truncate_with_ellipsis, wrap_text};
