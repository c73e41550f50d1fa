//! Terminal display module
//!
//! Dry-run previews with automatic TTY detection.

mod formatter;
mod terminal;

pub use formatter::print_preview;
