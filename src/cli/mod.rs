//! Command-line interface module
//!
//! - new: scaffold a post from a title and move it into the posts directory
pub mod new;
