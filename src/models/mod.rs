//! Data models module
//!
//! Defines the post being scaffolded: Slug, Stamp and Post.

pub mod post;

pub use post::Post;
