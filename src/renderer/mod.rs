//! Post renderer module
//!
//! Fills the fixed front-matter template and the file name template.
//! Placeholders are `{name}`; anything else, including the
//! `{{ page.description }}` token meant for the site generator, is copied
//! through untouched.

use crate::config::Config;
use crate::models::Post;

/// Front-matter document written for every new post
pub const POST_TEMPLATE: &str = concat!(
    "\n",
    "---\n",
    "layout: {layout}\n",
    "date: \"{date} {time} {offset}\"\n",
    "title: \"\"\n",
    "description: \"\"\n",
    "keywords: \"\"\n",
    "categories: {categories} \n",
    "key: {key}\n",
    "---\n",
    "\n",
    "> {{ page.description }}\n",
    "\n",
    "<!--more-->\n",
    "\n",
);

/// Name of the generated file
pub const FILE_NAME_TEMPLATE: &str = "{date}-{key}.md";

/// Template renderer for new posts
pub struct Renderer<'a> {
    config: &'a Config,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Render the document body
    pub fn render(&self, post: &Post) -> String {
        fill(
            POST_TEMPLATE,
            &[
                ("layout", &self.config.layout),
                ("date", &post.stamp.date),
                ("time", &post.stamp.time),
                ("offset", &self.config.utc_offset),
                ("categories", &self.config.categories),
                ("key", post.slug.as_str()),
            ],
        )
    }

    /// Render the file name, `{date}-{slug}.md`
    pub fn file_name(&self, post: &Post) -> String {
        fill(
            FILE_NAME_TEMPLATE,
            &[("date", &post.stamp.date), ("key", post.slug.as_str())],
        )
    }
}

/// Single-pass placeholder substitution.
///
/// Substituted values are never rescanned, so a title containing `{date}`
/// stays literal.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len() + 64);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        rest = &rest[open..];

        let hit = values.iter().find(|(name, _)| {
            rest.len() > name.len() + 1
                && rest[1..].starts_with(name)
                && rest[1 + name.len()..].starts_with('}')
        });

        match hit {
            Some((name, value)) => {
                output.push_str(value);
                rest = &rest[name.len() + 2..];
            }
            None => {
                output.push('{');
                rest = &rest[1..];
            }
        }
    }

    output.push_str(rest);
    output
}
