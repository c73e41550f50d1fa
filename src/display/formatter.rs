//! Dry-run preview of a rendered post, styled with termimad

use termimad::MadSkin;

use crate::display::terminal::should_use_colors;

/// Print the file name and document that would be written
pub fn print_preview(file_name: &str, document: &str) {
    if should_use_colors() {
        print_rich(file_name, document);
    } else {
        print_plain(file_name, document);
    }
}

/// The document goes inside a code block so termimad keeps the front matter
/// verbatim instead of interpreting `---` and `>` as markdown.
fn preview_markdown(file_name: &str, document: &str) -> String {
    format!(
        "**Would create:** `{}`\n\n```\n{}\n```\n",
        file_name,
        document.trim_matches('\n')
    )
}

fn print_rich(file_name: &str, document: &str) {
    let mut skin = MadSkin::default();
    customize_skin(&mut skin);
    skin.print_text(&preview_markdown(file_name, document));
}

fn customize_skin(skin: &mut MadSkin) {
    use termimad::crossterm::style::{Attribute, Color::*};

    skin.bold.set_fg(Cyan);
    skin.bold.add_attr(Attribute::Bold);
    skin.inline_code.set_fg(Yellow);
    skin.code_block.set_fg(Green);
}

/// Exactly what would land on disk, no decoration
fn print_plain(file_name: &str, document: &str) {
    println!("Would create: {}", file_name);
    print!("{}", document);
}
