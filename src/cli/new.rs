use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::clock::{Clock, SystemClock};
use crate::config::{self, Config, Overrides};
use crate::error::Result;
use crate::models::Post;
use crate::relocate::{relocate, Relocation};
use crate::renderer::Renderer;

/// Result of scaffolding one post
#[derive(Debug)]
pub struct Scaffolded {
    /// Generated file name, `{date}-{slug}.md`
    pub file_name: String,
    /// Where the file ended up
    pub relocation: Relocation,
}

/// Scaffold a new post in the current directory
pub fn run(title: String, overrides: Overrides, dry_run: bool) -> Result<()> {
    let config = config::from_overrides(overrides)?;

    if dry_run {
        let (file_name, document) = prepare(&title, &config, &SystemClock);
        crate::display::print_preview(&file_name, &document);
        return Ok(());
    }

    let scaffolded = scaffold(&title, &config, &SystemClock, Path::new("."))?;
    println!("posts {} created.", scaffolded.file_name);

    match &scaffolded.relocation {
        Relocation::Moved(dest) => {
            let shown = dest.strip_prefix(".").unwrap_or(dest.as_path());
            println!("moved to {}", shown.display());
        }
        Relocation::Kept { .. } => println!("no _posts folder!"),
    }

    Ok(())
}

/// Render the file name and document for `title` at the clock's current time
pub fn prepare(title: &str, config: &Config, clock: &dyn Clock) -> (String, String) {
    let now = clock.now();
    let post = Post::new(title, now, config.time_style);
    debug!(
        "date {} time {} slug {}",
        post.stamp.date, post.stamp.time, post.slug
    );

    let renderer = Renderer::new(config);
    let file_name = renderer.file_name(&post);
    let document = renderer.render(&post);
    debug!("file name {}", file_name);

    (file_name, document)
}

/// Write the post into `workdir`, then try to move it into the posts
/// directory (resolved against `workdir` when relative).
///
/// An existing file with the same name in `workdir` is overwritten. Only a
/// failure to write the file is an error; relocation problems are reported
/// through `Scaffolded::relocation`.
pub fn scaffold(
    title: &str,
    config: &Config,
    clock: &dyn Clock,
    workdir: &Path,
) -> Result<Scaffolded> {
    let (file_name, document) = prepare(title, config, clock);

    let path: PathBuf = workdir.join(&file_name);
    fs::write(&path, document)?;
    info!("Wrote {}", path.display());

    let relocation = relocate(&path, &workdir.join(&config.posts_dir));
    if let Relocation::Kept { reason } = &relocation {
        warn!("Leaving {} in place: {}", path.display(), reason);
    }

    Ok(Scaffolded {
        file_name,
        relocation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn fixed_clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2024, 3, 5)
                .unwrap()
                .and_hms_opt(21, 4, 9)
                .unwrap(),
        )
    }

    #[test]
    fn test_prepare() {
        let config = Config::default();
        let (file_name, document) = prepare("hello world", &config, &fixed_clock());

        assert_eq!(file_name, "2024-03-05-hello-world.md");
        assert!(document.contains("date: \"2024-03-05 21:21:4 +0800\""));
        assert!(document.contains("key: hello-world\n"));
    }

    #[test]
    fn test_scaffold_moves_into_posts() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("_posts")).unwrap();
        let config = Config::default();

        let result = scaffold("hello world", &config, &fixed_clock(), temp.path()).unwrap();

        let moved = temp.path().join("_posts/2024-03-05-hello-world.md");
        assert_eq!(result.file_name, "2024-03-05-hello-world.md");
        assert!(matches!(result.relocation, Relocation::Moved(_)));
        assert!(moved.exists());
        assert!(!temp.path().join("2024-03-05-hello-world.md").exists());

        let content = std::fs::read_to_string(moved).unwrap();
        assert!(content.contains("key: hello-world"));
    }

    #[test]
    fn test_scaffold_without_posts_dir_keeps_file() {
        let temp = TempDir::new().unwrap();
        let config = Config::default();

        let result = scaffold("hello world", &config, &fixed_clock(), temp.path()).unwrap();

        assert!(matches!(result.relocation, Relocation::Kept { .. }));
        assert!(temp.path().join("2024-03-05-hello-world.md").exists());
    }

    #[test]
    fn test_scaffold_overwrites_existing_file() {
        let temp = TempDir::new().unwrap();
        let existing = temp.path().join("2024-03-05-hello-world.md");
        std::fs::write(&existing, "stale").unwrap();
        let config = Config::default();

        scaffold("hello world", &config, &fixed_clock(), temp.path()).unwrap();

        let content = std::fs::read_to_string(existing).unwrap();
        assert!(content.contains("layout: article"));
        assert!(!content.contains("stale"));
    }

    #[test]
    fn test_scaffold_custom_posts_dir() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("content/posts")).unwrap();
        let config = Config {
            posts_dir: PathBuf::from("content/posts"),
            ..Config::default()
        };

        let result = scaffold("notes", &config, &fixed_clock(), temp.path()).unwrap();

        assert!(matches!(result.relocation, Relocation::Moved(_)));
        assert!(temp
            .path()
            .join("content/posts/2024-03-05-notes.md")
            .exists());
    }

    #[test]
    fn test_scaffold_unwritable_location_is_error() {
        let temp = TempDir::new().unwrap();
        let config = Config::default();

        let result = scaffold(
            "hello",
            &config,
            &fixed_clock(),
            &temp.path().join("missing"),
        );

        assert!(result.is_err());
    }
}
