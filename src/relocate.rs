//! Moving a generated post into the posts directory
//!
//! Relocation never fails the run. Whatever goes wrong is handed back as
//! `Relocation::Kept` and the post stays where it was written; the caller
//! decides how to report it.

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::NewPostError;

/// Outcome of a relocation attempt
#[derive(Debug)]
pub enum Relocation {
    /// The post now lives at this path
    Moved(PathBuf),
    /// The post was left in place
    Kept { reason: NewPostError },
}

/// Move `file` into `posts_dir`, keeping its file name.
///
/// The posts directory must already exist and must not contain a file of the
/// same name.
pub fn relocate(file: &Path, posts_dir: &Path) -> Relocation {
    match try_relocate(file, posts_dir) {
        Ok(dest) => {
            info!("Moved {} to {}", file.display(), dest.display());
            Relocation::Moved(dest)
        }
        Err(reason) => Relocation::Kept { reason },
    }
}

fn try_relocate(file: &Path, posts_dir: &Path) -> Result<PathBuf, NewPostError> {
    if !posts_dir.exists() {
        return Err(NewPostError::Relocation(format!(
            "'{}' does not exist",
            posts_dir.display()
        )));
    }
    if !posts_dir.is_dir() {
        return Err(NewPostError::Relocation(format!(
            "'{}' is not a directory",
            posts_dir.display()
        )));
    }

    let file_name = file.file_name().ok_or_else(|| {
        NewPostError::Relocation(format!("'{}' has no file name", file.display()))
    })?;
    let dest = posts_dir.join(file_name);

    if dest.exists() {
        return Err(NewPostError::Relocation(format!(
            "'{}' already exists",
            dest.display()
        )));
    }

    if let Err(e) = fs::rename(file, &dest) {
        debug!("rename failed ({}), falling back to copy", e);
        copy_then_remove(file, &dest)?;
    }

    Ok(dest)
}

/// Fallback for renames across filesystems
fn copy_then_remove(file: &Path, dest: &Path) -> Result<(), NewPostError> {
    fs::copy(file, dest)?;

    if let Err(e) = fs::remove_file(file) {
        // Keep exactly one copy, at the original location.
        let _ = fs::remove_file(dest);
        return Err(e.into());
    }

    Ok(())
}
