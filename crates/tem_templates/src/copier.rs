//! Copying a template's files into a destination directory.
//!
//! Symbolic links are recreated as links, never followed, so dangling links
//! survive the copy. Copying is not transactional: an error leaves whatever
//! was already copied in place.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use fs_extra::file::CopyOptions;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::TemplateResult;
use crate::MANIFEST_FILE_NAME;

/// Copy every top-level entry of `template_dir` except the manifest into
/// `destination`.
///
/// Directories are copied recursively and must not already exist in the
/// destination. Regular files replace existing files of the same name.
/// Returns the destination paths of the copied top-level entries.
pub fn copy_template_files(template_dir: &Path, destination: &Path) -> TemplateResult<Vec<PathBuf>> {
    let mut entries = fs::read_dir(template_dir)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut copied = Vec::new();
    for entry in entries {
        let name = entry.file_name();
        if name == MANIFEST_FILE_NAME {
            continue;
        }

        let source = entry.path();
        let target = destination.join(&name);
        let file_type = entry.file_type()?;

        if file_type.is_symlink() {
            copy_symlink(&source, &target)?;
        } else if file_type.is_dir() {
            copy_tree(&source, &target)?;
        } else {
            copy_file(&source, &target)?;
        }

        debug!("Copied: {:?}", target);
        copied.push(target);
    }

    info!("Copied {} entries from {:?}", copied.len(), template_dir);
    Ok(copied)
}

/// Recursively copy the directory `source` to `target`.
fn copy_tree(source: &Path, target: &Path) -> TemplateResult<()> {
    for entry in WalkDir::new(source).follow_links(false).sort_by_file_name() {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(io::Error::other)?;
        let destination = target.join(relative);
        let file_type = entry.file_type();

        if file_type.is_symlink() {
            copy_symlink(entry.path(), &destination)?;
        } else if file_type.is_dir() {
            fs::create_dir(&destination)?;
        } else {
            copy_file(entry.path(), &destination)?;
        }
    }
    Ok(())
}

/// Copy a regular file, overwriting an existing file at `target`.
fn copy_file(source: &Path, target: &Path) -> TemplateResult<()> {
    let mut options = CopyOptions::new();
    options.overwrite = true;
    fs_extra::file::copy(source, target, &options)?;
    Ok(())
}

/// Recreate the symbolic link `source` at `target` with the same link text.
fn copy_symlink(source: &Path, target: &Path) -> TemplateResult<()> {
    let link_target = fs::read_link(source)?;

    #[cfg(unix)]
    std::os::unix::fs::symlink(&link_target, target)?;

    #[cfg(windows)]
    {
        let points_to_dir = fs::metadata(source).map(|m| m.is_dir()).unwrap_or(false);
        if points_to_dir {
            std::os::windows::fs::symlink_dir(&link_target, target)?;
        } else {
            std::os::windows::fs::symlink_file(&link_target, target)?;
        }
    }

    Ok(())
}
