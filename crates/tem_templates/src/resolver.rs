//! Locating the templates root and resolving template directories.
//!
//! The templates root is the first directory named `TEMplates` found in the
//! starting directory or any of its ancestors, up to and including the
//! filesystem root.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{TemplateError, TemplateResult};
use crate::TEMPLATES_DIR_NAME;

/// Find the nearest `TEMplates` directory at or above `start_dir`.
///
/// `start_dir` is canonicalized first, so relative paths and symlinked
/// working directories are searched through their real ancestors. The walk
/// visits each ancestor once and stops after the filesystem root.
pub fn locate_templates_root(start_dir: &Path) -> TemplateResult<PathBuf> {
    let start = fs::canonicalize(start_dir)?;

    for dir in start.ancestors() {
        let candidate = dir.join(TEMPLATES_DIR_NAME);
        if candidate.is_dir() {
            debug!("Found templates root at {:?}", candidate);
            return Ok(candidate);
        }
    }

    Err(TemplateError::TemplatesRootNotFound)
}

/// Resolve `name` to a template directory under the nearest templates root.
pub fn resolve_template(name: &str, start_dir: &Path) -> TemplateResult<PathBuf> {
    let templates_root = locate_templates_root(start_dir)?;
    template_dir_in(&templates_root, name)
}

/// Look up `name` directly under an already located templates root.
pub(crate) fn template_dir_in(templates_root: &Path, name: &str) -> TemplateResult<PathBuf> {
    let template_dir = templates_root.join(name);
    if template_dir.is_dir() {
        Ok(template_dir)
    } else {
        Err(TemplateError::NotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_locate_in_start_dir() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join(TEMPLATES_DIR_NAME)).unwrap();

        let root = locate_templates_root(temp.path()).unwrap();
        assert_eq!(
            root,
            fs::canonicalize(temp.path()).unwrap().join(TEMPLATES_DIR_NAME)
        );
    }

    #[test]
    fn test_locate_from_deep_descendant() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join(TEMPLATES_DIR_NAME)).unwrap();
        let deep = temp.path().join("a").join("b").join("c").join("d");
        fs::create_dir_all(&deep).unwrap();

        let root = locate_templates_root(&deep).unwrap();
        assert_eq!(
            root,
            fs::canonicalize(temp.path()).unwrap().join(TEMPLATES_DIR_NAME)
        );
    }

    #[test]
    fn test_locate_prefers_nearest_root() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join(TEMPLATES_DIR_NAME)).unwrap();
        let project = temp.path().join("project");
        fs::create_dir_all(project.join(TEMPLATES_DIR_NAME)).unwrap();
        let nested = project.join("src");
        fs::create_dir_all(&nested).unwrap();

        let root = locate_templates_root(&nested).unwrap();
        assert_eq!(
            root,
            fs::canonicalize(&project).unwrap().join(TEMPLATES_DIR_NAME)
        );
    }

    #[test]
    fn test_locate_ignores_plain_file() {
        let temp = tempdir().unwrap();
        let nested = temp.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join(TEMPLATES_DIR_NAME), "not a directory").unwrap();
        fs::create_dir(temp.path().join(TEMPLATES_DIR_NAME)).unwrap();

        let root = locate_templates_root(&nested).unwrap();
        assert_eq!(
            root,
            fs::canonicalize(temp.path()).unwrap().join(TEMPLATES_DIR_NAME)
        );
    }

    #[test]
    fn test_resolve_missing_template() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join(TEMPLATES_DIR_NAME).join("foo")).unwrap();

        let err = resolve_template("bogus", temp.path()).unwrap_err();
        assert!(matches!(err, TemplateError::NotFound(ref name) if name == "bogus"));
        assert_eq!(err.to_string(), "No such template: bogus");
    }

    #[test]
    fn test_resolve_rejects_file_named_like_template() {
        let temp = tempdir().unwrap();
        let root = temp.path().join(TEMPLATES_DIR_NAME);
        fs::create_dir(&root).unwrap();
        fs::write(root.join("foo"), "").unwrap();

        let err = resolve_template("foo", temp.path()).unwrap_err();
        assert!(matches!(err, TemplateError::NotFound(_)));
    }

    #[test]
    fn test_resolve_existing_template() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join(TEMPLATES_DIR_NAME).join("foo")).unwrap();
        let work = temp.path().join("work");
        fs::create_dir(&work).unwrap();

        let dir = resolve_template("foo", &work).unwrap();
        assert!(dir.ends_with("TEMplates/foo"));
        assert!(dir.is_dir());
    }
}
