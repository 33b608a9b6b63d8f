//! Template manifest (`Temfile.yml`) parsing.
//!
//! The manifest root must be a mapping. The only recognized key is `format`,
//! a list of paths relative to the template root whose placeholders are
//! substituted after copying. Every other key is ignored.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tracing::debug;

use crate::error::{TemplateError, TemplateResult};
use crate::MANIFEST_FILE_NAME;

/// Key listing the files that receive placeholder substitution.
const FORMAT_KEY: &str = "format";

/// A template resolved on disk together with its parsed manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Template name, the directory name under the templates root.
    pub name: String,
    /// Source directory of the template.
    pub template_dir: PathBuf,
    /// Files to format, relative to the template root, in manifest order.
    pub files_to_format: Vec<PathBuf>,
}

/// Read and validate the manifest of the template stored in `template_dir`.
pub fn read_manifest(template_dir: &Path) -> TemplateResult<Template> {
    let name = template_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let manifest_path = template_dir.join(MANIFEST_FILE_NAME);
    debug!("Loading manifest from {:?}", manifest_path);
    let content = fs::read_to_string(&manifest_path).map_err(|source| {
        TemplateError::ManifestUnreadable {
            path: manifest_path.clone(),
            source,
        }
    })?;

    let files_to_format = parse_manifest(&name, &content)?;

    Ok(Template {
        name,
        template_dir: template_dir.to_path_buf(),
        files_to_format,
    })
}

/// Parse manifest text into the list of files to format.
fn parse_manifest(template: &str, content: &str) -> TemplateResult<Vec<PathBuf>> {
    let root: Value = if content.trim().is_empty() {
        Value::Null
    } else {
        serde_yaml::from_str(content)?
    };

    let Value::Mapping(root) = root else {
        return Err(TemplateError::invalid_manifest(
            template,
            "Root element must be a dict",
        ));
    };

    let entries = match root.get(FORMAT_KEY) {
        None => return Ok(Vec::new()),
        Some(Value::Sequence(entries)) => entries,
        Some(_) => {
            return Err(TemplateError::invalid_manifest(
                template,
                "`format` property must be a list",
            ))
        }
    };

    entries
        .iter()
        .map(|entry| match entry {
            Value::String(path) => Ok(PathBuf::from(path)),
            _ => Err(TemplateError::invalid_manifest(
                template,
                "Each member of `format` property must be a string",
            )),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn invalid_message(err: TemplateError) -> String {
        match err {
            TemplateError::InvalidManifest { message, .. } => message,
            other => panic!("expected invalid manifest, got {other:?}"),
        }
    }

    #[test]
    fn test_format_list() {
        let files = parse_manifest("foo", "format:\n  - a.txt\n  - src/main.rs\n").unwrap();
        assert_eq!(files, vec![PathBuf::from("a.txt"), PathBuf::from("src/main.rs")]);
    }

    #[test]
    fn test_missing_format_means_nothing_to_format() {
        let files = parse_manifest("foo", "description: plain copy\n").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_empty_mapping() {
        assert!(parse_manifest("foo", "{}").unwrap().is_empty());
    }

    #[test]
    fn test_root_must_be_mapping() {
        for content in ["- a.txt\n", "just a string\n", "42\n", ""] {
            let err = parse_manifest("foo", content).unwrap_err();
            assert_eq!(invalid_message(err), "Root element must be a dict");
        }
    }

    #[test]
    fn test_format_must_be_list() {
        for content in ["format: a.txt\n", "format:\n  a: b\n", "format:\n"] {
            let err = parse_manifest("foo", content).unwrap_err();
            assert_eq!(invalid_message(err), "`format` property must be a list");
        }
    }

    #[test]
    fn test_format_members_must_be_strings() {
        let err = parse_manifest("foo", "format:\n  - a.txt\n  - 3\n").unwrap_err();
        assert_eq!(
            invalid_message(err),
            "Each member of `format` property must be a string"
        );
    }

    #[test]
    fn test_yaml_1_2_scalars_and_duplicate_keys() {
        let files = parse_manifest("foo", "format: [yes, off]\n").unwrap();
        assert_eq!(files, vec![PathBuf::from("yes"), PathBuf::from("off")]);

        let err = parse_manifest("foo", "format: [a.txt]\nformat: [b.txt]\n").unwrap_err();
        assert!(matches!(err, TemplateError::Yaml(_)));
    }

    #[test]
    fn test_invalid_manifest_names_template() {
        let err = parse_manifest("foo", "[]").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid manifest in template foo: Root element must be a dict"
        );
    }

    #[test]
    fn test_read_manifest_from_dir() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("greeting");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join(MANIFEST_FILE_NAME), "format: [a.txt]\n").unwrap();

        let template = read_manifest(&dir).unwrap();
        assert_eq!(template.name, "greeting");
        assert_eq!(template.template_dir, dir);
        assert_eq!(template.files_to_format, vec![PathBuf::from("a.txt")]);
    }

    #[test]
    fn test_read_manifest_missing_file() {
        let temp = tempdir().unwrap();
        let err = read_manifest(temp.path()).unwrap_err();
        let expected = temp.path().join(MANIFEST_FILE_NAME);
        assert!(matches!(err, TemplateError::ManifestUnreadable { ref path, .. } if *path == expected));
        assert!(err.to_string().contains(&expected.display().to_string()));
    }
}
