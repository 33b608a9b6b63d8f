//! Template loading functionality.

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::TemplateResult;
use crate::manifest::{read_manifest, Template};
use crate::resolver::{locate_templates_root, template_dir_in};

/// Loads templates from a located templates root.
#[derive(Debug, Clone)]
pub struct TemplateLoader {
    templates_root: PathBuf,
}

impl TemplateLoader {
    /// Create a loader for an explicit templates root.
    pub fn new(templates_root: impl Into<PathBuf>) -> Self {
        Self {
            templates_root: templates_root.into(),
        }
    }

    /// Create a loader for the nearest templates root at or above `start_dir`.
    pub fn locate(start_dir: &Path) -> TemplateResult<Self> {
        Ok(Self::new(locate_templates_root(start_dir)?))
    }

    pub fn templates_root(&self) -> &Path {
        &self.templates_root
    }

    /// Load a single template by name.
    pub fn load(&self, name: &str) -> TemplateResult<Template> {
        let template_dir = template_dir_in(&self.templates_root, name)?;
        let template = read_manifest(&template_dir)?;
        info!(
            "Loaded template: {} ({} file(s) to format)",
            template.name,
            template.files_to_format.len()
        );
        Ok(template)
    }

    /// Load every template under the root, sorted by name.
    ///
    /// Fails on the first template whose manifest is missing or invalid.
    pub fn load_all(&self) -> TemplateResult<Vec<Template>> {
        let mut templates = Vec::new();

        for entry in WalkDir::new(&self.templates_root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            let path = entry.path();
            if !path.is_dir() {
                debug!("Skipping non-directory entry {:?}", path);
                continue;
            }
            templates.push(read_manifest(path)?);
        }

        Ok(templates)
    }
}
