//! Placeholder substitution and template instantiation.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::copier::copy_template_files;
use crate::error::TemplateResult;
use crate::manifest::Template;

/// Ordered `key=value` arguments supplied when using a template.
///
/// Keys keep the position of their first insertion; inserting an existing
/// key replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateArguments {
    entries: Vec<(String, String)>,
}

impl TemplateArguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an argument, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TemplateArguments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut arguments = Self::new();
        for (key, value) in iter {
            arguments.insert(key, value);
        }
        arguments
    }
}

/// The placeholder token for `key`, e.g. `@@tem:name@@`.
pub fn placeholder(key: &str) -> String {
    format!("@@tem:{}@@", key)
}

/// Replace the placeholders of every argument in `content`.
///
/// Arguments are applied one after another in insertion order, so a value
/// that contains another key's token is substituted again by that later key.
pub fn render_content(content: &str, arguments: &TemplateArguments) -> String {
    let mut result = content.to_string();
    for (key, value) in arguments.iter() {
        result = result.replace(&placeholder(key), value);
    }
    result
}

/// Substitute placeholders in the file at `path`, rewriting it in place.
pub fn format_file(path: &Path, arguments: &TemplateArguments) -> TemplateResult<()> {
    let content = fs::read_to_string(path)?;
    let rendered = render_content(&content, arguments);
    fs::write(path, rendered)?;
    debug!("Formatted: {:?}", path);
    Ok(())
}

/// Copy `template` into `destination` and format its listed files there.
pub fn instantiate(
    template: &Template,
    destination: &Path,
    arguments: &TemplateArguments,
) -> TemplateResult<()> {
    info!(
        "Instantiating template {} into {:?}",
        template.name, destination
    );

    copy_template_files(&template.template_dir, destination)?;

    for relative in &template.files_to_format {
        format_file(&destination.join(relative), arguments)?;
    }

    Ok(())
}
