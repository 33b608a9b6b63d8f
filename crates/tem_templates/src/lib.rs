//! # tem_templates
//!
//! Template discovery, manifest parsing and instantiation for `tem`.
//!
//! A template is a directory under a `TEMplates` root. The root is found by
//! walking from a starting directory up through its ancestors. Each template
//! carries a `Temfile.yml` manifest naming the files whose `@@tem:<key>@@`
//! placeholders are substituted after the template is copied.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tem_templates::{instantiate, TemplateArguments, TemplateLoader};
//! use std::path::Path;
//!
//! let loader = TemplateLoader::locate(Path::new(".")).unwrap();
//! let template = loader.load("rust-bin").unwrap();
//!
//! let mut arguments = TemplateArguments::new();
//! arguments.insert("name", "my-tool");
//!
//! instantiate(&template, Path::new("."), &arguments).unwrap();
//! ```

pub mod copier;
pub mod error;
pub mod loader;
pub mod manifest;
pub mod renderer;
pub mod resolver;

pub use copier::copy_template_files;
pub use error::{TemplateError, TemplateResult};
pub use loader::TemplateLoader;
pub use manifest::{read_manifest, Template};
pub use renderer::{format_file, instantiate, placeholder, render_content, TemplateArguments};
pub use resolver::{locate_templates_root, resolve_template};

/// Name of the directory holding all templates.
pub const TEMPLATES_DIR_NAME: &str = "TEMplates";

/// Name of the manifest file at the top of every template.
pub const MANIFEST_FILE_NAME: &str = "Temfile.yml";
