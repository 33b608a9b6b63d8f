//! List command - Print the names of available templates.

use anyhow::Result;
use tracing::info;

use tem_templates::TemplateLoader;

pub fn execute() -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let loader = TemplateLoader::locate(&current_dir)?;
    info!("Listing templates in {:?}", loader.templates_root());

    // Every manifest is validated before anything is printed.
    let templates = loader.load_all()?;
    for template in &templates {
        println!("{}", template.name);
    }

    Ok(())
}
