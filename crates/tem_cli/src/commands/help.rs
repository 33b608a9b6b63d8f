//! Help command - Print usage information.

use anyhow::Result;

pub const USAGE: &str = "\
Usage: tem <command> [args...]
Available commands with their accepted options:
    use <template> [key1=value1 [...]]   -- Use a template
    list                                 -- List available templates
    help                                 -- Display this help message";

pub fn execute() -> Result<()> {
    println!("{USAGE}");
    Ok(())
}
