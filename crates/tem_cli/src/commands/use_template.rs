//! Use command - Copy a template into the current directory.

use std::sync::OnceLock;

use anyhow::{Context, Result};
use clap::Args;
use regex::Regex;
use tracing::info;

use tem_templates::{instantiate, TemplateArguments, TemplateLoader};

use crate::error::UsageError;

/// Characters that may not appear in a template name.
const FORBIDDEN_NAME_CHARS: [char; 3] = ['/', '\\', '\0'];

#[derive(Args, Debug)]
pub struct UseArgs {
    /// Template name followed by `key=value` arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// A validated `use` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseCommand {
    pub template_name: String,
    pub arguments: TemplateArguments,
}

impl UseCommand {
    /// Parse `<template> [key=value ...]`.
    pub fn parse(args: Vec<String>) -> Result<Self, UsageError> {
        let mut args = args.into_iter();
        let template_name = args
            .next()
            .ok_or_else(|| UsageError::with_help("Template name must be specified"))?;

        if template_name.contains(FORBIDDEN_NAME_CHARS) {
            return Err(UsageError::new(format!(
                "Invalid template name: `{template_name}`"
            )));
        }

        let mut arguments = TemplateArguments::new();
        for raw in args {
            let (key, value) = parse_key_value(&raw)?;
            arguments.insert(key, value);
        }

        Ok(Self {
            template_name,
            arguments,
        })
    }
}

/// Split a `key=value` argument at the first `=` and validate the key.
fn parse_key_value(raw: &str) -> Result<(&str, &str), UsageError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| UsageError::new("Template arguments must be `key=value` pairs"))?;

    if !key_pattern().is_match(key) {
        return Err(UsageError::new(format!("Invalid key `{key}`")));
    }

    Ok((key, value))
}

fn key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap())
}

pub fn execute(command: UseCommand) -> Result<()> {
    info!("Using template: {}", command.template_name);

    let current_dir = std::env::current_dir()?;
    let template = TemplateLoader::locate(&current_dir)?.load(&command.template_name)?;

    instantiate(&template, &current_dir, &command.arguments)
        .with_context(|| format!("Failed to use template {}", template.name))?;

    Ok(())
}
