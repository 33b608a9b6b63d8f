//! CLI command definitions.
//!
//! The command line is parsed once into a [`Command`] which is then run
//! once. clap provides the command surface; the `key=value` grammar of
//! `use` is parsed by [`use_template`].

use std::ffi::OsString;

use anyhow::Result;
use clap::error::{ContextKind, ErrorKind};
use clap::{Parser, Subcommand};

use crate::error::UsageError;

pub mod help;
pub mod list;
pub mod use_template;

/// tem - copy a template into the current directory
#[derive(Parser, Debug)]
#[command(name = "tem")]
#[command(
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Use a template
    Use(use_template::UseArgs),

    /// List available templates
    List,

    /// Display the help message
    Help,
}

/// A parsed unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Use(use_template::UseCommand),
    List,
    Help,
}

impl Command {
    pub fn run(self) -> Result<()> {
        match self {
            Command::Use(command) => use_template::execute(command),
            Command::List => list::execute(),
            Command::Help => help::execute(),
        }
    }
}

impl TryFrom<Cli> for Command {
    type Error = UsageError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        match cli.command {
            None => Err(UsageError::with_help("You must specify a command to run")),
            Some(Commands::Use(args)) => {
                let command = use_template::UseCommand::parse(args.args)?;
                Ok(Command::Use(command))
            }
            Some(Commands::List) => Ok(Command::List),
            Some(Commands::Help) => Ok(Command::Help),
        }
    }
}

/// Parse the process arguments, mapping clap failures onto [`UsageError`].
pub fn parse_args<I, T>(args: I) -> Result<Cli, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let mut cli = Cli::try_parse_from(argv.iter().cloned()).map_err(usage_error)?;

    // clap consumes a `--` in front of the template name; `use` takes every
    // token after the subcommand literally.
    if let Some(Commands::Use(use_args)) = &mut cli.command {
        use_args.args = raw_use_tokens(&argv);
    }

    Ok(cli)
}

/// Tokens following the `use` subcommand, exactly as given.
///
/// Only flags without values may precede the subcommand, so the first `use`
/// after the program name is the subcommand itself.
fn raw_use_tokens(argv: &[OsString]) -> Vec<String> {
    argv.iter()
        .skip(1)
        .skip_while(|token| token.as_os_str() != "use")
        .skip(1)
        .map(|token| token.to_string_lossy().into_owned())
        .collect()
}

fn usage_error(err: clap::Error) -> UsageError {
    let context = |kind: ContextKind| err.get(kind).map(|value| value.to_string());

    match err.kind() {
        ErrorKind::InvalidSubcommand => {
            let command = context(ContextKind::InvalidSubcommand).unwrap_or_default();
            UsageError::with_help(format!("Invalid command: `{command}`"))
        }
        ErrorKind::UnknownArgument => {
            let argument = context(ContextKind::InvalidArg).unwrap_or_default();
            UsageError::with_help(format!("Unexpected argument: `{argument}`"))
        }
        _ => {
            let rendered = err.to_string();
            let first_line = rendered.lines().next().unwrap_or_default();
            UsageError::with_help(first_line.trim_start_matches("error: ").to_string())
        }
    }
}
