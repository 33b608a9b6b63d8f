//! Command line usage errors.

use thiserror::Error;

/// Hint appended to usage errors that point the user at the help text.
const HELP_HINT: &str = "For the list of available commands see `tem help`";

/// A malformed command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", render(.message, .offer_help))]
pub struct UsageError {
    pub message: String,
    pub offer_help: bool,
}

fn render(message: &str, offer_help: &bool) -> String {
    if *offer_help {
        format!("{message}\n{HELP_HINT}")
    } else {
        message.to_string()
    }
}

impl UsageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            offer_help: false,
        }
    }

    /// A usage error that also points at `tem help`.
    pub fn with_help(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            offer_help: true,
        }
    }
}
