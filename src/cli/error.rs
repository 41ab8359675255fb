use miette::Diagnostic;
use thiserror::Error;

use crate::board::BoardError;
use crate::cli::config::ConfigError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Board(#[from] BoardError),

    #[error("Invalid input: {message}")]
    #[diagnostic(code(plankacli::cli::invalid_input))]
    InvalidInput { message: String },

    #[error("Failed to read from the terminal")]
    #[diagnostic(code(plankacli::cli::io))]
    Io(#[from] std::io::Error),

    #[error("Aborted")]
    #[diagnostic(code(plankacli::cli::aborted))]
    Aborted,

    #[error("{failed} item(s) failed")]
    #[diagnostic(
        code(plankacli::cli::partial_failure),
        help("See the report above and the log output for details.")
    )]
    PartialFailure { failed: usize },
}

pub type CliResult<T> = Result<T, CliError>;
