//! Error types for cmdtree

use thiserror::Error;

use crate::flag::ParseError;

/// Result type alias for runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Specialized result type for command-tree construction
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Runtime errors surfaced to the embedding program alongside an exit code
#[derive(Error, Debug)]
pub enum Error {
    /// Flag parsing failed at some node of the command path.
    #[error(transparent)]
    Flag(#[from] ParseError),

    /// `help` named something that is not a registered subcommand.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// `help` was given more than one command to describe.
    #[error("can only give help with one command")]
    TooManyHelpTopics,

    /// An error reported by a command handler.
    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}

/// Command-tree construction errors
///
/// These indicate a mistake in the embedding program rather than bad user
/// input; callers are expected to abort startup on any of them.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("command name is required")]
    EmptyName,

    #[error("command short description is required for {0:?}")]
    MissingShort(String),

    #[error("invalid command name: {0:?}")]
    InvalidName(String),

    #[error("command already registered: {0}")]
    DuplicateName(String),
}
