//! Error handling for cpp-builder.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving, rendering or writing a scaffold.
#[derive(Error, Debug)]
pub enum Error {
    /// No candidate directory was available to scaffold into.
    #[error("Working folder not found, open a folder and try again.")]
    NoWorkspaceError,

    /// The user dismissed the directory picker.
    #[error("Folder selection cancelled.")]
    SelectionCancelled,

    /// The user declined to override an existing protected file.
    #[error("Overwrite of '{path}' declined.")]
    WriteDeclined { path: PathBuf },

    /// The target path has no final segment to derive a project name from.
    #[error("Cannot derive a project name from '{path}'.")]
    InvalidProjectPath { path: PathBuf },

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur while rendering an embedded template
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors in the workspace file
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents failures of the interactive terminal
    #[error("Prompt error: {0}.")]
    PromptError(String),
}

/// Convenience type alias for results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
