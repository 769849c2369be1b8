use miette::Diagnostic;
use thiserror::Error;

/// Main error type for rorschach operations
#[derive(Error, Diagnostic, Debug)]
pub enum RorschachError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(rorschach::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(rorschach::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, RorschachError>;
