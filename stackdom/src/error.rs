use thiserror::Error;

/// Errors raised while parsing style keywords or loading a theme.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown breakpoint '{0}'")]
    UnknownBreakpoint(String),

    #[error("Invalid {kind} value '{value}'")]
    InvalidKeyword { kind: &'static str, value: String },

    #[error("Invalid color '{0}'")]
    InvalidColor(String),

    #[error("Invalid theme config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
