use thiserror::Error;

use crate::llm_client::LlmError;
use crate::parser::ParseError;

/// Application-level error type. Subsystem errors convert in via `#[from]`
/// and propagate unchanged to the command boundary, where they are printed.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
