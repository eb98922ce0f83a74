/*!
 * Error types for the textgroom application.
 *
 * This module contains custom error types for different parts of the
 * application, using the thiserror crate for ergonomic error definitions.
 * Typography and link rewriting are best-effort heuristics and never fail;
 * footnote consistency is the one hard error in the pipeline.
 */

use thiserror::Error;

use crate::footnotes::MismatchReport;

/// Errors raised by the footnote renumbering engine
#[derive(Error, Debug)]
pub enum FootnoteError {
    /// Reference and definition counts disagree; carries the full
    /// diagnostic so the caller can show a human where to look
    #[error("footnote references and definitions do not match\n{0}")]
    CountMismatch(MismatchReport),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from footnote processing
    #[error("Footnote error: {0}")]
    Footnote(#[from] FootnoteError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
