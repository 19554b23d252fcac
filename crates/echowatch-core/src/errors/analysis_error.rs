//! Analysis errors.

use super::error_code::{self, EchowatchErrorCode};

/// Errors that can occur during drift analysis.
///
/// Empty content, identical content, and a brand absent from both texts are
/// valid inputs with well-defined results, not errors.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Content length {actual} exceeds limit of {limit} bytes")]
    ResourceLimitExceeded { actual: usize, limit: usize },
}

impl EchowatchErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        error_code::ANALYSIS_ERROR
    }
}
