//! Variation parsing error types

use thiserror::Error;

/// Positions are zero-based indexes into the token stream.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VariationError {
    #[error("Annotation '{annotation}' at token {position} has no preceding move")]
    AnnotationWithoutMove { annotation: String, position: usize },

    #[error("Unexpected ')' at token {position} with no open variation")]
    UnexpectedClose { position: usize },

    #[error("Variation opened at token {position} is never closed")]
    UnbalancedVariation { position: usize },
}
