//! Error types for element serialization

use thiserror::Error;

/// Errors that can occur while serializing an element
#[derive(Debug, Error)]
pub enum ElementError {
    /// Attribute name and value sequences of different lengths
    #[error("attribute length mismatch: {names} names paired with {values} values")]
    AttributeLengthMismatch { names: usize, values: usize },
}

impl ElementError {
    /// Create a length mismatch error from the two sequence lengths
    pub fn length_mismatch(names: usize, values: usize) -> Self {
        Self::AttributeLengthMismatch { names, values }
    }
}
