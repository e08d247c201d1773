// src/error.rs
//! Error type for vector construction and arithmetic.

use crate::types::Scalar;

/// Errors reported by vector operations.
///
/// Every failure is synchronous and leaves the operands untouched; there are
/// no partial results.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VectorError {
    /// A component index or named accessor fell outside the current dimension.
    #[error("index {index} out of bounds for dimension {dimension}")]
    IndexOutOfBounds { index: usize, dimension: usize },

    /// A constructor or component write was given a NaN or infinite value.
    #[error("non-finite component {value} at index {index}")]
    NonFiniteComponent { index: usize, value: Scalar },

    /// A scale factor was NaN or infinite.
    #[error("non-finite scale factor {0}")]
    NonFiniteScalar(Scalar),

    /// `normalize` was called on a vector of magnitude zero.
    #[error("cannot normalize a zero-magnitude vector")]
    ZeroMagnitude,
}

pub type Result<T> = std::result::Result<T, VectorError>;
