//! Error types for colorimetric operations.
//!
//! The engine is deterministic and pure, so the failure surface is small:
//! a matrix that cannot be inverted is fatal to whatever construction needed
//! it, and a registry miss is a recoverable absence that callers may choose
//! to escalate.
//!
//! # Usage
//!
//! ```rust
//! use chroma_core::{Error, Result};
//!
//! fn checked_det(det: f32) -> Result<f32> {
//!     if det.abs() < 1e-10 {
//!         return Err(Error::SingularMatrix { det });
//!     }
//!     Ok(det)
//! }
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - derive macro for error implementations

use thiserror::Error as ThisError;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while deriving or applying color transforms.
///
/// No variant is retryable: every operation is a deterministic function of
/// fixed inputs, so a failure will recur on identical inputs.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// A 3x3 matrix could not be inverted (|determinant| < 1e-10).
    ///
    /// Raised when a color space's primaries are degenerate (e.g. collinear
    /// chromaticities) or a supplied RGB-to-XYZ matrix is singular. Fatal to
    /// the construction or conversion that triggered it.
    #[error("matrix is singular (determinant {det:e}), cannot invert")]
    SingularMatrix {
        /// Determinant of the offending matrix
        det: f32,
    },

    /// A registry lookup by name found no color space.
    ///
    /// Only produced by escalating lookups (`Registry::require`); plain
    /// lookups report absence as `None` instead.
    #[error("unknown color space: {name:?}")]
    UnknownColorSpace {
        /// The name that was looked up
        name: String,
    },
}

impl Error {
    /// Creates an [`Error::SingularMatrix`] error.
    #[inline]
    pub fn singular(det: f32) -> Self {
        Self::SingularMatrix { det }
    }

    /// Creates an [`Error::UnknownColorSpace`] error.
    #[inline]
    pub fn unknown_color_space(name: impl Into<String>) -> Self {
        Self::UnknownColorSpace { name: name.into() }
    }

    /// Returns `true` if this is a singular-matrix error.
    #[inline]
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::SingularMatrix { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular_display() {
        let err = Error::singular(3.2e-12);
        assert!(err.to_string().contains("singular"));
        assert!(err.is_singular());
    }

    #[test]
    fn test_unknown_space_display() {
        let err = Error::unknown_color_space("rec_2100_pq");
        assert!(err.to_string().contains("rec_2100_pq"));
        assert!(!err.is_singular());
    }
}
