// Copyright 2026 Llrbmap Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for llrbmap
//!
//! Absent keys are never errors anywhere in this crate; they are reported
//! through `Option` returns, `false`, or exhausted iterators. The variants
//! here cover the two places a `Result` surfaces: structural validation
//! ([`crate::verify`]) and tree rendering ([`crate::render`]).

use thiserror::Error;

/// Result type alias for llrbmap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for llrbmap operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // =========================================================================
    // Structural validation errors
    // =========================================================================
    /// A traversal produced keys out of ascending order
    #[error("keys out of order in traversal")]
    OrderViolation,

    /// A red link leans right (red right child with a non-red left child)
    #[error("red link leaning right")]
    RightLeaningRed,

    /// Two consecutive red links on a left spine
    #[error("two consecutive red left links")]
    DoubleRedLeft,

    /// The root node is red
    #[error("root is red")]
    RedRoot,

    /// Root-to-leaf paths disagree on the number of black links
    #[error("black height mismatch: left {left}, right {right}")]
    BlackHeightMismatch { left: usize, right: usize },

    // =========================================================================
    // Rendering errors
    // =========================================================================
    /// I/O error while writing a rendering
    #[error("io error: {message}")]
    Io { message: String },
}

impl Error {
    /// Check if this is a structural-invariant violation
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            Error::OrderViolation
                | Error::RightLeaningRed
                | Error::DoubleRedLeft
                | Error::RedRoot
                | Error::BlackHeightMismatch { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::BlackHeightMismatch { left: 2, right: 3 }.to_string(),
            "black height mismatch: left 2, right 3"
        );
        assert_eq!(Error::RedRoot.to_string(), "root is red");
    }

    #[test]
    fn test_error_classification() {
        assert!(Error::OrderViolation.is_invariant_violation());
        assert!(Error::BlackHeightMismatch { left: 0, right: 1 }.is_invariant_violation());
        assert!(!Error::Io {
            message: "broken pipe".to_string()
        }
        .is_invariant_violation());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::WriteZero, "sink full");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("sink full"));
    }
}
