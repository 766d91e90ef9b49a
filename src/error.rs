//! Error types for the mask accumulation core.

use thiserror::Error;

/// Errors that can occur while recording or undoing strokes.
///
/// Both variants are immediate and local: a failing operation leaves the
/// accumulator untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// An incoming stroke's shape does not match the bound image shape.
    #[error("stroke shape {found:?} does not match image shape {expected:?}")]
    ShapeMismatch {
        /// The image shape the accumulator was bound to (rows, cols)
        expected: (usize, usize),
        /// The shape of the rejected stroke (rows, cols)
        found: (usize, usize),
    },

    /// Undo was requested with no recorded strokes.
    #[error("nothing to undo: stroke history is empty")]
    EmptyHistory,
}
