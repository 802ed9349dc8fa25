use thiserror::Error;

/// Shorthand for results carrying a [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Everything that can go wrong when constructing or combining the
/// geometric types of this crate.
///
/// All errors are raised synchronously at the point of violation; there is
/// no retry or recovery layer. Degenerate geometric configurations that are
/// mathematically meaningful (parallel lines, say) are modelled as `None`
/// returns instead, not as errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("{op}: mismatched sizes {lhs} and {rhs}")]
    SizeMismatch {
        op: &'static str,
        lhs: usize,
        rhs: usize,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),

    #[error("index {index} is out of bounds for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
