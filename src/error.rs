use std::error::Error;
use std::fmt;

/// Errors surfaced by the set operations.
///
/// Every error is reported synchronously by the operation that triggered it
/// and none is recovered internally. A mutation that fails leaves the set
/// unchanged, as errors can only arise while searching, before any link is
/// rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationError {
    /// `first` or `last` was called on an empty set.
    EmptyError,
    /// The operation is not part of the supported surface and never succeeds.
    NotSupportedError(&'static str),
    /// A comparison between two elements which cannot be ordered relative to
    /// each other was attempted (`partial_cmp` returned `None`).
    InvalidElementError,
}

impl fmt::Display for OperationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            OperationError::EmptyError => write!(f, "empty collection"),
            OperationError::NotSupportedError(op) => write!(f, "{} is not supported", op),
            OperationError::InvalidElementError => write!(f, "element cannot be ordered"),
        }
    }
}

impl Error for OperationError {}
