//! Error types for matriz operations.
//!
//! Every fallible operation reports its own error through the [`Result`]
//! alias; there is no shared error state of any kind.

use std::fmt;

/// Main error type for matriz operations.
///
/// Errors are categorical: callers distinguish cases by matching variants,
/// never by parsing messages. The `Display` output is the human-readable
/// rendering for a consuming CLI or log line.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::DimensionMismatch {
///     expected: "2x3".to_string(),
///     actual: "3x2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum MatrizError {
    /// An argument violated its documented constraint (zero dimension,
    /// out-of-range index, unknown dimension selector).
    InvalidArgument {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Backing storage for a matrix could not be allocated.
    OutOfMemory {
        /// Number of elements requested
        requested: usize,
    },

    /// A file could not be opened for reading or writing.
    OpenFailed {
        /// Path that failed to open
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A file could not be released cleanly after a completed write.
    CloseFailed {
        /// Path that failed to close
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Matrix shapes are incompatible for the requested operation, or a
    /// file does not hold a well-formed delimited matrix.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Generic error with string message (malformed values mid-parse,
    /// write failures).
    Other(String),
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::InvalidArgument {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid argument: {param} = {value}, expected {constraint}"
                )
            }
            MatrizError::OutOfMemory { requested } => {
                write!(f, "Out of memory: failed to allocate {requested} elements")
            }
            MatrizError::OpenFailed { path, source } => {
                write!(f, "Failed to open {path}: {source}")
            }
            MatrizError::CloseFailed { path, source } => {
                write!(f, "Failed to close {path}: {source}")
            }
            MatrizError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            MatrizError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for MatrizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatrizError::OpenFailed { source, .. } | MatrizError::CloseFailed { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}

impl From<&str> for MatrizError {
    fn from(msg: &str) -> Self {
        MatrizError::Other(msg.to_string())
    }
}

impl From<String> for MatrizError {
    fn from(msg: String) -> Self {
        MatrizError::Other(msg)
    }
}

impl MatrizError {
    /// Create a dimension mismatch error from two shape descriptions
    #[must_use]
    pub fn dimension_mismatch(expected: &str, actual: &str) -> Self {
        Self::DimensionMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create an out-of-range index error (indices are 1-based)
    #[must_use]
    pub fn index_out_of_bounds(param: &str, index: usize, upper: usize) -> Self {
        Self::InvalidArgument {
            param: param.to_string(),
            value: index.to_string(),
            constraint: format!("1..={upper}"),
        }
    }

    /// Create a zero-dimension error
    #[must_use]
    pub fn zero_dimension(param: &str) -> Self {
        Self::InvalidArgument {
            param: param.to_string(),
            value: "0".to_string(),
            constraint: "at least 1".to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrizError>;
