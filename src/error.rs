//! Defines the error type of this crate.
use polars::prelude::PolarsError;

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io;


/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, MiniSplitsError>;


/// Errors raised by the discretizers and the decision tree.
///
/// Degenerate data (empty samples, single-valued attributes, ...)
/// never produces an error.
#[derive(Debug)]
pub enum MiniSplitsError {
    /// A parameter is out of its valid range.
    InvalidParameter {
        /// Name of the parameter.
        name: &'static str,
        /// Why the value is rejected.
        reason: String,
    },
    /// No attribute of the given name exists.
    UnknownAttribute(String),
    /// The attribute cannot be used as a decision attribute.
    NotNominal(String),
    /// The sample has no decision attribute.
    MissingTarget,
    /// A record does not match the width of the header.
    HeaderMismatch {
        /// Number of attributes in the header.
        expected: usize,
        /// Number of values in the record.
        found: usize,
    },
    /// The progress sink asked to stop.
    Interrupted,
    /// I/O failure while reading a file.
    Io(io::Error),
    /// Failure reported by `polars`.
    Polars(PolarsError),
    /// Failure reported by `serde_json`.
    Json(serde_json::Error),
}


impl MiniSplitsError {
    /// Construct an `InvalidParameter` error.
    pub(crate) fn invalid<S: ToString>(name: &'static str, reason: S) -> Self {
        Self::InvalidParameter { name, reason: reason.to_string(), }
    }
}


impl From<io::Error> for MiniSplitsError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}


impl From<PolarsError> for MiniSplitsError {
    fn from(err: PolarsError) -> Self {
        Self::Polars(err)
    }
}


impl From<serde_json::Error> for MiniSplitsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}


impl Display for MiniSplitsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { name, reason }
                => write!(f, "Invalid parameter `{name}`: {reason}"),
            Self::UnknownAttribute(name)
                => write!(f, "The attribute named `{name}` does not exist"),
            Self::NotNominal(name)
                => write!(f, "The attribute `{name}` is not nominal"),
            Self::MissingTarget
                => write!(
                    f,
                    "The target class is not specified. \
                     Use `Sample::set_target(\"Column Name\")`."
                ),
            Self::HeaderMismatch { expected, found }
                => write!(
                    f,
                    "Expected a record of {expected} values, got {found}"
                ),
            Self::Interrupted => write!(f, "Interrupted"),
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Polars(e) => write!(f, "Polars error: {e}"),
            Self::Json(e) => write!(f, "SerdeJson error: {e}"),
        }
    }
}


impl Error for MiniSplitsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Polars(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}
