use ark_std::fmt;

use ark_std::string::String;
use core::fmt::Formatter;

/// Error type for this crate
///
/// A proof or an update that fails its pairing checks is not an error: the verifiers
/// return `false` for well-formed inputs that are cryptographically invalid.
#[derive(fmt::Debug)]
pub enum Error {
    /// The argument is malformed: mismatched lengths, a degree-0 setup, an empty polynomial,
    /// a zero contribution, ...
    InvalidInput(Option<String>),
    /// The polynomial does not fit into the reference string.
    DegreeExceeded {
        /// number of coefficients of the rejected polynomial
        num_coeffs: usize,
        /// maximum degree supported by the reference string
        max_degree: usize,
    },
    /// Serialization Error
    SerializationError,
}

/// Result type used by this crate
pub type KResult<T> = Result<T, Error>;

pub(crate) fn invalid_input(msg: &str) -> Error {
    Error::InvalidInput(Some(msg.into()))
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(Some(msg)) => write!(f, "invalid input: {}", msg),
            Self::DegreeExceeded {
                num_coeffs,
                max_degree,
            } => write!(
                f,
                "polynomial with {} coefficients does not fit a reference string of max degree {}",
                num_coeffs, max_degree
            ),
            _ => f.write_fmt(format_args!("{:?}", self)),
        }
    }
}

impl ark_std::error::Error for Error {}

impl From<ark_serialize::SerializationError> for Error {
    fn from(_: ark_serialize::SerializationError) -> Self {
        Self::SerializationError
    }
}
