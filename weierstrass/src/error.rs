//! Error types.

use core::fmt;

/// Errors raised while building fields, curve groups and points.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The modulus is not an odd integer greater than 3.
    InvalidModulus,

    /// Curve parameters are malformed: a coefficient is not reduced, a hex
    /// string failed to parse, or the curve is singular.
    InvalidParameters,

    /// A coordinate is not an element of the base field.
    CoordinateOutOfRange,

    /// The coordinates do not satisfy the curve equation.
    NotOnCurve,

    /// Points from different groups were combined.
    GroupMismatch,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidModulus => f.write_str("modulus must be an odd integer greater than 3"),
            Error::InvalidParameters => f.write_str("invalid curve parameters"),
            Error::CoordinateOutOfRange => f.write_str("coordinate is not a field element"),
            Error::NotOnCurve => f.write_str("point is not on the curve"),
            Error::GroupMismatch => f.write_str("points belong to different groups"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
