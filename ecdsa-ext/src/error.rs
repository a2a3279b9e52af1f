//! Error types.

use core::fmt;

/// Signature component which failed a range check.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Component {
    /// The `r` component.
    R,
    /// The `s` component.
    S,
}

/// Why a well-formed signature was rejected.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Reason {
    /// `u1·G + u2·Q` is the point at infinity.
    PointAtInfinity,
    /// The x-coordinate of `u1·G + u2·Q` does not match `r`.
    Mismatch,
}

/// Point arithmetic and ECDSA errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Scalar multiplication by a negative integer.
    NegativeScalar,

    /// Points from different groups were combined.
    GroupMismatch,

    /// Private key or ephemeral scalar is outside `[1, n - 1]`.
    ScalarOutOfRange,

    /// A signature component is outside `[1, n - 1]`.
    SignatureOutOfRange(Component),

    /// Public key is the point at infinity or not on the curve.
    InvalidPublicKey,

    /// A well-formed signature does not verify.
    VerificationFailed(Reason),

    /// Invalid curve data, e.g. coordinates which are not field elements or
    /// do not satisfy the curve equation.
    Curve(weierstrass::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NegativeScalar => f.write_str("scalar is negative"),
            Error::GroupMismatch => f.write_str("points belong to different groups"),
            Error::ScalarOutOfRange => f.write_str("scalar is not in [1, n - 1]"),
            Error::SignatureOutOfRange(Component::R) => f.write_str("signature r is not in [1, n - 1]"),
            Error::SignatureOutOfRange(Component::S) => f.write_str("signature s is not in [1, n - 1]"),
            Error::InvalidPublicKey => f.write_str("invalid public key"),
            Error::VerificationFailed(Reason::PointAtInfinity) => {
                f.write_str("signature verification failed: point at infinity")
            }
            Error::VerificationFailed(Reason::Mismatch) => {
                f.write_str("signature verification failed: r mismatch")
            }
            Error::Curve(err) => write!(f, "curve error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Curve(err) => Some(err),
            _ => None,
        }
    }
}

impl From<weierstrass::Error> for Error {
    fn from(err: weierstrass::Error) -> Self {
        match err {
            weierstrass::Error::GroupMismatch => Error::GroupMismatch,
            other => Error::Curve(other),
        }
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
