#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

#[cfg(test)]
#[macro_use]
mod dev;

#[cfg(feature = "ecdsa")]
pub mod ecdsa;

mod affine;
mod error;
mod jacobian;
mod jacobian_arithmetic;
mod point;
mod projective;
mod projective_arithmetic;

pub use crate::{
    affine::AffinePointExt,
    error::{Component, Error, Reason, Result},
    jacobian::JacobianPoint,
    point::CurvePoint,
    projective::ProjectivePoint,
};
pub use weierstrass;
