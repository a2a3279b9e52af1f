#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

pub mod equation_a;
pub mod named;

mod affine;
mod error;
mod field;
mod group;
mod signature;

pub use crate::{
    affine::AffinePoint,
    equation_a::EquationA,
    error::{Error, Result},
    field::{FieldElement, PrimeField},
    group::Group,
    signature::{Signature, normalize_digest},
};
pub use num_bigint::{self, BigInt, BigUint};
