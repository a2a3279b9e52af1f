//! Elliptic Curve Digital Signature Algorithm (ECDSA) over any [`Group`].
//!
//! Signing and verification run on [`JacobianPoint`](crate::JacobianPoint)
//! arithmetic, with one field inversion at the end of each scalar
//! multiplication.
//!
//! ## Algorithm
//!
//! ```text
//! Sign(d, e, k):
//!   1: check d, k in [1, n-1]
//!   2: (x1, y1) = k·G
//!   3: r = x1 mod n, no signature if r = 0
//!   4: s = k⁻¹(e + r·d) mod n, no signature if s = 0
//!
//! Verify(Q, e, (r, s)):
//!   1: check r, s in [1, n-1] and Q is a point on the curve
//!   2: u1 = e·s⁻¹ mod n, u2 = r·s⁻¹ mod n
//!   3: R = u1·G + u2·Q, verification failed if R is the identity
//!   4: verification passes if R.x mod n = r
//! ```
//!
//! `e` is the message digest interpreted with [`normalize_digest`].
//!
//! # ⚠️ Warning: Hazmat!
//!
//! The ephemeral scalar `k` is supplied by the caller and must be unique and
//! unpredictable for every signature; reusing it reveals the private key.
//! Arithmetic is variable time.

use crate::{AffinePointExt, Component, CurvePoint, Error, Reason, Result};
use num_bigint::BigUint;
use num_traits::Zero;
use tracing::{debug, trace};
use weierstrass::{AffinePoint, FieldElement, Group, PrimeField, Signature, normalize_digest};

/// Compute the public key `d·G` for `private_key`.
pub fn public_key<'g>(group: &'g Group, private_key: &BigUint) -> Result<AffinePoint<'g>> {
    check_scalar(group, private_key)?;
    Ok(group.generator().to_jacobian().mul(private_key).to_affine())
}

/// Sign the prehashed message `digest` with `private_key`, using
/// `ephemeral_scalar` as the nonce.
///
/// Returns `Ok(None)` when the nonce yields `r = 0` or `s = 0`; the caller
/// should retry with a fresh nonce.
pub fn sign(
    group: &Group,
    private_key: &BigUint,
    digest: &[u8],
    ephemeral_scalar: &BigUint,
) -> Result<Option<Signature>> {
    check_scalar(group, private_key)?;
    check_scalar(group, ephemeral_scalar)?;

    let scalars = group.scalar_field();
    let big_r = group.generator().to_jacobian().mul(ephemeral_scalar).to_affine();

    let r = scalars.element(big_r.x().clone());
    if r.is_zero() {
        trace!(curve = group.name(), "nonce produced r = 0");
        return Ok(None);
    }

    let e = digest_scalar(group, digest);
    let d = scalars.element(private_key.clone());
    let k_inv = invert(scalars.element(ephemeral_scalar.clone()));

    let s = k_inv * (e + &r * d);
    if s.is_zero() {
        trace!(curve = group.name(), "nonce produced s = 0");
        return Ok(None);
    }

    Ok(Some(Signature::new(r.into_value(), s.into_value())))
}

/// Check `signature` over the prehashed message `digest` against
/// `public_key`.
///
/// Malformed input is reported with the corresponding error;
/// a well-formed signature which does not verify is reported as
/// [`Error::VerificationFailed`].
pub fn check_signature(
    public_key: &AffinePoint<'_>,
    digest: &[u8],
    signature: &Signature,
) -> Result<()> {
    let result = check(public_key, digest, signature);
    if let Err(err) = &result {
        debug!(curve = public_key.group().name(), %err, "signature rejected");
    }
    result
}

/// Verify `signature` over the prehashed message `digest` against
/// `public_key`.
///
/// Returns `Ok(false)` for a well-formed signature which does not verify,
/// and an error for malformed input.
pub fn verify(public_key: &AffinePoint<'_>, digest: &[u8], signature: &Signature) -> Result<bool> {
    match check_signature(public_key, digest, signature) {
        Ok(()) => Ok(true),
        Err(Error::VerificationFailed(_)) => Ok(false),
        Err(err) => Err(err),
    }
}

fn check(public_key: &AffinePoint<'_>, digest: &[u8], signature: &Signature) -> Result<()> {
    let group = public_key.group();
    let scalars = group.scalar_field();

    if !in_range(scalars, signature.r()) {
        return Err(Error::SignatureOutOfRange(Component::R));
    }
    if !in_range(scalars, signature.s()) {
        return Err(Error::SignatureOutOfRange(Component::S));
    }
    if !is_valid_public_key(public_key) {
        return Err(Error::InvalidPublicKey);
    }

    let e = digest_scalar(group, digest);
    let r = scalars.element(signature.r().clone());
    let s_inv = invert(scalars.element(signature.s().clone()));

    let u1 = (e * &s_inv).into_value();
    let u2 = (&r * s_inv).into_value();

    let g = group.generator().to_jacobian();
    let q = public_key.to_jacobian();
    let big_r = g.mul(&u1).add(&q.mul(&u2))?;

    if big_r.is_identity() {
        return Err(Error::VerificationFailed(Reason::PointAtInfinity));
    }

    if scalars.element(big_r.to_affine().x().clone()) != r {
        return Err(Error::VerificationFailed(Reason::Mismatch));
    }

    Ok(())
}

/// Is `point` a finite point with field element coordinates on the curve?
fn is_valid_public_key(point: &AffinePoint<'_>) -> bool {
    let group = point.group();
    let (x, y) = (point.x(), point.y());

    !point.is_identity()
        && group.field().contains(x)
        && group.field().contains(y)
        && group.is_on_curve(x, y)
}

/// Is `value` in `[1, n - 1]`?
fn in_range(scalars: &PrimeField, value: &BigUint) -> bool {
    !value.is_zero() && scalars.contains(value)
}

fn check_scalar(group: &Group, scalar: &BigUint) -> Result<()> {
    if in_range(group.scalar_field(), scalar) {
        Ok(())
    } else {
        Err(Error::ScalarOutOfRange)
    }
}

fn digest_scalar<'g>(group: &'g Group, digest: &[u8]) -> FieldElement<'g> {
    group
        .scalar_field()
        .element(normalize_digest(digest, group.bit_length()))
}

fn invert(scalar: FieldElement<'_>) -> FieldElement<'_> {
    let Some(inverse) = scalar.invert() else {
        unreachable!("scalar checked to be in [1, n - 1]");
    };
    inverse
}
