//! Coordinate-system-generic point kernel.
//!
//! [`CurvePoint`] is the contract shared by [`ProjectivePoint`] and
//! [`JacobianPoint`]. Construction, negation, group validation and scalar
//! multiplication are written once here against a sealed kernel trait which
//! each coordinate system implements with its own formulas.
//!
//! [`ProjectivePoint`]: crate::ProjectivePoint
//! [`JacobianPoint`]: crate::JacobianPoint

use crate::{Error, Result};
use core::fmt;
use num_bigint::{BigInt, BigUint};
use weierstrass::{AffinePoint, Group};

pub(crate) mod sealed {
    use weierstrass::{FieldElement, Group};

    /// Coordinate-system specific point representation and arithmetic.
    pub trait PointKernel<'g>: Sized {
        /// Assemble a point from already reduced coordinates. `z = 0` yields
        /// the canonical identity.
        fn from_elements(
            group: &'g Group,
            x: FieldElement<'g>,
            y: FieldElement<'g>,
            z: FieldElement<'g>,
        ) -> Self;

        /// Coordinates as field elements.
        fn elements(&self) -> (&FieldElement<'g>, &FieldElement<'g>, &FieldElement<'g>);

        /// Does `(x, y, z)` with `z != 0` satisfy the curve equation?
        fn satisfies_equation(
            group: &Group,
            x: &FieldElement<'_>,
            y: &FieldElement<'_>,
            z: &FieldElement<'_>,
        ) -> bool;

        /// Returns `self + other` for points of the same group.
        fn add_same_group(&self, other: &Self) -> Self;
    }
}

use sealed::PointKernel;

/// Point on a short Weierstrass curve in a non-affine coordinate system.
///
/// The point at infinity is represented canonically as `(0, 1, 0)`: a point
/// is the identity if and only if its `z` coordinate is zero.
///
/// # ⚠️ Warning: Hazmat!
///
/// Arithmetic is variable time. Scalar multiplication branches on the digits
/// of the scalar.
pub trait CurvePoint<'g>: PointKernel<'g> + Clone + PartialEq + fmt::Debug {
    /// Group this point belongs to.
    fn group(&self) -> &'g Group;

    /// Additive identity of the group a.k.a. the point at infinity.
    fn identity(group: &'g Group) -> Self {
        let field = group.field();
        Self::from_elements(group, field.zero(), field.one(), field.zero())
    }

    /// Create a point from its coordinates.
    ///
    /// Coordinates must be field elements. A zero `z` yields the identity;
    /// otherwise the coordinates must satisfy the curve equation.
    fn from_coordinates(group: &'g Group, x: &BigUint, y: &BigUint, z: &BigUint) -> Result<Self> {
        let field = group.field();
        let x = field.try_element(x)?;
        let y = field.try_element(y)?;
        let z = field.try_element(z)?;

        if z.is_zero() {
            return Ok(Self::identity(group));
        }

        if !Self::satisfies_equation(group, &x, &y, &z) {
            return Err(weierstrass::Error::NotOnCurve.into());
        }

        Ok(Self::from_elements(group, x, y, z))
    }

    /// Lift an affine point into this coordinate system.
    fn from_affine(point: &AffinePoint<'g>) -> Self {
        let group = point.group();
        if point.is_identity() {
            return Self::identity(group);
        }

        let field = group.field();
        Self::from_elements(
            group,
            field.element(point.x().clone()),
            field.element(point.y().clone()),
            field.one(),
        )
    }

    /// Project back to affine coordinates. Costs one field inversion.
    fn to_affine(&self) -> AffinePoint<'g>;

    /// Coordinates `(x, y, z)`.
    fn coordinates<'a>(&'a self) -> (&'a BigUint, &'a BigUint, &'a BigUint)
    where
        'g: 'a,
    {
        let (x, y, z) = self.elements();
        (x.value(), y.value(), z.value())
    }

    /// Is this point the point at infinity?
    fn is_identity(&self) -> bool {
        self.elements().2.is_zero()
    }

    /// Returns `-self`.
    fn neg(&self) -> Self {
        if self.is_identity() {
            return self.clone();
        }

        let (x, y, z) = self.elements();
        Self::from_elements(self.group(), x.clone(), -y, z.clone())
    }

    /// Returns `self + other`.
    ///
    /// Fails with [`Error::GroupMismatch`] when the points belong to
    /// different groups.
    fn add(&self, other: &Self) -> Result<Self> {
        if !self.group().same_group(other.group()) {
            return Err(Error::GroupMismatch);
        }

        Ok(self.add_same_group(other))
    }

    /// Returns `self + self`.
    fn double(&self) -> Self;

    /// Returns `self * k` for any non-negative `k`, which need not be reduced
    /// modulo the group order.
    ///
    /// Uses signed non-adjacent form double-and-add.
    fn mul(&self, k: &BigUint) -> Self {
        mul_naf(self, k)
    }

    /// Returns `self * k`, failing with [`Error::NegativeScalar`] when `k` is
    /// negative.
    fn mul_signed(&self, k: &BigInt) -> Result<Self> {
        match k.to_biguint() {
            Some(k) => Ok(self.mul(&k)),
            None => Err(Error::NegativeScalar),
        }
    }
}

/// Non-adjacent form masks of `k`: `(positive, negative)` with
/// `k = positive - negative` and no two adjacent non-zero digits.
pub(crate) fn naf_masks(k: &BigUint) -> (BigUint, BigUint) {
    let xh = k >> 1u32;
    let x3 = k + &xh;
    let c = &xh ^ &x3;

    (&x3 & &c, &xh & &c)
}

/// NAF double-and-add, scanning digits from the least significant end.
fn mul_naf<'g, P: CurvePoint<'g>>(point: &P, k: &BigUint) -> P {
    let (positive, negative) = naf_masks(k);
    let len = positive.bits();

    let mut acc = P::identity(point.group());
    let mut v = point.clone();

    for i in 0..len {
        if positive.bit(i) {
            acc = acc.add_same_group(&v);
        } else if negative.bit(i) {
            acc = acc.add_same_group(&v.neg());
        }

        if i + 1 < len {
            v = v.double();
        }
    }

    acc
}

/// Binary double-and-add, used to cross-check the NAF implementation.
#[cfg(test)]
pub(crate) fn mul_binary<'g, P: CurvePoint<'g>>(point: &P, k: &BigUint) -> P {
    let mut acc = P::identity(point.group());
    let mut v = point.clone();

    for i in 0..k.bits() {
        if k.bit(i) {
            acc = acc.add_same_group(&v);
        }
        v = v.double();
    }

    acc
}

#[cfg(test)]
mod tests {
    use super::naf_masks;
    use num_bigint::BigUint;
    use proptest::prelude::*;

    #[test]
    fn naf_of_small_values() {
        // 7 = 8 - 1
        let (p, n) = naf_masks(&BigUint::from(7u8));
        assert_eq!(p, BigUint::from(8u8));
        assert_eq!(n, BigUint::from(1u8));

        let (p, n) = naf_masks(&BigUint::from(0u8));
        assert_eq!(p, BigUint::from(0u8));
        assert_eq!(n, BigUint::from(0u8));
    }

    proptest! {
        #[test]
        fn naf_reconstructs_scalar(bytes in proptest::collection::vec(any::<u8>(), 0..48)) {
            let k = BigUint::from_bytes_be(&bytes);
            let (p, n) = naf_masks(&k);

            prop_assert_eq!(&p - &n, k);
            prop_assert_eq!(&p & &n, BigUint::from(0u8));

            // no two adjacent non-zero digits
            let digits = &p | &n;
            prop_assert_eq!(&digits & (&digits >> 1u32), BigUint::from(0u8));
        }
    }
}
