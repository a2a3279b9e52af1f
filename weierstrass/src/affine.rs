//! Affine curve points.

use crate::{Error, Group, Result};
use core::fmt;
use num_bigint::BigUint;
use num_traits::Zero;

/// Point on a Weierstrass curve in affine coordinates.
///
/// Arithmetic on affine points performs one field inversion per addition or
/// doubling. It is kept as a straightforward reference for the coordinate
/// systems which avoid those inversions.
#[derive(Clone)]
pub struct AffinePoint<'g> {
    group: &'g Group,
    x: BigUint,
    y: BigUint,
    infinity: bool,
}

impl<'g> AffinePoint<'g> {
    /// Create a point from its coordinates, checking that they are field
    /// elements satisfying the curve equation.
    pub fn new(group: &'g Group, x: BigUint, y: BigUint) -> Result<Self> {
        let field = group.field();
        if !field.contains(&x) || !field.contains(&y) {
            return Err(Error::CoordinateOutOfRange);
        }

        if !group.is_on_curve(&x, &y) {
            return Err(Error::NotOnCurve);
        }

        Ok(Self::new_unchecked(group, x, y))
    }

    /// Create a point without validating its coordinates.
    ///
    /// The caller must ensure `(x, y)` is a reduced solution of the curve
    /// equation; arithmetic on any other input yields meaningless results.
    pub fn new_unchecked(group: &'g Group, x: BigUint, y: BigUint) -> Self {
        Self {
            group,
            x,
            y,
            infinity: false,
        }
    }

    /// Additive identity of the group a.k.a. the point at infinity.
    pub fn identity(group: &'g Group) -> Self {
        Self {
            group,
            x: BigUint::zero(),
            y: BigUint::zero(),
            infinity: true,
        }
    }

    /// Group this point belongs to.
    pub fn group(&self) -> &'g Group {
        self.group
    }

    /// x-coordinate. Zero for the point at infinity.
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// y-coordinate. Zero for the point at infinity.
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        self.infinity
    }

    /// Returns `-self`.
    pub fn neg(&self) -> Self {
        if self.infinity {
            return self.clone();
        }

        let y = -self.group.field().element(self.y.clone());
        Self::new_unchecked(self.group, self.x.clone(), y.into_value())
    }

    /// Returns `self + other`.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if !self.group.same_group(other.group) {
            return Err(Error::GroupMismatch);
        }

        if self.infinity {
            return Ok(other.clone());
        }
        if other.infinity {
            return Ok(self.clone());
        }

        if self.x == other.x {
            return Ok(if self.y == other.y {
                self.double()
            } else {
                Self::identity(self.group)
            });
        }

        let field = self.group.field();
        let (x1, y1) = (field.element(self.x.clone()), field.element(self.y.clone()));
        let (x2, y2) = (field.element(other.x.clone()), field.element(other.y.clone()));

        let Some(dx_inv) = (&x2 - &x1).invert() else {
            unreachable!("distinct x-coordinates have a nonzero difference");
        };
        let lambda = (&y2 - &y1) * dx_inv;
        let x3 = lambda.square() - &x1 - &x2;
        let y3 = lambda * (&x1 - &x3) - &y1;

        Ok(Self::new_unchecked(self.group, x3.into_value(), y3.into_value()))
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Self {
        if self.infinity || self.y.is_zero() {
            return Self::identity(self.group);
        }

        let field = self.group.field();
        let x = field.element(self.x.clone());
        let y = field.element(self.y.clone());
        let a = field.element(self.group.param_a().clone());

        let Some(y2_inv) = y.double().invert() else {
            unreachable!("nonzero y has a nonzero double in an odd characteristic field");
        };
        let lambda = (field.from_u64(3) * x.square() + a) * y2_inv;
        let x3 = lambda.square() - x.double();
        let y3 = lambda * (&x - &x3) - &y;

        Self::new_unchecked(self.group, x3.into_value(), y3.into_value())
    }

    /// Returns `self * k` using binary double-and-add.
    pub fn mul(&self, k: &BigUint) -> Self {
        let mut acc = Self::identity(self.group);
        let mut base = self.clone();

        for i in 0..k.bits() {
            if k.bit(i) {
                acc = acc.add_same_group(&base);
            }
            base = base.double();
        }

        acc
    }

    fn add_same_group(&self, other: &Self) -> Self {
        match self.add(other) {
            Ok(point) => point,
            Err(_) => unreachable!("operands share a group"),
        }
    }

    /// Serialize this point as a SEC1 octet string.
    ///
    /// The point at infinity is encoded as a single zero byte.
    pub fn to_sec1_bytes(&self, compress: bool) -> Vec<u8> {
        if self.infinity {
            return vec![0];
        }

        let len = self.group.byte_length();
        let mut out = Vec::with_capacity(1 + 2 * len);

        if compress {
            out.push(if self.y.bit(0) { 0x03 } else { 0x02 });
            push_padded(&mut out, &self.x, len);
        } else {
            out.push(0x04);
            push_padded(&mut out, &self.x, len);
            push_padded(&mut out, &self.y, len);
        }

        out
    }

    /// Serialize this point as a lowercase hex SEC1 octet string.
    pub fn to_hex(&self, compress: bool) -> String {
        hex::encode(self.to_sec1_bytes(compress))
    }
}

fn push_padded(out: &mut Vec<u8>, value: &BigUint, len: usize) {
    let bytes = value.to_bytes_be();
    out.resize(out.len() + len - bytes.len(), 0);
    out.extend_from_slice(&bytes);
}

impl PartialEq for AffinePoint<'_> {
    fn eq(&self, other: &Self) -> bool {
        if !self.group.same_group(other.group) {
            return false;
        }

        match (self.infinity, other.infinity) {
            (true, true) => true,
            (false, false) => self.x == other.x && self.y == other.y,
            _ => false,
        }
    }
}

impl Eq for AffinePoint<'_> {}

impl fmt::Debug for AffinePoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.infinity {
            return write!(f, "AffinePoint({}, infinity)", self.group.name());
        }

        f.debug_struct("AffinePoint")
            .field("group", &self.group.name())
            .field("x", &format_args!("0x{:x}", self.x))
            .field("y", &format_args!("0x{:x}", self.y))
            .finish()
    }
}
