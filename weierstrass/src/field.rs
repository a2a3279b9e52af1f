//! Prime field arithmetic over arbitrary-precision integers.

use crate::{Error, Result};
use core::{
    fmt, ptr,
    ops::{Add, Mul, Neg, Sub},
};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Prime field `GF(p)` described by its modulus at runtime.
///
/// Primality of the modulus is the caller's responsibility: it is not tested,
/// and [`FieldElement::invert`] only produces correct results when `p` is
/// prime.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrimeField {
    modulus: BigUint,
    /// `p - 2`, the exponent used for inversion by Fermat's little theorem.
    inversion_exponent: BigUint,
}

impl PrimeField {
    /// Create a new field from its modulus.
    pub fn new(modulus: BigUint) -> Result<Self> {
        if modulus <= BigUint::from(3u8) || !modulus.bit(0) {
            return Err(Error::InvalidModulus);
        }

        let inversion_exponent = &modulus - BigUint::from(2u8);
        Ok(Self {
            modulus,
            inversion_exponent,
        })
    }

    /// The field modulus `p`.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Bit length of the modulus.
    pub fn bits(&self) -> u64 {
        self.modulus.bits()
    }

    /// Number of bytes needed to encode a field element.
    pub fn byte_len(&self) -> usize {
        self.bits().div_ceil(8) as usize
    }

    /// Is `value` in the range `[0, p)`?
    pub fn contains(&self, value: &BigUint) -> bool {
        *value < self.modulus
    }

    /// Reduce `value` modulo `p`.
    pub fn reduce(&self, value: &BigUint) -> BigUint {
        value % &self.modulus
    }

    /// Field element for `value mod p`.
    pub fn element(&self, value: BigUint) -> FieldElement<'_> {
        let value = if self.contains(&value) {
            value
        } else {
            value % &self.modulus
        };

        FieldElement { field: self, value }
    }

    /// Field element for `value`, which must already be in `[0, p)`.
    pub fn try_element(&self, value: &BigUint) -> Result<FieldElement<'_>> {
        if self.contains(value) {
            Ok(FieldElement {
                field: self,
                value: value.clone(),
            })
        } else {
            Err(Error::CoordinateOutOfRange)
        }
    }

    /// Field element for a small integer.
    pub fn from_u64(&self, value: u64) -> FieldElement<'_> {
        self.element(BigUint::from(value))
    }

    /// Additive identity.
    pub fn zero(&self) -> FieldElement<'_> {
        FieldElement {
            field: self,
            value: BigUint::zero(),
        }
    }

    /// Multiplicative identity.
    pub fn one(&self) -> FieldElement<'_> {
        FieldElement {
            field: self,
            value: BigUint::one(),
        }
    }

    fn is_same(&self, other: &Self) -> bool {
        ptr::eq(self, other) || self == other
    }
}

/// Element of a [`PrimeField`], always kept reduced into `[0, p)`.
///
/// Arithmetic between elements of different fields is a logic error and is
/// caught by debug assertions.
#[derive(Clone)]
pub struct FieldElement<'f> {
    field: &'f PrimeField,
    value: BigUint,
}

impl<'f> FieldElement<'f> {
    /// Field this element belongs to.
    pub fn field(&self) -> &'f PrimeField {
        self.field
    }

    /// Canonical integer representative in `[0, p)`.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Consume the element, returning its canonical representative.
    pub fn into_value(self) -> BigUint {
        self.value
    }

    /// Is this element zero?
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Is this element one?
    pub fn is_one(&self) -> bool {
        self.value.is_one()
    }

    /// Returns `2 * self`.
    pub fn double(&self) -> Self {
        self.add_mod(self)
    }

    /// Returns `self * self`.
    pub fn square(&self) -> Self {
        self.mul_mod(self)
    }

    /// Returns `self^exp`.
    pub fn pow(&self, exp: &BigUint) -> Self {
        self.with_value(self.value.modpow(exp, &self.field.modulus))
    }

    /// Multiplicative inverse, or `None` for zero.
    pub fn invert(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }

        Some(self.pow(&self.field.inversion_exponent))
    }

    fn with_value(&self, value: BigUint) -> Self {
        Self {
            field: self.field,
            value,
        }
    }

    fn add_mod(&self, rhs: &Self) -> Self {
        debug_assert!(self.field.is_same(rhs.field), "field mismatch");
        let mut value = &self.value + &rhs.value;
        if value >= self.field.modulus {
            value -= &self.field.modulus;
        }
        self.with_value(value)
    }

    fn sub_mod(&self, rhs: &Self) -> Self {
        debug_assert!(self.field.is_same(rhs.field), "field mismatch");
        let value = if self.value >= rhs.value {
            &self.value - &rhs.value
        } else {
            &self.value + &self.field.modulus - &rhs.value
        };
        self.with_value(value)
    }

    fn mul_mod(&self, rhs: &Self) -> Self {
        debug_assert!(self.field.is_same(rhs.field), "field mismatch");
        self.with_value((&self.value * &rhs.value) % &self.field.modulus)
    }

    fn neg_mod(&self) -> Self {
        if self.is_zero() {
            self.clone()
        } else {
            self.with_value(&self.field.modulus - &self.value)
        }
    }
}

macro_rules! impl_field_op {
    ($op:ident, $op_fn:ident, $inner:ident) => {
        impl<'f> $op<&FieldElement<'f>> for &FieldElement<'f> {
            type Output = FieldElement<'f>;

            fn $op_fn(self, rhs: &FieldElement<'f>) -> FieldElement<'f> {
                self.$inner(rhs)
            }
        }

        impl<'f> $op<FieldElement<'f>> for &FieldElement<'f> {
            type Output = FieldElement<'f>;

            fn $op_fn(self, rhs: FieldElement<'f>) -> FieldElement<'f> {
                self.$inner(&rhs)
            }
        }

        impl<'f> $op<&FieldElement<'f>> for FieldElement<'f> {
            type Output = FieldElement<'f>;

            fn $op_fn(self, rhs: &FieldElement<'f>) -> FieldElement<'f> {
                self.$inner(rhs)
            }
        }

        impl<'f> $op<FieldElement<'f>> for FieldElement<'f> {
            type Output = FieldElement<'f>;

            fn $op_fn(self, rhs: FieldElement<'f>) -> FieldElement<'f> {
                self.$inner(&rhs)
            }
        }
    };
}

impl_field_op!(Add, add, add_mod);
impl_field_op!(Sub, sub, sub_mod);
impl_field_op!(Mul, mul, mul_mod);

impl<'f> Neg for FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn neg(self) -> FieldElement<'f> {
        self.neg_mod()
    }
}

impl<'f> Neg for &FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn neg(self) -> FieldElement<'f> {
        self.neg_mod()
    }
}

impl PartialEq for FieldElement<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.field.is_same(other.field)
    }
}

impl Eq for FieldElement<'_> {}

impl fmt::Debug for FieldElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x{:x})", self.value)
    }
}

impl fmt::LowerHex for FieldElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.value, f)
    }
}
