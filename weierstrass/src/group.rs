//! Curve group descriptors.

use crate::{AffinePoint, EquationA, Error, PrimeField, Result};
use core::{fmt, ptr};
use num_bigint::BigUint;
use num_traits::{Num, Zero};
use rand_core::CryptoRng;

/// Prime order subgroup of a short Weierstrass curve `y² = x³ + ax + b` over
/// a prime field, together with its generator.
///
/// Two descriptors are equal when their parameters are equal; the name is
/// informational.
#[derive(Clone)]
pub struct Group {
    name: String,
    field: PrimeField,
    scalar_field: PrimeField,
    a: BigUint,
    b: BigUint,
    generator: (BigUint, BigUint),
    equation_a: EquationA,
}

impl Group {
    /// Build a group descriptor from its parameters.
    ///
    /// Rejects unreduced or singular curve coefficients and generators which
    /// are not on the curve. Neither primality of `p` and `order` nor
    /// `order * G = 0` are checked.
    pub fn new(
        name: impl Into<String>,
        p: BigUint,
        a: BigUint,
        b: BigUint,
        generator: (BigUint, BigUint),
        order: BigUint,
    ) -> Result<Self> {
        let field = PrimeField::new(p)?;
        let scalar_field = PrimeField::new(order).map_err(|_| Error::InvalidParameters)?;

        if !field.contains(&a) || !field.contains(&b) {
            return Err(Error::InvalidParameters);
        }

        let fa = field.element(a.clone());
        let fb = field.element(b.clone());
        let discriminant =
            field.from_u64(4) * fa.square() * &fa + field.from_u64(27) * fb.square();
        if discriminant.is_zero() {
            return Err(Error::InvalidParameters);
        }

        let equation_a = EquationA::classify(&field, &a);
        let group = Self {
            name: name.into(),
            field,
            scalar_field,
            a,
            b,
            generator,
            equation_a,
        };

        let (gx, gy) = &group.generator;
        if !group.field.contains(gx) || !group.field.contains(gy) {
            return Err(Error::CoordinateOutOfRange);
        }
        if !group.is_on_curve(gx, gy) {
            return Err(Error::NotOnCurve);
        }

        Ok(group)
    }

    /// Build a group descriptor from big-endian hexadecimal parameters.
    pub fn from_hex(
        name: impl Into<String>,
        p: &str,
        a: &str,
        b: &str,
        gx: &str,
        gy: &str,
        order: &str,
    ) -> Result<Self> {
        let parse =
            |s: &str| BigUint::from_str_radix(s, 16).map_err(|_| Error::InvalidParameters);
        Self::new(
            name,
            parse(p)?,
            parse(a)?,
            parse(b)?,
            (parse(gx)?, parse(gy)?),
            parse(order)?,
        )
    }

    /// Human-readable curve name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base field.
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// Field of scalars, i.e. integers modulo the group order.
    pub fn scalar_field(&self) -> &PrimeField {
        &self.scalar_field
    }

    /// Coefficient `a` in the curve equation.
    pub fn param_a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient `b` in the curve equation.
    pub fn param_b(&self) -> &BigUint {
        &self.b
    }

    /// Classification of the `a` coefficient.
    pub fn equation_a(&self) -> EquationA {
        self.equation_a
    }

    /// Group generator.
    pub fn generator(&self) -> AffinePoint<'_> {
        AffinePoint::new_unchecked(self, self.generator.0.clone(), self.generator.1.clone())
    }

    /// Order of the generator.
    pub fn order(&self) -> &BigUint {
        self.scalar_field.modulus()
    }

    /// Bit length of the group order.
    pub fn bit_length(&self) -> u64 {
        self.order().bits()
    }

    /// Number of bytes needed to encode a base field element.
    pub fn byte_length(&self) -> usize {
        self.field.byte_len()
    }

    /// The point at infinity.
    pub fn infinity(&self) -> AffinePoint<'_> {
        AffinePoint::identity(self)
    }

    /// Does `(x, y)` satisfy the curve equation?
    ///
    /// Coordinates outside the field are reduced first.
    pub fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        let x = self.field.element(x.clone());
        let y = self.field.element(y.clone());
        let a = self.field.element(self.a.clone());
        let b = self.field.element(self.b.clone());

        y.square() == x.square() * &x + a * &x + b
    }

    /// Are `self` and `other` the same group?
    pub fn same_group(&self, other: &Self) -> bool {
        ptr::eq(self, other) || self == other
    }

    /// Sample a uniformly random scalar in `[1, order - 1]`.
    pub fn random_scalar<R: CryptoRng + ?Sized>(&self, rng: &mut R) -> BigUint {
        let order = self.order();
        let bits = order.bits();
        let mut bytes = vec![0u8; bits.div_ceil(8) as usize];
        let excess = bytes.len() as u64 * 8 - bits;

        loop {
            rng.fill_bytes(&mut bytes);
            bytes[0] &= 0xff >> excess;

            let k = BigUint::from_bytes_be(&bytes);
            if !k.is_zero() && k < *order {
                return k;
            }
        }
    }
}

impl PartialEq for Group {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field
            && self.scalar_field == other.scalar_field
            && self.a == other.a
            && self.b == other.b
            && self.generator == other.generator
    }
}

impl Eq for Group {}

impl fmt::Debug for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("name", &self.name)
            .field("p", &format_args!("0x{:x}", self.field.modulus()))
            .field("a", &format_args!("0x{:x}", self.a))
            .field("b", &format_args!("0x{:x}", self.b))
            .field("order", &format_args!("0x{:x}", self.order()))
            .field("equation_a", &self.equation_a)
            .finish()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::Group;
    use crate::{EquationA, Error, named};
    use num_bigint::BigUint;
    use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};

    fn small(a: u8, b: u8, g: (u8, u8)) -> Result<Group, Error> {
        // y^2 = x^3 + x + 1 over GF(23) has 28 points, 7 divides it
        Group::new(
            "toy",
            BigUint::from(23u8),
            BigUint::from(a),
            BigUint::from(b),
            (BigUint::from(g.0), BigUint::from(g.1)),
            BigUint::from(7u8),
        )
    }

    #[test]
    fn rejects_generator_off_curve() {
        assert_eq!(small(1, 1, (3, 10)).err(), None);
        assert_eq!(small(1, 1, (3, 12)).err(), Some(Error::NotOnCurve));
        assert_eq!(
            small(1, 1, (23, 10)).err(),
            Some(Error::CoordinateOutOfRange)
        );
    }

    #[test]
    fn rejects_singular_curve() {
        assert_eq!(small(0, 0, (0, 0)).err(), Some(Error::InvalidParameters));
    }

    #[test]
    fn rejects_unreduced_coefficients() {
        assert_eq!(small(24, 1, (3, 10)).err(), Some(Error::InvalidParameters));
    }

    #[test]
    fn rejects_bad_hex() {
        assert_eq!(
            Group::from_hex("bad", "zz", "0", "7", "1", "1", "7").err(),
            Some(Error::InvalidParameters)
        );
    }

    #[test]
    fn equality_ignores_name() {
        let k1 = named::secp256k1();
        let renamed = Group::new(
            "renamed",
            k1.field().modulus().clone(),
            k1.param_a().clone(),
            k1.param_b().clone(),
            (
                k1.generator().x().clone(),
                k1.generator().y().clone(),
            ),
            k1.order().clone(),
        )
        .unwrap();

        assert_eq!(&renamed, k1);
        assert!(renamed.same_group(k1));
        assert!(!k1.same_group(named::nist_p256()));
    }

    #[test]
    fn named_classification() {
        assert_eq!(named::secp256k1().equation_a(), EquationA::Zero);
        assert_eq!(named::nist_p256().equation_a(), EquationA::MinusThree);
        assert_eq!(named::brainpool_p256r1().equation_a(), EquationA::Generic);
    }

    #[test]
    fn random_scalar_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for group in named::all() {
            for _ in 0..32 {
                let k = group.random_scalar(&mut rng);
                assert!(k >= BigUint::from(1u8));
                assert!(k < *group.order());
            }
        }

        let toy = small(1, 1, (3, 10)).unwrap();
        for _ in 0..64 {
            let k = toy.random_scalar(&mut rng);
            assert!(k >= BigUint::from(1u8) && k < BigUint::from(7u8));
        }
    }
}
