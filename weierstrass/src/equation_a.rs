//! Classification of the short Weierstrass equation's 𝒂-coefficient.
//!
//! Formula selection for point arithmetic depends on special values of 𝒂.
//! The classification is computed once when a [`Group`][`crate::Group`] is
//! built, so arithmetic never has to reduce and compare the coefficient again.

use crate::PrimeField;
use num_bigint::BigUint;
use num_traits::Zero;

/// Special properties of the 𝒂-coefficient.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EquationA {
    /// The 𝒂-coefficient of the short Weierstrass equation is 0.
    Zero,

    /// The 𝒂-coefficient of the short Weierstrass equation is -3.
    MinusThree,

    /// The 𝒂-coefficient of the short Weierstrass equation does not have
    /// specific properties which allow for an optimized implementation.
    Generic,
}

impl EquationA {
    /// Classify `a`, which must already be reduced modulo the field prime.
    pub fn classify(field: &PrimeField, a: &BigUint) -> Self {
        if a.is_zero() {
            EquationA::Zero
        } else if (a + BigUint::from(3u8)) == *field.modulus() {
            EquationA::MinusThree
        } else {
            EquationA::Generic
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EquationA;
    use crate::PrimeField;
    use num_bigint::BigUint;

    #[test]
    fn classify() {
        let f = PrimeField::new(BigUint::from(23u8)).unwrap();
        assert_eq!(EquationA::classify(&f, &BigUint::from(0u8)), EquationA::Zero);
        assert_eq!(
            EquationA::classify(&f, &BigUint::from(20u8)),
            EquationA::MinusThree
        );
        assert_eq!(
            EquationA::classify(&f, &BigUint::from(3u8)),
            EquationA::Generic
        );
    }
}
