//! Projective point arithmetic implementation optimised for different curve
//! equations.
//!
//! Support for formulas specialized to the short Weierstrass equation's
//! 𝒂-coefficient. The family is selected by the group's precomputed
//! [`EquationA`] classification.

use crate::ProjectivePoint;
use weierstrass::{EquationA, FieldElement};

mod sealed {
    use crate::ProjectivePoint;

    /// Elliptic point arithmetic implementation
    ///
    /// Provides implementation of point arithmetic (point addition, point doubling) which
    /// might be optimized for the curve.
    pub trait PointArithmetic {
        /// Returns `lhs + rhs`
        fn add<'g>(lhs: &ProjectivePoint<'g>, rhs: &ProjectivePoint<'g>) -> ProjectivePoint<'g>;

        /// Returns `point + point`
        fn double<'g>(point: &ProjectivePoint<'g>) -> ProjectivePoint<'g>;
    }
}

use sealed::PointArithmetic;

/// Returns `lhs + rhs` with the formulas selected for the curve.
pub(crate) fn add<'g>(lhs: &ProjectivePoint<'g>, rhs: &ProjectivePoint<'g>) -> ProjectivePoint<'g> {
    match lhs.group.equation_a() {
        EquationA::MinusThree => EquationAIsMinusThree::add(lhs, rhs),
        EquationA::Zero | EquationA::Generic => EquationAIsGeneric::add(lhs, rhs),
    }
}

/// Returns `point + point` with the formulas selected for the curve.
pub(crate) fn double<'g>(point: &ProjectivePoint<'g>) -> ProjectivePoint<'g> {
    match point.group.equation_a() {
        EquationA::MinusThree => EquationAIsMinusThree::double(point),
        EquationA::Zero | EquationA::Generic => EquationAIsGeneric::double(point),
    }
}

/// Curve coefficients `(a, 3b)` as field elements.
fn coefficients<'g>(point: &ProjectivePoint<'g>) -> (FieldElement<'g>, FieldElement<'g>) {
    let group = point.group;
    let field = group.field();
    let b3 = field.from_u64(3) * field.element(group.param_b().clone());
    (field.element(group.param_a().clone()), b3)
}

/// The 𝒂-coefficient of the short Weierstrass equation does not have specific
/// properties which allow for an optimized implementation.
pub(crate) struct EquationAIsGeneric;

impl PointArithmetic for EquationAIsGeneric {
    /// Implements complete addition for any curve
    ///
    /// Implements the complete addition formula from [Renes-Costello-Batina 2015]
    /// (Algorithm 1). The comments after each line indicate which algorithm steps
    /// are being performed.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    fn add<'g>(lhs: &ProjectivePoint<'g>, rhs: &ProjectivePoint<'g>) -> ProjectivePoint<'g> {
        let (a, b3) = coefficients(lhs);

        let t0 = &lhs.x * &rhs.x; // 1
        let t1 = &lhs.y * &rhs.y; // 2
        let t2 = &lhs.z * &rhs.z; // 3
        let t3 = &lhs.x + &lhs.y; // 4
        let t4 = &rhs.x + &rhs.y; // 5
        let t3 = t3 * t4; // 6
        let t4 = &t0 + &t1; // 7
        let t3 = t3 - t4; // 8
        let t4 = &lhs.x + &lhs.z; // 9
        let t5 = &rhs.x + &rhs.z; // 10
        let t4 = t4 * t5; // 11
        let t5 = &t0 + &t2; // 12
        let t4 = t4 - t5; // 13
        let t5 = &lhs.y + &lhs.z; // 14
        let x3 = &rhs.y + &rhs.z; // 15
        let t5 = t5 * x3; // 16
        let x3 = &t1 + &t2; // 17
        let t5 = t5 - x3; // 18
        let z3 = &a * &t4; // 19
        let x3 = &b3 * &t2; // 20
        let z3 = x3 + z3; // 21
        let x3 = &t1 - &z3; // 22
        let z3 = &t1 + &z3; // 23
        let y3 = &x3 * &z3; // 24
        let t1 = &t0 + &t0; // 25
        let t1 = t1 + &t0; // 26
        let t2 = &a * &t2; // 27
        let t4 = &b3 * &t4; // 28
        let t1 = t1 + &t2; // 29
        let t2 = &t0 - &t2; // 30
        let t2 = &a * &t2; // 31
        let t4 = t4 + &t2; // 32
        let t0 = &t1 * &t4; // 33
        let y3 = y3 + &t0; // 34
        let t0 = &t5 * &t4; // 35
        let x3 = &t3 * &x3; // 36
        let x3 = x3 - &t0; // 37
        let t0 = &t3 * &t1; // 38
        let z3 = &t5 * &z3; // 39
        let z3 = z3 + &t0; // 40

        ProjectivePoint::from_parts(lhs.group, x3, y3, z3)
    }

    /// Implements point doubling for curves with any `a`
    ///
    /// Implements the exception-free point doubling formula from [Renes-Costello-Batina 2015]
    /// (Algorithm 3). The comments after each line indicate which algorithm
    /// steps are being performed.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    fn double<'g>(point: &ProjectivePoint<'g>) -> ProjectivePoint<'g> {
        let (a, b3) = coefficients(point);

        let t0 = point.x.square(); // 1
        let t1 = point.y.square(); // 2
        let t2 = point.z.square(); // 3
        let t3 = &point.x * &point.y; // 4
        let t3 = t3.double(); // 5
        let z3 = &point.x * &point.z; // 6
        let z3 = z3.double(); // 7
        let x3 = &a * &z3; // 8
        let y3 = &b3 * &t2; // 9
        let y3 = x3 + y3; // 10
        let x3 = &t1 - &y3; // 11
        let y3 = &t1 + &y3; // 12
        let y3 = &x3 * &y3; // 13
        let x3 = &t3 * &x3; // 14
        let z3 = &b3 * &z3; // 15
        let t2 = &a * &t2; // 16
        let t3 = &t0 - &t2; // 17
        let t3 = &a * &t3; // 18
        let t3 = t3 + &z3; // 19
        let z3 = t0.double(); // 20
        let t0 = z3 + &t0; // 21
        let t0 = t0 + &t2; // 22
        let t0 = t0 * &t3; // 23
        let y3 = y3 + &t0; // 24
        let t2 = &point.y * &point.z; // 25
        let t2 = t2.double(); // 26
        let t0 = &t2 * &t3; // 27
        let x3 = x3 - &t0; // 28
        let z3 = &t2 * &t1; // 29
        let z3 = z3.double(); // 30
        let z3 = z3.double(); // 31

        ProjectivePoint::from_parts(point.group, x3, y3, z3)
    }
}

/// The 𝒂-coefficient of the short Weierstrass equation is -3.
pub(crate) struct EquationAIsMinusThree;

impl PointArithmetic for EquationAIsMinusThree {
    /// Implements complete addition for curves with `a = -3`
    ///
    /// Implements the complete addition formula from [Renes-Costello-Batina 2015]
    /// (Algorithm 4). The comments after each line indicate which algorithm steps
    /// are being performed.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    fn add<'g>(lhs: &ProjectivePoint<'g>, rhs: &ProjectivePoint<'g>) -> ProjectivePoint<'g> {
        debug_assert_eq!(
            lhs.group.equation_a(),
            EquationA::MinusThree,
            "this implementation is only valid for a = -3"
        );

        let field = lhs.group.field();
        let b = field.element(lhs.group.param_b().clone());

        let xx = &lhs.x * &rhs.x; // 1
        let yy = &lhs.y * &rhs.y; // 2
        let zz = &lhs.z * &rhs.z; // 3
        let xy_pairs = (&lhs.x + &lhs.y) * (&rhs.x + &rhs.y) - (&xx + &yy); // 4, 5, 6, 7, 8
        let yz_pairs = (&lhs.y + &lhs.z) * (&rhs.y + &rhs.z) - (&yy + &zz); // 9, 10, 11, 12, 13
        let xz_pairs = (&lhs.x + &lhs.z) * (&rhs.x + &rhs.z) - (&xx + &zz); // 14, 15, 16, 17, 18

        let bzz_part = &xz_pairs - &b * &zz; // 19, 20
        let bzz3_part = bzz_part.double() + &bzz_part; // 21, 22
        let yy_m_bzz3 = &yy - &bzz3_part; // 23
        let yy_p_bzz3 = &yy + &bzz3_part; // 24

        let zz3 = zz.double() + &zz; // 26, 27
        let bxz_part = &b * &xz_pairs - (&zz3 + &xx); // 25, 28, 29
        let bxz3_part = bxz_part.double() + &bxz_part; // 30, 31
        let xx3_m_zz3 = xx.double() + &xx - &zz3; // 32, 33, 34

        ProjectivePoint::from_parts(
            lhs.group,
            &yy_p_bzz3 * &xy_pairs - &yz_pairs * &bxz3_part, // 35, 39, 40
            &yy_p_bzz3 * &yy_m_bzz3 + &xx3_m_zz3 * &bxz3_part, // 36, 37, 38
            &yy_m_bzz3 * &yz_pairs + &xy_pairs * &xx3_m_zz3, // 41, 42, 43
        )
    }

    /// Implements point doubling for curves with `a = -3`
    ///
    /// Implements the exception-free point doubling formula from [Renes-Costello-Batina 2015]
    /// (Algorithm 6). The comments after each line indicate which algorithm
    /// steps are being performed.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    fn double<'g>(point: &ProjectivePoint<'g>) -> ProjectivePoint<'g> {
        debug_assert_eq!(
            point.group.equation_a(),
            EquationA::MinusThree,
            "this implementation is only valid for a = -3"
        );

        let field = point.group.field();
        let b = field.element(point.group.param_b().clone());

        let xx = point.x.square(); // 1
        let yy = point.y.square(); // 2
        let zz = point.z.square(); // 3
        let xy2 = (&point.x * &point.y).double(); // 4, 5
        let xz2 = (&point.x * &point.z).double(); // 6, 7

        let bzz_part = &b * &zz - &xz2; // 8, 9
        let bzz3_part = bzz_part.double() + &bzz_part; // 10, 11
        let yy_m_bzz3 = &yy - &bzz3_part; // 12
        let yy_p_bzz3 = &yy + &bzz3_part; // 13
        let y_frag = &yy_p_bzz3 * &yy_m_bzz3; // 14
        let x_frag = &yy_m_bzz3 * &xy2; // 15

        let zz3 = zz.double() + &zz; // 16, 17
        let bxz2_part = &b * &xz2 - (&zz3 + &xx); // 18, 19, 20
        let bxz6_part = bxz2_part.double() + &bxz2_part; // 21, 22
        let xx3_m_zz3 = xx.double() + &xx - &zz3; // 23, 24, 25

        let y = y_frag + &xx3_m_zz3 * &bxz6_part; // 26, 27
        let yz2 = (&point.y * &point.z).double(); // 28, 29
        let x = x_frag - &bxz6_part * &yz2; // 30, 31
        let z = (&yz2 * &yy).double().double(); // 32, 33, 34

        ProjectivePoint::from_parts(point.group, x, y, z)
    }
}
