//! Jacobian point arithmetic.
//!
//! Addition is split into cases by the `z` coordinates of the operands, since
//! the specialized formulas are substantially cheaper than the general one.
//! Formula names refer to the [Explicit-Formulas Database].
//!
//! Every addition formula first computes the x difference `h` and the
//! y difference `r`. When `h = 0` the operands are either equal, in which case
//! the matching doubling formula is used, or inverse, in which case the sum is
//! the identity.
//!
//! [Explicit-Formulas Database]: https://hyperelliptic.org/EFD/g1p/auto-shortw-jacobian.html

use crate::{CurvePoint, JacobianPoint};
use weierstrass::{EquationA, FieldElement};

/// Sum of two points sharing an x-coordinate, once `r` tells them apart.
fn equal_x<'g>(
    a: &JacobianPoint<'g>,
    r: &FieldElement<'g>,
    ya: &FieldElement<'g>,
    yb: &FieldElement<'g>,
    double: impl FnOnce() -> JacobianPoint<'g>,
) -> JacobianPoint<'g> {
    if r.is_zero() {
        return double();
    }

    assert!(
        (ya + yb).is_zero(),
        "points with equal x must be equal or inverse"
    );
    JacobianPoint::identity(a.group)
}

/// mmadd-2007-bl: both operands have `z = 1`.
pub(crate) fn add_with_z_one<'g>(a: &JacobianPoint<'g>, b: &JacobianPoint<'g>) -> JacobianPoint<'g> {
    debug_assert!(a.z.is_one() && b.z.is_one());

    let h = &b.x - &a.x;
    let r = (&b.y - &a.y).double();
    if h.is_zero() {
        return equal_x(a, &r, &a.y, &b.y, || double_with_z_one(a));
    }

    let hh = h.square();
    let i = hh.double().double();
    let j = &h * &i;
    let v = &a.x * &i;

    let x3 = r.square() - &j - v.double();
    let y3 = &r * (&v - &x3) - (&a.y * &j).double();
    let z3 = h.double();

    JacobianPoint::from_parts(a.group, x3, y3, z3)
}

/// zadd-2007-m: both operands share the same `z`.
pub(crate) fn add_with_z_eq<'g>(a: &JacobianPoint<'g>, b: &JacobianPoint<'g>) -> JacobianPoint<'g> {
    debug_assert!(a.z == b.z);

    let h = &b.x - &a.x;
    let r = &b.y - &a.y;
    if h.is_zero() {
        return equal_x(a, &r, &a.y, &b.y, || double(a));
    }

    let hh = h.square();
    let xa_hh = &a.x * &hh;
    let xb_hh = &b.x * &hh;

    let x3 = r.square() - &xa_hh - &xb_hh;
    let y3 = &r * (&xa_hh - &x3) - &a.y * (xb_hh - &xa_hh);
    let z3 = &a.z * &h;

    JacobianPoint::from_parts(a.group, x3, y3, z3)
}

/// madd-2007-bl: `b` has `z = 1`.
pub(crate) fn add_with_z2_one<'g>(a: &JacobianPoint<'g>, b: &JacobianPoint<'g>) -> JacobianPoint<'g> {
    debug_assert!(b.z.is_one());

    let z1z1 = a.z.square();
    let u2 = &b.x * &z1z1;
    let s2 = &b.y * &a.z * &z1z1;
    let h = u2 - &a.x;
    let r = (&s2 - &a.y).double();
    if h.is_zero() {
        return equal_x(a, &r, &a.y, &s2, || double_with_z_one(b));
    }

    let hh = h.square();
    let i = hh.double().double();
    let j = &h * &i;
    let v = &a.x * &i;

    let x3 = r.square() - &j - v.double();
    let y3 = &r * (&v - &x3) - (&a.y * &j).double();
    let z3 = (&a.z + &h).square() - &z1z1 - &hh;

    JacobianPoint::from_parts(a.group, x3, y3, z3)
}

/// add-2007-bl: general addition.
pub(crate) fn add_with_z_ne<'g>(a: &JacobianPoint<'g>, b: &JacobianPoint<'g>) -> JacobianPoint<'g> {
    let z1z1 = a.z.square();
    let z2z2 = b.z.square();
    let u1 = &a.x * &z2z2;
    let u2 = &b.x * &z1z1;
    let s1 = &a.y * &b.z * &z2z2;
    let s2 = &b.y * &a.z * &z1z1;
    let h = &u2 - &u1;
    let r = (&s2 - &s1).double();
    if h.is_zero() {
        return equal_x(a, &r, &s1, &s2, || double(a));
    }

    let i = h.double().square();
    let j = &h * &i;
    let v = &u1 * &i;

    let x3 = r.square() - &j - v.double();
    let y3 = &r * (&v - &x3) - (&s1 * &j).double();
    let z3 = ((&a.z + &b.z).square() - &z1z1 - &z2z2) * &h;

    JacobianPoint::from_parts(a.group, x3, y3, z3)
}

/// dbl-2007-bl, with the `M` term specialized on the 𝒂-coefficient.
pub(crate) fn double<'g>(p: &JacobianPoint<'g>) -> JacobianPoint<'g> {
    let group = p.group;
    let field = group.field();

    let xx = p.x.square();
    let yy = p.y.square();
    let yyyy = yy.square();
    let zz = p.z.square();
    let s = ((&p.x + &yy).square() - &xx - &yyyy).double();
    let m = match group.equation_a() {
        EquationA::Zero => field.from_u64(3) * &xx,
        EquationA::MinusThree => field.from_u64(3) * (&p.x - &zz) * (&p.x + &zz),
        EquationA::Generic => {
            let a = field.element(group.param_a().clone());
            field.from_u64(3) * &xx + a * zz.square()
        }
    };

    let t = m.square() - s.double();
    let y3 = &m * (&s - &t) - field.from_u64(8) * &yyyy;
    let z3 = (&p.y + &p.z).square() - &yy - &zz;

    JacobianPoint::from_parts(group, t, y3, z3)
}

/// mdbl-2007-bl: doubling a point with `z = 1`.
pub(crate) fn double_with_z_one<'g>(p: &JacobianPoint<'g>) -> JacobianPoint<'g> {
    debug_assert!(p.z.is_one());

    let group = p.group;
    let field = group.field();
    let a = field.element(group.param_a().clone());

    let xx = p.x.square();
    let yy = p.y.square();
    let yyyy = yy.square();
    let s = ((&p.x + &yy).square() - &xx - &yyyy).double();
    let m = field.from_u64(3) * &xx + a;

    let t = m.square() - s.double();
    let y3 = &m * (&s - &t) - field.from_u64(8) * &yyyy;
    let z3 = p.y.double();

    JacobianPoint::from_parts(group, t, y3, z3)
}
