//! Jacobian curve points.

use crate::{CurvePoint, jacobian_arithmetic, point::sealed::PointKernel};
use core::fmt;
use weierstrass::{AffinePoint, FieldElement, Group};

/// Point on a Weierstrass curve in Jacobian coordinates `(X : Y : Z)`,
/// representing the affine point `(X/Z², Y/Z³)`.
#[derive(Clone)]
pub struct JacobianPoint<'g> {
    pub(crate) group: &'g Group,
    pub(crate) x: FieldElement<'g>,
    pub(crate) y: FieldElement<'g>,
    pub(crate) z: FieldElement<'g>,
}

impl<'g> JacobianPoint<'g> {
    /// Assemble a point, mapping any `z = 0` output to the canonical identity.
    pub(crate) fn from_parts(
        group: &'g Group,
        x: FieldElement<'g>,
        y: FieldElement<'g>,
        z: FieldElement<'g>,
    ) -> Self {
        if z.is_zero() {
            let field = group.field();
            return Self {
                group,
                x: field.zero(),
                y: field.one(),
                z,
            };
        }

        Self { group, x, y, z }
    }
}

impl<'g> PointKernel<'g> for JacobianPoint<'g> {
    fn from_elements(
        group: &'g Group,
        x: FieldElement<'g>,
        y: FieldElement<'g>,
        z: FieldElement<'g>,
    ) -> Self {
        Self::from_parts(group, x, y, z)
    }

    fn elements(&self) -> (&FieldElement<'g>, &FieldElement<'g>, &FieldElement<'g>) {
        (&self.x, &self.y, &self.z)
    }

    /// `Y² = X³ + aXZ⁴ + bZ⁶`
    fn satisfies_equation(
        group: &Group,
        x: &FieldElement<'_>,
        y: &FieldElement<'_>,
        z: &FieldElement<'_>,
    ) -> bool {
        let field = x.field();
        let a = field.element(group.param_a().clone());
        let b = field.element(group.param_b().clone());
        let z2 = z.square();
        let z4 = z2.square();
        let z6 = &z4 * &z2;

        y.square() == x.square() * x + a * x * z4 + b * z6
    }

    fn add_same_group(&self, other: &Self) -> Self {
        if self.is_identity() {
            return other.clone();
        }
        if other.is_identity() {
            return self.clone();
        }

        match (self.z.is_one(), other.z.is_one()) {
            (true, true) => jacobian_arithmetic::add_with_z_one(self, other),
            (false, true) => jacobian_arithmetic::add_with_z2_one(self, other),
            (true, false) => jacobian_arithmetic::add_with_z2_one(other, self),
            (false, false) if self.z == other.z => jacobian_arithmetic::add_with_z_eq(self, other),
            (false, false) => jacobian_arithmetic::add_with_z_ne(self, other),
        }
    }
}

impl<'g> CurvePoint<'g> for JacobianPoint<'g> {
    fn group(&self) -> &'g Group {
        self.group
    }

    fn to_affine(&self) -> AffinePoint<'g> {
        if self.is_identity() {
            return self.group.infinity();
        }

        let Some(zinv) = self.z.invert() else {
            unreachable!("non-identity points have a nonzero z");
        };
        let zinv2 = zinv.square();
        let zinv3 = &zinv2 * &zinv;

        AffinePoint::new_unchecked(
            self.group,
            (&self.x * &zinv2).into_value(),
            (&self.y * &zinv3).into_value(),
        )
    }

    fn double(&self) -> Self {
        if self.is_identity() || self.y.is_zero() {
            return Self::identity(self.group);
        }

        if self.z.is_one() {
            jacobian_arithmetic::double_with_z_one(self)
        } else {
            jacobian_arithmetic::double(self)
        }
    }
}

impl PartialEq for JacobianPoint<'_> {
    fn eq(&self, other: &Self) -> bool {
        if !self.group.same_group(other.group) {
            return false;
        }

        match (self.is_identity(), other.is_identity()) {
            (true, true) => true,
            (false, false) => {
                let z1z1 = self.z.square();
                let z2z2 = other.z.square();

                &self.x * &z2z2 == &other.x * &z1z1
                    && &self.y * &z2z2 * &other.z == &other.y * &z1z1 * &self.z
            }
            _ => false,
        }
    }
}

impl Eq for JacobianPoint<'_> {}

impl fmt::Debug for JacobianPoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JacobianPoint")
            .field("group", &self.group.name())
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::JacobianPoint;
    use crate::{CurvePoint, ProjectivePoint};
    use num_bigint::BigUint;
    use weierstrass::{Group, named};

    impl_point_arithmetic_tests!(JacobianPoint);

    /// `(λ²x, λ³y, λ)` for an affine point `(x, y)`.
    fn scaled<'g>(group: &'g Group, point: &JacobianPoint<'g>, lambda: u64) -> JacobianPoint<'g> {
        let field = group.field();
        let affine = point.to_affine();
        let lambda = field.from_u64(lambda);
        let l2 = lambda.square();
        let l3 = &l2 * &lambda;

        JacobianPoint::from_coordinates(
            group,
            (field.element(affine.x().clone()) * l2).value(),
            (field.element(affine.y().clone()) * l3).value(),
            lambda.value(),
        )
        .unwrap()
    }

    #[test]
    fn equality_ignores_scale() {
        for group in named::all() {
            let p = JacobianPoint::from_affine(&group.generator()).double();
            let q = scaled(group, &p, 0x1234_5678_9abc);

            assert_eq!(q, p);
            assert_ne!(q, p.neg());
            assert_eq!(q.to_affine(), p.to_affine());
        }
    }

    #[test]
    fn rejects_projective_scaling() {
        let group = named::nist_p256();
        let field = group.field();
        let g = group.generator();
        let lambda = field.from_u64(5);
        let x = field.element(g.x().clone()) * &lambda;
        let y = field.element(g.y().clone()) * &lambda;

        assert!(JacobianPoint::from_coordinates(group, x.value(), y.value(), lambda.value()).is_err());
    }

    /// Every branch of the addition dispatch, including the equal and inverse
    /// operand cases, against projective addition.
    #[test]
    fn addition_cases_agree_with_projective() {
        for group in named::all() {
            let g = group.generator();
            let p = JacobianPoint::from_affine(&g.mul(&BigUint::from(5u8)));
            let q = JacobianPoint::from_affine(&g.mul(&BigUint::from(11u8)));

            let p_scaled = scaled(group, &p, 7);
            let q_scaled = scaled(group, &q, 13);
            let q_same_z = scaled(group, &q, 7);

            let expected = ProjectivePoint::from_affine(&g.mul(&BigUint::from(16u8))).to_affine();
            let cases = [
                (&p, &q),
                (&p_scaled, &q),
                (&p, &q_scaled),
                (&p_scaled, &q_same_z),
                (&p_scaled, &q_scaled),
            ];
            for (lhs, rhs) in cases {
                assert_eq!(lhs.add(rhs).unwrap().to_affine(), expected);
            }

            let doubled = p.double();
            assert_eq!(p.add(&p).unwrap(), doubled);
            assert_eq!(p_scaled.add(&p).unwrap(), doubled);
            assert_eq!(p.add(&p_scaled).unwrap(), doubled);
            assert_eq!(p_scaled.add(&p_scaled).unwrap(), doubled);
            assert_eq!(p_scaled.add(&scaled(group, &p, 3)).unwrap(), doubled);

            assert!(p.add(&p.neg()).unwrap().is_identity());
            assert!(p_scaled.add(&p.neg()).unwrap().is_identity());
            assert!(p_scaled.add(&scaled(group, &p, 3).neg()).unwrap().is_identity());
        }
    }

    #[test]
    fn identity_is_canonical() {
        let group = named::secp256k1();
        let identity = JacobianPoint::identity(group);
        let (x, y, z) = identity.coordinates();

        assert_eq!(x, &BigUint::from(0u8));
        assert_eq!(y, &BigUint::from(1u8));
        assert_eq!(z, &BigUint::from(0u8));

        let p = JacobianPoint::from_affine(&group.generator());
        assert_eq!(p.add(&p.neg()).unwrap().coordinates(), (x, y, z));
    }
}
