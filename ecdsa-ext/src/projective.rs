//! Projective curve points.

use crate::{CurvePoint, point::sealed::PointKernel, projective_arithmetic};
use core::fmt;
use weierstrass::{AffinePoint, FieldElement, Group};

/// Point on a Weierstrass curve in standard projective coordinates
/// `(X : Y : Z)`, representing the affine point `(X/Z, Y/Z)`.
#[derive(Clone)]
pub struct ProjectivePoint<'g> {
    pub(crate) group: &'g Group,
    pub(crate) x: FieldElement<'g>,
    pub(crate) y: FieldElement<'g>,
    pub(crate) z: FieldElement<'g>,
}

impl<'g> ProjectivePoint<'g> {
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

impl<'g> PointKernel<'g> for ProjectivePoint<'g> {
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

    /// `Y²Z = X³ + aXZ² + bZ³`
    fn satisfies_equation(
        group: &Group,
        x: &FieldElement<'_>,
        y: &FieldElement<'_>,
        z: &FieldElement<'_>,
    ) -> bool {
        let field = x.field();
        let a = field.element(group.param_a().clone());
        let b = field.element(group.param_b().clone());
        let zz = z.square();

        y.square() * z == x.square() * x + a * x * &zz + b * zz * z
    }

    fn add_same_group(&self, other: &Self) -> Self {
        if self.is_identity() {
            return other.clone();
        }
        if other.is_identity() {
            return self.clone();
        }

        let u1 = &other.y * &self.z;
        let u2 = &self.y * &other.z;
        let v1 = &other.x * &self.z;
        let v2 = &self.x * &other.z;

        if v1 == v2 {
            if u1 == u2 {
                return self.double();
            }

            assert!(
                (u1 + u2).is_zero(),
                "points with equal x must be equal or inverse"
            );
            return Self::identity(self.group);
        }

        projective_arithmetic::add(self, other)
    }
}

impl<'g> CurvePoint<'g> for ProjectivePoint<'g> {
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

        AffinePoint::new_unchecked(
            self.group,
            (&self.x * &zinv).into_value(),
            (&self.y * &zinv).into_value(),
        )
    }

    fn double(&self) -> Self {
        if self.is_identity() || self.y.is_zero() {
            return Self::identity(self.group);
        }

        projective_arithmetic::double(self)
    }
}

impl PartialEq for ProjectivePoint<'_> {
    fn eq(&self, other: &Self) -> bool {
        if !self.group.same_group(other.group) {
            return false;
        }

        match (self.is_identity(), other.is_identity()) {
            (true, true) => true,
            (false, false) => {
                &self.x * &other.z == &other.x * &self.z && &self.y * &other.z == &other.y * &self.z
            }
            _ => false,
        }
    }
}

impl Eq for ProjectivePoint<'_> {}

impl fmt::Debug for ProjectivePoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectivePoint")
            .field("group", &self.group.name())
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}
