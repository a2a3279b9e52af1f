//! Lifting affine points into the inversion-free coordinate systems.

use crate::{CurvePoint, JacobianPoint, ProjectivePoint};
use weierstrass::AffinePoint;

/// Conversions from [`AffinePoint`] into the coordinate systems provided by
/// this crate.
pub trait AffinePointExt<'g> {
    /// Lift into projective coordinates `(x, y, 1)`.
    fn to_projective(&self) -> ProjectivePoint<'g>;

    /// Lift into Jacobian coordinates `(x, y, 1)`.
    fn to_jacobian(&self) -> JacobianPoint<'g>;
}

impl<'g> AffinePointExt<'g> for AffinePoint<'g> {
    fn to_projective(&self) -> ProjectivePoint<'g> {
        ProjectivePoint::from_affine(self)
    }

    fn to_jacobian(&self) -> JacobianPoint<'g> {
        JacobianPoint::from_affine(self)
    }
}

#[cfg(test)]
mod tests {
    use super::AffinePointExt;
    use crate::CurvePoint;
    use weierstrass::named;

    #[test]
    fn lifts_agree() {
        for group in named::all() {
            let g = group.generator();
            let projective = g.to_projective();
            let jacobian = g.to_jacobian();

            assert_eq!(projective.coordinates(), jacobian.coordinates());
            assert_eq!(projective.to_affine(), jacobian.to_affine());
            assert!(group.infinity().to_projective().is_identity());
            assert!(group.infinity().to_jacobian().is_identity());
        }
    }
}
