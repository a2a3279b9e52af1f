#![no_main]
// Input: one byte selecting the curve, then the big-endian scalar.
use ecdsa_ext::{AffinePointExt, CurvePoint};
use libfuzzer_sys::fuzz_target;
use weierstrass::{BigUint, named};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, scalar)) = data.split_first() else {
        return;
    };
    if scalar.len() > 72 {
        return;
    }

    let groups = named::all();
    let group = groups[usize::from(selector) % groups.len()];
    let k = BigUint::from_bytes_be(scalar);

    let g = group.generator();
    let affine = g.mul(&k);
    let projective = g.to_projective().mul(&k);
    let jacobian = g.to_jacobian().mul(&k);

    assert_eq!(projective.to_affine(), affine);
    assert_eq!(jacobian.to_affine(), affine);

    // Addition and doubling are consistent across both representations
    let sum = projective.add(&g.to_projective()).unwrap();
    assert_eq!(sum.to_affine(), jacobian.add(&g.to_jacobian()).unwrap().to_affine());
    assert_eq!(projective.double(), projective.add(&projective).unwrap());
    assert_eq!(jacobian.double(), jacobian.add(&jacobian).unwrap());
    assert!(jacobian.add(&jacobian.neg()).unwrap().is_identity());
});
