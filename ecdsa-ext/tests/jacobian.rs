//! Jacobian arithmetic tests.

use ecdsa_ext::{AffinePointExt, CurvePoint, JacobianPoint, weierstrass::named};
use hex_literal::hex;
use num_bigint::BigUint;
use p256::elliptic_curve::{ops::Reduce, sec1::ToEncodedPoint};
use proptest::prelude::*;

/// `k·G` on secp256k1, as uncompressed coordinates.
const SECP256K1_MUL_VECTORS: [(u8, [u8; 32], [u8; 32]); 3] = [
    (
        2,
        hex!("c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5"),
        hex!("1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a"),
    ),
    (
        3,
        hex!("f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9"),
        hex!("388f7b0f632de8140fe337e62a37f3566500a99934c2231b6cb9fd7584b8e672"),
    ),
    (
        7,
        hex!("5cbdf0646e5db4eaa398f365f2ea7a0e3d419b7e0330e39ce92bddedcac4f9bc"),
        hex!("6aebca40ba255960a3178d6d861a54dba813d0b813fde7b5a5082628087264da"),
    ),
];

#[test]
fn test_vector_scalar_mult() {
    let generator = named::secp256k1().generator().to_jacobian();

    for (k, x, y) in &SECP256K1_MUL_VECTORS {
        let affine = generator.mul(&BigUint::from(*k)).to_affine();
        assert_eq!(affine.x(), &BigUint::from_bytes_be(x));
        assert_eq!(affine.y(), &BigUint::from_bytes_be(y));
    }
}

#[test]
fn test_vector_repeated_add() {
    let generator = named::secp256k1().generator().to_jacobian();
    let mut p = generator.clone();

    for k in 2..=7u8 {
        p = p.add(&generator).unwrap();
        if let Some((_, x, y)) = SECP256K1_MUL_VECTORS.iter().find(|(n, ..)| *n == k) {
            let affine = p.to_affine();
            assert_eq!(affine.x(), &BigUint::from_bytes_be(x));
            assert_eq!(affine.y(), &BigUint::from_bytes_be(y));
        }
    }
}

#[test]
fn agrees_with_projective() {
    for group in named::all() {
        let jacobian = group.generator().to_jacobian();
        let projective = group.generator().to_projective();
        let k = group.order() >> 3u32;

        let lhs = jacobian.mul(&k).add(&jacobian.double()).unwrap();
        let rhs = projective.mul(&k).add(&projective.double()).unwrap();
        assert_eq!(lhs.to_affine(), rhs.to_affine(), "{group}");
    }
}

#[test]
fn jacobian_identity_round_trip() {
    let group = named::brainpool_p256r1();
    let identity = JacobianPoint::identity(group);

    assert!(identity.to_affine().is_identity());
    assert_eq!(JacobianPoint::from_affine(&identity.to_affine()), identity);
    assert_eq!(identity.to_affine().to_sec1_bytes(false), [0u8]);
}

proptest! {
    #[test]
    fn secp256k1_mul_matches(bytes in any::<[u8; 32]>()) {
        let group = named::secp256k1();
        let k = BigUint::from_bytes_be(&bytes) % group.order();
        let ours = group.generator().to_jacobian().mul(&k).to_affine();

        let scalar = <k256::Scalar as Reduce<k256::U256>>::reduce_bytes(&bytes.into());
        let theirs = (k256::ProjectivePoint::GENERATOR * scalar).to_affine();

        let encoded = theirs.to_encoded_point(false);
        prop_assert_eq!(ours.to_sec1_bytes(false), encoded.as_bytes());
    }

    #[test]
    fn p256_mul_matches(bytes in any::<[u8; 32]>()) {
        let group = named::nist_p256();
        let k = BigUint::from_bytes_be(&bytes) % group.order();
        let ours = group.generator().to_jacobian().mul(&k).to_affine();

        let scalar = <p256::Scalar as Reduce<p256::U256>>::reduce_bytes(&bytes.into());
        let theirs = (p256::ProjectivePoint::GENERATOR * scalar).to_affine();

        let encoded = theirs.to_encoded_point(true);
        prop_assert_eq!(ours.to_hex(true), hex::encode(encoded.as_bytes()));
    }
}
