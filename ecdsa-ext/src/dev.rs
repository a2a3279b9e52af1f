//! Development-related functionality.

/// Implement group law tests for a [`CurvePoint`](crate::CurvePoint) type
/// over every named curve.
macro_rules! impl_point_arithmetic_tests {
    ($point:ident) => {
        fn scalar(value: u64) -> ::num_bigint::BigUint {
            ::num_bigint::BigUint::from(value)
        }

        #[test]
        fn affine_round_trip() {
            for group in ::weierstrass::named::all() {
                let g = group.generator();
                let p = $point::from_affine(&g);

                assert!(!p.is_identity());
                assert_eq!(p.to_affine(), g);
                assert_eq!($point::from_affine(&g.double()).to_affine(), g.double());

                let identity = $point::from_affine(&group.infinity());
                assert!(identity.is_identity());
                assert!(identity.to_affine().is_identity());
            }
        }

        #[test]
        fn identity_addition() {
            for group in ::weierstrass::named::all() {
                let identity = $point::identity(group);
                let g = $point::from_affine(&group.generator());

                assert_eq!(identity.add(&g).unwrap(), g);
                assert_eq!(g.add(&identity).unwrap(), g);
                assert!(identity.add(&identity).unwrap().is_identity());
                assert!(identity.double().is_identity());
            }
        }

        #[test]
        fn double_matches_add() {
            for group in ::weierstrass::named::all() {
                let g = $point::from_affine(&group.generator());
                let p = g.mul(&scalar(0xdead_beef));

                assert_eq!(g.double(), g.add(&g).unwrap());
                assert_eq!(p.double(), p.add(&p).unwrap());
                assert_eq!(p.mul(&scalar(4)), p.double().double());
                assert_eq!(p.double().to_affine(), p.to_affine().double());
            }
        }

        #[test]
        fn mul_matches_affine_reference() {
            let mut rng = <::rand_chacha::ChaCha8Rng as ::rand_chacha::rand_core::SeedableRng>::seed_from_u64(1);

            for group in ::weierstrass::named::all() {
                let n = group.order();
                let g = group.generator();
                let p = $point::from_affine(&g);

                let scalars = [
                    scalar(0),
                    scalar(1),
                    scalar(2),
                    scalar(3),
                    n - 1u8,
                    n.clone(),
                    n + 1u8,
                    group.random_scalar(&mut rng),
                ];
                for k in &scalars {
                    assert_eq!(p.mul(k).to_affine(), g.mul(k), "{group} k = {k:x}");
                }

                assert!(p.mul(n).is_identity());
                assert_eq!(p.mul(&(n - 1u8)), p.neg());
            }
        }

        #[test]
        fn naf_matches_binary() {
            let mut rng = <::rand_chacha::ChaCha8Rng as ::rand_chacha::rand_core::SeedableRng>::seed_from_u64(2);

            for group in ::weierstrass::named::all() {
                let p = $point::from_affine(&group.generator()).double();
                for _ in 0..4 {
                    let k = group.random_scalar(&mut rng);
                    assert_eq!(p.mul(&k), crate::point::mul_binary(&p, &k));
                }
            }
        }

        #[test]
        fn scalar_mul_distributes() {
            let mut rng = <::rand_chacha::ChaCha8Rng as ::rand_chacha::rand_core::SeedableRng>::seed_from_u64(3);

            for group in ::weierstrass::named::all() {
                let g = $point::from_affine(&group.generator());
                let a = group.random_scalar(&mut rng);
                let b = group.random_scalar(&mut rng);

                let sum = g.mul(&a).add(&g.mul(&b)).unwrap();
                assert_eq!(sum, g.mul(&(&a + &b)));
                assert_eq!(sum.to_affine(), group.generator().mul(&((a + b) % group.order())));
            }
        }

        #[test]
        fn negation() {
            let mut rng = <::rand_chacha::ChaCha8Rng as ::rand_chacha::rand_core::SeedableRng>::seed_from_u64(4);

            for group in ::weierstrass::named::all() {
                let p = $point::from_affine(&group.generator()).mul(&group.random_scalar(&mut rng));

                assert!(p.add(&p.neg()).unwrap().is_identity());
                assert!(p.neg().add(&p).unwrap().is_identity());
                assert_eq!(p.neg().to_affine(), p.to_affine().neg());
                assert_eq!(p.neg().neg(), p);
                assert!($point::identity(group).neg().is_identity());
            }
        }

        #[test]
        fn cancelling_multiples_sum_to_identity() {
            let mut rng = <::rand_chacha::ChaCha8Rng as ::rand_chacha::rand_core::SeedableRng>::seed_from_u64(5);

            for group in ::weierstrass::named::all() {
                let n = group.order();
                let g = $point::from_affine(&group.generator());
                let x = group.random_scalar(&mut rng);
                let e = group.random_scalar(&mut rng);
                let s = (&x * &e) % n;

                // s·G + (x·G)·(n - e) = (xe - xe)·G
                let sum = g.mul(&s).add(&g.mul(&x).mul(&(n - &e))).unwrap();
                assert!(sum.is_identity());
                assert!(sum.to_affine().is_identity());
            }
        }

        #[test]
        fn add_rejects_other_group() {
            let p = $point::from_affine(&::weierstrass::named::secp256k1().generator());
            let q = $point::from_affine(&::weierstrass::named::nist_p256().generator());

            assert_eq!(p.add(&q), Err(crate::Error::GroupMismatch));
            assert_eq!(q.add(&p), Err(crate::Error::GroupMismatch));
            assert_ne!(p, q);
        }

        #[test]
        fn mul_signed_rejects_negative_scalar() {
            let group = ::weierstrass::named::nist_p256();
            let g = $point::from_affine(&group.generator());

            assert_eq!(
                g.mul_signed(&::num_bigint::BigInt::from(-1)),
                Err(crate::Error::NegativeScalar)
            );
            assert_eq!(g.mul_signed(&::num_bigint::BigInt::from(3)).unwrap(), g.mul(&scalar(3)));
        }

        #[test]
        fn from_coordinates_validates_input() {
            let group = ::weierstrass::named::secp256k1();
            let g = group.generator();
            let one = scalar(1);

            let p = $point::from_coordinates(group, g.x(), g.y(), &one).unwrap();
            assert_eq!(p, $point::from_affine(&g));

            let off_curve = g.y() + 1u8;
            assert_eq!(
                $point::from_coordinates(group, g.x(), &off_curve, &one),
                Err(crate::Error::Curve(::weierstrass::Error::NotOnCurve))
            );

            let out_of_range = group.field().modulus() + g.x();
            assert_eq!(
                $point::from_coordinates(group, &out_of_range, g.y(), &one),
                Err(crate::Error::Curve(::weierstrass::Error::CoordinateOutOfRange))
            );

            let identity = $point::from_coordinates(group, g.x(), g.y(), &scalar(0)).unwrap();
            assert!(identity.is_identity());
            assert_eq!(identity.coordinates(), (&scalar(0), &scalar(1), &scalar(0)));
        }
    };
}
