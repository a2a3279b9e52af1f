//! Registry of standard curves.
//!
//! Each descriptor is built lazily on first use and shared for the lifetime
//! of the process.

use crate::Group;
use once_cell::sync::Lazy;

macro_rules! named_group {
    (
        $(#[$attr:meta])*
        $fn_name:ident, $static_name:ident, $name:literal,
        p = $p:expr,
        a = $a:expr,
        b = $b:expr,
        gx = $gx:expr,
        gy = $gy:expr,
        n = $n:expr $(,)?
    ) => {
        static $static_name: Lazy<Group> = Lazy::new(|| {
            Group::from_hex($name, $p, $a, $b, $gx, $gy, $n)
                .expect(concat!($name, " domain parameters are valid"))
        });

        $(#[$attr])*
        pub fn $fn_name() -> &'static Group {
            &$static_name
        }
    };
}

named_group!(
    /// secp256k1 (SEC 2), `a = 0`.
    secp256k1, SECP256K1, "secp256k1",
    p = "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
    a = "0",
    b = "7",
    gx = "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
    gy = "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
    n = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
);

named_group!(
    /// NIST P-192 a.k.a. secp192r1, `a = -3`.
    nist_p192, NIST_P192, "P-192",
    p = "fffffffffffffffffffffffffffffffeffffffffffffffff",
    a = "fffffffffffffffffffffffffffffffefffffffffffffffc",
    b = "64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1",
    gx = "188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012",
    gy = "07192b95ffc8da78631011ed6b24cdd573f977a11e794811",
    n = "ffffffffffffffffffffffff99def836146bc9b1b4d22831",
);

named_group!(
    /// NIST P-224 a.k.a. secp224r1, `a = -3`.
    nist_p224, NIST_P224, "P-224",
    p = "ffffffffffffffffffffffffffffffff000000000000000000000001",
    a = "fffffffffffffffffffffffffffffffefffffffffffffffffffffffe",
    b = "b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4",
    gx = "b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21",
    gy = "bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34",
    n = "ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d",
);

named_group!(
    /// NIST P-256 a.k.a. secp256r1, `a = -3`.
    nist_p256, NIST_P256, "P-256",
    p = "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
    a = "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc",
    b = "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
    gx = "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
    gy = "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
    n = "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
);

named_group!(
    /// NIST P-384 a.k.a. secp384r1, `a = -3`.
    nist_p384, NIST_P384, "P-384",
    p = "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff",
    a = "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000fffffffc",
    b = "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875ac656398d8a2ed19d2a85c8edd3ec2aef",
    gx = "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a385502f25dbf55296c3a545e3872760ab7",
    gy = "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c00a60b1ce1d7e819d7a431d7c90ea0e5f",
    n = "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973",
);

named_group!(
    /// NIST P-521 a.k.a. secp521r1, `a = -3`. The order is 521 bits, so digests
    /// are shorter than the order.
    nist_p521, NIST_P521, "P-521",
    p = "1ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
    a = "1fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffc",
    b = "51953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef109e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b503f00",
    gx = "c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66",
    gy = "11839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd16650",
    n = "1fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e91386409",
);

named_group!(
    /// secp160r1 (SEC 2), `a = -3`. The 161-bit order exceeds `p`.
    secp160r1, SECP160R1, "secp160r1",
    p = "ffffffffffffffffffffffffffffffff7fffffff",
    a = "ffffffffffffffffffffffffffffffff7ffffffc",
    b = "1c97befc54bd7a8b65acf89f81d4d4adc565fa45",
    gx = "4a96b5688ef573284664698968c38bb913cbfc82",
    gy = "23a628553168947d59dcc912042351377ac5fb32",
    n = "100000000000000000001f4c8f927aed3ca752257",
);

named_group!(
    /// brainpoolP256r1 (RFC 5639), generic `a`.
    brainpool_p256r1, BRAINPOOL_P256R1, "brainpoolP256r1",
    p = "a9fb57dba1eea9bc3e660a909d838d726e3bf623d52620282013481d1f6e5377",
    a = "7d5a0975fc2c3057eef67530417affe7fb8055c126dc5c6ce94a4b44f330b5d9",
    b = "26dc5c6ce94a4b44f330b5d9bbd77cbf958416295cf7e1ce6bccdc18ff8c07b6",
    gx = "8bd2aeb9cb7e57cb2c4b482ffc81b7afb9de27e1e3bd23c23a4453bd9ace3262",
    gy = "547ef835c3dac4fd97f8461a14611dc9c27745132ded8e545c1d54c72f046997",
    n = "a9fb57dba1eea9bc3e660a909d838d718c397aa3b561a6f7901e0e82974856a7",
);

/// All curves in the registry.
pub fn all() -> [&'static Group; 8] {
    [
        secp256k1(),
        nist_p192(),
        nist_p224(),
        nist_p256(),
        nist_p384(),
        nist_p521(),
        secp160r1(),
        brainpool_p256r1(),
    ]
}

/// Look up a curve by name, e.g. `"secp256k1"` or `"P-256"`.
pub fn by_name(name: &str) -> Option<&'static Group> {
    all()
        .into_iter()
        .find(|group| group.name().eq_ignore_ascii_case(name))
}
