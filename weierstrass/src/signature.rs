//! ECDSA signature values and digest handling.

use core::fmt;
use num_bigint::BigUint;

/// ECDSA signature `(r, s)`.
///
/// This is a plain value: range checks against a group order happen during
/// verification.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Create a signature from its components.
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// Parse a signature from big-endian `r || s` bytes of equal length.
    ///
    /// Returns `None` for an empty or odd-length input.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.is_empty() || bytes.len() % 2 != 0 {
            return None;
        }

        let (r, s) = bytes.split_at(bytes.len() / 2);
        Some(Self::new(
            BigUint::from_bytes_be(r),
            BigUint::from_bytes_be(s),
        ))
    }

    /// Serialize as big-endian `r || s`, each left-padded to `len` bytes.
    ///
    /// Returns `None` if a component does not fit in `len` bytes.
    pub fn to_bytes(&self, len: usize) -> Option<Vec<u8>> {
        let r = self.r.to_bytes_be();
        let s = self.s.to_bytes_be();
        if r.len() > len || s.len() > len {
            return None;
        }

        let mut out = vec![0u8; 2 * len];
        out[len - r.len()..len].copy_from_slice(&r);
        out[2 * len - s.len()..].copy_from_slice(&s);
        Some(out)
    }

    /// The `r` component.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &BigUint {
        &self.s
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signature")
            .field("r", &format_args!("0x{:x}", self.r))
            .field("s", &format_args!("0x{:x}", self.s))
            .finish()
    }
}

/// Convert a message digest into an integer of at most `bit_length` bits.
///
/// The digest is read as a big-endian integer. Digests longer than
/// `bit_length` bits keep their leftmost `bit_length` bits; shorter digests
/// are used as-is.
pub fn normalize_digest(digest: &[u8], bit_length: u64) -> BigUint {
    let e = BigUint::from_bytes_be(digest);
    let digest_bits = digest.len() as u64 * 8;

    if digest_bits > bit_length {
        e >> (digest_bits - bit_length)
    } else {
        e
    }
}
