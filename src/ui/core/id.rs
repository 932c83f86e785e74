/// Identity of a hit-test node. Stable across frames for the same logical element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Id(pub u64);

impl Id {
    pub const fn raw(v: u64) -> Self {
        Self(v)
    }

    /// Builds an id from a namespace and a list of keys.
    ///
    /// FNV-1a is used instead of `std` hashers because their output is not guaranteed to be
    /// stable across Rust versions.
    pub fn from_parts(ns: &'static str, keys: &[u64]) -> Self {
        let mut h = fnv1a64(FNV_OFFSET_BASIS_64, ns.as_bytes());
        for key in keys {
            h = fnv1a64(h, &[SEPARATOR]);
            h = fnv1a64(h, &key.to_le_bytes());
        }
        Self(h)
    }
}

const FNV_OFFSET_BASIS_64: u64 = 0xcbf29ce484222325;
const FNV_PRIME_64: u64 = 0x100000001b3;
const SEPARATOR: u8 = 0xff;

fn fnv1a64(mut h: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(FNV_PRIME_64);
    }
    h
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/id.rs"]
mod tests;
