use crate::db::sort::SortSpec;
use sha2::{Digest, Sha256};
use std::fmt;

///
/// SortSignature
///
/// Stable, deterministic fingerprint of a sort specification's shape
/// (field names and directions, in order). Cursor values are not part of it.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SortSignature([u8; 8]);

impl SortSignature {
    pub(crate) const fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    pub(crate) const fn into_bytes(self) -> [u8; 8] {
        self.0
    }

    pub(super) fn of(spec: &SortSpec) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(b"sortsig:v1");
        write_len(&mut hasher, spec.len());
        for sort_field in spec.fields() {
            write_str(&mut hasher, &sort_field.field);
            hasher.update([sort_field.direction.tag()]);
        }

        let digest = hasher.finalize();
        let mut out = [0u8; 8];
        out.copy_from_slice(&digest[..8]);

        Self(out)
    }

    #[must_use]
    pub fn as_hex(&self) -> String {
        let mut out = String::with_capacity(16);
        for byte in self.0 {
            use std::fmt::Write as _;
            let _ = write!(out, "{byte:02x}");
        }
        out
    }
}

impl fmt::Display for SortSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_hex())
    }
}

// Lengths are hashed as big-endian u32; anything larger saturates.
fn write_len(hasher: &mut Sha256, len: usize) {
    let len = u32::try_from(len).unwrap_or(u32::MAX);
    hasher.update(len.to_be_bytes());
}

// Length-prefix strings so adjacent names cannot alias ("ab","c" vs "a","bc").
fn write_str(hasher: &mut Sha256, value: &str) {
    write_len(hasher, value.len());
    hasher.update(value.as_bytes());
}
