use crate::{
    db::{
        cursor::{
            Cursor, CursorBoundary, CursorError,
            wire::{
                CursorTokenVersion, CursorTokenWire, MAX_CURSOR_PAYLOAD_BYTES,
                MAX_CURSOR_TOKEN_LEN,
            },
        },
        predicate::Row,
        sort::{SortSignature, SortSpec},
    },
    serialize::{deserialize_bounded, serialize},
    value::Value,
};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

///
/// CursorCodec
///
/// Encodes row positions under one `SortSpec` into opaque tokens and back.
///
/// Tokens are `base64url(cbor({version, signature, values}))`. They are
/// opaque and compact, not tamper-proof: the signature only binds a token
/// to the shape of the sort it was produced under.
///

#[derive(Clone, Copy, Debug)]
pub struct CursorCodec<'a> {
    spec: &'a SortSpec,
    signature: SortSignature,
}

impl<'a> CursorCodec<'a> {
    #[must_use]
    pub fn new(spec: &'a SortSpec) -> Self {
        Self {
            spec,
            signature: spec.signature(),
        }
    }

    #[must_use]
    pub const fn spec(&self) -> &'a SortSpec {
        self.spec
    }

    /// Encode the position of `row`. Missing fields are recorded as `Null`.
    pub fn encode<R: Row + ?Sized>(&self, row: &R) -> Result<Cursor, CursorError> {
        let values = self
            .spec
            .field_names()
            .map(|name| row.field(name).into_value())
            .collect();

        self.encode_values(values)
    }

    /// Re-encode an already decoded boundary.
    pub fn encode_boundary(&self, boundary: &CursorBoundary) -> Result<Cursor, CursorError> {
        if boundary.len() != self.spec.len() {
            return Err(CursorError::ArityMismatch {
                expected: self.spec.len(),
                found: boundary.len(),
            });
        }

        self.encode_values(boundary.values().cloned().collect())
    }

    /// Decode a token produced under this codec's sort spec.
    ///
    /// The token may include surrounding whitespace, which is trimmed.
    pub fn decode(&self, cursor: &Cursor) -> Result<CursorBoundary, CursorError> {
        let token = cursor.as_str().trim();

        if token.is_empty() {
            return Err(CursorError::Empty);
        }

        if token.len() > MAX_CURSOR_TOKEN_LEN {
            return Err(CursorError::TooLong {
                len: token.len(),
                max: MAX_CURSOR_TOKEN_LEN,
            });
        }

        let bytes = URL_SAFE_NO_PAD
            .decode(token)
            .map_err(|_| CursorError::InvalidEncoding)?;
        let wire: CursorTokenWire = deserialize_bounded(&bytes, MAX_CURSOR_PAYLOAD_BYTES)
            .map_err(|err| CursorError::decode(&err))?;

        // Version first so compatibility behavior remains centralized.
        CursorTokenVersion::decode(wire.version).ok_or(CursorError::UnsupportedVersion {
            version: wire.version,
        })?;

        let actual = SortSignature::from_bytes(wire.signature);
        if actual != self.signature {
            return Err(CursorError::SignatureMismatch {
                expected: self.signature.to_string(),
                actual: actual.to_string(),
            });
        }

        if wire.values.len() != self.spec.len() {
            return Err(CursorError::ArityMismatch {
                expected: self.spec.len(),
                found: wire.values.len(),
            });
        }

        let slots = self
            .spec
            .field_names()
            .map(str::to_string)
            .zip(wire.values)
            .collect();

        Ok(CursorBoundary::new(slots))
    }

    fn encode_values(&self, values: Vec<Value>) -> Result<Cursor, CursorError> {
        let wire = CursorTokenWire {
            version: CursorTokenVersion::CURRENT.encode(),
            signature: self.signature.into_bytes(),
            values,
        };
        let bytes = serialize(&wire).map_err(|err| CursorError::encode(&err))?;

        Ok(Cursor::new(URL_SAFE_NO_PAD.encode(bytes)))
    }

    #[cfg(test)]
    pub(crate) fn encode_with_version_for_test(
        &self,
        version: u8,
        values: Vec<Value>,
    ) -> Cursor {
        let wire = CursorTokenWire {
            version,
            signature: self.signature.into_bytes(),
            values,
        };
        let bytes = serialize(&wire).expect("test cursor wire should encode");

        Cursor::new(URL_SAFE_NO_PAD.encode(bytes))
    }
}

/// Encode the position of `row` under `spec`.
pub fn encode_cursor<R: Row + ?Sized>(row: &R, spec: &SortSpec) -> Result<Cursor, CursorError> {
    CursorCodec::new(spec).encode(row)
}

/// Decode `cursor` against `spec`.
pub fn decode_cursor(cursor: &Cursor, spec: &SortSpec) -> Result<CursorBoundary, CursorError> {
    CursorCodec::new(spec).decode(cursor)
}
