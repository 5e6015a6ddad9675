//! Module: sort
//! Responsibility: sort specifications, their shape signature, row ordering,
//! and keyset predicate construction.
//! Does not own: cursor token encoding or request validation.
//! Boundary: the engine derives effective (query) and original (semantic)
//! orders from one `SortSpec`.

mod keyset;
mod order;
mod request;
mod signature;


pub use keyset::{KeysetSide, after_predicate, before_predicate, keyset_predicate};
pub use order::{compare_row_with_boundary, compare_rows};
pub use request::SortRequest;
pub use signature::SortSignature;

use serde::{Deserialize, Deserializer, Serialize};
use std::{collections::BTreeSet, fmt, str::FromStr};
use thiserror::Error as ThisError;

/// Default unique tie-break field appended to every sort specification.
pub const DEFAULT_TIEBREAK_FIELD: &str = "id";

///
/// SortSpecError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SortSpecError {
    #[error("sort specification must contain at least one field")]
    Empty,

    #[error("sort field name must not be empty")]
    EmptyFieldName,

    #[error("sort field '{field}' appears more than once")]
    DuplicateField { field: String },

    #[error("invalid sort direction '{value}': expected ASC or DESC")]
    InvalidDirection { value: String },
}

///
/// SortDirection
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Flip the direction.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    #[must_use]
    pub const fn is_asc(self) -> bool {
        matches!(self, Self::Asc)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    pub(crate) const fn tag(self) -> u8 {
        match self {
            Self::Asc => 0x01,
            Self::Desc => 0x02,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = SortSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            _ => Err(SortSpecError::InvalidDirection {
                value: s.to_string(),
            }),
        }
    }
}

// Accept any casing on the wire; transports forward raw query strings.
impl<'de> Deserialize<'de> for SortDirection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;

        raw.parse().map_err(serde::de::Error::custom)
    }
}

///
/// SortField
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SortField {
    pub field: String,
    pub direction: SortDirection,
}

impl SortField {
    #[must_use]
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    #[must_use]
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    #[must_use]
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    #[must_use]
    fn reversed(&self) -> Self {
        Self::new(self.field.clone(), self.direction.reverse())
    }
}

///
/// SortSpec
///
/// Ordered, duplicate-free list of sort fields terminated by a unique
/// tie-break field, giving a total order over rows.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SortSpec {
    fields: Vec<SortField>,
}

impl SortSpec {
    /// Build a sort specification, appending `tiebreak` ascending when absent.
    pub fn new(
        fields: impl IntoIterator<Item = SortField>,
        tiebreak: &str,
    ) -> Result<Self, SortSpecError> {
        let mut fields: Vec<SortField> = fields.into_iter().collect();
        if fields.is_empty() {
            return Err(SortSpecError::Empty);
        }
        if tiebreak.is_empty() {
            return Err(SortSpecError::EmptyFieldName);
        }

        let mut seen = BTreeSet::new();
        for sort_field in &fields {
            if sort_field.field.is_empty() {
                return Err(SortSpecError::EmptyFieldName);
            }
            if !seen.insert(sort_field.field.as_str()) {
                return Err(SortSpecError::DuplicateField {
                    field: sort_field.field.clone(),
                });
            }
        }

        if !seen.contains(tiebreak) {
            fields.push(SortField::asc(tiebreak));
        }

        Ok(Self { fields })
    }

    /// Single-field sort plus the tie-break.
    pub fn single(
        field: impl Into<String>,
        direction: SortDirection,
        tiebreak: &str,
    ) -> Result<Self, SortSpecError> {
        Self::new([SortField::new(field, direction)], tiebreak)
    }

    /// Sort on the tie-break field alone.
    pub fn by_tiebreak(tiebreak: &str, direction: SortDirection) -> Result<Self, SortSpecError> {
        Self::single(tiebreak, direction, tiebreak)
    }

    #[must_use]
    pub fn fields(&self) -> &[SortField] {
        &self.fields
    }

    /// Field names in sort order, tie-break included.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|sort_field| sort_field.field.as_str())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Direction of the primary (first) sort field.
    #[must_use]
    pub fn primary_direction(&self) -> SortDirection {
        self.fields
            .first()
            .map_or(SortDirection::Asc, |sort_field| sort_field.direction)
    }

    /// Same fields with every direction flipped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            fields: self.fields.iter().map(SortField::reversed).collect(),
        }
    }

    /// Shape fingerprint embedded in cursors produced under this spec.
    #[must_use]
    pub fn signature(&self) -> SortSignature {
        SortSignature::of(self)
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, sort_field) in self.fields.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} {}", sort_field.field, sort_field.direction)?;
        }

        Ok(())
    }
}
