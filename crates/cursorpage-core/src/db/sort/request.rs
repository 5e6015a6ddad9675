use crate::db::{
    request::RequestError,
    sort::{SortDirection, SortField, SortSpec},
};
use serde::{Deserialize, Serialize};

///
/// SortRequest
///
/// User-facing `sortBy` / `sortOrder` parameters as transports receive them.
///
/// `sort_by` is a comma-separated list; each entry may carry its own
/// direction as `field:asc` / `field:desc`, overriding `sort_order`.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortRequest {
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_order: Option<SortDirection>,
}

impl SortRequest {
    #[must_use]
    pub fn new(sort_by: impl Into<String>, sort_order: SortDirection) -> Self {
        Self {
            sort_by: Some(sort_by.into()),
            sort_order: Some(sort_order),
        }
    }
}

impl SortSpec {
    /// Derive a sort specification from user-facing sort parameters.
    ///
    /// Only fields listed in `allowed_fields` (or the tie-break itself) may be
    /// sorted on; anything else is a client error. An absent or blank
    /// `sort_by` falls back to `default_field`.
    pub fn from_request(
        request: &SortRequest,
        allowed_fields: &[&str],
        default_field: &str,
        tiebreak: &str,
    ) -> Result<Self, RequestError> {
        let default_direction = request.sort_order.unwrap_or_default();

        let raw = request
            .sort_by
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .unwrap_or(default_field);

        let mut fields = Vec::new();
        for entry in raw.split(',').map(str::trim) {
            let (name, direction) = match entry.split_once(':') {
                Some((name, direction)) => (name.trim(), direction.parse::<SortDirection>()?),
                None => (entry, default_direction),
            };

            if name != tiebreak && !allowed_fields.contains(&name) {
                return Err(RequestError::InvalidSortField {
                    field: name.to_string(),
                });
            }

            fields.push(SortField::new(name, direction));
        }

        Ok(Self::new(fields, tiebreak)?)
    }
}
