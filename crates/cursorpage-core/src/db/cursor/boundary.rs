use crate::value::Value;

///
/// CursorBoundary
///
/// Decoded cursor position: the value of every sort field (tie-break
/// included) for one row, in sort order.
///

#[derive(Clone, Debug, PartialEq)]
pub struct CursorBoundary {
    slots: Vec<(String, Value)>,
}

impl CursorBoundary {
    pub(crate) const fn new(slots: Vec<(String, Value)>) -> Self {
        Self { slots }
    }

    /// Value recorded for `field`, if that field is part of the boundary.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.slots
            .iter()
            .find_map(|(name, value)| (name == field).then_some(value))
    }

    /// Values in sort order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Value> + ExactSizeIterator {
        self.slots.iter().map(|(_, value)| value)
    }

    /// `(field, value)` pairs in sort order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.slots.iter().map(|(name, value)| (name.as_str(), value))
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn into_slots(self) -> Vec<(String, Value)> {
        self.slots
    }
}
