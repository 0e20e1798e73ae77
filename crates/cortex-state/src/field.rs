//! Explicit known/unknown marker for optional snapshot fields.
//!
//! Snapshots are written by external processes and may omit any field. A
//! [`Field`] keeps "never reported" distinct from "reported zero" all the
//! way into presentation, where unknowns render as a placeholder instead of
//! a fake default value.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Placeholder rendered for a field no node has reported.
pub const UNKNOWN_PLACEHOLDER: &str = "—";

/// An optional snapshot field that is either a reported value or unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field<T> {
    /// The value was present in the source snapshot
    Known(T),
    /// The source snapshot never reported this field
    Unknown,
}

impl<T> Field<T> {
    /// True if a value was reported.
    pub fn is_known(&self) -> bool {
        matches!(self, Field::Known(_))
    }

    /// True if no value was reported.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Field::Unknown)
    }

    /// The reported value, if any.
    pub fn known(self) -> Option<T> {
        match self {
            Field::Known(value) => Some(value),
            Field::Unknown => None,
        }
    }

    /// Borrowing view of the field.
    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Field::Known(value) => Field::Known(value),
            Field::Unknown => Field::Unknown,
        }
    }

    /// Apply a function to the reported value, keeping unknowns unknown.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Field<U> {
        match self {
            Field::Known(value) => Field::Known(f(value)),
            Field::Unknown => Field::Unknown,
        }
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Unknown
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Field::Known(value),
            None => Field::Unknown,
        }
    }
}

impl<T> From<Field<T>> for Option<T> {
    fn from(field: Field<T>) -> Self {
        field.known()
    }
}

impl<T: fmt::Display> fmt::Display for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Known(value) => value.fmt(f),
            Field::Unknown => f.write_str(UNKNOWN_PLACEHOLDER),
        }
    }
}

// A known value serializes transparently; unknown serializes as null
// (snapshot structs skip unknowns entirely on output).
impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Known(value) => value.serialize(serializer),
            Field::Unknown => serializer.serialize_none(),
        }
    }
}

// Both a missing field (via #[serde(default)]) and an explicit null
// deserialize to unknown.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Field::from)
    }
}
