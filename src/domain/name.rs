//! Name value object.

use super::field::Field;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The display name of a contact.
///
/// Names are stored exactly as given. Lookups in an address book go through
/// [`Name::key`], which folds case.
///
/// # Example
///
/// ```
/// use address_book::domain::Name;
///
/// let name = Name::new("Jane");
/// assert_eq!(name.as_str(), "Jane");
/// assert_eq!(name.key(), "jane");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Create a new Name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Case-insensitive lookup key for this name.
    pub fn key(&self) -> String {
        name_key(&self.0)
    }
}

/// Lowercase a raw name into an address book key.
pub fn name_key(name: &str) -> String {
    name.to_lowercase()
}

impl Field for Name {
    fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
