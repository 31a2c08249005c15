//! Record model representing a contact in the address book.

use crate::domain::{Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: one name and an ordered list of phone numbers.
///
/// Phones keep insertion order and may repeat. Lookups compare the stored
/// digits exactly and always act on the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no phones.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate `phone` and append it.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `phone` is not ten digits;
    /// the record is unchanged.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(phone)?;
        tracing::debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// Returns the removed phone, or `None` if no phone matched.
    pub fn remove_phone(&mut self, phone: &str) -> Option<Phone> {
        let index = self.position(phone)?;
        let removed = self.phones.remove(index);
        tracing::debug!(contact = %self.name, phone = %removed, "Removed phone");
        Some(removed)
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// Returns `Ok(Some(previous))` on success and `Ok(None)` if `old` is not
    /// present. `new` is only validated once `old` has been found.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `new` is invalid; the
    /// record is unchanged.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<Option<Phone>, ValidationError> {
        let Some(index) = self.position(old) else {
            return Ok(None);
        };

        let replacement = Phone::new(new)?;
        tracing::debug!(contact = %self.name, old, new, "Editing phone");
        Ok(Some(std::mem::replace(&mut self.phones[index], replacement)))
    }

    /// Find the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    fn position(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}
