//! Case-insensitive table of contact records.

use crate::domain::name_key;
use crate::error::AddressBookResult;
use crate::models::Record;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A collection of records keyed by lowercased name.
///
/// At most one record exists per case-folded name. Iteration follows
/// insertion order; replacing a record keeps its original slot.
///
/// # Example
///
/// ```
/// use address_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// book.add_record(Record::new("Jane"));
/// assert!(book.find("JANE").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its lowercased name.
    ///
    /// An existing record with the same key is replaced and returned.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().key();
        let previous = self.records.insert(key, record);

        match &previous {
            Some(old) => tracing::warn!(contact = %old.name(), "Replaced existing record"),
            None => tracing::debug!(count = self.records.len(), "Added record"),
        }

        previous
    }

    /// Look up a record by name, ignoring case.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(&name_key(name))
    }

    /// Mutable lookup by name, ignoring case.
    ///
    /// The record's name cannot be changed through this reference, so the
    /// key stays in sync.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(&name_key(name))
    }

    /// Remove a record by name, ignoring case.
    ///
    /// Returns the removed record, or `None` if no record matched.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.shift_remove(&name_key(name));
        if let Some(record) = &removed {
            tracing::debug!(contact = %record.name(), "Deleted record");
        }
        removed
    }

    /// Iterate over `(key, record)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.records.iter().map(|(key, record)| (key.as_str(), record))
    }

    /// Iterate over records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Pretty-printed JSON array of records.
    pub fn to_json(&self) -> AddressBookResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a JSON array of records.
    ///
    /// Phones are validated on the way in; a later record whose name collides
    /// with an earlier one replaces it.
    pub fn from_json(json: &str) -> AddressBookResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = (&'a String, &'a Record);
    type IntoIter = indexmap::map::Iter<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in self.records() {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}

// Serde support - serialize as the ordered list of records
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.records())
    }
}

// Serde support - keys are rebuilt from record names
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        Ok(records.into_iter().collect())
    }
}
