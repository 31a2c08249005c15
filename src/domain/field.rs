//! Common interface for single-value contact fields.

use std::fmt;

/// A field holding one textual value.
///
/// `Display` renders the stored value unchanged, so `to_string()` is the
/// field's display form.
pub trait Field: fmt::Display {
    /// The stored value.
    fn value(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Name, Phone};

    fn render<F: Field>(field: &F) -> (String, String) {
        (field.value().to_string(), field.to_string())
    }

    #[test]
    fn test_display_matches_value() {
        let (value, shown) = render(&Name::new("John"));
        assert_eq!(value, shown);

        let (value, shown) = render(&Phone::new("1234567890").unwrap());
        assert_eq!(value, "1234567890");
        assert_eq!(value, shown);
    }
}
