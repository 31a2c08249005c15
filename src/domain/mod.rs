//! Domain value objects and types.
//!
//! This module contains the field types a contact is built from. Phone
//! numbers are validated at construction time so an invalid number can never
//! be stored in a record.

pub mod digits;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use digits::is_decimal_digit;
pub use errors::ValidationError;
pub use field::Field;
pub use name::{name_key, Name};
pub use phone::{Phone, PHONE_DIGITS};
