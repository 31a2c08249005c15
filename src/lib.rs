//! Address Book - an in-memory contact table with validated phone numbers.
//!
//! Contacts are [`Record`]s holding a name and an ordered list of ten-digit
//! phone numbers. An [`AddressBook`] stores records under their lowercased
//! name, so lookups ignore case.
//!
//! Missing phones and records are reported as `None`, never as errors.
//! Invalid phone numbers are rejected with a [`ValidationError`].
//!
//! # Architecture
//!
//! - **domain**: Field value objects (`Name`, `Phone`) and validation errors
//! - **models**: The `Record` aggregate
//! - **book**: The case-insensitive `AddressBook`
//! - **error**: Crate error types
//! - **config**: Configuration from environment variables

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::AddressBook;
pub use config::{Config, OutputFormat};
pub use domain::{Field, Name, Phone, ValidationError};
pub use error::{AddressBookError, AddressBookResult, ConfigError};
pub use models::Record;
