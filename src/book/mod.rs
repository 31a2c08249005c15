//! The address book: records indexed by case-folded name.

pub mod address_book;

pub use address_book::AddressBook;
