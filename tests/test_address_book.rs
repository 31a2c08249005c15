//! Integration tests for the public address book API.
//!
//! These tests drive the library the way the demonstration binary does:
//! build records, store them in a book, then look up and mutate them by name
//! and phone value.

use address_book::{AddressBook, Phone, Record, ValidationError};
use proptest::prelude::*;

fn john() -> Record {
    let mut record = Record::new("John");
    record.add_phone("1234567890").unwrap();
    record.add_phone("5555555555").unwrap();
    record
}

#[test]
fn test_record_display_after_adding_phones() {
    assert_eq!(
        john().to_string(),
        "Contact name: John, phones: 1234567890; 5555555555"
    );
}

#[test]
fn test_edit_phone_then_display() {
    let mut record = john();

    let previous = record.edit_phone("1234567890", "1112223333").unwrap();
    assert_eq!(previous, Some(Phone::new("1234567890").unwrap()));
    assert_eq!(
        record.to_string(),
        "Contact name: John, phones: 1112223333; 5555555555"
    );

    assert_eq!(record.edit_phone("9999999999", "1231231234"), Ok(None));
    assert_eq!(
        record.to_string(),
        "Contact name: John, phones: 1112223333; 5555555555"
    );
}

#[test]
fn test_find_phone_hit_and_miss() {
    let record = john();
    assert_eq!(record.find_phone("5555555555").unwrap().as_str(), "5555555555");
    assert!(record.find_phone("0000000000").is_none());
}

#[test]
fn test_remove_phone_twice_is_not_found() {
    let mut record = john();
    assert!(record.remove_phone("5555555555").is_some());
    assert!(record.remove_phone("5555555555").is_none());
    assert_eq!(record.to_string(), "Contact name: John, phones: 1234567890");
}

#[test]
fn test_invalid_edit_is_a_validation_error() {
    let mut record = john();
    let err = record.edit_phone("1234567890", "12-34").unwrap_err();
    assert_eq!(err, ValidationError::InvalidPhone("12-34".to_string()));
    assert_eq!(record, john());
}

#[test]
fn test_book_lifecycle_is_case_insensitive() {
    let mut book = AddressBook::new();
    book.add_record(john());

    let mut jane = Record::new("Jane");
    jane.add_phone("9876543210").unwrap();
    book.add_record(jane.clone());

    assert_eq!(book.find("JANE"), Some(&jane));

    let removed = book.delete("Jane").unwrap();
    assert_eq!(removed, jane);
    assert!(book.find("Jane").is_none());
    assert!(book.delete("jane").is_none());
    assert_eq!(book.len(), 1);
}

#[test]
fn test_listing_follows_insertion_order() {
    let mut book = AddressBook::new();
    book.add_record(john());
    book.add_record(Record::new("Jane"));
    book.add_record(Record::new("alice"));

    let keys: Vec<&str> = book.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["john", "jane", "alice"]);
}

#[test]
fn test_edit_through_book() {
    let mut book = AddressBook::new();
    book.add_record(john());

    if let Some(record) = book.find_mut("john") {
        record.edit_phone("1234567890", "1112223333").unwrap();
    }

    assert_eq!(
        book.find("John").unwrap().to_string(),
        "Contact name: John, phones: 1112223333; 5555555555"
    );
}

#[test]
fn test_json_round_trip_keeps_order_and_keys() {
    let mut book = AddressBook::new();
    book.add_record(john());
    book.add_record(Record::new("Jane"));

    let restored = AddressBook::from_json(&book.to_json().unwrap()).unwrap();
    assert_eq!(restored, book);
    let names: Vec<&str> = restored.records().map(|r| r.name().as_str()).collect();
    assert_eq!(names, vec!["John", "Jane"]);
}

proptest! {
    #[test]
    fn test_ten_digit_strings_are_accepted(digits in "[0-9]{10}") {
        let phone = Phone::new(digits.clone()).unwrap();
        prop_assert_eq!(phone.to_string(), digits);
    }

    #[test]
    fn test_wrong_length_is_rejected(digits in "[0-9]{0,9}|[0-9]{11,20}") {
        prop_assert!(Phone::new(digits).is_err());
    }

    #[test]
    fn test_non_ascii_decimal_digits_are_accepted(digits in "[\\x{0660}-\\x{0669}\\x{0966}-\\x{096F}0-9]{10}") {
        prop_assert!(Phone::new(digits).is_ok());
    }

    #[test]
    fn test_non_digit_is_rejected(
        prefix in "[0-9]{0,9}",
        bad in "[^\\p{N}]",
        suffix in "[0-9]{0,9}",
    ) {
        let candidate = format!("{}{}{}", prefix, bad, suffix);
        prop_assert!(Phone::new(candidate).is_err());
    }

    #[test]
    fn test_failed_add_leaves_record_unchanged(bad in "[a-z]{1,12}") {
        let mut record = john();
        prop_assert!(record.add_phone(&bad).is_err());
        prop_assert_eq!(record, john());
    }
}
