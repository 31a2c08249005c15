//! Address Book - demonstration driver
//!
//! Builds a small address book, edits it, and prints the results to stdout.

use address_book::{AddressBook, AddressBookResult, Config, Field, OutputFormat, Record};
use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logs go to stderr so stdout carries only the listing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(output = %config.output_format, "Configuration loaded");

    let mut book = seed_book()?;

    println!("All records:");
    match config.output_format {
        OutputFormat::Text => print!("{}", book),
        OutputFormat::Json => println!("{}", book.to_json()?),
    }

    match book.find_mut("John") {
        Some(john) => {
            let (old_phone, new_phone) = ("1234567890", "1112223333");
            match john.edit_phone(old_phone, new_phone)? {
                Some(old) => println!("Phone {} changed to {}.", old, new_phone),
                None => println!("Phone not found."),
            }
            println!("{}", john);

            match john.find_phone("5555555555") {
                Some(phone) => println!("{}: {}", john.name().value(), phone),
                None => println!("{}: phone not found.", john.name()),
            }
        }
        None => error!("Record John missing from address book"),
    }

    match book.delete("Jane") {
        Some(record) => println!("Record {} deleted.", record.name()),
        None => println!("Record not found."),
    }

    info!(remaining = book.len(), "Done");
    Ok(())
}

fn seed_book() -> AddressBookResult<AddressBook> {
    let mut book = AddressBook::new();

    let mut john = Record::new("John");
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;
    book.add_record(john);

    let mut jane = Record::new("Jane");
    jane.add_phone("9876543210")?;
    book.add_record(jane);

    Ok(book)
}
