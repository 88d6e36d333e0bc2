//! Integration tests for address book CRUD and record editing.
//!
//! These cover the full create/read/update/delete cycle through the public
//! API, including the phone-edit atomicity guarantees.

use rolodex::{AddressBook, Record, RecordError, ValidationError};

fn contact(name: &str, birthday: Option<&str>, phones: &[&str]) -> Record {
    let mut record = Record::new(name, birthday).unwrap();
    for phone in phones {
        record.add_phone(phone).unwrap();
    }
    record
}

#[test]
fn test_crud_lifecycle() {
    let mut book = AddressBook::new();

    // CREATE
    book.add_record(contact("Anna", Some("1990-05-01"), &["0991234567"]));
    assert_eq!(book.len(), 1);

    // READ
    let anna = book.find("Anna").expect("Anna should be stored");
    assert_eq!(anna.name().as_str(), "Anna");
    assert_eq!(anna.birthday().unwrap().to_string(), "1990-05-01");

    // UPDATE (through find_mut)
    let anna = book.find_mut("Anna").unwrap();
    anna.add_phone("0997654321").unwrap();
    assert_eq!(book.find("Anna").unwrap().phones().len(), 2);

    // DELETE
    assert!(book.delete("Anna"));
    assert!(book.find("Anna").is_none());
    assert!(book.is_empty());
}

#[test]
fn test_rename_is_delete_plus_readd() {
    let mut book = AddressBook::new();
    book.add_record(contact("Anna", None, &["0991234567"]));

    // the book indexes by name, so renaming means moving the record
    let record = book.find("Anna").unwrap().clone();
    let mut renamed = Record::new("Hanna", None).unwrap();
    for phone in record.phones() {
        renamed.add_phone(phone.as_str()).unwrap();
    }
    book.delete("Anna");
    book.add_record(renamed);

    assert!(book.find("Anna").is_none());
    assert!(book.find("Hanna").unwrap().find_phone("0991234567").is_some());
}

#[test]
fn test_spec_scenario_anna() {
    // construct, duplicate add, birthday countdown, edit, lookup
    let mut record = Record::new("Anna", Some("1990-05-01")).unwrap();
    record.add_phone("0991234567").unwrap();
    record.add_phone("0991234567").unwrap();
    assert_eq!(record.phones().len(), 1);

    let days = record.days_to_birthday().expect("birthday is set");
    assert!(days >= 0);

    record.edit_phone("0991234567", "0997654321").unwrap();
    assert!(record.find_phone("0991234567").is_none());
    assert_eq!(
        record.find_phone("0997654321").map(|p| p.as_str()),
        Some("0997654321")
    );
}

#[test]
fn test_edit_phone_error_taxonomy() {
    let mut record = contact("Anna", None, &["0991234567"]);

    // "nothing to edit" and "bad replacement value" are distinct failures
    let missing = record.edit_phone("1112223344", "0997654321").unwrap_err();
    assert!(matches!(missing, RecordError::PhoneNotFound(_)));

    let invalid = record.edit_phone("0991234567", "abc").unwrap_err();
    assert!(matches!(
        invalid,
        RecordError::Validation(ValidationError::InvalidPhone(_))
    ));

    // both failures left the record as it was
    assert_eq!(record.phones().len(), 1);
    assert!(record.find_phone("0991234567").is_some());
}

#[test]
fn test_trimmed_name_is_the_key() {
    let mut book = AddressBook::new();
    book.add_record(contact("  Anna  ", None, &[]));
    assert!(book.find("Anna").is_some());
}
