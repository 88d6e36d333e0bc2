//! Rolodex - a local, single-user contact directory.
//!
//! This library stores named contact records with validated fields, supports
//! lookup, substring search and paginated rendering, and persists the whole
//! directory as one JSON file so state survives across invocations.
//!
//! # Architecture
//!
//! - **models**: validated field newtypes (name, phone, birthday) and the Record entity
//! - **book**: the AddressBook container with CRUD, search, and lazy pagination
//! - **storage**: JSON file persistence with re-validation on load
//! - **error**: custom error types for precise error handling
//! - **config**: configuration from environment variables
//! - **shell**: the interactive command loop driving the book

pub mod book;
pub mod config;
pub mod error;
pub mod models;
pub mod shell;
pub mod storage;

pub use book::{AddressBook, Pages};
pub use config::Config;
pub use error::{
    ConfigError, RecordError, RecordResult, StorageError, StorageResult, ValidationError,
    ValidationResult,
};
pub use models::{Birthday, Name, Phone, Record};
