//! Data models for the contact directory.
//!
//! This module contains the validated field newtypes and the record entity
//! built on top of them.

pub mod fields;
pub mod record;

pub use fields::{Birthday, Name, Phone, BIRTHDAY_FORMAT};
pub use record::Record;
