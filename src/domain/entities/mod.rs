//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for writes:
//! - [`NewUser`] - For creating new records
//! - [`UserUpdate`] - For replacing the mutable fields of an existing record

pub mod user;

pub use user::{NewUser, User, UserUpdate};
