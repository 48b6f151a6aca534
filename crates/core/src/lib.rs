//! Domain types and rules for the todo service.
//!
//! Nothing in this crate touches HTTP or the database; the `db` and `api`
//! crates both depend on it for the error taxonomy and validation rules.

pub mod error;
pub mod todo;
pub mod types;
