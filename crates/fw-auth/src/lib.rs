//! Access control core for the first-words service.
//!
//! Everything that decides "may this caller touch this child" lives here:
//! the access resolver, the date range validator for record queries, the
//! shared error taxonomy, and password hashing for parent accounts. The
//! HTTP layer translates these errors to status codes but never makes
//! access decisions of its own.

#![forbid(unsafe_code)]

pub mod access;
pub mod dates;
pub mod error;
pub mod password;

pub use access::{AccessResolver, ChildAccess};
pub use dates::validate_date_range;
pub use error::{AccessError, AccessResult};
pub use password::{PasswordError, PasswordPolicy, PasswordService};
