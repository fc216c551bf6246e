//! Domain models for the first-words service.
//!
//! Pure data types shared by every other crate: parent accounts, the
//! children they own, and the records (first words and milestones)
//! attached to each child. No storage or transport concerns live here.

#![forbid(unsafe_code)]

pub mod child;
pub mod milestone;
pub mod parent;
pub mod principal;
pub mod role;
pub mod word;

pub use child::{Child, Gender};
pub use milestone::Milestone;
pub use parent::Parent;
pub use principal::Principal;
pub use role::Role;
pub use word::Word;
