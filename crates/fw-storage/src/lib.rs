//! Storage abstraction for the first-words service.
//!
//! Defines the provider traits consumed by access resolution and the HTTP
//! layer, the shared storage error type, and an in-memory backend used by
//! tests and local development. The Postgres backend lives in
//! `fw-storage-sql`.

#![forbid(unsafe_code)]

pub mod child;
pub mod error;
pub mod memory;
pub mod milestone;
pub mod parent;
pub mod word;

pub use child::ChildProvider;
pub use error::{StorageError, StorageResult};
pub use memory::InMemoryStorage;
pub use milestone::MilestoneProvider;
pub use parent::ParentProvider;
pub use word::WordProvider;
