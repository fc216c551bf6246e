//! Postgres storage backend for the first-words service.
//!
//! Implements the `fw-storage` provider traits on a sqlx connection pool.
//! Queries are written against the schema in the workspace `migrations/`
//! directory; `run_migrations` applies it at startup.

#![forbid(unsafe_code)]

mod convert;
mod entities;
mod error;

pub mod child;
pub mod milestone;
pub mod parent;
pub mod pool;
pub mod word;

pub use child::PgChildProvider;
pub use milestone::PgMilestoneProvider;
pub use parent::PgParentProvider;
pub use pool::{create_pool, run_migrations, PoolConfig};
pub use word::PgWordProvider;
