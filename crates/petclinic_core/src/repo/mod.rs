//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repositories represent absence as `None` or an empty list; they never
//!   report a missing record as an error.

pub mod owner_repo;
