//! Domain model for the pet-clinic core.
//!
//! # Responsibility
//! - Define the records managed by core business logic.
//!
//! # Invariants
//! - Every persisted record carries a store-assigned `OwnerId`.
//! - Records are never hard-deleted by core APIs.

pub mod owner;
