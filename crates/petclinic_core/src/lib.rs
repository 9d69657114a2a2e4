//! Core domain logic for the pet-clinic owner registry.
//! This crate is the single source of truth for owner invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::ClinicConfig;
pub use logging::{default_log_level, init_logging, LoggingConfig, LoggingError};
pub use model::owner::{Owner, OwnerId};
pub use repo::owner_repo::{OwnerRepository, RepoError, RepoResult, SqliteOwnerRepository};
pub use service::owner_service::{OwnerService, OwnerServiceError, OwnerServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
