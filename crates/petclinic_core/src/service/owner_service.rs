//! Owner use-case service.
//!
//! # Responsibility
//! - Be the single entry point for owner create/find/update.
//! - Turn repository absence (`None`) into `OwnerNotFound`.
//!
//! # Invariants
//! - `update` never writes unless a stored row with the same id exists.
//! - `update` uses full replacement semantics; there is no field merge.
//! - Log events carry ids and counts only, never personal data.

use crate::model::owner::{Owner, OwnerId};
use crate::repo::owner_repo::{OwnerRepository, RepoError};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type OwnerServiceResult<T> = Result<T, OwnerServiceError>;

/// Service error for owner use-cases.
#[derive(Debug)]
pub enum OwnerServiceError {
    /// No stored owner has the requested id.
    ///
    /// `None` means the caller passed a record without an id to `update`.
    OwnerNotFound(Option<OwnerId>),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl OwnerServiceError {
    /// Returns whether this error is the not-found signal.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::OwnerNotFound(_))
    }
}

impl Display for OwnerServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OwnerNotFound(Some(id)) => write!(f, "owner not found with id: {id}"),
            Self::OwnerNotFound(None) => write!(f, "owner not found: record has no id"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for OwnerServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::OwnerNotFound(_) => None,
        }
    }
}

impl From<RepoError> for OwnerServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Owner service facade over repository implementations.
pub struct OwnerService<R: OwnerRepository> {
    repo: R,
}

impl<R: OwnerRepository> OwnerService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists `owner` as a new record and returns it with its assigned id.
    ///
    /// Every call is an insert request; no existence check is made.
    pub fn create(&self, owner: &Owner) -> OwnerServiceResult<Owner> {
        let created = self.repo.save(owner)?;
        info!(
            "event=owner_create module=service status=ok owner_id={}",
            display_id(created.id)
        );
        Ok(created)
    }

    /// Loads one owner, failing with `OwnerNotFound` when absent.
    pub fn find_by_id(&self, id: OwnerId) -> OwnerServiceResult<Owner> {
        match self.repo.find_by_id(id)? {
            Some(owner) => Ok(owner),
            None => {
                warn!(
                    "event=owner_find module=service status=error owner_id={id} error_code=owner_not_found"
                );
                Err(OwnerServiceError::OwnerNotFound(Some(id)))
            }
        }
    }

    /// Lists owners with exactly this last name. An empty list is not an error.
    pub fn find_by_last_name(&self, last_name: &str) -> OwnerServiceResult<Vec<Owner>> {
        let owners = self.repo.find_by_last_name(last_name)?;
        info!(
            "event=owner_find_by_last_name module=service status=ok count={}",
            owners.len()
        );
        for owner in &owners {
            debug!(
                "event=owner_find_by_last_name module=service status=item owner_id={}",
                display_id(owner.id)
            );
        }
        Ok(owners)
    }

    /// Replaces the stored owner that has `owner.id` with `owner`.
    ///
    /// # Errors
    /// - `OwnerNotFound(None)` when `owner.id` is absent; storage is not touched.
    /// - `OwnerNotFound(Some(id))` when no row has that id; nothing is written.
    pub fn update(&self, owner: &Owner) -> OwnerServiceResult<Owner> {
        let Some(id) = owner.id else {
            warn!(
                "event=owner_update module=service status=error owner_id=none error_code=owner_missing_id"
            );
            return Err(OwnerServiceError::OwnerNotFound(None));
        };

        if self.repo.find_by_id(id)?.is_none() {
            warn!(
                "event=owner_update module=service status=error owner_id={id} error_code=owner_not_found"
            );
            return Err(OwnerServiceError::OwnerNotFound(Some(id)));
        }

        let updated = self.repo.save(owner)?;
        info!("event=owner_update module=service status=ok owner_id={id}");
        Ok(updated)
    }
}

fn display_id(id: Option<OwnerId>) -> String {
    id.map_or_else(|| "none".to_string(), |id| id.to_string())
}
