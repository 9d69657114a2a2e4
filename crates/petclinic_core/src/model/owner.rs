//! Owner domain model.
//!
//! # Responsibility
//! - Define the canonical customer record of the clinic.
//! - Provide construction helpers for callers and tests.
//!
//! # Invariants
//! - `id` is `None` until the record is first persisted.
//! - Once assigned, `id` is stable and never reused for another owner.
//! - Every other attribute may legally be absent.

use serde::{Deserialize, Serialize};

/// Store-assigned identifier of an owner.
pub type OwnerId = i64;

/// Pet-clinic customer record.
///
/// All descriptive fields are optional; the storage schema keeps them
/// nullable and `update` writes them back as given, including `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    /// Identity assigned by the store on first save.
    pub id: Option<OwnerId>,
    pub first_name: Option<String>,
    /// Secondary lookup key (`find_by_last_name`).
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub telephone: Option<String>,
}

impl Owner {
    /// Creates an unsaved owner with first and last name set.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            ..Self::default()
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_telephone(mut self, telephone: impl Into<String>) -> Self {
        self.telephone = Some(telephone.into());
        self
    }

    /// Returns whether the store has assigned an identity to this record.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
