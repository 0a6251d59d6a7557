//! Repository layer over the flat-file store.
//!
//! # Responsibility
//! - Define data access contracts for resident and vehicle collections.
//! - Keep file-format details inside the persistence boundary.
//!
//! # Invariants
//! - Write paths validate records before touching storage.
//! - Repository APIs return semantic errors (`NotFound`) in addition to
//!   storage transport errors.

use crate::model::validate::ValidationError;
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod resident_repo;
pub mod vehicle_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for registry persistence and mutation operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Store(StoreError),
    NotFound(Uuid),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
