//! Resident repository contract and JSON-file implementation.
//!
//! # Responsibility
//! - Provide stable mutation and lookup APIs over the population file.
//! - Re-save the owning collection after every successful mutation.
//!
//! # Invariants
//! - Records keep insertion order; listings never reorder.
//! - After every call, in-memory state matches the backing file: a failed
//!   save rolls the in-memory mutation back before the error is returned.
//! - Only `age` and `district` are editable; identity fields are fixed at
//!   registration.

use crate::model::district::District;
use crate::model::resident::{Resident, ResidentId};
use crate::repo::{RepoError, RepoResult};
use crate::store;
use log::info;
use std::path::{Path, PathBuf};

/// Repository interface for resident mutations and lookups.
pub trait ResidentRepository {
    fn create_resident(&mut self, resident: &Resident) -> RepoResult<ResidentId>;
    fn update_resident(&mut self, id: ResidentId, age: u8, district: District) -> RepoResult<()>;
    fn remove_resident(&mut self, id: ResidentId) -> RepoResult<()>;
    fn get_resident(&self, id: ResidentId) -> Option<&Resident>;
    fn list_residents(&self) -> &[Resident];
}

/// Resident repository backed by one whole-file JSON collection.
///
/// The collection is loaded once at open and held in memory; every
/// mutation rewrites the full file.
#[derive(Debug)]
pub struct JsonResidentRepository {
    path: PathBuf,
    records: Vec<Resident>,
}

impl JsonResidentRepository {
    /// Opens the population file at `path`, bootstrapping it empty when
    /// absent.
    pub fn open(path: impl Into<PathBuf>) -> RepoResult<Self> {
        let path = path.into();
        let records = store::load_or_init(&path)?;
        info!(
            "event=repo_open module=repo collection=residents records={} file={}",
            records.len(),
            path.display()
        );
        Ok(Self { path, records })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> RepoResult<()> {
        store::save(&self.path, &self.records)?;
        Ok(())
    }

    fn position(&self, id: ResidentId) -> RepoResult<usize> {
        self.records
            .iter()
            .position(|record| record.id == id)
            .ok_or(RepoError::NotFound(id))
    }
}

impl ResidentRepository for JsonResidentRepository {
    fn create_resident(&mut self, resident: &Resident) -> RepoResult<ResidentId> {
        resident.validate()?;

        self.records.push(resident.clone());
        if let Err(err) = self.persist() {
            self.records.pop();
            return Err(err);
        }
        Ok(resident.id)
    }

    fn update_resident(&mut self, id: ResidentId, age: u8, district: District) -> RepoResult<()> {
        let index = self.position(id)?;

        let mut updated = self.records[index].clone();
        updated.age = age;
        updated.district = district;
        updated.validate()?;

        let previous = std::mem::replace(&mut self.records[index], updated);
        if let Err(err) = self.persist() {
            self.records[index] = previous;
            return Err(err);
        }
        Ok(())
    }

    fn remove_resident(&mut self, id: ResidentId) -> RepoResult<()> {
        let index = self.position(id)?;

        let removed = self.records.remove(index);
        if let Err(err) = self.persist() {
            self.records.insert(index, removed);
            return Err(err);
        }
        Ok(())
    }

    fn get_resident(&self, id: ResidentId) -> Option<&Resident> {
        self.records.iter().find(|record| record.id == id)
    }

    fn list_residents(&self) -> &[Resident] {
        &self.records
    }
}
