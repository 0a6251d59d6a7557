//! Resident use-case service.
//!
//! # Responsibility
//! - Turn raw form input into validated registry operations.
//! - Delegate persistence to the repository implementation.

use crate::model::resident::{Resident, ResidentForm, ResidentId};
use crate::model::validate::{parse_age, parse_district};
use crate::repo::resident_repo::ResidentRepository;
use crate::repo::RepoResult;
use crate::search::filter::{search_residents, ResidentFilter};
use crate::stats::census::{resident_stats, ResidentStats};

/// Use-case wrapper for the resident side of the registry.
///
/// The form layer constructs one of these at startup and routes every
/// resident action through it; there is no ambient registry state.
pub struct ResidentService<R: ResidentRepository> {
    repo: R,
}

impl<R: ResidentRepository> ResidentService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a resident from raw form input.
    ///
    /// Validation failures are returned before anything is persisted, so
    /// a rejected form leaves both memory and file untouched.
    pub fn register_resident(&mut self, form: &ResidentForm) -> RepoResult<ResidentId> {
        let resident = Resident::from_form(form)?;
        self.repo.create_resident(&resident)
    }

    /// Updates the editable fields of one resident.
    ///
    /// Only age and district can change; both arrive as raw form strings
    /// and are re-validated the same way as at registration.
    pub fn update_resident(
        &mut self,
        id: ResidentId,
        age_input: &str,
        district_input: &str,
    ) -> RepoResult<()> {
        let age = parse_age(age_input)?;
        let district = parse_district(district_input)?;
        self.repo.update_resident(id, age, district)
    }

    /// Removes one resident by stable ID.
    pub fn remove_resident(&mut self, id: ResidentId) -> RepoResult<()> {
        self.repo.remove_resident(id)
    }

    /// Gets one resident by stable ID.
    pub fn get_resident(&self, id: ResidentId) -> Option<&Resident> {
        self.repo.get_resident(id)
    }

    /// All residents in insertion order.
    pub fn list_residents(&self) -> &[Resident] {
        self.repo.list_residents()
    }

    /// Filters residents by the supplied criteria.
    pub fn search_residents(&self, filter: &ResidentFilter) -> Vec<Resident> {
        search_residents(self.repo.list_residents(), filter)
    }

    /// Per-district resident statistics.
    pub fn resident_stats(&self) -> ResidentStats {
        resident_stats(self.repo.list_residents())
    }
}
