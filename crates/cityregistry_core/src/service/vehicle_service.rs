//! Vehicle use-case service.

use crate::model::vehicle::{Vehicle, VehicleForm, VehicleId};
use crate::repo::vehicle_repo::VehicleRepository;
use crate::repo::RepoResult;
use crate::stats::census::{vehicle_stats, VehicleStats};

/// Use-case wrapper for the vehicle side of the registry.
pub struct VehicleService<V: VehicleRepository> {
    repo: V,
}

impl<V: VehicleRepository> VehicleService<V> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: V) -> Self {
        Self { repo }
    }

    /// Registers a vehicle from raw form input.
    pub fn register_vehicle(&mut self, form: &VehicleForm) -> RepoResult<VehicleId> {
        let vehicle = Vehicle::from_form(form)?;
        self.repo.create_vehicle(&vehicle)
    }

    /// All vehicles in insertion order.
    pub fn list_vehicles(&self) -> &[Vehicle] {
        self.repo.list_vehicles()
    }

    /// Per-district vehicle counts.
    pub fn vehicle_stats(&self) -> VehicleStats {
        vehicle_stats(self.repo.list_vehicles())
    }
}
