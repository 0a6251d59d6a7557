//! Vehicle repository contract and JSON-file implementation.
//!
//! # Responsibility
//! - Provide registration and listing over the cars file.
//!
//! # Invariants
//! - Records keep insertion order.
//! - A failed save rolls the in-memory mutation back.
//!
//! The vehicle side of the registry only registers and tallies; there is
//! no vehicle search or edit flow.

use crate::model::vehicle::{Vehicle, VehicleId};
use crate::repo::RepoResult;
use crate::store;
use log::info;
use std::path::{Path, PathBuf};

/// Repository interface for vehicle registration and listing.
pub trait VehicleRepository {
    fn create_vehicle(&mut self, vehicle: &Vehicle) -> RepoResult<VehicleId>;
    fn list_vehicles(&self) -> &[Vehicle];
}

/// Vehicle repository backed by one whole-file JSON collection.
pub struct JsonVehicleRepository {
    path: PathBuf,
    records: Vec<Vehicle>,
}

impl JsonVehicleRepository {
    /// Opens the cars file at `path`, bootstrapping it empty when absent.
    pub fn open(path: impl Into<PathBuf>) -> RepoResult<Self> {
        let path = path.into();
        let records = store::load_or_init(&path)?;
        info!(
            "event=repo_open module=repo collection=vehicles records={} file={}",
            records.len(),
            path.display()
        );
        Ok(Self { path, records })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VehicleRepository for JsonVehicleRepository {
    fn create_vehicle(&mut self, vehicle: &Vehicle) -> RepoResult<VehicleId> {
        vehicle.validate()?;

        self.records.push(vehicle.clone());
        if let Err(err) = store::save(&self.path, &self.records) {
            self.records.pop();
            return Err(err.into());
        }
        Ok(vehicle.id)
    }

    fn list_vehicles(&self) -> &[Vehicle] {
        &self.records
    }
}
