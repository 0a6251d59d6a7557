//! Single-pass district tallies for residents and vehicles.

use crate::model::district::District;
use crate::model::resident::Resident;
use crate::model::vehicle::Vehicle;

/// Resident tally for one district.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistrictTally {
    pub count: usize,
    pub total_age: u64,
}

impl DistrictTally {
    /// Mean age of the district, defined only when it has residents.
    pub fn average_age(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        Some(self.total_age as f64 / self.count as f64)
    }
}

/// Resident statistics over the full district enumeration.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidentStats {
    tallies: Vec<(District, DistrictTally)>,
    total: usize,
}

impl ResidentStats {
    /// Tally for one district, zero when it has no residents.
    pub fn district(&self, district: District) -> DistrictTally {
        self.tallies
            .iter()
            .find(|(entry, _)| *entry == district)
            .map(|(_, tally)| *tally)
            .unwrap_or_default()
    }

    /// Districts with at least one resident, in enumeration order.
    pub fn occupied(&self) -> impl Iterator<Item = (District, DistrictTally)> + '_ {
        self.tallies
            .iter()
            .copied()
            .filter(|(_, tally)| tally.count > 0)
    }

    /// Grand total across all districts.
    pub fn total(&self) -> usize {
        self.total
    }
}

/// Vehicle counts over the full district enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleStats {
    counts: Vec<(District, usize)>,
    total: usize,
}

impl VehicleStats {
    /// Count for one district, zero when it has no vehicles.
    pub fn district(&self, district: District) -> usize {
        self.counts
            .iter()
            .find(|(entry, _)| *entry == district)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Districts with at least one vehicle, in enumeration order.
    pub fn occupied(&self) -> impl Iterator<Item = (District, usize)> + '_ {
        self.counts.iter().copied().filter(|(_, count)| *count > 0)
    }

    /// Grand total across all districts.
    pub fn total(&self) -> usize {
        self.total
    }
}

/// Tallies residents per district in a single pass.
pub fn resident_stats(records: &[Resident]) -> ResidentStats {
    let mut tallies: Vec<(District, DistrictTally)> = District::ALL
        .into_iter()
        .map(|district| (district, DistrictTally::default()))
        .collect();

    for record in records {
        if let Some((_, tally)) = tallies
            .iter_mut()
            .find(|(district, _)| *district == record.district)
        {
            tally.count += 1;
            tally.total_age += u64::from(record.age);
        }
    }

    ResidentStats {
        tallies,
        total: records.len(),
    }
}

/// Counts vehicles per district in a single pass.
pub fn vehicle_stats(records: &[Vehicle]) -> VehicleStats {
    let mut counts: Vec<(District, usize)> = District::ALL
        .into_iter()
        .map(|district| (district, 0))
        .collect();

    for record in records {
        if let Some((_, count)) = counts
            .iter_mut()
            .find(|(district, _)| *district == record.district)
        {
            *count += 1;
        }
    }

    VehicleStats {
        counts,
        total: records.len(),
    }
}
