//! Resident domain record.
//!
//! # Responsibility
//! - Define the canonical resident shape stored in the population file.
//! - Build validated residents from raw form input.
//!
//! # Invariants
//! - `id` is stable and never reused for another resident.
//! - `age` stays within [0, 120] for every persisted record.
//! - Surname/name/patronymic are fixed at registration; the edit flow
//!   only touches `age` and `district`.

use crate::model::district::District;
use crate::model::validate::{parse_age, parse_district, require_filled, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier assigned to a resident at registration.
pub type ResidentId = Uuid;

/// One resident of the city.
///
/// Records are intentionally allowed to be duplicates in every
/// user-visible field; only `id` tells two namesakes apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resident {
    /// Stable global ID used for edit/delete lookups.
    pub id: ResidentId,
    pub surname: String,
    pub name: String,
    pub patronymic: String,
    /// Whole years, within [0, 120].
    pub age: u8,
    pub district: District,
}

/// Raw form input for registering a resident, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidentForm {
    pub surname: String,
    pub name: String,
    pub patronymic: String,
    pub age: String,
    pub district: String,
}

impl Resident {
    /// Creates a resident with a freshly generated stable ID.
    ///
    /// This constructor takes already-typed values; use [`Resident::from_form`]
    /// for raw form input.
    pub fn new(
        surname: impl Into<String>,
        name: impl Into<String>,
        patronymic: impl Into<String>,
        age: u8,
        district: District,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            surname: surname.into(),
            name: name.into(),
            patronymic: patronymic.into(),
            age,
            district,
        }
    }

    /// Builds a validated resident from raw form strings.
    ///
    /// Checks fields in form order: presence of every field, then the
    /// district label, then the age. The first failing check is returned
    /// so the form can point at one entry.
    pub fn from_form(form: &ResidentForm) -> Result<Self, ValidationError> {
        require_filled("surname", &form.surname)?;
        require_filled("name", &form.name)?;
        require_filled("patronymic", &form.patronymic)?;
        let district = parse_district(&form.district)?;
        let age = parse_age(&form.age)?;

        Ok(Self::new(
            form.surname.clone(),
            form.name.clone(),
            form.patronymic.clone(),
            age,
            district,
        ))
    }

    /// Re-checks the registration invariants on an already-typed record.
    ///
    /// Persistence paths call this before every write, so a record whose
    /// public fields were mutated by hand cannot reach the file.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_filled("surname", &self.surname)?;
        require_filled("name", &self.name)?;
        require_filled("patronymic", &self.patronymic)?;
        if !self.district.is_set() {
            return Err(ValidationError::UnsetDistrict);
        }
        if self.age > 120 {
            return Err(ValidationError::InvalidAge {
                input: self.age.to_string(),
            });
        }
        Ok(())
    }

    /// Full name as rendered in search results.
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.surname, self.name, self.patronymic)
    }
}
