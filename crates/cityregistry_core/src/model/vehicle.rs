//! Vehicle domain record.
//!
//! # Responsibility
//! - Define the canonical vehicle shape stored in the cars file.
//! - Build validated vehicles from raw form input.
//!
//! # Invariants
//! - `id` is stable and never reused for another vehicle.
//! - `year` stays within [1900, 2025] for every persisted record.
//! - District membership is checked the same way as for residents.

use crate::model::district::District;
use crate::model::validate::{parse_district, parse_year, require_filled, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier assigned to a vehicle at registration.
pub type VehicleId = Uuid;

/// One vehicle registered in the city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Stable global ID.
    pub id: VehicleId,
    pub make: String,
    pub model: String,
    /// Production year, within [1900, 2025].
    pub year: u16,
    /// Licence plate, free text.
    pub number: String,
    pub district: District,
}

/// Raw form input for registering a vehicle, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleForm {
    pub make: String,
    pub model: String,
    pub year: String,
    pub number: String,
    pub district: String,
}

impl Vehicle {
    /// Creates a vehicle with a freshly generated stable ID.
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: u16,
        number: impl Into<String>,
        district: District,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            make: make.into(),
            model: model.into(),
            year,
            number: number.into(),
            district,
        }
    }

    /// Builds a validated vehicle from raw form strings.
    pub fn from_form(form: &VehicleForm) -> Result<Self, ValidationError> {
        require_filled("make", &form.make)?;
        require_filled("model", &form.model)?;
        require_filled("number", &form.number)?;
        let district = parse_district(&form.district)?;
        let year = parse_year(&form.year)?;

        Ok(Self::new(
            form.make.clone(),
            form.model.clone(),
            year,
            form.number.clone(),
            district,
        ))
    }

    /// Re-checks the registration invariants on an already-typed record.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_filled("make", &self.make)?;
        require_filled("model", &self.model)?;
        require_filled("number", &self.number)?;
        if !self.district.is_set() {
            return Err(ValidationError::UnsetDistrict);
        }
        if !(1900..=2025).contains(&self.year) {
            return Err(ValidationError::InvalidYear {
                input: self.year.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Vehicle, VehicleForm};
    use crate::model::district::District;
    use crate::model::validate::ValidationError;

    fn filled_form() -> VehicleForm {
        VehicleForm {
            make: "ГАЗ".to_string(),
            model: "Волга".to_string(),
            year: "1972".to_string(),
            number: "А123БВ".to_string(),
            district: "Центральный".to_string(),
        }
    }

    #[test]
    fn from_form_builds_typed_record() {
        let vehicle = Vehicle::from_form(&filled_form()).unwrap();

        assert!(!vehicle.id.is_nil());
        assert_eq!(vehicle.make, "ГАЗ");
        assert_eq!(vehicle.year, 1972);
        assert_eq!(vehicle.district, District::Central);
        assert!(vehicle.validate().is_ok());
    }

    #[test]
    fn from_form_rejects_year_outside_range() {
        let mut form = filled_form();
        form.year = "1899".to_string();

        let err = Vehicle::from_form(&form).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidYear {
                input: "1899".to_string()
            }
        );
    }

    #[test]
    fn from_form_validates_district_membership() {
        let mut form = filled_form();
        form.district = "Гондор".to_string();

        let err = Vehicle::from_form(&form).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownDistrict {
                input: "Гондор".to_string()
            }
        );
    }

    #[test]
    fn plate_number_is_free_text() {
        let mut form = filled_form();
        form.number = "до 100 кг!?".to_string();
        assert!(Vehicle::from_form(&form).is_ok());
    }

    #[test]
    fn serialization_uses_wire_field_names() {
        let vehicle = Vehicle::from_form(&filled_form()).unwrap();
        let json = serde_json::to_value(&vehicle).unwrap();

        assert_eq!(json["make"], "ГАЗ");
        assert_eq!(json["model"], "Волга");
        assert_eq!(json["year"], 1972);
        assert_eq!(json["number"], "А123БВ");
        assert_eq!(json["district"], "Центральный");

        let decoded: Vehicle = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, vehicle);
    }
}
