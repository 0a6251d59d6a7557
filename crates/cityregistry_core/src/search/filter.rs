//! Conjunctive resident filter built from form input.

use crate::model::district::District;
use crate::model::resident::Resident;
use crate::model::validate::{parse_age, ValidationError};

/// Optional per-field criteria for resident search.
///
/// Name fields match case-insensitively as substrings; age and district
/// match exactly. `None` means the criterion is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidentFilter {
    pub surname: Option<String>,
    pub name: Option<String>,
    pub patronymic: Option<String>,
    pub age: Option<u8>,
    pub district: Option<District>,
}

impl ResidentFilter {
    /// Builds a filter from raw form strings.
    ///
    /// An empty entry means the criterion is absent. A non-empty age entry
    /// must be a valid age; a non-empty district entry must be a member of
    /// the district enumeration.
    pub fn from_form(
        surname: &str,
        name: &str,
        patronymic: &str,
        age: &str,
        district: &str,
    ) -> Result<Self, ValidationError> {
        let age = if age.is_empty() {
            None
        } else {
            Some(parse_age(age)?)
        };

        let district = if district.is_empty() {
            None
        } else {
            Some(
                District::parse(district).ok_or_else(|| ValidationError::UnknownDistrict {
                    input: district.to_string(),
                })?,
            )
        };

        Ok(Self {
            surname: optional(surname),
            name: optional(name),
            patronymic: optional(patronymic),
            age,
            district,
        })
    }

    /// Whether no criterion is supplied.
    pub fn is_empty(&self) -> bool {
        self.surname.is_none()
            && self.name.is_none()
            && self.patronymic.is_none()
            && self.age.is_none()
            && self.district.is_none()
    }

    /// Whether `resident` satisfies every supplied criterion.
    pub fn matches(&self, resident: &Resident) -> bool {
        let name_matches = |criterion: &Option<String>, value: &str| match criterion {
            Some(needle) => contains_ci(value, needle),
            None => true,
        };

        name_matches(&self.surname, &resident.surname)
            && name_matches(&self.name, &resident.name)
            && name_matches(&self.patronymic, &resident.patronymic)
            && self.age.map_or(true, |age| age == resident.age)
            && self
                .district
                .map_or(true, |district| district == resident.district)
    }
}

/// Filters residents in one linear pass, preserving collection order.
///
/// Returns an empty vector, not an error, when nothing matches.
pub fn search_residents(records: &[Resident], filter: &ResidentFilter) -> Vec<Resident> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
