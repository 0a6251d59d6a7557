//! Closed district enumeration.
//!
//! # Responsibility
//! - Fix the set of city districts every record is grouped by.
//! - Map between enum values and the exact labels used on the wire and
//!   in the form layer's combobox.
//!
//! # Invariants
//! - The set is closed; parsing anything outside the six labels fails.
//! - `ALL` fixes the canonical iteration order used by statistics.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// City district a resident or vehicle is registered under.
///
/// `Unset` is the combobox placeholder: it is a member of the enumeration
/// (so stored data containing it still parses) but is rejected when a
/// record is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum District {
    #[serde(rename = "")]
    Unset,
    #[serde(rename = "Центральный")]
    Central,
    #[serde(rename = "Южный")]
    Southern,
    #[serde(rename = "Северный")]
    Northern,
    #[serde(rename = "Западный")]
    Western,
    #[serde(rename = "Восточный")]
    Eastern,
}

impl District {
    /// All districts in canonical order, placeholder first.
    pub const ALL: [District; 6] = [
        District::Unset,
        District::Central,
        District::Southern,
        District::Northern,
        District::Western,
        District::Eastern,
    ];

    /// Exact wire/display label for this district.
    pub fn label(self) -> &'static str {
        match self {
            District::Unset => "",
            District::Central => "Центральный",
            District::Southern => "Южный",
            District::Northern => "Северный",
            District::Western => "Западный",
            District::Eastern => "Восточный",
        }
    }

    /// Parses an exact, case-sensitive district label.
    pub fn parse(label: &str) -> Option<District> {
        District::ALL
            .into_iter()
            .find(|district| district.label() == label)
    }

    /// Whether this is a real district rather than the placeholder.
    pub fn is_set(self) -> bool {
        self != District::Unset
    }
}

impl Display for District {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
