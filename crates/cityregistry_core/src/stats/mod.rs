//! Per-district aggregate statistics.
//!
//! # Responsibility
//! - Tally collections by district in one pass.
//! - Expose both the full mapping and the non-empty view renderers use.
//!
//! # Invariants
//! - District iteration follows the fixed enumeration order.
//! - Zero-count districts exist in the mapping but are omitted from the
//!   `occupied` view.

pub mod census;

pub use census::{resident_stats, vehicle_stats, DistrictTally, ResidentStats, VehicleStats};
