//! Domain model for the city registry.
//!
//! # Responsibility
//! - Define the canonical resident/vehicle records and the district
//!   enumeration shared by every layer.
//! - Validate raw form input at the typed-construction boundary.
//!
//! # Invariants
//! - Every record is identified by a stable `Uuid` assigned at creation.
//! - A record that exists as a typed value satisfies `validate()` unless a
//!   caller mutated its public fields directly.

pub mod district;
pub mod resident;
pub mod validate;
pub mod vehicle;
