//! Use-case services the form layer owns and drives.
//!
//! # Responsibility
//! - Provide form-facing entry points over repositories.
//! - Keep validation and persistence contracts intact for every caller.
//!
//! # Invariants
//! - Services never bypass repository validation/persistence contracts.
//! - Services remain storage-agnostic; any repository implementation fits.

pub mod resident_service;
pub mod vehicle_service;
