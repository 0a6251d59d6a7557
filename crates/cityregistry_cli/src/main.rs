//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `cityregistry_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("cityregistry_core ping={}", cityregistry_core::ping());
    println!(
        "cityregistry_core version={}",
        cityregistry_core::core_version()
    );
}
