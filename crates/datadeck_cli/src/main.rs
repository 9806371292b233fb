//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `datadeck_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("datadeck_core ping={}", datadeck_core::ping());
    println!("datadeck_core version={}", datadeck_core::core_version());
}
