//! Trait registry and pairwise comparator for mob stacking.
//!
//! A registry is built once at startup from a catalog of candidate rules,
//! filtered by per-trait settings and environment guards, then shared
//! read-only. Dispatch asks every rule whose subject covers the first mob's
//! kind whether the pair may merge, or copies state from a dying mob onto its
//! replacement.
//!
//! # Invariants
//! - Rules are stateless; the registry never changes after build.
//! - A rule is only invoked for kinds that descend from its subject.
//! - Catalog defects fail the build; they are never skipped silently.

pub mod builtin;
mod catalog;
mod dispatch;
mod error;
mod registry;
mod rule;
mod settings;

pub use catalog::{Candidate, Constructor, Guard, catalog};
pub use error::{SettingsError, TraitError};
pub use registry::TraitRegistry;
pub use rule::{MobTrait, is_applicable};
pub use settings::TraitSettings;

pub fn crate_info() -> &'static str {
    "mobstack-traits v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("traits"));
    }
}
