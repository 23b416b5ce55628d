//! The active trait set.
//!
//! # Invariants
//! - A rule is present iff every guard held and its path was enabled at build time.
//! - No concrete rule type and no config path appears twice.
//! - The set never changes after `build` returns.

use crate::catalog::{Candidate, Guard, catalog};
use crate::error::TraitError;
use crate::rule::{MobTrait, is_valid_path};
use crate::settings::TraitSettings;
use mobstack_common::Environment;
use std::collections::{BTreeSet, HashSet};

/// Rules that passed config and environment gating.
#[derive(Debug, Default)]
pub struct TraitRegistry {
    traits: Vec<Box<dyn MobTrait>>,
}

impl TraitRegistry {
    /// Build the active set from `candidates`.
    ///
    /// Guarded candidates are skipped without construction when a guard fails.
    /// `is_enabled` is asked once for every constructed rule. Any catalog
    /// defect aborts the whole build.
    pub fn build<E, G>(
        candidates: impl IntoIterator<Item = Candidate>,
        is_enabled: E,
        env_ok: G,
    ) -> Result<Self, TraitError>
    where
        E: Fn(&str) -> bool,
        G: Fn(&Guard) -> bool,
    {
        let _span = tracing::info_span!("trait_registry_build").entered();

        let mut traits: Vec<Box<dyn MobTrait>> = Vec::new();
        let mut seen_types = HashSet::new();
        let mut seen_paths = HashSet::new();
        let mut total = 0usize;

        for candidate in candidates {
            total += 1;
            if !seen_types.insert(candidate.type_id()) {
                return Err(TraitError::DuplicateRule {
                    rule: candidate.name().to_string(),
                });
            }
            if let Some(guard) = candidate.failed_guard(&env_ok) {
                tracing::debug!(rule = candidate.name(), %guard, "guard failed, trait skipped");
                continue;
            }

            let rule = candidate.construct()?;
            let path = rule.path();
            if !is_valid_path(path) {
                return Err(TraitError::InvalidPath {
                    rule: candidate.name().to_string(),
                    path: path.to_string(),
                });
            }
            if !seen_paths.insert(path) {
                return Err(TraitError::DuplicatePath {
                    path: path.to_string(),
                });
            }

            if is_enabled(path) {
                tracing::trace!(rule = candidate.name(), path, subject = %rule.subject(), "trait registered");
                traits.push(rule);
            } else {
                tracing::debug!(rule = candidate.name(), path, "trait disabled in settings");
            }
        }

        tracing::info!(active = traits.len(), candidates = total, "trait registry built");
        Ok(Self { traits })
    }

    /// Build the built-in catalog against real settings and environment.
    pub fn from_settings(settings: &TraitSettings, env: &Environment) -> Result<Self, TraitError> {
        Self::build(catalog(), |path| settings.is_enabled(path), |guard| guard.holds(env))
    }

    pub fn len(&self) -> usize {
        self.traits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    /// Active rules in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn MobTrait> {
        self.traits.iter().map(|t| t.as_ref())
    }

    /// Config paths of the active rules, for set comparisons.
    pub fn paths(&self) -> BTreeSet<&'static str> {
        self.traits.iter().map(|t| t.path()).collect()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.traits.iter().any(|t| t.path() == path)
    }
}
