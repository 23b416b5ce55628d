//! Pairwise dispatch over the active set.
//!
//! Both passes filter rules by the subject kind of the first argument. Rules
//! are treated as commutative: compatibility is OR-over-mismatch and transfer
//! rules own disjoint slices of state.

use crate::registry::TraitRegistry;
use crate::rule::{MobTrait, is_applicable};
use mobstack_common::EntityKind;
use mobstack_kernel::Mob;

impl TraitRegistry {
    /// Active rules that have an opinion about mobs of `kind`.
    pub fn applicable(&self, kind: EntityKind) -> impl Iterator<Item = &dyn MobTrait> {
        self.iter().filter(move |rule| is_applicable(*rule, kind))
    }

    /// Path of the first applicable rule that forbids stacking `first` with `nearby`.
    pub fn first_mismatch(
        &self,
        first: &impl AsRef<Mob>,
        nearby: &impl AsRef<Mob>,
    ) -> Option<&'static str> {
        let (first, nearby) = (first.as_ref(), nearby.as_ref());
        let rule = self
            .applicable(first.kind())
            .find(|rule| rule.check(first, nearby))?;
        tracing::trace!(
            path = rule.path(),
            first = %first.id(),
            nearby = %nearby.id(),
            "trait mismatch"
        );
        Some(rule.path())
    }

    /// `true` when the pair must not be merged.
    ///
    /// Stops at the first mismatch. No applicable rule means no objection.
    pub fn check_traits(&self, first: &impl AsRef<Mob>, nearby: &impl AsRef<Mob>) -> bool {
        self.first_mismatch(first, nearby).is_some()
    }

    /// Copy every applicable trait from `dead` onto `spawned`.
    pub fn apply_traits(&self, spawned: &mut impl AsMut<Mob>, dead: &impl AsRef<Mob>) {
        let spawned = spawned.as_mut();
        let dead = dead.as_ref();
        for rule in self.applicable(spawned.kind()) {
            rule.apply(spawned, dead);
            tracing::trace!(path = rule.path(), spawned = %spawned.id(), dead = %dead.id(), "trait applied");
        }
    }
}
