use mobstack_common::EntityKind;
use mobstack_kernel::Mob;
use std::fmt::Debug;

/// A stateless comparison and transfer rule tied to one subject kind.
///
/// `path` and `subject` are fixed per rule type. Rules must not keep mutable
/// state: a registry is shared read-only for the life of the process.
pub trait MobTrait: Debug + Send + Sync {
    /// Dotted config path that enables or disables this rule.
    fn path(&self) -> &'static str;

    /// Most specific kind the rule understands. Subtypes are included.
    fn subject(&self) -> EntityKind;

    /// Returns `true` when the two mobs differ in a way that forbids stacking.
    fn check(&self, first: &Mob, nearby: &Mob) -> bool;

    /// Copies this rule's slice of state from `dead` onto `spawned`.
    ///
    /// Missing donor state is a no-op.
    fn apply(&self, spawned: &mut Mob, dead: &Mob);
}

/// Whether `rule` has an opinion about mobs of `kind`.
pub fn is_applicable(rule: &dyn MobTrait, kind: EntityKind) -> bool {
    kind.is_a(rule.subject())
}

/// Config paths are dot-separated segments of `[a-z0-9-]`.
pub(crate) fn is_valid_path(path: &str) -> bool {
    !path.is_empty()
        && path.split('.').all(|segment| {
            !segment.is_empty()
                && segment
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        })
}

pub(crate) fn copy_some<T: Clone>(target: &mut Option<T>, source: &Option<T>) {
    if let Some(value) = source {
        *target = Some(value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_syntax() {
        assert!(is_valid_path("age"));
        assert!(is_valid_path("sheep.color"));
        assert!(is_valid_path("breed-mode"));
        assert!(!is_valid_path(""));
        assert!(!is_valid_path("sheep..color"));
        assert!(!is_valid_path(".age"));
        assert!(!is_valid_path("Sheep.Color"));
        assert!(!is_valid_path("sheep color"));
    }

    #[test]
    fn copy_some_ignores_missing_source() {
        let mut target = Some(3);
        copy_some(&mut target, &None);
        assert_eq!(target, Some(3));
        copy_some(&mut target, &Some(5));
        assert_eq!(target, Some(5));
    }
}
