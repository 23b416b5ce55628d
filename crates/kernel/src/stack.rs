use crate::mob::Mob;
use serde::{Deserialize, Serialize};

/// A mob standing in for a whole stack of identical mobs.
///
/// The trait dispatcher only reads and writes the wrapped mob; `size` belongs
/// to the stacking layer above it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntity {
    mob: Mob,
    #[serde(default = "one")]
    size: u32,
}

fn one() -> u32 {
    1
}

impl StackEntity {
    pub fn new(mob: Mob) -> Self {
        Self { mob, size: 1 }
    }

    pub fn with_size(mob: Mob, size: u32) -> Self {
        Self {
            mob,
            size: size.max(1),
        }
    }

    pub fn mob(&self) -> &Mob {
        &self.mob
    }

    pub fn mob_mut(&mut self) -> &mut Mob {
        &mut self.mob
    }

    pub fn into_mob(self) -> Mob {
        self.mob
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn set_size(&mut self, size: u32) {
        self.size = size.max(1);
    }
}

impl AsRef<Mob> for StackEntity {
    fn as_ref(&self) -> &Mob {
        &self.mob
    }
}

impl AsMut<Mob> for StackEntity {
    fn as_mut(&mut self) -> &mut Mob {
        &mut self.mob
    }
}

impl From<Mob> for StackEntity {
    fn from(mob: Mob) -> Self {
        Self::new(mob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mobstack_common::EntityKind;

    #[test]
    fn size_never_drops_below_one() {
        let mut stack = StackEntity::with_size(Mob::new(EntityKind::Sheep), 0);
        assert_eq!(stack.size(), 1);
        stack.set_size(12);
        assert_eq!(stack.size(), 12);
        stack.set_size(0);
        assert_eq!(stack.size(), 1);
    }

    #[test]
    fn wraps_mob_without_copying_identity() {
        let mob = Mob::new(EntityKind::Cow);
        let id = mob.id();
        let stack = StackEntity::from(mob);
        assert_eq!(stack.mob().id(), id);
        assert_eq!(stack.into_mob().id(), id);
    }
}
