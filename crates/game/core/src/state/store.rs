//! The player property store contract and its in-memory implementation.

use crate::skill::{SkillKind, SkillSlot};
use crate::state::{PropertyError, PropertyFields};
use crate::stats::{ResourceKind, ResourceMaximums};
use crate::vocation::Vocation;

/// Capabilities a [`SkillSet`](crate::skill::SkillSet) needs from the player that owns it.
///
/// Skill slots are kept in their own typed map and the three maximums in another;
/// neither shares storage with unrelated player properties.
pub trait PlayerProperties {
    /// The player's current vocation.
    fn vocation(&self) -> Vocation;

    /// The slot registered for `kind`, if any.
    fn skill(&self, kind: SkillKind) -> Option<&SkillSlot>;

    /// Registers a new slot. Fails if one is already registered for its kind.
    fn add_skill(&mut self, slot: SkillSlot) -> Result<(), PropertyError>;

    /// Overwrites the point total of a skill.
    ///
    /// This is the generic write path: implementations record the change so
    /// post-write hooks can react to it.
    fn set_skill_points(&mut self, kind: SkillKind, points: u64) -> Result<(), PropertyError>;

    fn maximums(&self) -> ResourceMaximums;

    /// Overwrites all three derived maximums in one write.
    ///
    /// On error the previous maximums must be left in place.
    fn set_maximums(&mut self, maximums: ResourceMaximums) -> Result<(), PropertyError>;
}

/// In-memory property store with change tracking.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyMap {
    vocation: Vocation,
    skills: [Option<SkillSlot>; SkillKind::COUNT],
    maximums: ResourceMaximums,
    changed: PropertyFields,
}

impl PropertyMap {
    /// Create an empty store: no skills registered, all maximums zero.
    pub fn new(vocation: Vocation) -> Self {
        Self {
            vocation,
            ..Self::default()
        }
    }

    pub fn set_vocation(&mut self, vocation: Vocation) {
        if self.vocation != vocation {
            self.vocation = vocation;
            self.changed |= PropertyFields::VOCATION;
        }
    }

    /// Properties written since the last [`PropertyMap::take_changed`].
    pub fn changed(&self) -> PropertyFields {
        self.changed
    }

    /// Returns and clears the change mask.
    pub fn take_changed(&mut self) -> PropertyFields {
        core::mem::take(&mut self.changed)
    }
}

impl PlayerProperties for PropertyMap {
    fn vocation(&self) -> Vocation {
        self.vocation
    }

    fn skill(&self, kind: SkillKind) -> Option<&SkillSlot> {
        self.skills[kind.index()].as_ref()
    }

    fn add_skill(&mut self, slot: SkillSlot) -> Result<(), PropertyError> {
        let entry = &mut self.skills[slot.kind().index()];
        if entry.is_some() {
            return Err(PropertyError::DuplicateSkill(slot.kind()));
        }
        *entry = Some(slot);
        self.changed |= PropertyFields::skill(slot.kind());
        Ok(())
    }

    fn set_skill_points(&mut self, kind: SkillKind, points: u64) -> Result<(), PropertyError> {
        self.skills[kind.index()]
            .get_or_insert(SkillSlot::new(kind, 0))
            .set_points(points);
        self.changed |= PropertyFields::skill(kind);
        Ok(())
    }

    fn maximums(&self) -> ResourceMaximums {
        self.maximums
    }

    fn set_maximums(&mut self, maximums: ResourceMaximums) -> Result<(), PropertyError> {
        for resource in ResourceKind::ALL {
            if self.maximums.get(resource) != maximums.get(resource) {
                self.changed |= PropertyFields::maximum(resource);
            }
        }
        self.maximums = maximums;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_rejects_duplicates() {
        let mut store = PropertyMap::new(Vocation::Knight);
        store.add_skill(SkillSlot::new(SkillKind::Club, 5)).unwrap();
        assert_eq!(
            store.add_skill(SkillSlot::new(SkillKind::Club, 9)),
            Err(PropertyError::DuplicateSkill(SkillKind::Club))
        );
        assert_eq!(store.skill(SkillKind::Club).map(|s| s.points()), Some(5));
    }

    #[test]
    fn writes_are_tracked_until_taken() {
        let mut store = PropertyMap::new(Vocation::None);
        store.set_skill_points(SkillKind::Fishing, 30).unwrap();
        store
            .set_maximums(ResourceMaximums::new(0, 55, 0))
            .unwrap();
        store.set_vocation(Vocation::Druid);

        let changed = store.take_changed();
        assert_eq!(
            changed,
            PropertyFields::FISHING | PropertyFields::MAX_MANA | PropertyFields::VOCATION
        );
        assert!(store.changed().is_empty());

        // Writing the same values again is not a change
        store.set_vocation(Vocation::Druid);
        store
            .set_maximums(ResourceMaximums::new(0, 55, 0))
            .unwrap();
        assert!(store.changed().is_empty());
    }
}
