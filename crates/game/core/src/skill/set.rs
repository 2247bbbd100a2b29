//! The skill aggregate of one player.

use super::curve::SkillCurves;
use super::kind::SkillKind;
use super::slot::{SkillProgress, SkillSlot};
use super::snapshot::{InitialSkillPoints, SkillsSnapshot};
use crate::error::SkillError;
use crate::state::PlayerProperties;
use crate::stats::ResourceMaximums;

/// Level before and after a point grant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelChange {
    pub kind: SkillKind,
    pub from: u32,
    pub to: u32,
}

impl LevelChange {
    pub const fn advanced(&self) -> bool {
        self.to > self.from
    }
}

/// Read/write access to a player's nine skills and the maximums they drive.
///
/// `SkillSet` holds no player state of its own. Every call receives the player's
/// [`PlayerProperties`], so the player can own both without a reference cycle.
///
/// Level writes go through [`PlayerProperties::set_skill_points`] and never
/// recompute maximums themselves; [`SkillSet::recompute_maximums`] does that on request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillSet {
    curves: SkillCurves,
}

impl SkillSet {
    /// Registers one slot per skill in `store` and computes the maximums once.
    pub fn new<P>(
        store: &mut P,
        initial: &InitialSkillPoints,
        curves: SkillCurves,
    ) -> Result<Self, SkillError>
    where
        P: PlayerProperties + ?Sized,
    {
        for kind in SkillKind::ALL {
            store.add_skill(SkillSlot::new(kind, initial.get(kind)))?;
        }

        let skills = Self { curves };
        skills.recompute_maximums(store)?;
        Ok(skills)
    }

    /// Serialized value (point total) of a skill, `None` if it is not registered.
    pub fn skill_value<P>(&self, store: &P, kind: SkillKind) -> Option<u64>
    where
        P: PlayerProperties + ?Sized,
    {
        store.skill(kind).map(|slot| slot.points())
    }

    /// Like [`SkillSet::skill_value`] for a textual tag; unknown names yield `None`.
    pub fn skill_value_by_name<P>(&self, store: &P, name: &str) -> Option<u64>
    where
        P: PlayerProperties + ?Sized,
    {
        self.skill_value(store, SkillKind::from_name(name)?)
    }

    /// Level of a skill under the player's current vocation.
    pub fn skill_level<P>(&self, store: &P, kind: SkillKind) -> Option<u32>
    where
        P: PlayerProperties + ?Sized,
    {
        let vocation = store.vocation();
        store
            .skill(kind)
            .map(|slot| slot.level(vocation, &self.curves))
    }

    pub fn skill_level_by_name<P>(&self, store: &P, name: &str) -> Option<u32>
    where
        P: PlayerProperties + ?Sized,
    {
        self.skill_level(store, SkillKind::from_name(name)?)
    }

    pub fn skill_progress<P>(&self, store: &P, kind: SkillKind) -> Option<SkillProgress>
    where
        P: PlayerProperties + ?Sized,
    {
        let vocation = store.vocation();
        store
            .skill(kind)
            .map(|slot| SkillProgress::of(slot, vocation, &self.curves))
    }

    /// Sets a skill to exactly the points `level` requires under the current vocation.
    ///
    /// Performs one write through the store. Out-of-range levels saturate in the curve.
    pub fn set_skill_level<P>(
        &self,
        store: &mut P,
        kind: SkillKind,
        level: u32,
    ) -> Result<(), SkillError>
    where
        P: PlayerProperties + ?Sized,
    {
        let Some(slot) = store.skill(kind) else {
            tracing::warn!("set_skill_level: {} is not registered", kind);
            return Err(SkillError::SkillNotRegistered(kind));
        };

        let points = slot.required_points(level, store.vocation(), &self.curves);
        tracing::debug!("set {} to level {} ({} points)", kind, level, points);
        store.set_skill_points(kind, points)?;
        Ok(())
    }

    pub fn set_skill_level_by_name<P>(
        &self,
        store: &mut P,
        name: &str,
        level: u32,
    ) -> Result<(), SkillError>
    where
        P: PlayerProperties + ?Sized,
    {
        let kind =
            SkillKind::from_name(name).ok_or_else(|| SkillError::UnknownSkill(name.to_owned()))?;
        self.set_skill_level(store, kind, level)
    }

    /// Grants `points` to a skill through the store's write path.
    pub fn add_skill_points<P>(
        &self,
        store: &mut P,
        kind: SkillKind,
        points: u64,
    ) -> Result<LevelChange, SkillError>
    where
        P: PlayerProperties + ?Sized,
    {
        let vocation = store.vocation();
        let slot = *store
            .skill(kind)
            .ok_or(SkillError::SkillNotRegistered(kind))?;

        let from = slot.level(vocation, &self.curves);
        let total = slot.points().saturating_add(points);
        store.set_skill_points(kind, total)?;
        let to = self.curves.level(kind, vocation, total);

        if to > from {
            tracing::debug!("{} advanced from {} to {}", kind, from, to);
        }
        Ok(LevelChange { kind, from, to })
    }

    /// Recomputes maximum health, mana and capacity from the experience level and vocation.
    ///
    /// All three maximums are overwritten in one store write, so repeated calls
    /// leave the same values behind and a failed write leaves the old ones.
    pub fn recompute_maximums<P>(&self, store: &mut P) -> Result<ResourceMaximums, SkillError>
    where
        P: PlayerProperties + ?Sized,
    {
        let level = self
            .skill_level(store, SkillKind::Experience)
            .ok_or(SkillError::SkillNotRegistered(SkillKind::Experience))?;
        let vocation = store.vocation();
        let maximums = ResourceMaximums::compute(vocation, level);

        store.set_maximums(maximums)?;

        tracing::debug!(
            "maximums for {} at level {}: health={} mana={} capacity={}",
            vocation,
            level,
            maximums.health,
            maximums.mana,
            maximums.capacity
        );
        Ok(maximums)
    }

    /// Flat snapshot of all nine skills.
    pub fn serialize<P>(&self, store: &P) -> SkillsSnapshot
    where
        P: PlayerProperties + ?Sized,
    {
        SkillsSnapshot::from_fn(|kind| self.skill_value(store, kind))
    }
}

impl SkillSet {
    /// A skill set using `curves`, for stores whose slots are already registered.
    pub fn with_curves(curves: SkillCurves) -> Self {
        Self { curves }
    }
}
