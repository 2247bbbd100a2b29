//! Player aggregate owning the property store, the skill set and the write hooks.

use core::fmt;
use std::sync::Arc;

use crate::config::SkillConfig;
use crate::error::SkillError;
use crate::hook::{PostWriteHook, default_hooks};
use crate::skill::{
    InitialSkillPoints, LevelChange, SkillCurves, SkillKind, SkillProgress, SkillSet,
    SkillsSnapshot,
};
use crate::state::{PlayerProperties, PropertyFields, PropertyMap};
use crate::stats::ResourceMaximums;
use crate::vocation::Vocation;

/// Everything a client needs to render a player's skill window.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSheet {
    pub vocation: Vocation,
    pub level: u32,
    pub skills: SkillsSnapshot,
    pub maximums: ResourceMaximums,
}

/// A player's skill-related state.
///
/// All writes go through the property store; after each mutating call the
/// registered [`PostWriteHook`]s run against the properties that changed.
pub struct Player {
    properties: PropertyMap,
    skills: SkillSet,
    hooks: Arc<[Arc<dyn PostWriteHook>]>,
    delta: PropertyFields,
}

impl Player {
    /// Creates a player with the given starting points.
    pub fn new(
        vocation: Vocation,
        initial: &InitialSkillPoints,
        config: &SkillConfig,
    ) -> Result<Self, SkillError> {
        let mut properties = PropertyMap::new(vocation);
        let skills = SkillSet::new(&mut properties, initial, config.curves.clone())?;
        let delta = properties.take_changed();

        Ok(Self {
            properties,
            skills,
            hooks: default_hooks(),
            delta,
        })
    }

    /// Creates a player with the configured starting points.
    pub fn from_config(vocation: Vocation, config: &SkillConfig) -> Result<Self, SkillError> {
        Self::new(vocation, &config.starting, config)
    }

    /// Replaces the post-write hooks.
    pub fn with_hooks(mut self, mut hooks: Vec<Arc<dyn PostWriteHook>>) -> Self {
        hooks.sort_by_key(|h| h.priority());
        self.hooks = hooks.into();
        self
    }

    pub fn vocation(&self) -> Vocation {
        self.properties.vocation()
    }

    /// Changes vocation, e.g. on promotion. Skill levels re-derive from the new curve.
    pub fn set_vocation(&mut self, vocation: Vocation) -> Result<(), SkillError> {
        tracing::debug!("vocation {} -> {}", self.vocation(), vocation);
        self.properties.set_vocation(vocation);
        self.run_hooks()
    }

    /// Promotes to the next vocation rank. Returns the new vocation, or `None` when
    /// the current one has no promotion.
    pub fn promote(&mut self) -> Result<Option<Vocation>, SkillError> {
        let current = self.vocation();
        let Some(promoted) = current.promotion() else {
            if current.is_promoted() {
                tracing::debug!("{} is already promoted", current);
            } else {
                tracing::debug!("{} has no promotion", current);
            }
            return Ok(None);
        };
        self.set_vocation(promoted)?;
        Ok(Some(promoted))
    }

    pub fn skill_value(&self, kind: SkillKind) -> Option<u64> {
        self.skills.skill_value(&self.properties, kind)
    }

    pub fn skill_level(&self, kind: SkillKind) -> Option<u32> {
        self.skills.skill_level(&self.properties, kind)
    }

    pub fn skill_progress(&self, kind: SkillKind) -> Option<SkillProgress> {
        self.skills.skill_progress(&self.properties, kind)
    }

    /// Experience level.
    pub fn level(&self) -> u32 {
        self.skill_level(SkillKind::Experience)
            .unwrap_or(SkillCurves::floor(SkillKind::Experience))
    }

    pub fn set_skill_level(&mut self, kind: SkillKind, level: u32) -> Result<(), SkillError> {
        self.skills.set_skill_level(&mut self.properties, kind, level)?;
        self.run_hooks()
    }

    pub fn set_skill_level_by_name(&mut self, name: &str, level: u32) -> Result<(), SkillError> {
        self.skills
            .set_skill_level_by_name(&mut self.properties, name, level)?;
        self.run_hooks()
    }

    pub fn add_skill_points(
        &mut self,
        kind: SkillKind,
        points: u64,
    ) -> Result<LevelChange, SkillError> {
        let change = self
            .skills
            .add_skill_points(&mut self.properties, kind, points)?;
        self.run_hooks()?;
        Ok(change)
    }

    pub fn maximums(&self) -> ResourceMaximums {
        self.properties.maximums()
    }

    pub fn snapshot(&self) -> SkillsSnapshot {
        self.skills.serialize(&self.properties)
    }

    pub fn sheet(&self) -> PlayerSheet {
        PlayerSheet {
            vocation: self.vocation(),
            level: self.level(),
            skills: self.snapshot(),
            maximums: self.maximums(),
        }
    }

    /// Returns and clears every property written since the last call, hooks included.
    pub fn take_delta(&mut self) -> PropertyFields {
        core::mem::take(&mut self.delta)
    }

    fn run_hooks(&mut self) -> Result<(), SkillError> {
        let changed = self.properties.take_changed();
        self.delta |= changed;

        for hook in self.hooks.iter() {
            if hook.should_trigger(changed) {
                hook.apply(&mut self.properties, &self.skills)?;
            }
        }

        self.delta |= self.properties.take_changed();
        Ok(())
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("properties", &self.properties)
            .field("skills", &self.skills)
            .field("hooks", &self.hooks.len())
            .field("delta", &self.delta)
            .finish()
    }
}
