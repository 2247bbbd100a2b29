//! Skill standings and vocation-derived maximums for players.
//!
//! `skills-core` converts accumulated skill points into levels (and back) and keeps
//! a player's maximum health, mana and capacity consistent with their experience
//! level and vocation. The [`SkillSet`] never owns player data: it operates on any
//! [`PlayerProperties`] store, and [`Player`] bundles the in-memory store with the
//! hooks that keep derived values fresh.
pub mod config;
pub mod error;
pub mod hook;
pub mod player;
pub mod skill;
pub mod state;
pub mod stats;
pub mod vocation;

pub use config::SkillConfig;
pub use error::{ErrorSeverity, GameError, SkillError};
pub use hook::{MaximumsHook, PostWriteHook, default_hooks};
pub use player::{Player, PlayerSheet};
pub use skill::{
    InitialSkillPoints, LevelChange, MultiplierTable, SkillCurves, SkillKind, SkillProgress,
    SkillSet, SkillSlot, SkillTable, SkillsSnapshot,
};
pub use state::{PlayerProperties, PropertyError, PropertyFields, PropertyMap};
pub use stats::{LinearFormula, ResourceKind, ResourceMaximums, VocationFormula};
pub use vocation::{Vocation, VocationClass};
