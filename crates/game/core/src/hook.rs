//! Post-write hooks that apply additional property changes after a player write.
//!
//! Hooks are triggered based on the [`PropertyFields`] a write touched, which keeps
//! derived data (the resource maximums) in sync without the skill set having to
//! recompute it on every level change.

use std::sync::Arc;

use crate::error::SkillError;
use crate::skill::SkillSet;
use crate::state::{PlayerProperties, PropertyFields};

/// A hook that runs after properties were written.
///
/// Hooks are executed in priority order (lower priority values execute first).
pub trait PostWriteHook: Send + Sync {
    /// Returns the priority of this hook. Lower values execute first.
    fn priority(&self) -> i32 {
        0
    }

    /// Determines whether this hook should run for the written properties.
    fn should_trigger(&self, changed: PropertyFields) -> bool;

    /// Applies the hook's effects to the store directly.
    fn apply(&self, store: &mut dyn PlayerProperties, skills: &SkillSet) -> Result<(), SkillError>;
}

/// Recomputes resource maximums when the experience level or vocation may have moved.
#[derive(Debug)]
pub struct MaximumsHook;

impl PostWriteHook for MaximumsHook {
    fn should_trigger(&self, changed: PropertyFields) -> bool {
        changed.intersects(PropertyFields::EXPERIENCE | PropertyFields::VOCATION)
    }

    fn apply(&self, store: &mut dyn PlayerProperties, skills: &SkillSet) -> Result<(), SkillError> {
        skills.recompute_maximums(store)?;
        Ok(())
    }
}

/// Returns the default set of hooks run after every player write.
pub fn default_hooks() -> Arc<[Arc<dyn PostWriteHook>]> {
    let mut hooks: Vec<Arc<dyn PostWriteHook>> = vec![Arc::new(MaximumsHook)];

    hooks.sort_by_key(|h| h.priority());

    hooks.into()
}
