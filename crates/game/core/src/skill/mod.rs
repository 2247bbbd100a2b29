//! Skills: kinds, slots, the points/level curve and the per-player aggregate.
//!
//! A slot stores nothing but accumulated points. Levels are always derived through
//! [`SkillCurves`] for the vocation currently asking, so a promotion or vocation
//! change re-levels every skill without touching stored data.

mod curve;
mod kind;
mod set;
mod slot;
mod snapshot;

pub use curve::{MultiplierTable, SkillCurves, SkillTable};
pub use kind::SkillKind;
pub use set::{LevelChange, SkillSet};
pub use slot::{SkillProgress, SkillSlot};
pub use snapshot::{InitialSkillPoints, SkillsSnapshot};
