use crate::skill::{InitialSkillPoints, SkillCurves};

/// Skill system configuration and tunable parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SkillConfig {
    /// Points/level curve constants.
    pub curves: SkillCurves,
    /// Points a freshly created player starts with.
    pub starting: InitialSkillPoints,
}
