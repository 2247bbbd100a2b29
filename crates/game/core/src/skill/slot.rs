use super::curve::SkillCurves;
use super::kind::SkillKind;
use crate::vocation::Vocation;

/// Accumulated points in one skill.
///
/// A slot only stores points; its level is always derived through [`SkillCurves`]
/// for the vocation asking. Serializes as the bare point total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SkillSlot {
    kind: SkillKind,
    points: u64,
}

impl SkillSlot {
    pub const fn new(kind: SkillKind, points: u64) -> Self {
        Self { kind, points }
    }

    pub const fn kind(&self) -> SkillKind {
        self.kind
    }

    /// Accumulated points. Writes go through
    /// [`PlayerProperties::set_skill_points`](crate::state::PlayerProperties::set_skill_points).
    pub const fn points(&self) -> u64 {
        self.points
    }

    pub(crate) fn set_points(&mut self, points: u64) {
        self.points = points;
    }

    /// Current level under `vocation`.
    pub fn level(&self, vocation: Vocation, curves: &SkillCurves) -> u32 {
        curves.level(self.kind, vocation, self.points)
    }

    /// Points this slot would need to sit at `level` under `vocation`.
    pub fn required_points(&self, level: u32, vocation: Vocation, curves: &SkillCurves) -> u64 {
        curves.required_points(self.kind, vocation, level)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SkillSlot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u64(self.points)
    }
}

/// Progress of one skill towards its next level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillProgress {
    pub level: u32,
    pub points: u64,
    /// Points at which the current level was reached.
    pub level_points: u64,
    /// Points needed for the next level, `None` once the cap is reached.
    pub next_level_points: Option<u64>,
    /// Whole percent of the way from `level_points` to `next_level_points`.
    pub percent: u8,
}

impl SkillProgress {
    pub(crate) fn of(slot: &SkillSlot, vocation: Vocation, curves: &SkillCurves) -> Self {
        let level = slot.level(vocation, curves);
        let level_points = slot.required_points(level, vocation, curves);
        let next = slot.required_points(level.saturating_add(1), vocation, curves);
        let next_level_points = (next > level_points).then_some(next);

        let percent = match next_level_points {
            Some(next) => {
                let gained = u128::from(slot.points().saturating_sub(level_points));
                let span = u128::from(next - level_points);
                (gained * 100 / span).min(100) as u8
            }
            None => 0,
        };

        Self {
            level,
            points: slot.points(),
            level_points,
            next_level_points,
            percent,
        }
    }
}
