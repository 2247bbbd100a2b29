use super::kind::SkillKind;

/// Starting point totals, one per skill.
///
/// Missing fields in serialized form default to zero points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InitialSkillPoints {
    pub magic: u64,
    pub fist: u64,
    pub club: u64,
    pub sword: u64,
    pub axe: u64,
    pub distance: u64,
    pub shielding: u64,
    pub fishing: u64,
    pub experience: u64,
}

impl InitialSkillPoints {
    pub const fn get(&self, kind: SkillKind) -> u64 {
        match kind {
            SkillKind::Magic => self.magic,
            SkillKind::Fist => self.fist,
            SkillKind::Club => self.club,
            SkillKind::Sword => self.sword,
            SkillKind::Axe => self.axe,
            SkillKind::Distance => self.distance,
            SkillKind::Shielding => self.shielding,
            SkillKind::Fishing => self.fishing,
            SkillKind::Experience => self.experience,
        }
    }

    pub fn set(&mut self, kind: SkillKind, points: u64) {
        let field = match kind {
            SkillKind::Magic => &mut self.magic,
            SkillKind::Fist => &mut self.fist,
            SkillKind::Club => &mut self.club,
            SkillKind::Sword => &mut self.sword,
            SkillKind::Axe => &mut self.axe,
            SkillKind::Distance => &mut self.distance,
            SkillKind::Shielding => &mut self.shielding,
            SkillKind::Fishing => &mut self.fishing,
            SkillKind::Experience => &mut self.experience,
        };
        *field = points;
    }
}

/// Serialized skills of one player.
///
/// Always carries all nine keys; a skill with no registered slot is `null`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillsSnapshot {
    pub magic: Option<u64>,
    pub fist: Option<u64>,
    pub club: Option<u64>,
    pub sword: Option<u64>,
    pub axe: Option<u64>,
    pub distance: Option<u64>,
    pub shielding: Option<u64>,
    pub fishing: Option<u64>,
    pub experience: Option<u64>,
}

impl SkillsSnapshot {
    pub const fn get(&self, kind: SkillKind) -> Option<u64> {
        match kind {
            SkillKind::Magic => self.magic,
            SkillKind::Fist => self.fist,
            SkillKind::Club => self.club,
            SkillKind::Sword => self.sword,
            SkillKind::Axe => self.axe,
            SkillKind::Distance => self.distance,
            SkillKind::Shielding => self.shielding,
            SkillKind::Fishing => self.fishing,
            SkillKind::Experience => self.experience,
        }
    }

    /// Builds a snapshot from a per-kind lookup.
    pub fn from_fn(mut points: impl FnMut(SkillKind) -> Option<u64>) -> Self {
        Self {
            magic: points(SkillKind::Magic),
            fist: points(SkillKind::Fist),
            club: points(SkillKind::Club),
            sword: points(SkillKind::Sword),
            axe: points(SkillKind::Axe),
            distance: points(SkillKind::Distance),
            shielding: points(SkillKind::Shielding),
            fishing: points(SkillKind::Fishing),
            experience: points(SkillKind::Experience),
        }
    }
}

impl From<SkillsSnapshot> for InitialSkillPoints {
    fn from(snapshot: SkillsSnapshot) -> Self {
        let mut initial = Self::default();
        for kind in SkillKind::ALL {
            initial.set(kind, snapshot.get(kind).unwrap_or(0));
        }
        initial
    }
}
