//! Skill curves - how many points each level costs.
//!
//! Combat skills, shielding, fishing and magic grow geometrically: advancing from
//! level `f + k` to `f + k + 1` costs `floor(b × c^k)` points, where `f` is the
//! skill's floor level, `b` the per-skill base and `c` a per-vocation multiplier.
//! Experience follows the cubic level table:
//! `points(L) = 50 × (L³ − 6L² + 17L − 12) / 3`.
//!
//! Multipliers are stored in per-mille (`1100` = 1.1) so configuration stays integral.
//! All arithmetic saturates at `u64::MAX`.

use super::kind::SkillKind;
use crate::vocation::{Vocation, VocationClass};

/// One value per non-experience skill.
///
/// Serialized tables must list all eight skills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillTable {
    pub magic: u32,
    pub fist: u32,
    pub club: u32,
    pub sword: u32,
    pub axe: u32,
    pub distance: u32,
    pub shielding: u32,
    pub fishing: u32,
}

impl SkillTable {
    /// Value for `kind`, `None` for experience which has no table entry.
    pub const fn get(&self, kind: SkillKind) -> Option<u32> {
        match kind {
            SkillKind::Magic => Some(self.magic),
            SkillKind::Fist => Some(self.fist),
            SkillKind::Club => Some(self.club),
            SkillKind::Sword => Some(self.sword),
            SkillKind::Axe => Some(self.axe),
            SkillKind::Distance => Some(self.distance),
            SkillKind::Shielding => Some(self.shielding),
            SkillKind::Fishing => Some(self.fishing),
            SkillKind::Experience => None,
        }
    }

    /// Points needed for the first advance of each skill.
    pub const BASE_POINTS: Self = Self {
        magic: 1600,
        fist: 50,
        club: 50,
        sword: 50,
        axe: 50,
        distance: 50,
        shielding: 100,
        fishing: 20,
    };

    const NONE_MULTIPLIERS: Self = Self {
        magic: 3000,
        fist: 1500,
        club: 2000,
        sword: 2000,
        axe: 2000,
        distance: 2000,
        shielding: 1500,
        fishing: 1100,
    };

    const KNIGHT_MULTIPLIERS: Self = Self {
        magic: 3000,
        fist: 1200,
        club: 1200,
        sword: 1200,
        axe: 1200,
        distance: 1400,
        shielding: 1100,
        fishing: 1100,
    };

    const PALADIN_MULTIPLIERS: Self = Self {
        magic: 1400,
        fist: 1200,
        club: 1200,
        sword: 1200,
        axe: 1200,
        distance: 1100,
        shielding: 1100,
        fishing: 1100,
    };

    const MAGE_MULTIPLIERS: Self = Self {
        magic: 1100,
        fist: 1500,
        club: 2000,
        sword: 2000,
        axe: 2000,
        distance: 2000,
        shielding: 1500,
        fishing: 1100,
    };
}

/// Per-mille growth multipliers for each vocation class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MultiplierTable {
    pub none: SkillTable,
    pub knight: SkillTable,
    pub paladin: SkillTable,
    pub mage: SkillTable,
}

impl MultiplierTable {
    pub const fn for_class(&self, class: VocationClass) -> &SkillTable {
        match class {
            VocationClass::None => &self.none,
            VocationClass::Knight => &self.knight,
            VocationClass::Paladin => &self.paladin,
            VocationClass::Mage => &self.mage,
        }
    }
}

impl Default for MultiplierTable {
    fn default() -> Self {
        Self {
            none: SkillTable::NONE_MULTIPLIERS,
            knight: SkillTable::KNIGHT_MULTIPLIERS,
            paladin: SkillTable::PALADIN_MULTIPLIERS,
            mage: SkillTable::MAGE_MULTIPLIERS,
        }
    }
}

/// Points/level conversion for every skill and vocation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SkillCurves {
    /// Highest level any skill can reach; requests above it saturate.
    pub max_level: u32,
    /// Per-skill `b` constant.
    pub base: SkillTable,
    /// Per-class `c` constant, per-mille.
    pub multipliers: MultiplierTable,
}

impl SkillCurves {
    pub const DEFAULT_MAX_LEVEL: u32 = 1000;

    /// Level a skill has with zero points.
    pub const fn floor(kind: SkillKind) -> u32 {
        match kind {
            SkillKind::Magic => 0,
            SkillKind::Experience => 1,
            _ => 10,
        }
    }

    pub fn new() -> Self {
        Self {
            max_level: Self::DEFAULT_MAX_LEVEL,
            base: SkillTable::BASE_POINTS,
            multipliers: MultiplierTable::default(),
        }
    }

    /// Total points a `kind` skill needs to sit at `level` under `vocation`.
    ///
    /// Levels at or below the floor need no points; levels above `max_level`
    /// are treated as `max_level`. Levels past saturation all need `u64::MAX`.
    pub fn required_points(&self, kind: SkillKind, vocation: Vocation, level: u32) -> u64 {
        let level = level.min(self.max_level.max(Self::floor(kind)));
        match kind {
            SkillKind::Experience => experience_points(level),
            _ => {
                let steps = level.saturating_sub(Self::floor(kind));
                let mut progression = self.progression(kind, vocation);
                for _ in 0..steps {
                    progression.advance();
                }
                progression.total
            }
        }
    }

    /// Highest level whose requirement is covered by `points`.
    ///
    /// Never exceeds [`SkillCurves::level_cap`], so a saturated point total reads
    /// back as the first saturated level rather than `max_level`.
    pub fn level(&self, kind: SkillKind, vocation: Vocation, points: u64) -> u32 {
        let floor = Self::floor(kind);
        match kind {
            SkillKind::Experience => {
                // Largest L in [floor, cap] with experience_points(L) <= points.
                let (mut low, mut high) = (floor, self.level_cap(kind, vocation));
                while low < high {
                    let mid = low + (high - low).div_ceil(2);
                    if experience_points(mid) <= points {
                        low = mid;
                    } else {
                        high = mid - 1;
                    }
                }
                low
            }
            _ => {
                let cap = self.max_level.max(floor);
                let mut progression = self.progression(kind, vocation);
                let mut level = floor;
                while level < cap && !progression.saturated() && progression.peek() <= points {
                    progression.advance();
                    level += 1;
                }
                level
            }
        }
    }

    /// Highest level a `kind` skill can reach under `vocation`.
    ///
    /// This is `max_level` unless the requirement saturates at `u64::MAX` earlier,
    /// in which case it is the first level whose requirement is `u64::MAX`.
    pub fn level_cap(&self, kind: SkillKind, vocation: Vocation) -> u32 {
        let floor = Self::floor(kind);
        let cap = self.max_level.max(floor);
        match kind {
            SkillKind::Experience => {
                if experience_points(cap) < u64::MAX {
                    return cap;
                }
                // Smallest L in [floor, cap] with experience_points(L) == u64::MAX.
                let (mut low, mut high) = (floor, cap);
                while low < high {
                    let mid = low + (high - low) / 2;
                    if experience_points(mid) == u64::MAX {
                        high = mid;
                    } else {
                        low = mid + 1;
                    }
                }
                low
            }
            _ => {
                let mut progression = self.progression(kind, vocation);
                let mut level = floor;
                while level < cap && !progression.saturated() {
                    progression.advance();
                    level += 1;
                }
                level
            }
        }
    }

    fn progression(&self, kind: SkillKind, vocation: Vocation) -> Progression {
        let base = self.base.get(kind).unwrap_or(1).max(1);
        let multiplier = self
            .multipliers
            .for_class(vocation.class())
            .get(kind)
            .unwrap_or(1000)
            .max(1000);
        Progression {
            total: 0,
            advance: f64::from(base),
            growth: f64::from(multiplier) / 1000.0,
        }
    }
}

impl Default for SkillCurves {
    fn default() -> Self {
        Self::new()
    }
}

/// Running sum of a geometric skill curve.
///
/// `required_points` and `level` both walk this so their partial sums agree bit for bit.
struct Progression {
    total: u64,
    advance: f64,
    growth: f64,
}

impl Progression {
    fn saturated(&self) -> bool {
        self.total == u64::MAX
    }

    fn peek(&self) -> u64 {
        // f64 -> u64 casts saturate
        self.total.saturating_add(self.advance as u64)
    }

    fn advance(&mut self) {
        self.total = self.peek();
        self.advance *= self.growth;
    }
}

fn experience_points(level: u32) -> u64 {
    if level <= 1 {
        return 0;
    }
    let l = u128::from(level);
    let polynomial = l * l * l + 17 * l - 6 * l * l - 12;
    u64::try_from(50 * polynomial / 3).unwrap_or(u64::MAX)
}
