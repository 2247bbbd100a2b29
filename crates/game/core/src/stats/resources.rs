//! Resource maximums derived from experience level and vocation.
//!
//! Maximum values are never the source of truth: they are recomputed from the
//! experience level whenever it or the vocation changes.
//!
//! Formulas (`L` = experience level):
//!
//! | Class   | Health          | Mana           | Capacity         |
//! |---------|-----------------|----------------|------------------|
//! | None    | 5 × (L + 29)    | 5 × (L + 10)   | 10 × (L + 39)    |
//! | Knight  | 5 × (3L + 13)   | 5 × (L + 10)   | 5 × (5L + 54)    |
//! | Paladin | 5 × (2L + 21)   | 5 × (3L − 6)   | 10 × (2L + 31)   |
//! | Mage    | 5 × (L + 29)    | 5 × (6L − 30)  | 10 × (L + 39)    |

use crate::vocation::{Vocation, VocationClass};

/// Enum representing individual resource pools.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum ResourceKind {
    Health,
    Mana,
    /// Carrying capacity
    Capacity,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Health,
        ResourceKind::Mana,
        ResourceKind::Capacity,
    ];
}

/// `scale × (per_level × level + offset)`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinearFormula {
    pub scale: i64,
    pub per_level: i64,
    pub offset: i64,
}

impl LinearFormula {
    pub const fn new(scale: i64, per_level: i64, offset: i64) -> Self {
        Self {
            scale,
            per_level,
            offset,
        }
    }

    /// Raw formula value, may be negative at low levels.
    pub const fn evaluate(&self, level: u32) -> i64 {
        self.scale * (self.per_level * level as i64 + self.offset)
    }

    /// Formula value saturated into `0..=u32::MAX`.
    pub fn evaluate_clamped(&self, level: u32) -> u32 {
        u32::try_from(self.evaluate(level).max(0)).unwrap_or(u32::MAX)
    }
}

/// Health, mana and capacity formulas for one vocation class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VocationFormula {
    pub health: LinearFormula,
    pub mana: LinearFormula,
    pub capacity: LinearFormula,
}

impl VocationFormula {
    pub const NONE: Self = Self {
        health: LinearFormula::new(5, 1, 29),
        mana: LinearFormula::new(5, 1, 10),
        capacity: LinearFormula::new(10, 1, 39),
    };

    pub const KNIGHT: Self = Self {
        health: LinearFormula::new(5, 3, 13),
        mana: LinearFormula::new(5, 1, 10),
        capacity: LinearFormula::new(5, 5, 54),
    };

    pub const PALADIN: Self = Self {
        health: LinearFormula::new(5, 2, 21),
        mana: LinearFormula::new(5, 3, -6),
        capacity: LinearFormula::new(10, 2, 31),
    };

    pub const MAGE: Self = Self {
        health: LinearFormula::new(5, 1, 29),
        mana: LinearFormula::new(5, 6, -30),
        capacity: LinearFormula::new(10, 1, 39),
    };

    pub const fn for_class(class: VocationClass) -> &'static Self {
        match class {
            VocationClass::None => &Self::NONE,
            VocationClass::Knight => &Self::KNIGHT,
            VocationClass::Paladin => &Self::PALADIN,
            VocationClass::Mage => &Self::MAGE,
        }
    }

    pub const fn for_vocation(vocation: Vocation) -> &'static Self {
        Self::for_class(vocation.class())
    }
}

/// Maximum resource values for a player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMaximums {
    pub health: u32,
    pub mana: u32,
    pub capacity: u32,
}

impl ResourceMaximums {
    pub const fn new(health: u32, mana: u32, capacity: u32) -> Self {
        Self {
            health,
            mana,
            capacity,
        }
    }

    /// Compute maximums for `vocation` at experience `level`.
    ///
    /// Negative formula results (low-level paladin and mage mana) become zero.
    pub fn compute(vocation: Vocation, level: u32) -> Self {
        let formula = VocationFormula::for_vocation(vocation);
        Self {
            health: formula.health.evaluate_clamped(level),
            mana: formula.mana.evaluate_clamped(level),
            capacity: formula.capacity.evaluate_clamped(level),
        }
    }

    /// Get the max value for a specific resource.
    pub const fn get(&self, resource: ResourceKind) -> u32 {
        match resource {
            ResourceKind::Health => self.health,
            ResourceKind::Mana => self.mana,
            ResourceKind::Capacity => self.capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpromoted_level_one() {
        let max = ResourceMaximums::compute(Vocation::None, 1);
        assert_eq!(max, ResourceMaximums::new(150, 55, 400));
    }

    #[test]
    fn level_eight_by_vocation() {
        assert_eq!(
            ResourceMaximums::compute(Vocation::Knight, 8),
            ResourceMaximums::new(185, 90, 470)
        );
        assert_eq!(
            ResourceMaximums::compute(Vocation::Paladin, 8),
            ResourceMaximums::new(185, 90, 470)
        );
        assert_eq!(
            ResourceMaximums::compute(Vocation::Sorcerer, 8),
            ResourceMaximums::new(185, 90, 370)
        );
    }

    #[test]
    fn promotions_share_formulas() {
        for (base, promoted) in [
            (Vocation::Knight, Vocation::EliteKnight),
            (Vocation::Paladin, Vocation::RoyalPaladin),
            (Vocation::Sorcerer, Vocation::MasterSorcerer),
            (Vocation::Druid, Vocation::ElderDruid),
        ] {
            assert_eq!(
                ResourceMaximums::compute(base, 42),
                ResourceMaximums::compute(promoted, 42)
            );
        }
    }

    #[test]
    fn negative_mana_saturates_at_zero() {
        assert_eq!(VocationFormula::MAGE.mana.evaluate(1), -120);
        assert_eq!(ResourceMaximums::compute(Vocation::Druid, 1).mana, 0);
        assert_eq!(VocationFormula::PALADIN.mana.evaluate(1), -15);
        assert_eq!(ResourceMaximums::compute(Vocation::Paladin, 2).mana, 0);
        assert_eq!(ResourceMaximums::compute(Vocation::Paladin, 3).mana, 15);
    }
}
