//! Vocations (character classes) and their formula classes.

use crate::error::SkillError;

/// A player's vocation.
///
/// Numeric ids are stable and used when vocations are persisted as raw integers.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Vocation {
    /// No vocation chosen yet
    #[default]
    None = 0,
    Sorcerer = 1,
    Druid = 2,
    Paladin = 3,
    Knight = 4,
    MasterSorcerer = 5,
    ElderDruid = 6,
    RoyalPaladin = 7,
    EliteKnight = 8,
}

/// Formula class shared by a base vocation and its promotion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum VocationClass {
    None,
    Knight,
    Paladin,
    /// Sorcerers and druids, promoted or not
    Mage,
}

impl Vocation {
    pub const ALL: [Vocation; 9] = [
        Vocation::None,
        Vocation::Sorcerer,
        Vocation::Druid,
        Vocation::Paladin,
        Vocation::Knight,
        Vocation::MasterSorcerer,
        Vocation::ElderDruid,
        Vocation::RoyalPaladin,
        Vocation::EliteKnight,
    ];

    pub const fn id(self) -> u8 {
        self as u8
    }

    pub const fn class(self) -> VocationClass {
        match self.base() {
            Vocation::Knight => VocationClass::Knight,
            Vocation::Paladin => VocationClass::Paladin,
            Vocation::Sorcerer | Vocation::Druid => VocationClass::Mage,
            _ => VocationClass::None,
        }
    }

    pub const fn is_promoted(self) -> bool {
        self.base() as u8 != self as u8
    }

    /// The promoted rank of this vocation, if it has one.
    pub const fn promotion(self) -> Option<Vocation> {
        match self {
            Vocation::Sorcerer => Some(Vocation::MasterSorcerer),
            Vocation::Druid => Some(Vocation::ElderDruid),
            Vocation::Paladin => Some(Vocation::RoyalPaladin),
            Vocation::Knight => Some(Vocation::EliteKnight),
            _ => None,
        }
    }

    /// The unpromoted rank of this vocation.
    pub const fn base(self) -> Vocation {
        match self {
            Vocation::MasterSorcerer => Vocation::Sorcerer,
            Vocation::ElderDruid => Vocation::Druid,
            Vocation::RoyalPaladin => Vocation::Paladin,
            Vocation::EliteKnight => Vocation::Knight,
            other => other,
        }
    }
}

impl TryFrom<u8> for Vocation {
    type Error = SkillError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Vocation::ALL
            .get(usize::from(id))
            .copied()
            .ok_or(SkillError::UnknownVocation(id))
    }
}

impl From<Vocation> for u8 {
    fn from(vocation: Vocation) -> Self {
        vocation.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn ids_round_trip() {
        for vocation in Vocation::ALL {
            assert_eq!(Vocation::try_from(vocation.id()), Ok(vocation));
        }
        assert_eq!(Vocation::try_from(9), Err(SkillError::UnknownVocation(9)));
    }

    #[test]
    fn promotions_share_their_class() {
        for vocation in Vocation::ALL {
            if let Some(promoted) = vocation.promotion() {
                assert!(promoted.is_promoted());
                assert_eq!(promoted.base(), vocation);
                assert_eq!(promoted.class(), vocation.class());
            }
        }
        assert_eq!(Vocation::None.promotion(), None);
        assert_eq!(Vocation::ElderDruid.class(), VocationClass::Mage);
    }

    #[test]
    fn parses_snake_case_names() {
        assert_eq!(Vocation::from_str("elite_knight"), Ok(Vocation::EliteKnight));
        assert_eq!(Vocation::from_str("Druid"), Ok(Vocation::Druid));
        assert_eq!(Vocation::RoyalPaladin.to_string(), "royal_paladin");
        assert!(Vocation::from_str("necromancer").is_err());
    }
}
