use bitflags::bitflags;

use crate::skill::SkillKind;
use crate::stats::ResourceKind;

bitflags! {
    /// Tracks which player properties changed since the last drain.
    ///
    /// Each bit represents a single property key. Post-write hooks inspect this
    /// mask to decide whether they need to run.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct PropertyFields: u16 {
        const MAGIC        = 1 << 0;
        const FIST         = 1 << 1;
        const CLUB         = 1 << 2;
        const SWORD        = 1 << 3;
        const AXE          = 1 << 4;
        const DISTANCE     = 1 << 5;
        const SHIELDING    = 1 << 6;
        const FISHING      = 1 << 7;
        const EXPERIENCE   = 1 << 8;
        const VOCATION     = 1 << 9;
        const MAX_HEALTH   = 1 << 10;
        const MAX_MANA     = 1 << 11;
        const MAX_CAPACITY = 1 << 12;

        const SKILLS = Self::MAGIC.bits()
            | Self::FIST.bits()
            | Self::CLUB.bits()
            | Self::SWORD.bits()
            | Self::AXE.bits()
            | Self::DISTANCE.bits()
            | Self::SHIELDING.bits()
            | Self::FISHING.bits()
            | Self::EXPERIENCE.bits();
        const MAXIMUMS = Self::MAX_HEALTH.bits()
            | Self::MAX_MANA.bits()
            | Self::MAX_CAPACITY.bits();
    }
}

impl PropertyFields {
    pub const fn skill(kind: SkillKind) -> Self {
        Self::from_bits_retain(1 << kind.index())
    }

    pub const fn maximum(resource: ResourceKind) -> Self {
        match resource {
            ResourceKind::Health => Self::MAX_HEALTH,
            ResourceKind::Mana => Self::MAX_MANA,
            ResourceKind::Capacity => Self::MAX_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_bits_follow_kind_order() {
        assert_eq!(PropertyFields::skill(SkillKind::Magic), PropertyFields::MAGIC);
        assert_eq!(
            PropertyFields::skill(SkillKind::Experience),
            PropertyFields::EXPERIENCE
        );
        let all = SkillKind::ALL
            .iter()
            .fold(PropertyFields::empty(), |acc, kind| {
                acc | PropertyFields::skill(*kind)
            });
        assert_eq!(all, PropertyFields::SKILLS);
    }
}
