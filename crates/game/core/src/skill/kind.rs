/// The nine skill categories tracked for every player.
///
/// The snake_case name doubles as the serialization key and the textual tag
/// accepted by the `*_by_name` lookups.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum SkillKind {
    Magic,
    /// Unarmed fighting
    Fist,
    Club,
    Sword,
    Axe,
    /// Ranged weapons
    Distance,
    Shielding,
    Fishing,
    /// Overall character level
    Experience,
}

impl SkillKind {
    /// All kinds in canonical serialization order.
    pub const ALL: [SkillKind; 9] = [
        SkillKind::Magic,
        SkillKind::Fist,
        SkillKind::Club,
        SkillKind::Sword,
        SkillKind::Axe,
        SkillKind::Distance,
        SkillKind::Shielding,
        SkillKind::Fishing,
        SkillKind::Experience,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Position of this kind in [`SkillKind::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parses a textual skill tag, returning `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_canonical_order() {
        for (position, kind) in SkillKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), position);
        }
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!(SkillKind::from_name("distance"), Some(SkillKind::Distance));
        assert_eq!(SkillKind::from_name("SHIELDING"), Some(SkillKind::Shielding));
        assert_eq!(SkillKind::from_name("vocation"), None);
        assert_eq!(SkillKind::Experience.as_ref(), "experience");
    }
}
