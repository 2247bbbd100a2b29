//! Player profile loader.
//!
//! Loads stored players from RON files.

use std::path::Path;

use skills_core::{InitialSkillPoints, Player, SkillConfig, SkillError, Vocation};

use crate::loaders::{LoadResult, read_file};

/// A persisted player: vocation plus accumulated skill points.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    #[serde(default)]
    pub vocation: Vocation,
    #[serde(default)]
    pub skills: InitialSkillPoints,
}

impl PlayerProfile {
    /// Builds the live player for this profile.
    pub fn into_player(self, config: &SkillConfig) -> Result<Player, SkillError> {
        Player::new(self.vocation, &self.skills, config)
    }
}

/// Loader for player profiles from RON files.
pub struct ProfileLoader;

impl ProfileLoader {
    /// Load a single profile.
    ///
    /// RON format: `PlayerProfile`
    pub fn load(path: &Path) -> LoadResult<PlayerProfile> {
        let content = read_file(path)?;
        ron::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse profile RON {}: {}", path.display(), e)
        })
    }

    /// Load a list of profiles.
    ///
    /// RON format: `Vec<PlayerProfile>`. Names must be unique.
    pub fn load_catalog(path: &Path) -> LoadResult<Vec<PlayerProfile>> {
        let content = read_file(path)?;
        let profiles: Vec<PlayerProfile> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse profile catalog RON: {}", e))?;

        let mut seen = std::collections::HashSet::new();
        for profile in &profiles {
            if !seen.insert(profile.name.as_str()) {
                anyhow::bail!("Duplicate profile '{}' in {}", profile.name, path.display());
            }
        }

        Ok(profiles)
    }
}
