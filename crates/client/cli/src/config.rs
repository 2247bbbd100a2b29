//! Environment-driven CLI configuration.

use std::env;
use std::path::PathBuf;

/// Paths the CLI reads from the environment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// TOML skill configuration; built-in curves when unset.
    pub skills_config: Option<PathBuf>,
    /// Directory for a log file in addition to stderr.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    pub const CONFIG_VAR: &'static str = "SKILLS_CONFIG";
    pub const LOG_DIR_VAR: &'static str = "SKILLS_LOG_DIR";

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read_path = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
        };

        Self {
            skills_config: read_path(Self::CONFIG_VAR),
            log_dir: read_path(Self::LOG_DIR_VAR),
        }
    }
}

/// A `skill=level` argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelOverride {
    pub skill: String,
    pub level: u32,
}

impl std::str::FromStr for LevelOverride {
    type Err = anyhow::Error;

    fn from_str(arg: &str) -> Result<Self, Self::Err> {
        let (skill, level) = arg
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("expected skill=level, got '{}'", arg))?;
        let level = level
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid level in '{}': {}", arg, e))?;

        Ok(Self {
            skill: skill.trim().to_string(),
            level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_both_paths() {
        let config = CliConfig::from_lookup(|key| match key {
            "SKILLS_CONFIG" => Some("data/config/skills.toml".into()),
            "SKILLS_LOG_DIR" => Some("/tmp/skills".into()),
            _ => None,
        });
        assert_eq!(
            config.skills_config,
            Some(PathBuf::from("data/config/skills.toml"))
        );
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/skills")));
    }

    #[test]
    fn blank_values_are_unset() {
        let config = CliConfig::from_lookup(|_| Some("  ".into()));
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn parses_overrides() {
        let parsed: LevelOverride = "Sword = 40".parse().unwrap();
        assert_eq!(
            parsed,
            LevelOverride {
                skill: "Sword".into(),
                level: 40
            }
        );
        assert!("sword".parse::<LevelOverride>().is_err());
        assert!("sword=high".parse::<LevelOverride>().is_err());
    }
}
