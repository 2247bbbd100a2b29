//! Skill configuration loader.

use std::path::Path;

use skills_core::SkillConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for skill configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Sections that are left out keep their defaults; a curve table that is
    /// present must list every skill.
    pub fn load(path: &Path) -> LoadResult<SkillConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)?;
        tracing::debug!(
            "loaded skill config from {} (max level {})",
            path.display(),
            config.curves.max_level
        );
        Ok(config)
    }

    /// Parse config from TOML text.
    pub fn parse(content: &str) -> LoadResult<SkillConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skills_core::SkillCurves;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(ConfigLoader::parse("").unwrap(), SkillConfig::default());
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config = ConfigLoader::parse(
            r#"
            [curves]
            max_level = 200

            [starting]
            experience = 4200
            "#,
        )
        .unwrap();

        assert_eq!(config.curves.max_level, 200);
        assert_eq!(config.curves.base, SkillCurves::new().base);
        assert_eq!(config.starting.experience, 4200);
        assert_eq!(config.starting.sword, 0);
    }

    #[test]
    fn incomplete_tables_are_rejected() {
        let err = ConfigLoader::parse(
            r#"
            [curves.base]
            magic = 1600
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }
}
