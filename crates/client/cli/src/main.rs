//! Skill sheet command-line tool.
//!
//! Loads a player profile, optionally forces skill levels, and prints the
//! resulting sheet as JSON.
//!
//! ```bash
//! skills crates/game/content/data/profiles/squire.ron sword=40 experience=20
//! ```
mod config;
mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{CliConfig, LevelOverride};
use skills_content::{ConfigLoader, ProfileLoader};
use skills_core::SkillConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    let mut args = std::env::args().skip(1);
    let profile_path = args
        .next()
        .map(PathBuf::from)
        .context("usage: skills <profile.ron> [skill=level ...]")?;
    let overrides = args
        .map(|arg| arg.parse::<LevelOverride>())
        .collect::<Result<Vec<_>>>()?;

    let skill_config = match &config.skills_config {
        Some(path) => ConfigLoader::load(path)?,
        None => SkillConfig::default(),
    };

    let profile = ProfileLoader::load(&profile_path)?;
    tracing::info!("Loaded profile '{}' ({})", profile.name, profile.vocation);

    let mut player = profile.into_player(&skill_config)?;
    for LevelOverride { skill, level } in &overrides {
        player
            .set_skill_level_by_name(skill, *level)
            .with_context(|| format!("cannot set {} to {}", skill, level))?;
    }

    let sheet = player.sheet();
    println!("{}", serde_json::to_string_pretty(&sheet)?);

    Ok(())
}
