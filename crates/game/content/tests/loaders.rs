use std::fs;
use std::path::{Path, PathBuf};

use skills_content::{ConfigLoader, ProfileLoader};
use skills_core::{ResourceMaximums, SkillConfig, SkillKind, Vocation};
use tempfile::TempDir;

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn bundled_config_matches_builtin_curves() {
    let config = ConfigLoader::load(&data_dir().join("config/skills.toml")).unwrap();
    assert_eq!(config, SkillConfig::default());
}

#[test]
fn bundled_catalog_builds_players() {
    let config = SkillConfig::default();
    let profiles = ProfileLoader::load_catalog(&data_dir().join("profiles/starters.ron")).unwrap();
    assert_eq!(profiles.len(), 3);

    let rookie = profiles[0].clone().into_player(&config).unwrap();
    assert_eq!(rookie.vocation(), Vocation::None);
    assert_eq!(rookie.level(), 1);
    assert_eq!(rookie.maximums(), ResourceMaximums::new(150, 55, 400));

    let apprentice = profiles[2].clone().into_player(&config).unwrap();
    assert_eq!(apprentice.vocation(), Vocation::Sorcerer);
    assert_eq!(apprentice.skill_level(SkillKind::Magic), Some(2));
}

#[test]
fn single_profile_restores_levels() {
    let profile = ProfileLoader::load(&data_dir().join("profiles/squire.ron")).unwrap();
    assert_eq!(profile.name, "Squire");

    let player = profile.into_player(&SkillConfig::default()).unwrap();
    assert_eq!(player.vocation(), Vocation::Knight);
    assert_eq!(player.level(), 8);
    assert_eq!(player.skill_level(SkillKind::Sword), Some(12));
    assert_eq!(player.skill_level(SkillKind::Shielding), Some(11));
    assert_eq!(player.skill_level(SkillKind::Fishing), Some(10));
    assert_eq!(player.maximums(), ResourceMaximums::new(185, 90, 470));
}

#[test]
fn config_from_disk_lowers_the_cap() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "skills.toml", "[curves]\nmax_level = 12\n");

    let config = ConfigLoader::load(&path).unwrap();
    let profile = ProfileLoader::load(&data_dir().join("profiles/squire.ron")).unwrap();
    let mut player = profile.into_player(&config).unwrap();

    player.set_skill_level(SkillKind::Sword, 500).unwrap();
    assert_eq!(player.skill_level(SkillKind::Sword), Some(12));
}

#[test]
fn missing_file_reports_the_path() {
    let dir = TempDir::new().unwrap();
    let err = ProfileLoader::load(&dir.path().join("nobody.ron")).unwrap_err();
    assert!(err.to_string().contains("nobody.ron"));
}

#[test]
fn unknown_vocation_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "bad.ron", r#"PlayerProfile(name: "X", vocation: necromancer)"#);
    let err = ProfileLoader::load(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse profile RON"));
}

#[test]
fn duplicate_names_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "dupes.ron",
        r#"[PlayerProfile(name: "A"), PlayerProfile(name: "A", vocation: druid)]"#,
    );
    let err = ProfileLoader::load_catalog(&path).unwrap_err();
    assert!(err.to_string().contains("Duplicate profile 'A'"));
}
