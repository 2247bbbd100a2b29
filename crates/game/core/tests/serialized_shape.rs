use serde_json::{Value, json};
use skills_core::{
    InitialSkillPoints, Player, PlayerProperties, PropertyMap, SkillConfig, SkillCurves,
    SkillKind, SkillSet, SkillSlot, SkillsSnapshot, Vocation,
};

const CANONICAL_KEYS: [&str; 9] = [
    "magic",
    "fist",
    "club",
    "sword",
    "axe",
    "distance",
    "shielding",
    "fishing",
    "experience",
];

fn keys(value: &Value) -> Vec<String> {
    let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    keys
}

fn canonical_keys() -> Vec<String> {
    let mut keys: Vec<String> = CANONICAL_KEYS.iter().map(|k| k.to_string()).collect();
    keys.sort();
    keys
}

#[test]
fn snapshot_has_exactly_the_nine_keys() {
    let initial = InitialSkillPoints {
        magic: 1600,
        sword: 110,
        experience: 4200,
        ..InitialSkillPoints::default()
    };
    let player = Player::new(Vocation::Knight, &initial, &SkillConfig::default()).unwrap();

    let value = serde_json::to_value(player.snapshot()).unwrap();

    assert_eq!(keys(&value), canonical_keys());
    assert_eq!(
        value,
        json!({
            "magic": 1600,
            "fist": 0,
            "club": 0,
            "sword": 110,
            "axe": 0,
            "distance": 0,
            "shielding": 0,
            "fishing": 0,
            "experience": 4200,
        })
    );
}

#[test]
fn unregistered_skills_serialize_as_null() {
    let mut store = PropertyMap::new(Vocation::None);
    store
        .add_skill(SkillSlot::new(SkillKind::Fishing, 20))
        .unwrap();
    let skills = SkillSet::with_curves(SkillCurves::new());

    let value = serde_json::to_value(skills.serialize(&store)).unwrap();

    assert_eq!(keys(&value), canonical_keys());
    assert_eq!(value["fishing"], json!(20));
    assert_eq!(value["magic"], Value::Null);
}

#[test]
fn slots_serialize_as_bare_points() {
    let slot = SkillSlot::new(SkillKind::Axe, 77);
    assert_eq!(serde_json::to_value(slot).unwrap(), json!(77));
}

#[test]
fn snapshots_load_back_as_starting_points() {
    let snapshot: SkillsSnapshot =
        serde_json::from_str(r#"{"sword": 110, "experience": 4200}"#).unwrap();
    let initial = InitialSkillPoints::from(snapshot);
    let player = Player::new(Vocation::Knight, &initial, &SkillConfig::default()).unwrap();

    assert_eq!(player.skill_level(SkillKind::Sword), Some(12));
    assert_eq!(player.level(), 8);
}

#[test]
fn sheet_serializes_vocation_in_snake_case() {
    let player = Player::from_config(Vocation::EliteKnight, &SkillConfig::default()).unwrap();
    let value = serde_json::to_value(player.sheet()).unwrap();
    assert_eq!(value["vocation"], json!("elite_knight"));
    assert_eq!(value["level"], json!(1));
    assert_eq!(
        value["maximums"],
        json!({ "health": 80, "mana": 55, "capacity": 295 })
    );
}
