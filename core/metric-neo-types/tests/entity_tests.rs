use metric_neo_types::{
    ChronoConfig, ChronoPollResult, Optic, Profile, Projectile, Session, SessionMeta, Shot, Sight,
    Statistics,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn keys(value: &serde_json::Value) -> Vec<&str> {
    let mut keys: Vec<&str> = value
        .as_object()
        .expect("entity serializes to a mapping")
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    keys
}

// ── Wire names ───────────────────────────────────────────────────

#[test]
fn chrono_config_wire_names() {
    let value = serde_json::to_value(ChronoConfig::default()).unwrap();
    assert_eq!(keys(&value), vec!["autoRecord", "baudRate", "enabled", "port"]);
}

#[test]
fn shot_wire_names() {
    let value = serde_json::to_value(Shot::default()).unwrap();
    assert_eq!(
        keys(&value),
        vec!["energyJoules", "timestamp", "valid", "velocityMPS"]
    );
}

#[test]
fn optic_uses_type_key() {
    let value = serde_json::to_value(Optic {
        optic_type: "scope".into(),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(value["type"], "scope");
    assert_eq!(
        keys(&value),
        vec!["maxMagnification", "minMagnification", "modelName", "type", "weightG"]
    );
}

#[test]
fn sight_wire_names() {
    let value = serde_json::to_value(Sight::default()).unwrap();
    assert_eq!(
        keys(&value),
        vec!["id", "maxMagnification", "minMagnification", "modelName", "type", "weightG"]
    );
}

#[test]
fn profile_full_wire_names() {
    let profile = Profile {
        optic: Some(Optic::default()),
        optic_id: Some("s1".into()),
        twist_rate_mm: Some(450.0),
        default_ammo_id: Some("a1".into()),
        ..Default::default()
    };
    let value = serde_json::to_value(&profile).unwrap();
    assert_eq!(
        keys(&value),
        vec![
            "barrelLengthMM",
            "category",
            "defaultAmmoID",
            "id",
            "name",
            "optic",
            "opticID",
            "sightHeightMM",
            "totalWeightG",
            "triggerWeightG",
            "twistRateMM",
        ]
    );
}

#[test]
fn statistics_wire_names() {
    let value = serde_json::to_value(Statistics::default()).unwrap();
    assert_eq!(
        keys(&value),
        vec![
            "avgEnergyJoules",
            "avgVelocityMPS",
            "extremeSpread",
            "maxVelocityMPS",
            "minVelocityMPS",
            "standardDeviation",
            "totalShotCount",
            "validShotCount",
        ]
    );
}

// ── Optional fields ──────────────────────────────────────────────

#[test]
fn absent_optionals_are_omitted() {
    let value = serde_json::to_value(Profile::default()).unwrap();
    for key in ["optic", "opticID", "twistRateMM", "defaultAmmoID"] {
        assert!(value.get(key).is_none(), "{key} should be omitted");
    }

    let value = serde_json::to_value(ChronoPollResult::default()).unwrap();
    assert_eq!(value, json!({"recorded": false}));
}

#[test]
fn session_meta_averages_are_optional() {
    let meta: SessionMeta = serde_json::from_value(json!({
        "id": "s1",
        "profileName": "Match",
        "projectileName": "JSB 8.44",
        "shotCount": 0,
        "validShotCount": 0,
        "createdAt": "2024-05-01T10:00:00Z",
        "note": ""
    }))
    .unwrap();
    assert_eq!(meta.avg_velocity_mps, None);
    assert_eq!(meta.avg_energy_joules, None);
}

#[test]
fn missing_required_fields_default() {
    let projectile: Projectile = serde_json::from_value(json!({"id": "p1"})).unwrap();
    assert_eq!(
        projectile,
        Projectile {
            id: "p1".into(),
            ..Default::default()
        }
    );
}

// ── Session ──────────────────────────────────────────────────────

#[test]
fn session_valid_shots_keeps_order() {
    let shot = |v: f64, valid: bool| Shot {
        velocity_mps: v,
        valid,
        ..Default::default()
    };
    let session = Session {
        shots: vec![shot(170.0, true), shot(90.0, false), shot(171.5, true)],
        ..Default::default()
    };
    let velocities: Vec<f64> = session.valid_shots().map(|s| s.velocity_mps).collect();
    assert_eq!(velocities, vec![170.0, 171.5]);
}

#[test]
fn session_serializes_empty_shots() {
    let value = serde_json::to_value(Session::default()).unwrap();
    assert_eq!(value["shots"], json!([]));
    assert!(value.get("temperatureCelsius").is_none());
}
