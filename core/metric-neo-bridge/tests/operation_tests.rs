use std::collections::HashSet;

use metric_neo_bridge::{
    Error, Hydrator, Operation, Response, ReturnShape, UnknownOperation,
};
use metric_neo_model::{Hydrated, catalog};
use pretty_assertions::assert_eq;
use serde_json::json;

// ── Catalog ──────────────────────────────────────────────────────

#[test]
fn catalog_lists_every_binding_once() {
    assert_eq!(Operation::ALL.len(), 35);
    let names: HashSet<&str> = Operation::ALL.iter().map(|op| op.name()).collect();
    assert_eq!(names.len(), Operation::ALL.len());
}

#[test]
fn names_round_trip() {
    for &op in Operation::ALL {
        assert_eq!(Operation::from_name(op.name()), Some(op));
        assert_eq!(op.to_string().parse::<Operation>(), Ok(op));
    }
}

#[test]
fn acronyms_keep_binding_case() {
    assert_eq!(Operation::ProfileLinkOpticById.name(), "ProfileLinkOpticByID");
    assert_eq!(Operation::ProjectileUpdateBc.name(), "ProjectileUpdateBC");
    assert_eq!(Operation::from_name("ProjectileUpdateBc"), None);
}

#[test]
fn unknown_name_is_rejected() {
    let err = "ProfileExplode".parse::<Operation>().unwrap_err();
    assert_eq!(err, UnknownOperation("ProfileExplode".into()));
    assert_eq!(err.to_string(), "unknown operation: ProfileExplode");
}

#[test]
fn list_operations_return_many() {
    for &op in Operation::ALL {
        let many = matches!(op.returns(), ReturnShape::Many(_));
        assert_eq!(many, op.name().contains("List"), "{op}");
    }
    assert_eq!(
        Operation::SessionListSessions.returns(),
        ReturnShape::Many(&catalog::SESSION_META)
    );
}

#[test]
fn delete_operations_return_flag() {
    for &op in Operation::ALL {
        if op.name().contains("Delete") {
            assert_eq!(op.returns(), ReturnShape::Flag, "{op}");
        }
    }
    assert_eq!(Operation::CompleteSetup.returns(), ReturnShape::Flag);
}

#[test]
fn directory_operations_return_text() {
    assert_eq!(Operation::SelectDataDirectory.returns(), ReturnShape::Text);
    assert_eq!(Operation::ChangeDataDirectory.returns(), ReturnShape::Text);
}

#[test]
fn session_mutations_return_session() {
    for op in [
        Operation::SessionCreateSession,
        Operation::SessionRecordShot,
        Operation::SessionMarkShotInvalid,
        Operation::SessionUpdateNote,
    ] {
        assert_eq!(op.returns(), ReturnShape::One(&catalog::SESSION));
    }
}

// ── Dynamic hydration ────────────────────────────────────────────

#[test]
fn hydrates_single_entity() {
    let envelope = json!({
        "success": true,
        "error": "",
        "data": {"enabled": true, "port": "COM3", "baudRate": 9600, "autoRecord": false}
    });
    let outcome = Operation::GetChronoConfig
        .hydrate(&Hydrator::default(), &envelope)
        .unwrap();
    let Some(Response::Entity(Hydrated::Entity(record))) = outcome.data() else {
        panic!("expected entity, got {:?}", outcome.data());
    };
    assert_eq!(record.entity_type(), "ChronoConfig");
    assert_eq!(record.get_str("port"), Some("COM3"));
}

#[test]
fn hydrates_list() {
    let envelope = json!({"success": true, "data": [{"id": "a"}, {"id": "b"}], "error": ""});
    let outcome = Operation::SightListSights
        .hydrate(&Hydrator::default(), &envelope)
        .unwrap();
    let Some(Response::Entity(Hydrated::Sequence(items))) = outcome.data() else {
        panic!("expected sequence, got {:?}", outcome.data());
    };
    let ids: Vec<_> = items
        .iter()
        .map(|h| h.as_entity().and_then(|r| r.get_str("id")))
        .collect();
    assert_eq!(ids, vec![Some("a"), Some("b")]);
}

#[test]
fn hydrates_flag_and_text() {
    let deleted = Operation::SessionDeleteSession
        .hydrate(&Hydrator::default(), &json!({"success": true, "data": true}))
        .unwrap();
    assert_eq!(deleted.data(), Some(&Response::Flag(true)));

    let dir = Operation::SelectDataDirectory
        .hydrate(&Hydrator::default(), &json!({"success": true, "data": "/data"}))
        .unwrap();
    assert_eq!(dir.data(), Some(&Response::Text("/data".into())));
}

#[test]
fn failure_through_operation() {
    let outcome = Operation::GetChronoConfig
        .hydrate(
            &Hydrator::default(),
            &json!({"success": false, "error": "port not found"}),
        )
        .unwrap();
    assert!(!outcome.is_ok());
    assert_eq!(outcome.error(), "port not found");
    assert!(outcome.data().is_none());
}

#[test]
fn null_data_is_none() {
    let outcome = Operation::ProfileListProfiles
        .hydrate(&Hydrator::default(), &json!({"success": true, "data": null}))
        .unwrap();
    assert!(outcome.is_ok());
    assert!(outcome.data().is_none());
}

#[test]
fn wrong_shape_is_rejected() {
    let one_for_many = Operation::ProfileListProfiles
        .hydrate(&Hydrator::default(), &json!({"success": true, "data": {"id": "p1"}}))
        .unwrap_err();
    assert!(matches!(
        one_for_many,
        Error::ShapeMismatch { expected: "sequence", found: "mapping", .. }
    ));

    let many_for_one = Operation::ProfileLoadProfile
        .hydrate(&Hydrator::default(), &json!({"success": true, "data": [{"id": "p1"}]}))
        .unwrap_err();
    assert!(matches!(
        many_for_one,
        Error::ShapeMismatch { expected: "mapping", found: "sequence", .. }
    ));
}

#[test]
fn response_serializes_untagged() {
    let outcome = Operation::SightLoadSight
        .hydrate(
            &Hydrator::default(),
            &json!({"success": true, "data": {"id": "s1", "extra": 1}, "error": ""}),
        )
        .unwrap();
    let wire = serde_json::to_value(&outcome).unwrap();
    assert_eq!(
        wire,
        json!({"success": true, "data": {"id": "s1"}, "error": ""})
    );
}
