//! Tests for the session module.

use jiff::{SignedDuration, Timestamp};
use tempfile::TempDir;

use super::*;
use crate::timeline::MAX_BUFFER_INCREMENT;
use crate::{
    models::{Anchor, BufferChange},
    params::{AddTask, EditBuffer, MoveTask, RemoveTask, StartSession},
    Catalog, Fleet, HangarError,
};

/// Helper function to create a session for the first built-in aircraft
fn create_test_session() -> PlanningSession {
    SessionBuilder::from_params(
        &Fleet::builtin(),
        &StartSession {
            aircraft_id: "ac-101".to_string(),
            buffer_minutes: None,
        },
    )
    .expect("aircraft exists")
    .build()
    .expect("Failed to build session")
}

fn add(session: &mut PlanningSession, catalog_id: &str) -> u64 {
    session
        .add_task(
            &Catalog::builtin(),
            &AddTask {
                catalog_id: catalog_id.to_string(),
            },
        )
        .expect("Failed to add task")
        .id
}

#[test]
fn test_builder_requires_aircraft() {
    assert!(matches!(
        SessionBuilder::new().build(),
        Err(HangarError::Configuration { .. })
    ));
}

#[test]
fn test_builder_unknown_aircraft() {
    let result = SessionBuilder::from_params(
        &Fleet::builtin(),
        &StartSession {
            aircraft_id: "ac-000".to_string(),
            buffer_minutes: None,
        },
    );
    assert!(matches!(result, Err(HangarError::AircraftNotFound { .. })));
}

#[test]
fn test_builder_custom_increment() {
    let session = SessionBuilder::from_params(
        &Fleet::builtin(),
        &StartSession {
            aircraft_id: "ac-101".to_string(),
            buffer_minutes: Some(15),
        },
    )
    .unwrap()
    .build()
    .unwrap();
    assert_eq!(session.timeline().increment(), SignedDuration::from_mins(15));
}

#[test]
fn test_builder_rejects_zero_increment() {
    let result = SessionBuilder::from_params(
        &Fleet::builtin(),
        &StartSession {
            aircraft_id: "ac-101".to_string(),
            buffer_minutes: Some(0),
        },
    )
    .unwrap()
    .build();
    assert!(matches!(result, Err(HangarError::InvalidInput { .. })));
}

#[test]
fn test_add_task_unknown_catalog_item() {
    let mut session = create_test_session();
    let result = session.add_task(
        &Catalog::builtin(),
        &AddTask {
            catalog_id: "missing".to_string(),
        },
    );
    assert!(matches!(result, Err(HangarError::CatalogItemNotFound { .. })));
    assert!(session.timeline().is_empty());
}

#[test]
fn test_move_task() {
    let mut session = create_test_session();
    let gear = add(&mut session, "rp-mlg-actuator");
    let pump = add(&mut session, "rp-fuel-pump");

    assert!(session.move_task(&MoveTask {
        task_id: pump,
        to_index: 0
    }));
    let tasks = session.timeline().tasks();
    assert_eq!(tasks[0].id, pump);
    assert_eq!(tasks[1].id, gear);
    assert_eq!(tasks[0].start, session.aircraft().available_at);

    assert!(!session.move_task(&MoveTask {
        task_id: 999,
        to_index: 0
    }));
    assert!(!session.move_task(&MoveTask {
        task_id: pump,
        to_index: 2
    }));
}

#[test]
fn test_remove_task_with_and_without_reflow() {
    let mut session = create_test_session();
    let first = add(&mut session, "rp-fuel-pump");
    let second = add(&mut session, "rp-radome-seal");
    let third = add(&mut session, "mk-radar-sw");

    session
        .remove_task(&RemoveTask {
            task_id: first,
            reflow: false,
        })
        .expect("removed");
    assert!(session.summary().needs_reflow);

    session
        .remove_task(&RemoveTask {
            task_id: second,
            reflow: true,
        })
        .expect("removed");
    let summary = session.summary();
    assert!(!summary.needs_reflow);
    assert_eq!(
        session.timeline().task(third).unwrap().start,
        session.aircraft().available_at
    );

    assert!(session
        .remove_task(&RemoveTask {
            task_id: first,
            reflow: true
        })
        .is_none());
}

#[test]
fn test_buffer_ops() {
    let mut session = create_test_session();
    let first = add(&mut session, "rp-fuel-pump");
    add(&mut session, "rp-radome-seal");
    let anchor = EditBuffer {
        anchor: Anchor::After(first),
    };

    assert!(matches!(
        session.extend_buffer(&anchor),
        Some(BufferChange::Created(_))
    ));
    assert!(matches!(
        session.shrink_buffer(&anchor),
        Some(BufferChange::Removed(_))
    ));
    assert!(session.shrink_buffer(&anchor).is_none());
}

#[test]
fn test_summary() {
    let mut session = create_test_session();
    let empty = session.summary();
    assert_eq!(empty.task_count, 0);
    assert_eq!(empty.completes_at, None);
    assert_eq!(empty.slack, empty.window.length());
    assert!(empty.fits_window);

    let first = add(&mut session, "rp-mlg-actuator");
    add(&mut session, "rp-fuel-pump");
    session.extend_buffer(&EditBuffer {
        anchor: Anchor::After(first),
    });

    let summary = session.summary();
    assert_eq!(summary.aircraft_id, "ac-101");
    assert_eq!(summary.task_count, 2);
    assert_eq!(summary.buffer_count, 1);
    assert_eq!(summary.work, SignedDuration::from_hours(5));
    assert_eq!(summary.idle, SignedDuration::from_mins(30));
    assert_eq!(
        summary.completes_at,
        Some("2024-02-28T13:49:00Z".parse::<Timestamp>().unwrap())
    );
    assert!(summary.fits_window);
    assert!(!summary.needs_reflow);
}

#[test]
fn test_summary_reports_overrun() {
    let mut session = SessionBuilder::from_params(
        &Fleet::builtin(),
        &StartSession {
            aircraft_id: "ac-204".to_string(),
            buffer_minutes: None,
        },
    )
    .unwrap()
    .build()
    .unwrap();

    add(&mut session, "mk-adsb-out");
    add(&mut session, "rp-fuel-pump");
    add(&mut session, "rp-radome-seal");

    let summary = session.summary();
    assert!(!summary.fits_window);
    assert_eq!(summary.slack, SignedDuration::from_mins(-30));
}

#[test]
fn test_store_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = SessionStore::new(Some(temp_dir.path().join("nested/session.json")))
        .expect("store");

    assert!(store.load().expect("load").is_none());
    assert!(matches!(
        store.require(),
        Err(HangarError::NoActiveSession { .. })
    ));

    let mut session = create_test_session();
    add(&mut session, "fi-avionics-bit");
    store.save(&session).expect("save");

    let restored = store.require().expect("session saved");
    assert_eq!(restored, session);

    assert!(store.clear().expect("clear"));
    assert!(!store.clear().expect("clear again"));
}

#[test]
fn test_store_rejects_corrupt_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("session.json");
    std::fs::write(&path, "{").expect("write");

    let store = SessionStore::new(Some(&path)).expect("store");
    assert!(matches!(
        store.load(),
        Err(HangarError::Serialization { .. })
    ));
}

#[test]
fn test_builder_rejects_oversized_increment() {
    for minutes in [u32::MAX, 24 * 60 + 1] {
        let result = SessionBuilder::from_params(
            &Fleet::builtin(),
            &StartSession {
                aircraft_id: "ac-101".to_string(),
                buffer_minutes: Some(minutes),
            },
        )
        .unwrap()
        .build();
        assert!(matches!(result, Err(HangarError::InvalidInput { .. })));
    }

    let session = SessionBuilder::new()
        .with_aircraft(Fleet::builtin().require("ac-101").unwrap().clone())
        .with_buffer_increment(MAX_BUFFER_INCREMENT)
        .build()
        .expect("largest increment accepted");
    assert_eq!(session.timeline().increment(), MAX_BUFFER_INCREMENT);
}

#[test]
fn test_summary_counts_start_buffer_as_idle() {
    let mut session = create_test_session();
    session.extend_buffer(&EditBuffer {
        anchor: Anchor::Start,
    });

    let summary = session.summary();
    assert_eq!(summary.buffer_count, 1);
    assert_eq!(summary.idle, SignedDuration::from_mins(30));
    assert!(summary.to_string().contains("- Buffers: 1 (0h 30m idle)"));
}

#[test]
fn test_store_rejects_tampered_increment() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("session.json");
    let store = SessionStore::new(Some(&path)).expect("store");

    let mut session = create_test_session();
    add(&mut session, "rp-fuel-pump");
    add(&mut session, "rp-radome-seal");
    store.save(&session).expect("save");

    let mut json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("json");
    json["timeline"]["increment"] =
        serde_json::to_value(SignedDuration::from_mins(-30)).expect("duration json");
    std::fs::write(&path, json.to_string()).expect("write");

    match store.load() {
        Err(HangarError::Serialization { source }) => {
            assert!(source.to_string().contains("buffer_increment"));
        }
        other => panic!("Expected Serialization error, got {other:?}"),
    }
}
