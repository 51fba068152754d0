//! End-to-end planning workflow through the session store.

mod common;

use hangar_core::{
    params::{AddTask, EditBuffer, MoveTask, RemoveTask, ShowLayout, StartSession},
    Anchor, BufferChange, Catalog, Fleet, HangarError, SessionBuilder, SessionStore,
};
use jiff::SignedDuration;
use tempfile::TempDir;

fn add(catalog_id: &str) -> AddTask {
    AddTask {
        catalog_id: catalog_id.to_string(),
    }
}

#[test]
fn test_plan_survives_every_invocation() {
    let dir = TempDir::new().unwrap();
    let store = SessionStore::new(Some(dir.path().join("nested").join("session.json"))).unwrap();
    let catalog = Catalog::builtin();
    let fleet = Fleet::builtin();

    assert!(matches!(
        store.require(),
        Err(HangarError::NoActiveSession { .. })
    ));

    let session = SessionBuilder::from_params(
        &fleet,
        &StartSession {
            aircraft_id: "ac-101".to_string(),
            buffer_minutes: Some(15),
        },
    )
    .unwrap()
    .build()
    .unwrap();
    store.save(&session).unwrap();

    // Each step mirrors one CLI invocation: load, mutate, save.
    let mut session = store.require().unwrap();
    let isolate = session.add_task(&catalog, &add("fi-hyd-pressure")).unwrap();
    store.save(&session).unwrap();

    let mut session = store.require().unwrap();
    let repair = session.add_task(&catalog, &add("rp-mlg-actuator")).unwrap();
    assert_eq!(repair.id, isolate.id + 1);
    store.save(&session).unwrap();

    let mut session = store.require().unwrap();
    let change = session
        .extend_buffer(&EditBuffer {
            anchor: Anchor::After(isolate.id),
        })
        .unwrap();
    assert!(matches!(change, BufferChange::Created(_)));
    assert_eq!(change.buffer().duration, SignedDuration::from_mins(15));
    store.save(&session).unwrap();

    let mut session = store.require().unwrap();
    let seal = session.add_task(&catalog, &add("rp-radome-seal")).unwrap();
    assert_eq!(seal.id, 3);
    assert!(session.move_task(&MoveTask {
        task_id: seal.id,
        to_index: 0,
    }));
    store.save(&session).unwrap();

    let session = store.require().unwrap();
    let order: Vec<u64> = session.timeline().tasks().iter().map(|task| task.id).collect();
    assert_eq!(order, vec![seal.id, isolate.id, repair.id]);
    assert_eq!(session.timeline().tasks()[0].start, common::window_start());
    assert!(session.timeline().is_contiguous());

    let summary = session.summary();
    assert_eq!(summary.task_count, 3);
    assert_eq!(summary.work, SignedDuration::from_mins(30 + 120 + 240));
    assert_eq!(summary.idle, SignedDuration::from_mins(15));
    assert!(summary.fits_window);
    assert!(!summary.needs_reflow);

    assert!(store.clear().unwrap());
    assert!(store.load().unwrap().is_none());
}

#[test]
fn test_removal_gap_is_closed_by_reflow() {
    let catalog = Catalog::builtin();
    let mut session = SessionBuilder::new()
        .with_aircraft(Fleet::builtin().require("ac-317").unwrap().clone())
        .build()
        .unwrap();

    let first = session.add_task(&catalog, &add("rp-fuel-pump")).unwrap();
    let second = session.add_task(&catalog, &add("fi-engine-vib")).unwrap();
    let third = session.add_task(&catalog, &add("mk-radar-sw")).unwrap();

    let removed = session
        .remove_task(&RemoveTask {
            task_id: second.id,
            reflow: false,
        })
        .unwrap();
    assert_eq!(removed.id, second.id);
    assert_eq!(session.timeline().task(third.id).unwrap().start, third.start);
    assert!(session.summary().needs_reflow);

    session.reflow();
    assert_eq!(session.timeline().task(third.id).unwrap().start, first.end);
    assert!(!session.summary().needs_reflow);

    let layout = session.layout(&ShowLayout::default()).unwrap();
    assert_eq!(layout.blocks.len(), 2);
    assert_eq!(layout.blocks[1].offset, 60.0);
    assert_eq!(layout.blocks[1].height, 150.0);
}
