//! # Session Flows
//!
//! End-to-end flows across the store, the controllers and the renderers:
//! frame coalescing, cross-tab override sync, persistence through the file
//! store, and the access gate driving the compass presentation.

use std::sync::Arc;

use proptest::prelude::*;
use scc_app::{AccessGate, AccessMode, CompassConfig, CompassSession, CriteriaSession, EditField};
use scc_render::chart::MARKER_CLASS;
use scc_render::ids;
use scc_store::{FileStore, MemoryStore, StorageManager, LOCAL_STORAGE_FILE, SESSION_STORAGE_FILE};

fn manager(store: &MemoryStore) -> StorageManager {
    StorageManager::new(Arc::new(store.clone()))
}

fn compass(store: &MemoryStore, mode: AccessMode) -> CompassSession {
    CompassSession::new(manager(store), mode, &CompassConfig::default())
}

fn tooltip_of(session: &CompassSession, id: &str) -> Option<String> {
    session
        .document()
        .get(ids::CHART)?
        .find_by_class(MARKER_CLASS)
        .into_iter()
        .find(|m| m.attr("data-provider-id") == Some(id))
        .map(|m| m.text_content())
}

#[test]
fn override_in_one_tab_rerenders_the_other() {
    let criteria_tab = MemoryStore::new();
    let compass_tab = criteria_tab.open_tab();
    let mut page = compass(&compass_tab, AccessMode::Full);
    page.listen(compass_tab.subscribe());
    let renders = page.render_count();

    let mut editor = CriteriaSession::new(manager(&criteria_tab));
    assert!(editor.open_edit("aws"));
    editor.edit_input(EditField::Control, "100");
    editor.edit_input(EditField::Performance, "100");
    assert!(editor.save_edit());

    assert_eq!(page.poll_storage_events(), 1);
    assert_eq!(page.render_count(), renders + 1);
    assert_eq!(page.ranked()[0].provider.id.as_str(), "aws");
    assert!(tooltip_of(&page, "aws").unwrap().contains("Score: 100.0"));
}

#[test]
fn writer_does_not_hear_its_own_changes() {
    let store = MemoryStore::new();
    let mut editor = CriteriaSession::new(manager(&store));
    editor.listen(store.subscribe());
    editor.open_edit("stackit");
    editor.save_edit();
    assert_eq!(editor.poll_storage_events(), 0);
}

#[test]
fn reset_in_one_tab_restores_dataset_scores_in_the_other() {
    let a = MemoryStore::new();
    let b = a.open_tab();
    let mut editor = CriteriaSession::new(manager(&a));
    editor.open_edit("oracle-cloud");
    editor.edit_input(EditField::Control, "99");
    editor.save_edit();

    let mut page = compass(&b, AccessMode::Full);
    page.listen(b.subscribe());
    let oracle = |p: &CompassSession| {
        p.providers()
            .iter()
            .find(|p| p.id.as_str() == "oracle-cloud")
            .map(|p| p.control)
    };
    assert_eq!(oracle(&page), Some(99));

    editor.request_reset();
    editor.confirm_reset();
    page.poll_storage_events();
    assert_eq!(oracle(&page), Some(40));
    assert!(page.overrides().is_empty());
}

#[test]
fn overrides_survive_restart_through_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(LOCAL_STORAGE_FILE);
    {
        let store = FileStore::open(&path).unwrap();
        let mut editor = CriteriaSession::new(StorageManager::new(Arc::new(store)));
        editor.open_edit("vmware-private-cloud");
        editor.edit_input(EditField::Performance, "3.9");
        assert!(editor.save_edit());
    }

    let store = FileStore::open(&path).unwrap();
    let page = CriteriaSession::new(StorageManager::new(Arc::new(store)));
    assert_eq!(page.effective_performance("vmware-private-cloud"), 3);
    assert_eq!(page.effective_control("vmware-private-cloud"), 85);
}

#[test]
fn access_gate_selects_presentation() {
    let dir = tempfile::tempdir().unwrap();
    let session_store = FileStore::open(dir.path().join(SESSION_STORAGE_FILE)).unwrap();
    let gate = AccessGate::with_digest(
        StorageManager::new(Arc::new(session_store)),
        &scc_app::access::sha256_hex("compass"),
    );
    let local = MemoryStore::new();

    gate.enable_public_mode();
    let mut page = compass(&local, gate.check_session());
    assert!(page.ranked().iter().all(|r| r.provider.name.len() <= 3));

    assert!(gate.authenticate("compass"));
    page.set_mode(gate.check_session());
    assert!(page.ranked().iter().any(|r| r.provider.name == "STACKIT"));

    // A fresh gate over the same file sees the stored flag.
    let reopened = AccessGate::with_digest(
        StorageManager::new(Arc::new(FileStore::open(dir.path().join(SESSION_STORAGE_FILE)).unwrap())),
        &scc_app::access::sha256_hex("compass"),
    );
    assert_eq!(reopened.check_session(), AccessMode::Full);
}

#[test]
fn chart_render_is_idempotent_across_frames() {
    let store = MemoryStore::new();
    let mut page = compass(&store, AccessMode::Full);
    for v in [0, 25, 50, 75, 100] {
        page.slider_input(v);
        page.animation_frame();
    }
    let chart = page.document().get(ids::CHART).unwrap();
    assert_eq!(chart.find_by_class(MARKER_CLASS).len(), 14);
    assert_eq!(chart.find_by_class(scc_render::chart::ZONE_CLASS).len(), 5);
}

proptest! {
    #[test]
    fn slider_burst_renders_once_with_last_value(inputs in prop::collection::vec(-50i64..150, 1..40)) {
        let store = MemoryStore::new();
        let mut page = compass(&store, AccessMode::Full);
        let before = page.render_count();
        for v in &inputs {
            page.slider_input(*v);
        }
        prop_assert_eq!(page.render_count(), before);
        prop_assert!(page.animation_frame());
        prop_assert!(!page.animation_frame());
        prop_assert_eq!(page.render_count(), before + 1);
        let last = *inputs.last().unwrap();
        prop_assert_eq!(i64::from(page.slider().value()), last.clamp(0, 100));
    }
}
