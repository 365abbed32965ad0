mod helpers;

use std::rc::Rc;

use claim::{assert_none, assert_some};
use helpers::{spawn_app, spawn_app_with, test_clock, FailingStore};
use samity::core::{KeyValueStore, MemoryStore, DATASET_KEY};
use samity::db::notices::{delete_notice, upsert_notice};
use samity::models::dataset::Dataset;
use samity::models::notices::NoticeForm;
use samity::state_store::StateStore;

#[test]
fn empty_storage_loads_the_seed() {
    let test_app = spawn_app();

    assert_eq!(test_app.app.dataset(), &Dataset::seed());
    assert_none!(test_app.storage.get(DATASET_KEY).unwrap());
}

#[test]
fn unreadable_snapshot_falls_back_to_the_seed() {
    let storage = MemoryStore::new();
    storage.set(DATASET_KEY, "{ this is not json").unwrap();

    let store = StateStore::load(Rc::new(storage.clone()), Rc::new(test_clock()));

    assert_eq!(store.dataset(), &Dataset::seed());
    // the broken snapshot is left alone until the next write
    assert_eq!(
        storage.get(DATASET_KEY).unwrap().as_deref(),
        Some("{ this is not json")
    );
}

#[test]
fn replace_persists_the_whole_dataset() {
    let mut test_app = spawn_app();
    let mut next = test_app.app.dataset().clone();
    next.settings.name = "নতুন সমিতি".into();
    next.members.clear();

    test_app.app.store.replace(next.clone());

    assert_eq!(test_app.app.dataset(), &next);
    assert_eq!(test_app.stored_dataset(), next);
    assert!(!test_app.app.store.is_degraded());
}

#[test]
fn saved_state_survives_a_restart() {
    let mut dataset = Dataset::seed();
    dataset.settings.slogan = "একসাথে সঞ্চয়".into();
    let mut test_app = spawn_app_with(&dataset);
    assert_eq!(test_app.app.dataset(), &dataset);

    let form = NoticeForm {
        title: Some("সভা".into()),
        content: Some("শুক্রবার বিকেলে".into()),
        ..Default::default()
    };
    let notice = upsert_notice(&mut test_app.app.store, form, None).unwrap();

    let restarted = test_app.reload();
    assert_eq!(restarted.dataset().notices[0], notice);
    assert_eq!(restarted.dataset().settings.slogan, "একসাথে সঞ্চয়");
}

#[test]
fn snapshot_with_a_cleared_notice_date_is_not_replaced_by_the_seed() {
    let mut value = serde_json::to_value(Dataset::seed()).unwrap();
    value["settings"]["name"] = "আমাদের সমিতি".into();
    value["members"][0]["name"] = "সত্যিকারের সদস্য".into();
    value["notices"][1]["date"] = "".into();
    let storage = MemoryStore::new();
    storage.set(DATASET_KEY, &value.to_string()).unwrap();

    let mut store = StateStore::load(Rc::new(storage.clone()), Rc::new(test_clock()));
    assert_eq!(store.dataset().settings.name, "আমাদের সমিতি");
    assert!(delete_notice(&mut store, "1"));

    let stored: Dataset =
        serde_json::from_str(&storage.get(DATASET_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(stored.settings.name, "আমাদের সমিতি");
    assert_eq!(stored.members[0].name, "সত্যিকারের সদস্য");
    assert_eq!(stored.notices.len(), 1);
    assert_eq!(stored.notices[0].date, "");
}

#[test]
fn failed_writes_keep_the_change_in_memory() {
    let mut store = StateStore::load(Rc::new(FailingStore), Rc::new(test_clock()));
    let form = NoticeForm {
        title: Some("T".into()),
        content: Some("C".into()),
        ..Default::default()
    };

    let notice = upsert_notice(&mut store, form, None).unwrap();

    assert!(store.is_degraded());
    assert_eq!(store.dataset().notices[0], notice);
    assert!(store.persist().is_err());
}

#[test]
fn last_write_wins() {
    let storage = MemoryStore::new();
    let mut store = StateStore::load(Rc::new(storage.clone()), Rc::new(test_clock()));

    let mut first = store.dataset().clone();
    first.settings.name = "first".into();
    store.replace(first);
    let mut second = store.dataset().clone();
    second.settings.name = "second".into();
    store.replace(second);

    let stored = assert_some!(storage.get(DATASET_KEY).unwrap());
    let stored: Dataset = serde_json::from_str(&stored).unwrap();
    assert_eq!(stored.settings.name, "second");
    assert_eq!(storage.len(), 1);
}
