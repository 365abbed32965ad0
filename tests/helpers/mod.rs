#![allow(dead_code)]

use std::rc::Rc;

use chrono::{Local, TimeZone};
use once_cell::sync::Lazy;
use samity::core::{
    get_subscriber, init_subscriber, write_json, FixedClock, KeyValueStore, MemoryStore,
    StorageError, DATASET_KEY,
};
use samity::models::dataset::Dataset;
use samity::models::format_date;
use samity::samity_app::SamityApp;

// Ensure that the `tracing` stack is only initialised once
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        let _ = init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        let _ = init_subscriber(subscriber);
    };
});

pub struct TestApp {
    pub app: SamityApp,
    pub storage: MemoryStore,
    pub clock: FixedClock,
}

impl TestApp {
    pub fn today(&self) -> String {
        format_date(self.clock.0.date_naive())
    }

    /// A fresh app over the same storage, as after a restart.
    pub fn reload(&self) -> SamityApp {
        SamityApp::with_provider(Rc::new(self.storage.clone()), Rc::new(self.clock))
    }

    pub fn stored_dataset(&self) -> Dataset {
        let json = self
            .storage
            .get(DATASET_KEY)
            .unwrap()
            .expect("dataset was never persisted");
        serde_json::from_str(&json).unwrap()
    }
}

pub fn test_clock() -> FixedClock {
    FixedClock(Local.with_ymd_and_hms(2024, 10, 20, 10, 0, 0).unwrap())
}

/// App over empty storage, so it starts from the seed data.
pub fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let storage = MemoryStore::new();
    let clock = test_clock();
    let app = SamityApp::with_provider(Rc::new(storage.clone()), Rc::new(clock));
    TestApp {
        app,
        storage,
        clock,
    }
}

/// App whose storage already holds `dataset`.
pub fn spawn_app_with(dataset: &Dataset) -> TestApp {
    Lazy::force(&TRACING);

    let storage = MemoryStore::new();
    write_json(&storage, DATASET_KEY, dataset).unwrap();
    let clock = test_clock();
    let app = SamityApp::with_provider(Rc::new(storage.clone()), Rc::new(clock));
    TestApp {
        app,
        storage,
        clock,
    }
}

/// Seed data without transactions or messages.
pub fn empty_ledger() -> Dataset {
    let mut dataset = Dataset::seed();
    dataset.transactions.clear();
    dataset.messages.clear();
    dataset
}

/// Reads succeed with nothing stored; every write fails like a full disk.
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".into()))
    }

    fn remove(&self, _key: &str) -> Result<bool, StorageError> {
        Err(StorageError::Unavailable("quota exceeded".into()))
    }
}
