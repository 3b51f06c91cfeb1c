//! Timer Store
//!
//! Ordered timer list, written through to localStorage on every mutation.

use std::rc::Rc;

use crate::config::TIMERS_KEY;
use crate::error::{StoreError, StoreResult};
use crate::models::{normalize_name, TimerRecord};
use crate::storage::KeyValueStore;

/// In-memory timer list backed by a storage slot
pub struct TimerStore {
    storage: Rc<dyn KeyValueStore>,
    timers: Vec<TimerRecord>,
}

impl TimerStore {
    /// Load the persisted list; missing or malformed data yields an empty list
    pub fn load(storage: Rc<dyn KeyValueStore>) -> Self {
        let timers = read_timers(storage.as_ref());
        log::info!("[STORE] Loaded {} timers", timers.len());
        Self { storage, timers }
    }

    pub fn timers(&self) -> &[TimerRecord] {
        &self.timers
    }

    pub fn get(&self, index: usize) -> Option<&TimerRecord> {
        self.timers.get(index)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Persist the whole list, replacing whatever was stored
    pub fn save(&self) -> StoreResult<()> {
        let json = serde_json::to_string(&self.timers)?;
        self.storage.set(TIMERS_KEY, &json)
    }

    /// Append a default timer, returning its index
    pub fn add(&mut self) -> StoreResult<usize> {
        self.timers.push(TimerRecord::new());
        self.save()?;
        Ok(self.timers.len() - 1)
    }

    /// Replace a timer's name (trimmed, blank → default label) and end
    pub fn update(&mut self, index: usize, name: &str, end: &str) -> StoreResult<()> {
        let len = self.timers.len();
        let timer = self
            .timers
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })?;
        timer.name = normalize_name(name);
        timer.end = end.to_string();
        self.save()
    }

    /// Remove a timer; later timers shift down by one
    pub fn remove(&mut self, index: usize) -> StoreResult<TimerRecord> {
        if index >= self.timers.len() {
            return Err(StoreError::IndexOutOfRange { index, len: self.timers.len() });
        }
        let removed = self.timers.remove(index);
        self.save()?;
        Ok(removed)
    }
}

fn read_timers(storage: &dyn KeyValueStore) -> Vec<TimerRecord> {
    let Some(raw) = storage.get(TIMERS_KEY) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(timers) => timers,
        Err(err) => {
            log::warn!("[STORE] Ignoring malformed timer data: {}", err);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use pretty_assertions::assert_eq;

    fn setup(raw: Option<&str>) -> (Rc<MemoryStorage>, TimerStore) {
        let storage = Rc::new(MemoryStorage::default());
        if let Some(raw) = raw {
            storage.set(TIMERS_KEY, raw).unwrap();
        }
        let store = TimerStore::load(storage.clone());
        (storage, store)
    }

    fn record(name: &str, end: &str) -> TimerRecord {
        TimerRecord { name: name.to_string(), end: end.to_string() }
    }

    #[test]
    fn test_load_missing_is_empty() {
        let (_, store) = setup(None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        for raw in ["not json", "{\"name\":\"x\"}", "[1, 2]", ""] {
            let (_, store) = setup(Some(raw));
            assert!(store.is_empty(), "raw = {:?}", raw);
        }
    }

    #[test]
    fn test_save_load_is_idempotent() {
        let raw = r#"[{"name":"A","end":"2030-01-01T00:00"},{"name":"B","end":""}]"#;
        let (storage, store) = setup(Some(raw));
        store.save().unwrap();

        assert_eq!(storage.get(TIMERS_KEY).as_deref(), Some(raw));
        let reloaded = TimerStore::load(storage.clone());
        assert_eq!(reloaded.timers(), store.timers());
    }

    #[test]
    fn test_add_appends_default_and_persists() {
        let (storage, mut store) = setup(None);
        let index = store.add().unwrap();

        assert_eq!(index, 0);
        assert_eq!(store.timers(), &[record("Countdown Timer", "")]);
        assert_eq!(
            storage.get(TIMERS_KEY).as_deref(),
            Some(r#"[{"name":"Countdown Timer","end":""}]"#)
        );

        store.add().unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_update_trims_and_defaults_name() {
        let (storage, mut store) = setup(None);
        store.add().unwrap();

        store.update(0, "  Exam  ", "2030-06-01T09:00").unwrap();
        assert_eq!(store.get(0), Some(&record("Exam", "2030-06-01T09:00")));

        store.update(0, "", "").unwrap();
        assert_eq!(store.get(0), Some(&record("Countdown Timer", "")));

        let reloaded = TimerStore::load(storage.clone());
        assert_eq!(reloaded.timers(), store.timers());
    }

    #[test]
    fn test_update_out_of_range_is_error() {
        let (storage, mut store) = setup(None);
        store.add().unwrap();
        let before = storage.get(TIMERS_KEY);

        let err = store.update(1, "x", "").unwrap_err();
        assert!(matches!(err, StoreError::IndexOutOfRange { index: 1, len: 1 }));
        assert_eq!(storage.get(TIMERS_KEY), before);
    }

    #[test]
    fn test_remove_shifts_later_timers() {
        let raw = r#"[{"name":"A","end":""},{"name":"B","end":""},{"name":"C","end":""}]"#;
        let (storage, mut store) = setup(Some(raw));

        let removed = store.remove(1).unwrap();
        assert_eq!(removed.name, "B");
        assert_eq!(store.timers(), &[record("A", ""), record("C", "")]);
        assert_eq!(TimerStore::load(storage.clone()).timers(), store.timers());

        assert!(matches!(
            store.remove(5),
            Err(StoreError::IndexOutOfRange { index: 5, len: 2 })
        ));
    }

    #[test]
    fn test_write_failure_is_reported() {
        let (storage, mut store) = setup(None);
        storage.fail_writes(true);

        assert!(matches!(store.add(), Err(StoreError::Storage(_))));
        assert_eq!(store.len(), 1);
        assert_eq!(storage.get(TIMERS_KEY), None);
    }
}
