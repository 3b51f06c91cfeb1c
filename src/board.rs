//! Timer Board
//!
//! Owns the timer store together with one display unit and one refresh
//! handle per timer. Every structural change tears all units down before
//! building replacements, so units, handles and records stay index-aligned.

use std::rc::Rc;

use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::config::REFRESH_PERIOD;
use crate::error::{StoreError, StoreResult};
use crate::models::TimerRecord;
use crate::schedule::{Clock, Scheduler};
use crate::store::TimerStore;
use crate::time_format::{end_label, Countdown};

/// What the page shows for one timer
#[derive(Clone, Debug)]
pub struct DisplayUnit {
    /// Position of the backing record in the current render pass
    pub index: usize,
    pub name: String,
    /// Local "Ends at" text, blank when no end is set
    pub end_label: String,
    /// Live countdown, rewritten by the unit's refresh
    pub countdown: ArcRwSignal<Countdown>,
    target: Option<DateTime<Utc>>,
}

impl DisplayUnit {
    fn new(index: usize, record: &TimerRecord, now: DateTime<Utc>) -> Self {
        let target = record.target();
        let initial = target.map_or(Countdown::ZERO, |target| Countdown::until(target, now));
        Self {
            index,
            name: record.name.clone(),
            end_label: end_label(&record.end),
            countdown: ArcRwSignal::new(initial),
            target,
        }
    }

    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }

    /// Recompute the countdown; units without an end are left untouched
    fn refresh(&self, now: DateTime<Utc>) {
        if let Some(target) = self.target {
            self.countdown.set(Countdown::until(target, now));
        }
    }
}

/// A display unit and the refresh cycle driving it
struct Slot<H> {
    unit: Rc<DisplayUnit>,
    _refresh: H,
}

/// Timer list plus its live display units
pub struct TimerBoard<S: Scheduler> {
    store: TimerStore,
    scheduler: S,
    clock: Rc<dyn Clock>,
    slots: Vec<Slot<S::Handle>>,
}

impl<S: Scheduler> TimerBoard<S> {
    /// Build a board and materialize a unit for every stored timer
    pub fn new(store: TimerStore, scheduler: S, clock: Rc<dyn Clock>) -> Self {
        let mut board = Self {
            store,
            scheduler,
            clock,
            slots: Vec::new(),
        };
        board.rebuild();
        board
    }

    pub fn store(&self) -> &TimerStore {
        &self.store
    }

    /// Number of live display units (always equal to the number of timers)
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn unit(&self, index: usize) -> Option<&DisplayUnit> {
        self.slots.get(index).map(|slot| slot.unit.as_ref())
    }

    /// Snapshot of the current units, in display order
    pub fn units(&self) -> Vec<DisplayUnit> {
        self.slots.iter().map(|slot| (*slot.unit).clone()).collect()
    }

    /// Destroy every unit, then recreate one per record.
    pub fn rebuild(&mut self) {
        // All handles are cancelled before any replacement is armed.
        self.slots.clear();

        let now = self.clock.now();
        let slots: Vec<_> = self
            .store
            .timers()
            .iter()
            .enumerate()
            .map(|(index, record)| self.mount(index, record, now))
            .collect();
        self.slots = slots;
        log::debug!("[BOARD] Rebuilt {} display units", self.slots.len());
    }

    fn mount(&self, index: usize, record: &TimerRecord, now: DateTime<Utc>) -> Slot<S::Handle> {
        let unit = Rc::new(DisplayUnit::new(index, record, now));
        let retired = Rc::downgrade(&unit);
        let clock = Rc::clone(&self.clock);
        let refresh = self.scheduler.every(
            REFRESH_PERIOD,
            Box::new(move || {
                if let Some(unit) = retired.upgrade() {
                    unit.refresh(clock.now());
                }
            }),
        );
        Slot { unit, _refresh: refresh }
    }

    /// Append a default timer and rebuild
    pub fn add(&mut self) -> StoreResult<usize> {
        let result = self.store.add();
        self.rebuild();
        result
    }

    /// Rewrite one timer's name and end, then rebuild
    pub fn update(&mut self, index: usize, name: &str, end: &str) -> StoreResult<()> {
        self.check_index(index)?;
        self.slots.clear();
        let result = self.store.update(index, name, end);
        self.rebuild();
        result
    }

    /// Delete one timer, then rebuild
    pub fn remove(&mut self, index: usize) -> StoreResult<TimerRecord> {
        self.check_index(index)?;
        self.slots.clear();
        let result = self.store.remove(index);
        self.rebuild();
        result
    }

    fn check_index(&self, index: usize) -> StoreResult<()> {
        if index < self.store.len() {
            Ok(())
        } else {
            Err(StoreError::IndexOutOfRange { index, len: self.store.len() })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TIMERS_KEY;
    use crate::schedule::{FixedClock, ManualScheduler};
    use crate::storage::{KeyValueStore, MemoryStorage};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    struct Harness {
        storage: Rc<MemoryStorage>,
        scheduler: ManualScheduler,
        clock: FixedClock,
        board: TimerBoard<ManualScheduler>,
    }

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()
    }

    fn setup(raw: Option<&str>) -> Harness {
        let storage = Rc::new(MemoryStorage::default());
        if let Some(raw) = raw {
            storage.set(TIMERS_KEY, raw).unwrap();
        }
        let scheduler = ManualScheduler::default();
        let clock = FixedClock::at(start());
        let store = TimerStore::load(storage.clone());
        let board = TimerBoard::new(store, scheduler.clone(), Rc::new(clock.clone()));
        Harness { storage, scheduler, clock, board }
    }

    fn countdown(board: &TimerBoard<ManualScheduler>, index: usize) -> Countdown {
        board.unit(index).unwrap().countdown.get_untracked()
    }

    const TWO_TIMERS: &str = r#"[
        {"name":"First","end":"2030-01-02T01:01:01Z"},
        {"name":"Second","end":"2030-01-01T00:01:00Z"}
    ]"#;

    #[test]
    fn test_one_refresh_per_timer_on_load() {
        let h = setup(Some(TWO_TIMERS));
        assert_eq!(h.board.len(), 2);
        assert_eq!(h.scheduler.active(), 2);
        assert_eq!(h.board.unit(0).unwrap().name, "First");
        assert_eq!(countdown(&h.board, 0), Countdown { days: 1, hours: 1, minutes: 1, seconds: 1 });
        assert_eq!(countdown(&h.board, 1), Countdown { days: 0, hours: 0, minutes: 1, seconds: 0 });
    }

    #[test]
    fn test_add_to_empty_board() {
        let mut h = setup(None);
        assert!(h.board.is_empty());
        assert_eq!(h.scheduler.active(), 0);

        assert_eq!(h.board.add().unwrap(), 0);

        let unit = h.board.unit(0).unwrap();
        assert_eq!(unit.name, "Countdown Timer");
        assert_eq!(unit.end_label, "");
        assert!(!unit.has_target());
        assert_eq!(unit.countdown.get_untracked().to_string(), "00:00:00:00");
        assert_eq!(h.scheduler.active(), 1);
        assert_eq!(
            h.storage.get(TIMERS_KEY).as_deref(),
            Some(r#"[{"name":"Countdown Timer","end":""}]"#)
        );
    }

    #[test]
    fn test_refresh_tracks_the_clock() {
        let h = setup(Some(TWO_TIMERS));
        h.clock.advance_millis(61_000);
        h.scheduler.tick_all();

        assert_eq!(countdown(&h.board, 0), Countdown { days: 1, hours: 1, minutes: 0, seconds: 0 });
        assert_eq!(countdown(&h.board, 1), Countdown::ZERO);
    }

    #[test]
    fn test_unset_end_is_not_refreshed() {
        let mut h = setup(None);
        h.board.add().unwrap();
        h.clock.advance_millis(5_000);
        h.scheduler.tick_all();
        assert_eq!(countdown(&h.board, 0), Countdown::ZERO);
    }

    #[test]
    fn test_past_target_renders_zero() {
        let h = setup(Some(r#"[{"name":"Gone","end":"2029-12-31T23:59:59Z"}]"#));
        assert_eq!(countdown(&h.board, 0), Countdown::ZERO);
    }

    #[test]
    fn test_refresh_count_matches_timers_after_every_change() {
        let mut h = setup(None);
        for expected in 1..=4 {
            h.board.add().unwrap();
            assert_eq!(h.scheduler.active(), expected);
        }
        h.board.update(2, "Renamed", "2030-01-01T00:00:10Z").unwrap();
        assert_eq!(h.scheduler.active(), 4);
        h.board.remove(0).unwrap();
        assert_eq!(h.scheduler.active(), 3);
        h.board.remove(2).unwrap();
        assert_eq!(h.scheduler.active(), 2);
        assert_eq!(h.board.len(), h.board.store().len());
    }

    #[test]
    fn test_remove_shifts_and_keeps_refreshing() {
        let mut h = setup(Some(TWO_TIMERS));
        let retired = h.board.unit(0).unwrap().clone();

        let removed = h.board.remove(0).unwrap();
        assert_eq!(removed.name, "First");
        assert_eq!(h.board.len(), 1);
        assert_eq!(h.scheduler.active(), 1);

        let survivor = h.board.unit(0).unwrap();
        assert_eq!(survivor.index, 0);
        assert_eq!(survivor.name, "Second");

        h.clock.advance_millis(30_000);
        h.scheduler.tick_all();
        assert_eq!(countdown(&h.board, 0), Countdown { days: 0, hours: 0, minutes: 0, seconds: 30 });
        // The retired unit no longer receives ticks.
        assert_eq!(retired.countdown.get_untracked(), Countdown { days: 1, hours: 1, minutes: 1, seconds: 1 });
    }

    #[test]
    fn test_update_applies_and_persists() {
        let mut h = setup(None);
        h.board.add().unwrap();
        h.board.update(0, "  ", "2030-01-01T00:00:05Z").unwrap();

        let unit = h.board.unit(0).unwrap();
        assert_eq!(unit.name, "Countdown Timer");
        assert!(unit.has_target());
        assert_eq!(countdown(&h.board, 0).seconds, 5);

        let reloaded = TimerStore::load(h.storage.clone());
        assert_eq!(reloaded.get(0).unwrap().end, "2030-01-01T00:00:05Z");
    }

    #[test]
    fn test_out_of_range_leaves_units_alone() {
        let mut h = setup(Some(TWO_TIMERS));
        let before = h.board.unit(1).unwrap().countdown.clone();

        assert!(matches!(
            h.board.remove(2),
            Err(StoreError::IndexOutOfRange { index: 2, len: 2 })
        ));
        assert!(h.board.update(7, "x", "").is_err());

        assert_eq!(h.scheduler.active(), 2);
        h.clock.advance_millis(1_000);
        h.scheduler.tick_all();
        assert_eq!(before.get_untracked().seconds, 59);
    }

    #[test]
    fn test_failed_write_still_rebuilds() {
        let mut h = setup(None);
        h.storage.fail_writes(true);

        assert!(h.board.add().is_err());
        assert_eq!(h.board.len(), 1);
        assert_eq!(h.scheduler.active(), 1);
    }
}
