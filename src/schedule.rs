//! Refresh Scheduling
//!
//! Periodic callbacks and the wall clock the countdowns read, behind traits
//! so the lifecycle manager can be driven by hand in tests.

use std::time::Duration;

use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;

/// Arms periodic callbacks. Dropping the returned handle cancels the callback.
pub trait Scheduler {
    type Handle;

    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// Browser `setInterval` scheduling
#[derive(Clone, Copy, Debug, Default)]
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> Interval {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        Interval::new(millis, tick)
    }
}

/// Source of "now"
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Host clock (`Date.now()`)
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
    }
}

#[cfg(test)]
pub use manual::{FixedClock, ManualScheduler};


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_manual_handle_cancels_on_drop() {
        let scheduler = ManualScheduler::default();
        let fired = Rc::new(Cell::new(0));

        let counter = fired.clone();
        let first = scheduler.every(Duration::from_secs(1), Box::new(move || counter.set(counter.get() + 1)));
        let counter = fired.clone();
        let second = scheduler.every(Duration::from_secs(1), Box::new(move || counter.set(counter.get() + 10)));
        assert_eq!(scheduler.active(), 2);

        scheduler.tick_all();
        assert_eq!(fired.get(), 11);

        drop(first);
        assert_eq!(scheduler.active(), 1);
        scheduler.tick_all();
        assert_eq!(fired.get(), 21);

        drop(second);
        assert_eq!(scheduler.active(), 0);
    }

    #[test]
    fn test_fixed_clock_advances() {
        let start = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let clock = FixedClock::at(start);
        clock.advance_millis(1_500);
        assert_eq!((clock.now() - start).num_milliseconds(), 1_500);
    }
}
