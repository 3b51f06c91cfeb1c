//! Countdown Board App
//!
//! Root component: opens storage, builds the board and lays out the page.

use std::rc::Rc;

use leptos::prelude::*;

use crate::board::TimerBoard;
use crate::components::{ColorPanel, EditModal, TimerList};
use crate::context::AppContext;
use crate::schedule::{IntervalScheduler, SystemClock};
use crate::storage::{BrowserStorage, KeyValueStore, MemoryStorage};
use crate::store::TimerStore;

#[component]
pub fn App() -> impl IntoView {
    let storage = open_storage();
    let store = TimerStore::load(Rc::clone(&storage));
    let board = TimerBoard::new(store, IntervalScheduler, Rc::new(SystemClock));

    // Provide context to all children
    provide_context(AppContext::new(board, storage));

    view! {
        <main class="board">
            <TimerList />
        </main>
        <EditModal />
        <ColorPanel />
    }
}

/// localStorage when available, otherwise a session-only in-memory store
fn open_storage() -> Rc<dyn KeyValueStore> {
    match BrowserStorage::local() {
        Ok(storage) => Rc::new(storage),
        Err(err) => {
            log::warn!("[APP] {}; timers will not be persisted", err);
            Rc::new(MemoryStorage::default())
        }
    }
}
