//! Application Context
//!
//! Shared state provided via Leptos Context API. The board and the storage
//! backend are not `Send`, so they live in local stored values and every
//! mutation bumps a version signal the timer list re-renders from.

use std::rc::Rc;

use leptos::prelude::*;

use crate::board::{DisplayUnit, TimerBoard};
use crate::edit::{EditForm, EditSession};
use crate::error::StoreResult;
use crate::schedule::IntervalScheduler;
use crate::storage::KeyValueStore;
use crate::theme::ColorTheme;

/// Board driven by browser intervals
pub type Board = TimerBoard<IntervalScheduler>;

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    board: StoredValue<Board, LocalStorage>,
    storage: StoredValue<Rc<dyn KeyValueStore>, LocalStorage>,
    /// Incremented after every rebuild - read
    pub version: ReadSignal<u32>,
    /// Incremented after every rebuild - write
    set_version: WriteSignal<u32>,
    /// Current edit session - read
    pub session: ReadSignal<EditSession>,
    /// Current edit session - write
    set_session: WriteSignal<EditSession>,
    /// Edit modal fields
    pub form: RwSignal<EditForm>,
}

impl AppContext {
    pub fn new(board: Board, storage: Rc<dyn KeyValueStore>) -> Self {
        let (version, set_version) = signal(0u32);
        let (session, set_session) = signal(EditSession::default());
        Self {
            board: StoredValue::new_local(board),
            storage: StoredValue::new_local(storage),
            version,
            set_version,
            session,
            set_session,
            form: RwSignal::new(EditForm::default()),
        }
    }

    /// Display units of the current render pass (tracks `version`)
    pub fn units(&self) -> Vec<DisplayUnit> {
        let _ = self.version.get();
        self.board.with_value(|board| board.units())
    }

    /// Run a board mutation, then signal the rebuild
    fn mutate<T>(&self, action: &str, f: impl FnOnce(&mut Board) -> StoreResult<T>) -> Option<T> {
        let result = self.board.try_update_value(f);
        self.set_version.update(|v| *v += 1);
        match result? {
            Ok(value) => Some(value),
            Err(err) => {
                log::error!("[BOARD] {} failed: {}", action, err);
                None
            }
        }
    }

    pub fn add_timer(&self) {
        if let Some(index) = self.mutate("add", |board| board.add()) {
            log::info!("[BOARD] Added timer #{}", index);
        }
    }

    pub fn delete_timer(&self, index: usize) {
        let mut session = self.session.get_untracked();
        if let Some(removed) = self.mutate("delete", |board| session.remove(board, index)) {
            log::info!("[BOARD] Deleted timer #{} ({})", index, removed.name);
        }
        self.set_session.set(session);
    }

    /// Bind the edit modal to a timer
    pub fn open_editor(&self, index: usize) {
        let mut session = self.session.get_untracked();
        match self.board.try_with_value(|board| session.open(board, index)) {
            Some(Ok(form)) => {
                self.form.set(form);
                self.set_session.set(session);
            }
            Some(Err(err)) => log::error!("[EDIT] Cannot edit timer #{}: {}", index, err),
            None => {}
        }
    }

    /// Save the modal's fields into the bound timer and close the modal
    pub fn commit_edit(&self) {
        let mut session = self.session.get_untracked();
        let form = self.form.get_untracked();
        if let Some(index) = self.mutate("save", |board| session.commit(board, &form)) {
            log::info!("[EDIT] Saved timer #{}", index);
        }
        self.set_session.set(session);
    }

    pub fn cancel_edit(&self) {
        self.set_session.update(|session| session.cancel());
    }

    pub fn load_theme(&self) -> ColorTheme {
        self.storage.with_value(|storage| ColorTheme::load(storage.as_ref()))
    }

    pub fn save_theme(&self, theme: &ColorTheme) {
        if let Some(Err(err)) = self.storage.try_with_value(|storage| theme.save(storage.as_ref())) {
            log::error!("[THEME] Save failed: {}", err);
        }
    }

    pub fn reset_theme(&self) {
        if let Some(Err(err)) = self.storage.try_with_value(|storage| ColorTheme::reset(storage.as_ref())) {
            log::error!("[THEME] Reset failed: {}", err);
        }
    }
}
