//! Edit Flow
//!
//! A single edit session bound to at most one timer index at a time.

use crate::board::TimerBoard;
use crate::error::{StoreError, StoreResult};
use crate::models::TimerRecord;
use crate::schedule::Scheduler;
use crate::time_format::to_input_value;

/// Form fields of the edit modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditForm {
    pub name: String,
    /// Date picker value (`YYYY-MM-DDTHH:MM`, local time) or empty
    pub end_input: String,
}

/// Which timer, if any, the edit modal is bound to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditSession {
    current: Option<usize>,
}

impl EditSession {
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Bind the session to `index` and return the form pre-filled from it.
    /// An already open session is simply retargeted.
    pub fn open<S: Scheduler>(&mut self, board: &TimerBoard<S>, index: usize) -> StoreResult<EditForm> {
        let record = board
            .store()
            .get(index)
            .ok_or(StoreError::IndexOutOfRange { index, len: board.store().len() })?;
        self.current = Some(index);
        Ok(EditForm {
            name: record.name.clone(),
            end_input: to_input_value(&record.end),
        })
    }

    /// Write the form back to the bound timer and close the session
    pub fn commit<S: Scheduler>(&mut self, board: &mut TimerBoard<S>, form: &EditForm) -> StoreResult<usize> {
        let index = self.current.take().ok_or(StoreError::NoActiveEdit)?;
        board.update(index, &form.name, &form.end_input)?;
        Ok(index)
    }

    /// Close without touching the store
    pub fn cancel(&mut self) {
        self.current = None;
    }

    /// Delete a timer. Indices shift on delete, so a pending edit is dropped
    /// rather than left pointing at a different record.
    pub fn remove<S: Scheduler>(&mut self, board: &mut TimerBoard<S>, index: usize) -> StoreResult<TimerRecord> {
        self.current = None;
        board.remove(index)
    }
}
