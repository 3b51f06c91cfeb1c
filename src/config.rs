//! Application Configuration
//!
//! Fixed keys, labels and element identifiers shared by the store, the
//! lifecycle manager and the page components.

use std::time::Duration;

/// localStorage key holding the serialized timer list
pub const TIMERS_KEY: &str = "timers";

/// localStorage key holding the color theme
pub const COLORS_KEY: &str = "customColors";

/// Label given to new timers and to timers saved with a blank name
pub const DEFAULT_TIMER_NAME: &str = "Countdown Timer";

/// Period of every display unit's countdown refresh
pub const REFRESH_PERIOD: Duration = Duration::from_secs(1);

/// Element identifiers the page styling and markup rely on
pub mod ids {
    pub const TIMERS_LIST: &str = "timers-list";
    pub const ADD_TIMER_BTN: &str = "add-timer-btn";
    pub const EDIT_MODAL: &str = "edit-modal";
    pub const EDIT_MODAL_CONTENT: &str = "edit-modal-content";
    pub const EDIT_NAME_INPUT: &str = "edit-timer-name";
    pub const EDIT_DATE_INPUT: &str = "edit-date-picker";
    pub const SAVE_EDIT_BTN: &str = "save-edit-btn";
    pub const CANCEL_EDIT_BTN: &str = "cancel-edit-btn";
    pub const OPTIONS_BTN: &str = "options-btn";
    pub const OPTIONS_MENU: &str = "options-menu";
    pub const CLOSE_OPTIONS_BTN: &str = "close-options";
    pub const RESET_COLORS_BTN: &str = "reset-colors";
}

/// Default color palette, used for any theme slot the user never set
pub mod palette {
    pub const BG: &str = "#89f7fe";
    pub const CONTAINER: &str = "#ffffff";
    pub const NUMBERS: &str = "#66a6ff";
    pub const LABELS: &str = "#555555";
    pub const COUNTDOWN_BG: &str = "#f0f8ff";
    pub const TITLE: &str = "#333333";
}
