//! UI Components
//!
//! Leptos components making up the page.

mod color_panel;
mod edit_modal;
mod timer_card;
mod timer_list;

pub use color_panel::ColorPanel;
pub use edit_modal::EditModal;
pub use timer_card::TimerCard;
pub use timer_list::TimerList;
