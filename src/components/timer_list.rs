//! Timer List Component
//!
//! Renders one card per display unit, followed by the add button.

use leptos::prelude::*;

use crate::components::TimerCard;
use crate::config::ids;
use crate::context::AppContext;

/// The list of timers; re-renders after every board rebuild
#[component]
pub fn TimerList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div id=ids::TIMERS_LIST class="timers-list">
            {move || {
                ctx.units()
                    .into_iter()
                    .map(|unit| view! { <TimerCard unit=unit /> })
                    .collect_view()
            }}
            <button id=ids::ADD_TIMER_BTN class="add-timer-btn" on:click=move |_| ctx.add_timer()>
                "+ Add Timer"
            </button>
        </div>
    }
}
