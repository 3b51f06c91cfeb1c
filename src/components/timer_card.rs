//! Timer Card Component
//!
//! One timer: name, end time, live countdown and hover-revealed controls.

use leptos::prelude::*;

use crate::board::DisplayUnit;
use crate::context::AppContext;

/// Countdown fields in display order; each doubles as its CSS class
const UNITS: [&str; 4] = ["days", "hours", "minutes", "seconds"];

#[component]
pub fn TimerCard(unit: DisplayUnit) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let index = unit.index;
    let item_class = if unit.has_target() { "container timer-item" } else { "container timer-item unset" };
    let countdown = unit.countdown.clone();
    let padded = Memo::new(move |_| countdown.get().padded());

    view! {
        <div class=item_class>
            <button class="edit-timer-btn" title="Edit" on:click=move |_| ctx.open_editor(index)>
                "✏️"
            </button>
            <button class="delete-timer-btn" title="Delete" on:click=move |_| ctx.delete_timer(index)>
                "🗑️"
            </button>
            <h1 class="timer-title">{unit.name}</h1>
            <div class="timer-end">"Ends at: " <span>{unit.end_label}</span></div>
            <div class="countdown">
                {UNITS
                    .iter()
                    .enumerate()
                    .map(|(slot, label)| {
                        view! {
                            <div class="countdown-unit">
                                <span class={*label}>{move || padded.with(|fields| fields[slot].clone())}</span>
                                <div class="label">{*label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
