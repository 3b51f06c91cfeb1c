//! Edit Modal Component
//!
//! Name and end-time form for the timer the edit session is bound to.

use leptos::prelude::*;

use crate::config::{ids, DEFAULT_TIMER_NAME};
use crate::context::AppContext;

/// Modal shown while an edit session is open.
/// Clicking the backdrop or pressing Escape cancels; Enter saves.
#[component]
pub fn EditModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let on_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" => ctx.commit_edit(),
        "Escape" => ctx.cancel_edit(),
        _ => {}
    };

    view! {
        <Show when=move || ctx.session.get().is_open()>
            <div id=ids::EDIT_MODAL class="modal-backdrop" on:click=move |_| ctx.cancel_edit()>
                <div
                    id=ids::EDIT_MODAL_CONTENT
                    class="modal-content"
                    on:click=|ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <h2>"Edit Timer"</h2>
                    <label>
                        "Name"
                        <input
                            type="text"
                            id=ids::EDIT_NAME_INPUT
                            placeholder=DEFAULT_TIMER_NAME
                            prop:value=move || ctx.form.with(|form| form.name.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                ctx.form.update(|form| form.name = value);
                            }
                        />
                    </label>
                    <label>
                        "Ends at"
                        <input
                            type="datetime-local"
                            id=ids::EDIT_DATE_INPUT
                            prop:value=move || ctx.form.with(|form| form.end_input.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                ctx.form.update(|form| form.end_input = value);
                            }
                        />
                    </label>
                    <div class="modal-actions">
                        <button id=ids::SAVE_EDIT_BTN on:click=move |_| ctx.commit_edit()>"Save"</button>
                        <button id=ids::CANCEL_EDIT_BTN class="cancel-btn" on:click=move |_| ctx.cancel_edit()>
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
