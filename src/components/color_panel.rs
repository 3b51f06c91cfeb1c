//! Color Panel Component
//!
//! Gear button and slide-out menu for editing the color theme.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::ids;
use crate::context::AppContext;
use crate::theme::{ColorTheme, ThemeSlot};

/// Write the theme's CSS custom properties onto the document root
fn apply_theme(theme: &ColorTheme) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .and_then(|root| root.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };
    let style = root.style();
    for (name, value) in theme.css_properties() {
        if let Err(err) = style.set_property(name, &value) {
            log::warn!("[THEME] Cannot set {}: {:?}", name, err);
        }
    }
}

#[component]
pub fn ColorPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (open, set_open) = signal(false);
    let theme = RwSignal::new(ctx.load_theme());

    // Reapply whenever the theme changes (and once on mount)
    Effect::new(move |_| theme.with(apply_theme));

    let set_color = move |slot: ThemeSlot, color: String| {
        theme.update(|theme| theme.set(slot, color));
        theme.with_untracked(|theme| ctx.save_theme(theme));
    };

    let reset = move |_| {
        ctx.reset_theme();
        theme.set(ColorTheme::default());
    };

    view! {
        <button
            id=ids::OPTIONS_BTN
            title="Customize Colors"
            aria-label="Customize Colors"
            on:click=move |_| set_open.update(|open| *open = !*open)
        >
            "⚙️"
        </button>
        <div id=ids::OPTIONS_MENU class=move || if open.get() { "open" } else { "" }>
            <h2>"Customize Colors"</h2>
            {ThemeSlot::ALL
                .iter()
                .map(|&slot| {
                    view! {
                        <label>
                            {slot.label()} ":"
                            <input
                                type="color"
                                id={slot.input_id()}
                                prop:value=move || theme.with(|theme| theme.color(slot).to_string())
                                on:input=move |ev| set_color(slot, event_target_value(&ev))
                            />
                        </label>
                    }
                })
                .collect_view()}
            <button id=ids::CLOSE_OPTIONS_BTN on:click=move |_| set_open.set(false)>"Close"</button>
            <button id=ids::RESET_COLORS_BTN on:click=reset>"Reset Colors"</button>
        </div>
    }
}
