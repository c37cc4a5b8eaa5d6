use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::shared::icons::icon;

/// Quiet period between the last keystroke and the search firing.
const DEFAULT_DEBOUNCE_MS: i32 = 500;

/// Free-text search box with debounce and a clear button.
///
/// `on_change` fires once per quiet period, with the final text — N
/// keystrokes inside the window produce one callback, not N. Clearing
/// fires immediately.
#[component]
pub fn SearchInput(
    /// Current (debounced) filter value.
    #[prop(into)]
    value: Signal<String>,
    /// Callback invoked with the debounced text.
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text.
    #[prop(optional, into)]
    placeholder: String,
    /// Debounce window in milliseconds.
    #[prop(optional)]
    debounce_ms: Option<i32>,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };
    let debounce_ms = debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS);

    // what the input shows right now, ahead of the debounce
    let (input_value, set_input_value) = signal(String::new());

    let pending_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        // restart the timer; only the final pending one fires
        if let Some(timeout_id) = pending_timeout.with_value(|t| *t) {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(timeout_id);
            }
        }

        let window = web_sys::window().expect("no window");
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);

        let timeout_id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref::<js_sys::Function>(),
                debounce_ms,
            )
            .expect("setTimeout failed");

        closure.forget();
        pending_timeout.set_value(Some(timeout_id));
    };

    let clear_filter = move |_| {
        if let Some(timeout_id) = pending_timeout.with_value(|t| *t) {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(timeout_id);
            }
        }
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().trim().is_empty()
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button
                    class="search-input__clear"
                    title="Clear"
                    on:click=clear_filter
                >
                    {icon("x")}
                </button>
            })}
        </div>
    }
}
