use contracts::validation::FieldErrors;
use leptos::prelude::*;

/// Inline validation message for one form field.
#[component]
pub fn FieldError(
    #[prop(into)] errors: Signal<FieldErrors>,
    field: &'static str,
) -> impl IntoView {
    move || {
        errors
            .get()
            .get(field)
            .map(|message| view! { <span class="field-error">{*message}</span> })
    }
}
