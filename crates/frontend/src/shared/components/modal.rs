use leptos::prelude::*;

use crate::shared::icons::icon;

/// Plain modal surface: overlay, titled header with a close button, body.
#[component]
pub fn Modal(
    #[prop(into)] title: Signal<String>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-overlay">
            <div class="modal">
                <div class="modal__header">
                    <h3 class="modal__title">{move || title.get()}</h3>
                    <button class="modal__close" title="Close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal__body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
