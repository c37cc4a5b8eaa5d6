use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use super::context::use_session;

/// Gate for the authenticated shell: waits for the session probe, then
/// either renders children or sends the user to the login page.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if session.is_loaded() && !session.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <Show
            when=move || session.is_loaded() && session.is_authenticated()
            fallback=|| view! { <div class="page-loading">"Loading..."</div> }
        >
            {children()}
        </Show>
    }
}
