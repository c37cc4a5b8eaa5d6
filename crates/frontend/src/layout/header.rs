use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::shared::icons::icon;
use crate::system::auth::{api, context::use_session};

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            if let Err(error) = api::logout().await {
                log::error!("logout failed: {}", error);
            }
            // the cookie is gone either way
            session.clear();
            navigate("/login", NavigateOptions::default());
        });
    };

    view! {
        <header class="header">
            <div class="header__content">
                <span class="header__title">"Inventory Manager"</span>
            </div>
            <div class="header__actions">
                <A href="/profile" attr:class="header__employee">
                    {move || {
                        session
                            .employee()
                            .map(|e| e.full_name())
                            .unwrap_or_default()
                    }}
                </A>
                <button class="button button--ghost" aria-label="Log out" on:click=on_logout>
                    {icon("logout")}
                    " Log out"
                </button>
            </div>
        </header>
    }
}
