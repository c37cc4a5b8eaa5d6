use contracts::domain::employee::{validate_login, LoginDraft, LoginPayload};
use contracts::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::shared::components::field_error::FieldError;
use crate::shared::notify::use_notifier;
use crate::system::auth::{api, context::use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let draft = RwSignal::new(LoginDraft::default());
    let field_errors = RwSignal::new(FieldErrors::new());
    let (is_loading, set_is_loading) = signal(false);

    let session = use_session();
    let notifier = use_notifier();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let current = draft.get();
        if let Err(errors) = validate_login(&current) {
            field_errors.set(errors);
            return;
        }
        field_errors.set(FieldErrors::new());
        set_is_loading.set(true);

        let payload = LoginPayload::from(&current);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&notifier, &payload).await {
                Ok(()) => {
                    // cookie is set; pull the employee in before the
                    // guard gets a chance to look at the session
                    session.refresh().await;
                    set_is_loading.set(false);
                    navigate("/", NavigateOptions::default());
                }
                Err(_) => set_is_loading.set(false),
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Inventory Manager"</h1>
                <h2>"Sign in"</h2>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email_or_username">"Email or username"</label>
                        <input
                            type="text"
                            id="email_or_username"
                            prop:value=move || draft.get().email_or_username
                            on:input=move |ev| {
                                draft.update(|d| d.email_or_username = event_target_value(&ev));
                            }
                            disabled=move || is_loading.get()
                        />
                        <FieldError errors=field_errors field="email_or_username" />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || draft.get().password
                            on:input=move |ev| {
                                draft.update(|d| d.password = event_target_value(&ev));
                            }
                            disabled=move || is_loading.get()
                        />
                        <FieldError errors=field_errors field="password" />
                    </div>

                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>"No account yet? " <A href="/register">"Register"</A></p>
                </div>
            </div>
        </div>
    }
}
