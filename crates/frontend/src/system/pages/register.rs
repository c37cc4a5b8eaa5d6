use contracts::domain::employee::{validate_registration, RegisterDraft, RegisterPayload, Role};
use contracts::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::shared::components::field_error::FieldError;
use crate::shared::notify::{use_notifier, Notifier, Severity};
use crate::system::auth::api;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let draft = RwSignal::new(RegisterDraft::default());
    let field_errors = RwSignal::new(FieldErrors::new());
    let (is_loading, set_is_loading) = signal(false);

    let notifier = use_notifier();
    let navigate = use_navigate();

    let text_input = move |id: &'static str,
                           label: &'static str,
                           input_type: &'static str,
                           get: fn(&RegisterDraft) -> String,
                           set: fn(&mut RegisterDraft, String)| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    type=input_type
                    id=id
                    prop:value=move || get(&draft.get())
                    on:input=move |ev| draft.update(|d| set(d, event_target_value(&ev)))
                    disabled=move || is_loading.get()
                />
                <FieldError errors=field_errors field=id />
            </div>
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let current = draft.get();
        if let Err(errors) = validate_registration(&current) {
            field_errors.set(errors);
            return;
        }
        field_errors.set(FieldErrors::new());
        set_is_loading.set(true);

        let payload = RegisterPayload::from(&current);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::register(&notifier, &payload).await {
                Ok(employee) => {
                    set_is_loading.set(false);
                    notifier.notify(
                        &format!("{} registered successfully", employee.username),
                        Severity::Success,
                    );
                    navigate("/login", NavigateOptions::default());
                }
                Err(_) => set_is_loading.set(false),
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box login-box--wide">
                <h1>"Inventory Manager"</h1>
                <h2>"Register"</h2>

                <form on:submit=on_submit>
                    {text_input("username", "Username", "text", |d| d.username.clone(), |d, v| {
                        d.username = v;
                    })}
                    {text_input("email", "Email", "email", |d| d.email.clone(), |d, v| {
                        d.email = v;
                    })}
                    {text_input("password", "Password", "password", |d| d.password.clone(), |d, v| {
                        d.password = v;
                    })}
                    {text_input(
                        "confirm_password",
                        "Confirm password",
                        "password",
                        |d| d.confirm_password.clone(),
                        |d, v| d.confirm_password = v,
                    )}
                    {text_input(
                        "first_name",
                        "First name",
                        "text",
                        |d| d.first_name.clone(),
                        |d, v| d.first_name = v,
                    )}
                    {text_input(
                        "middle_name",
                        "Middle name (optional)",
                        "text",
                        |d| d.middle_name.clone(),
                        |d, v| d.middle_name = v,
                    )}
                    {text_input(
                        "last_name",
                        "Last name",
                        "text",
                        |d| d.last_name.clone(),
                        |d, v| d.last_name = v,
                    )}
                    {text_input(
                        "home_address",
                        "Home address",
                        "text",
                        |d| d.home_address.clone(),
                        |d, v| d.home_address = v,
                    )}

                    <div class="form-group">
                        <label for="role">"Role"</label>
                        <select
                            id="role"
                            prop:value=move || draft.get().role
                            on:change=move |ev| {
                                draft.update(|d| d.role = event_target_value(&ev));
                            }
                            disabled=move || is_loading.get()
                        >
                            <option value="">"Select a role"</option>
                            {Role::ALL
                                .iter()
                                .map(|role| {
                                    view! { <option value=role.as_str()>{role.as_str()}</option> }
                                })
                                .collect_view()}
                        </select>
                        <FieldError errors=field_errors field="role" />
                    </div>

                    <div class="form-group form-group--inline">
                        <label for="is_admin">
                            <input
                                type="checkbox"
                                id="is_admin"
                                prop:checked=move || draft.get().is_admin
                                on:change=move |ev| {
                                    draft.update(|d| d.is_admin = event_target_checked(&ev));
                                }
                                disabled=move || is_loading.get()
                            />
                            "Administrator"
                        </label>
                    </div>

                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>"Already registered? " <A href="/login">"Sign in"</A></p>
                </div>
            </div>
        </div>
    }
}
