use contracts::domain::employee::{validate_profile, ProfileDraft, ProfilePayload};
use contracts::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::field_error::FieldError;
use crate::shared::notify::{use_notifier, Notifier, Severity};
use crate::system::auth::{api, context::use_session};

/// Edit form for the logged-in employee's own profile fields.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let draft = RwSignal::new(ProfileDraft::default());
    let field_errors = RwSignal::new(FieldErrors::new());
    let (is_saving, set_is_saving) = signal(false);

    let session = use_session();
    let notifier = use_notifier();

    // seed the form once the session probe has delivered the employee
    Effect::new(move |_| {
        if let Some(employee) = session.employee() {
            if draft.with_untracked(|d| d.id.as_deref() != Some(employee.id.as_str())) {
                draft.set(ProfileDraft::from_entity(&employee));
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let current = draft.get();
        let Some(id) = current.id.clone() else {
            return;
        };
        if let Err(errors) = validate_profile(&current) {
            field_errors.set(errors);
            return;
        }
        field_errors.set(FieldErrors::new());
        set_is_saving.set(true);

        let payload = ProfilePayload::from(&current);
        spawn_local(async move {
            match api::update_employee(&notifier, &id, &payload).await {
                Ok(_) => {
                    notifier.notify("Profile updated successfully", Severity::Success);
                    // keep the header name in sync with the new values
                    session.refresh().await;
                    set_is_saving.set(false);
                }
                Err(_) => set_is_saving.set(false),
            }
        });
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"My profile"</h1>
            </div>

            <form class="profile-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="first_name">"First name"</label>
                    <input
                        type="text"
                        id="first_name"
                        prop:value=move || draft.get().first_name
                        on:input=move |ev| {
                            draft.update(|d| d.first_name = event_target_value(&ev));
                        }
                        disabled=move || is_saving.get()
                    />
                    <FieldError errors=field_errors field="first_name" />
                </div>

                <div class="form-group">
                    <label for="middle_name">"Middle name (optional)"</label>
                    <input
                        type="text"
                        id="middle_name"
                        prop:value=move || draft.get().middle_name
                        on:input=move |ev| {
                            draft.update(|d| d.middle_name = event_target_value(&ev));
                        }
                        disabled=move || is_saving.get()
                    />
                    <FieldError errors=field_errors field="middle_name" />
                </div>

                <div class="form-group">
                    <label for="last_name">"Last name"</label>
                    <input
                        type="text"
                        id="last_name"
                        prop:value=move || draft.get().last_name
                        on:input=move |ev| {
                            draft.update(|d| d.last_name = event_target_value(&ev));
                        }
                        disabled=move || is_saving.get()
                    />
                    <FieldError errors=field_errors field="last_name" />
                </div>

                <div class="form-group">
                    <label for="home_address">"Home address"</label>
                    <input
                        type="text"
                        id="home_address"
                        prop:value=move || draft.get().home_address
                        on:input=move |ev| {
                            draft.update(|d| d.home_address = event_target_value(&ev));
                        }
                        disabled=move || is_saving.get()
                    />
                    <FieldError errors=field_errors field="home_address" />
                </div>

                <button
                    type="submit"
                    class="button button--primary"
                    disabled=move || is_saving.get()
                >
                    {move || if is_saving.get() { "Saving..." } else { "Save changes" }}
                </button>
            </form>
        </div>
    }
}
