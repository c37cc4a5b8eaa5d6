use contracts::domain::format_timestamp;
use leptos::prelude::*;

use super::details::EmployeeDetails;
use super::EmployeeResource;
use crate::shared::components::field_error::FieldError;
use crate::shared::components::modal::Modal;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;
use crate::shared::resource::ResourceController;
use crate::system::auth::context::use_session;

/// Paginated employee directory. Accounts are created through the
/// registration page and never deleted here, so the list only offers
/// view and (for admins) profile edit.
#[component]
pub fn EmployeesPage() -> impl IntoView {
    let ctrl: ResourceController<EmployeeResource> = ResourceController::new(use_notifier());
    ctrl.init_list_effect();

    let session = use_session();

    let has_more = Signal::derive(move || {
        ctrl.items.get().len() as u32 >= ctrl.page.get().page_size
    });

    let empty_state = move || {
        (ctrl.loaded.get() && ctrl.items.get().is_empty())
            .then(|| view! { <p class="empty-state">"No employees found."</p> })
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Employees"</h1>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Username"</th>
                        <th>"Email"</th>
                        <th>"Role"</th>
                        <th>"Created"</th>
                        <th class="data-table__actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let is_admin = session.is_admin();
                        ctrl.items
                            .get()
                            .into_iter()
                            .map(|employee| {
                                let id = employee.id.clone();
                                let for_view = employee.clone();
                                view! {
                                    <tr>
                                        <td>{employee.full_name()}</td>
                                        <td>{employee.username.clone()}</td>
                                        <td>{employee.email.clone()}</td>
                                        <td>{employee.role.as_str()}</td>
                                        <td>{format_timestamp(employee.created_at)}</td>
                                        <td class="data-table__actions">
                                            <button
                                                class="button button--ghost"
                                                title="View"
                                                on:click=move |_| ctrl.view(for_view.clone())
                                            >
                                                {icon("eye")}
                                            </button>
                                            {is_admin
                                                .then(|| {
                                                    view! {
                                                        <button
                                                            class="button button--ghost"
                                                            title="Edit"
                                                            on:click=move |_| ctrl.edit(id.clone())
                                                        >
                                                            {icon("edit")}
                                                        </button>
                                                    }
                                                })}
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
            {empty_state}

            <PaginationControls
                page=ctrl.page
                has_more=has_more
                on_page_change=Callback::new(move |n| ctrl.set_page_num(n))
                on_page_size_change=Callback::new(move |s| ctrl.set_page_size(s))
            />

            <Show when=move || ctrl.show_form.get()>
                <Modal
                    title="Edit employee".to_string()
                    on_close=Callback::new(move |_| ctrl.cancel())
                >
                    <form on:submit=move |ev| {
                        ev.prevent_default();
                        ctrl.submit();
                    }>
                        <div class="form-group">
                            <label for="employee_first_name">"First name"</label>
                            <input
                                type="text"
                                id="employee_first_name"
                                prop:value=move || ctrl.draft.get().first_name
                                on:input=move |ev| {
                                    ctrl.draft.update(|d| d.first_name = event_target_value(&ev));
                                }
                            />
                            <FieldError errors=ctrl.field_errors field="first_name" />
                        </div>

                        <div class="form-group">
                            <label for="employee_middle_name">"Middle name (optional)"</label>
                            <input
                                type="text"
                                id="employee_middle_name"
                                prop:value=move || ctrl.draft.get().middle_name
                                on:input=move |ev| {
                                    ctrl.draft.update(|d| d.middle_name = event_target_value(&ev));
                                }
                            />
                            <FieldError errors=ctrl.field_errors field="middle_name" />
                        </div>

                        <div class="form-group">
                            <label for="employee_last_name">"Last name"</label>
                            <input
                                type="text"
                                id="employee_last_name"
                                prop:value=move || ctrl.draft.get().last_name
                                on:input=move |ev| {
                                    ctrl.draft.update(|d| d.last_name = event_target_value(&ev));
                                }
                            />
                            <FieldError errors=ctrl.field_errors field="last_name" />
                        </div>

                        <div class="form-group">
                            <label for="employee_home_address">"Home address"</label>
                            <input
                                type="text"
                                id="employee_home_address"
                                prop:value=move || ctrl.draft.get().home_address
                                on:input=move |ev| {
                                    ctrl.draft.update(|d| d.home_address = event_target_value(&ev));
                                }
                            />
                            <FieldError errors=ctrl.field_errors field="home_address" />
                        </div>

                        <div class="form-actions">
                            <button type="submit" class="button button--primary">
                                {icon("save")}
                                " Save"
                            </button>
                            <button
                                type="button"
                                class="button"
                                on:click=move |_| ctrl.cancel()
                            >
                                "Cancel"
                            </button>
                        </div>
                    </form>
                </Modal>
            </Show>

            {move || {
                ctrl.selected
                    .get()
                    .map(|employee| {
                        view! {
                            <EmployeeDetails
                                employee=employee
                                on_close=Callback::new(move |_| ctrl.close_detail())
                            />
                        }
                    })
            }}
        </div>
    }
}
