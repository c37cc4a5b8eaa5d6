use contracts::domain::employee::Employee;
use contracts::domain::format_timestamp;
use leptos::prelude::*;

use crate::shared::components::modal::Modal;

#[component]
pub fn EmployeeDetails(employee: Employee, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Modal title="Employee details".to_string() on_close=on_close>
            <dl class="details">
                <dt>"Name"</dt>
                <dd>{employee.full_name()}</dd>
                <dt>"Username"</dt>
                <dd>{employee.username.clone()}</dd>
                <dt>"Email"</dt>
                <dd>{employee.email.clone()}</dd>
                <dt>"Role"</dt>
                <dd>{employee.role.as_str()}</dd>
                <dt>"Administrator"</dt>
                <dd>{if employee.is_admin { "Yes" } else { "No" }}</dd>
                <dt>"Home address"</dt>
                <dd>{employee.home_address.clone()}</dd>
                <dt>"Created"</dt>
                <dd>{format_timestamp(employee.created_at)}</dd>
                <dt>"Last updated"</dt>
                <dd>{format_timestamp(employee.last_updated)}</dd>
            </dl>
        </Modal>
    }
}
