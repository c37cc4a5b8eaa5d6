use contracts::domain::category::Category;
use contracts::domain::format_timestamp;
use leptos::prelude::*;

use crate::shared::components::modal::Modal;

#[component]
pub fn CategoryDetails(category: Category, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Modal title="Category details".to_string() on_close=on_close>
            <dl class="details">
                <dt>"Name"</dt>
                <dd>{category.name.clone()}</dd>
                <dt>"Description"</dt>
                <dd>{category.description.clone().unwrap_or_else(|| "-".to_string())}</dd>
                <dt>"Added by"</dt>
                <dd>{category.added_by.clone().unwrap_or_else(|| "-".to_string())}</dd>
                <dt>"Created"</dt>
                <dd>{format_timestamp(category.created_at)}</dd>
                <dt>"Last updated"</dt>
                <dd>{format_timestamp(category.last_updated)}</dd>
            </dl>
        </Modal>
    }
}
