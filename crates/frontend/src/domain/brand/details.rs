use contracts::domain::brand::Brand;
use contracts::domain::format_timestamp;
use leptos::prelude::*;

use crate::shared::components::modal::Modal;

/// Read-only brand card shown from the list's view action.
#[component]
pub fn BrandDetails(brand: Brand, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Modal title="Brand details".to_string() on_close=on_close>
            <dl class="details">
                <dt>"Name"</dt>
                <dd>{brand.name.clone()}</dd>
                <dt>"Status"</dt>
                <dd>{if brand.is_active { "Active" } else { "Inactive" }}</dd>
                <dt>"Added by"</dt>
                <dd>{brand.added_by.clone().unwrap_or_else(|| "-".to_string())}</dd>
                <dt>"Created"</dt>
                <dd>{format_timestamp(brand.created_at)}</dd>
                <dt>"Last updated"</dt>
                <dd>{format_timestamp(brand.last_updated)}</dd>
            </dl>
        </Modal>
    }
}
