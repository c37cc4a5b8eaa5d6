use contracts::pagination::PageRequest;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Pagination controls for the `/{pageSize}/{pageNum}` list endpoints.
///
/// The backend returns a bare page with no total count, so navigation is
/// previous/next only; "next" is disabled once a short page comes back.
#[component]
pub fn PaginationControls(
    /// Current page request.
    #[prop(into)]
    page: Signal<PageRequest>,

    /// Whether the current page was full (a next page may exist).
    #[prop(into)]
    has_more: Signal<bool>,

    /// Callback when the page number changes.
    on_page_change: Callback<u32>,

    /// Callback when the page size changes.
    on_page_size_change: Callback<u32>,

    /// Available page size options (defaults to [5, 10, 20, 50]).
    #[prop(optional)]
    page_size_options: Option<Vec<u32>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![5, 10, 20, 50]);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let current = page.get().page_num;
                    if current > 1 {
                        on_page_change.run(current - 1);
                    }
                }
                disabled=move || page.get().page_num <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("Page {}", page.get().page_num)}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(page.get().page_num + 1)
                disabled=move || !has_more.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let val = event_target_value(&ev).parse().unwrap_or(5);
                    on_page_size_change.run(val);
                }
                prop:value=move || page.get().page_size.to_string()
            >
                {page_size_opts.iter().map(|&size| {
                    view! {
                        <option value=size.to_string() selected=move || page.get().page_size == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
