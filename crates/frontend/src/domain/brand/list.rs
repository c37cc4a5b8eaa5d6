use contracts::domain::brand::Brand;
use contracts::domain::format_timestamp;
use leptos::prelude::*;

use super::details::BrandDetails;
use super::BrandResource;
use crate::shared::components::field_error::FieldError;
use crate::shared::components::modal::Modal;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;
use crate::shared::resource::{FormMode, ResourceController};

/// The brand endpoint has no server-side search, so the search box
/// narrows the fetched page by name here instead.
fn filter_by_name(items: Vec<Brand>, term: &str) -> Vec<Brand> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|brand| brand.name.to_lowercase().contains(&term))
        .collect()
}

#[component]
pub fn BrandsPage() -> impl IntoView {
    let ctrl: ResourceController<BrandResource> = ResourceController::new(use_notifier());
    ctrl.init_list_effect();

    let visible = Signal::derive(move || filter_by_name(ctrl.items.get(), &ctrl.search.get()));
    let has_more = Signal::derive(move || {
        ctrl.items.get().len() as u32 >= ctrl.page.get().page_size
    });
    let form_title = Signal::derive(move || {
        match ctrl.mode.get() {
            FormMode::Add => "Add brand",
            FormMode::Edit => "Edit brand",
        }
        .to_string()
    });

    let empty_state = move || {
        (ctrl.loaded.get() && visible.get().is_empty()).then(|| {
            if ctrl.search.get().trim().is_empty() {
                view! { <p class="empty-state">"No brands yet. Add the first one."</p> }
            } else {
                view! { <p class="empty-state">"No brands match your search."</p> }
            }
        })
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Brands"</h1>
                <button class="button button--primary" on:click=move |_| ctrl.add()>
                    {icon("plus")}
                    " Add brand"
                </button>
            </div>

            <div class="page-toolbar">
                <SearchInput
                    value=ctrl.search
                    on_change=Callback::new(move |term: String| {
                        // a new filter always starts from the first page
                        ctrl.set_page_num(1);
                        ctrl.search.set(term);
                    })
                    placeholder="Search brands..."
                />
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Status"</th>
                        <th>"Added by"</th>
                        <th>"Created"</th>
                        <th class="data-table__actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .map(|brand| {
                                let id = brand.id.clone();
                                let for_view = brand.clone();
                                let for_delete = brand.clone();
                                view! {
                                    <tr>
                                        <td>{brand.name.clone()}</td>
                                        <td>{if brand.is_active { "Active" } else { "Inactive" }}</td>
                                        <td>{brand.added_by.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td>{format_timestamp(brand.created_at)}</td>
                                        <td class="data-table__actions">
                                            <button
                                                class="button button--ghost"
                                                title="View"
                                                on:click=move |_| ctrl.view(for_view.clone())
                                            >
                                                {icon("eye")}
                                            </button>
                                            <button
                                                class="button button--ghost"
                                                title="Edit"
                                                on:click=move |_| ctrl.edit(id.clone())
                                            >
                                                {icon("edit")}
                                            </button>
                                            <button
                                                class="button button--ghost button--danger"
                                                title="Delete"
                                                on:click=move |_| ctrl.remove(&for_delete)
                                            >
                                                {icon("delete")}
                                            </button>
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
                <Modal title=form_title on_close=Callback::new(move |_| ctrl.cancel())>
                    <form on:submit=move |ev| {
                        ev.prevent_default();
                        ctrl.submit();
                    }>
                        <div class="form-group">
                            <label for="brand_name">"Brand name"</label>
                            <input
                                type="text"
                                id="brand_name"
                                prop:value=move || ctrl.draft.get().name
                                on:input=move |ev| {
                                    ctrl.draft.update(|d| d.name = event_target_value(&ev));
                                }
                            />
                            <FieldError errors=ctrl.field_errors field="name" />
                        </div>

                        <div class="form-group form-group--inline">
                            <label for="brand_is_active">
                                <input
                                    type="checkbox"
                                    id="brand_is_active"
                                    prop:checked=move || ctrl.draft.get().is_active
                                    on:change=move |ev| {
                                        ctrl.draft.update(|d| d.is_active = event_target_checked(&ev));
                                    }
                                />
                                "Active"
                            </label>
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
                    .map(|brand| {
                        view! {
                            <BrandDetails
                                brand=brand
                                on_close=Callback::new(move |_| ctrl.close_detail())
                            />
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::resource::request_path;
    use contracts::pagination::PageRequest;

    fn brand(name: &str) -> Brand {
        Brand {
            id: "3f1e9d1c-0000-0000-0000-000000000001".into(),
            name: name.into(),
            is_active: true,
            employee_id: None,
            added_by: None,
            created_at: None,
            last_updated: None,
        }
    }

    #[test]
    fn search_never_reaches_the_brand_url() {
        // the backend's /brands route has no ?search= parameter
        assert_eq!(
            request_path::<BrandResource>(PageRequest::new(5, 1), "aspirin"),
            "/brands/5/1"
        );
    }

    #[test]
    fn name_filter_is_case_insensitive() {
        let items = vec![brand("Acme"), brand("Generic Labs"), brand("ACME Plus")];
        let hits = filter_by_name(items, "acme");
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|b| b.name.to_lowercase().contains("acme")));
    }

    #[test]
    fn blank_filter_keeps_the_whole_page() {
        let items = vec![brand("Acme"), brand("Generic Labs")];
        assert_eq!(filter_by_name(items, "   ").len(), 2);
    }
}
