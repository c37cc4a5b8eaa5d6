use contracts::domain::format_timestamp;
use leptos::prelude::*;

use super::details::CategoryDetails;
use super::CategoryResource;
use crate::shared::components::field_error::FieldError;
use crate::shared::components::modal::Modal;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;
use crate::shared::resource::{FormMode, ResourceController};

/// Short preview for the table cell; full text lives in the detail view.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut.trim_end())
    }
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let ctrl: ResourceController<CategoryResource> = ResourceController::new(use_notifier());
    ctrl.init_list_effect();

    let has_more = Signal::derive(move || {
        ctrl.items.get().len() as u32 >= ctrl.page.get().page_size
    });
    let form_title = Signal::derive(move || {
        match ctrl.mode.get() {
            FormMode::Add => "Add category",
            FormMode::Edit => "Edit category",
        }
        .to_string()
    });

    let empty_state = move || {
        (ctrl.loaded.get() && ctrl.items.get().is_empty()).then(|| {
            if ctrl.search.get().trim().is_empty() {
                view! { <p class="empty-state">"No categories yet. Add the first one."</p> }
            } else {
                view! { <p class="empty-state">"No categories match your search."</p> }
            }
        })
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Categories"</h1>
                <button class="button button--primary" on:click=move |_| ctrl.add()>
                    {icon("plus")}
                    " Add category"
                </button>
            </div>

            <div class="page-toolbar">
                <SearchInput
                    value=ctrl.search
                    on_change=Callback::new(move |term: String| {
                        ctrl.set_page_num(1);
                        ctrl.search.set(term);
                    })
                    placeholder="Search categories..."
                />
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Description"</th>
                        <th>"Added by"</th>
                        <th>"Created"</th>
                        <th class="data-table__actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        ctrl.items
                            .get()
                            .into_iter()
                            .map(|category| {
                                let id = category.id.clone();
                                let for_view = category.clone();
                                let for_delete = category.clone();
                                view! {
                                    <tr>
                                        <td>{category.name.clone()}</td>
                                        <td>
                                            {category
                                                .description
                                                .as_deref()
                                                .map(|d| truncate(d, 60))
                                                .unwrap_or_else(|| "-".to_string())}
                                        </td>
                                        <td>{category.added_by.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td>{format_timestamp(category.created_at)}</td>
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
                            <label for="category_name">"Category name"</label>
                            <input
                                type="text"
                                id="category_name"
                                prop:value=move || ctrl.draft.get().name
                                on:input=move |ev| {
                                    ctrl.draft.update(|d| d.name = event_target_value(&ev));
                                }
                            />
                            <FieldError errors=ctrl.field_errors field="name" />
                        </div>

                        <div class="form-group">
                            <label for="category_description">"Description (optional)"</label>
                            <textarea
                                id="category_description"
                                rows="4"
                                prop:value=move || ctrl.draft.get().description
                                on:input=move |ev| {
                                    ctrl.draft.update(|d| d.description = event_target_value(&ev));
                                }
                            ></textarea>
                            <FieldError errors=ctrl.field_errors field="description" />
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
                    .map(|category| {
                        view! {
                            <CategoryDetails
                                category=category
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
    use super::truncate;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate("Analgesics", 60), "Analgesics");
    }

    #[test]
    fn long_text_is_cut_with_ellipsis() {
        let text = "a".repeat(100);
        let cell = truncate(&text, 60);
        assert_eq!(cell.chars().count(), 63);
        assert!(cell.ends_with("..."));
    }
}
