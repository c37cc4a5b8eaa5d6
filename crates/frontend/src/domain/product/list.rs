use contracts::domain::brand::Brand;
use contracts::domain::category::Category;
use contracts::domain::format_timestamp;
use contracts::pagination::PageRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::details::ProductDetails;
use super::ProductResource;
use crate::domain::brand::BrandResource;
use crate::domain::category::CategoryResource;
use crate::shared::components::field_error::FieldError;
use crate::shared::components::modal::Modal;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;
use crate::shared::resource::{self, FormMode, ResourceController};

/// One page big enough to act as "all of them" for the dropdowns.
const LOOKUP_PAGE_SIZE: u32 = 200;

fn money(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let ctrl: ResourceController<ProductResource> = ResourceController::new(use_notifier());

    // brand/category filters sit outside the generic controller
    let filter_brand = RwSignal::new(String::new());
    let filter_category = RwSignal::new(String::new());

    // dropdown options, fetched once
    let brand_options = RwSignal::new(Vec::<Brand>::new());
    let category_options = RwSignal::new(Vec::<Category>::new());
    spawn_local(async move {
        match resource::list::<BrandResource>(PageRequest::new(LOOKUP_PAGE_SIZE, 1), "").await {
            Ok(mut items) => {
                items.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
                brand_options.set(items);
            }
            Err(error) => log::error!("failed to load brand options: {}", error),
        }
        match resource::list::<CategoryResource>(PageRequest::new(LOOKUP_PAGE_SIZE, 1), "").await {
            Ok(mut items) => {
                items.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
                category_options.set(items);
            }
            Err(error) => log::error!("failed to load category options: {}", error),
        }
    });

    // Search wins over the filters; without either the plain list is
    // used. Replaces the controller's default list effect because the
    // filters are extra reactive inputs.
    let load_current = move || {
        let page = ctrl.page.get_untracked();
        let search = ctrl.search.get_untracked();
        if !search.trim().is_empty() {
            ctrl.load(page, search);
            return;
        }
        let brand = filter_brand.get_untracked();
        let category = filter_category.get_untracked();
        match api::filtered_path(&brand, &category, page) {
            Some(path) => {
                let ticket = ctrl.issue_ticket();
                let notifier = ctrl.notifier();
                spawn_local(async move {
                    let items = api::fetch_filtered(&notifier, &path)
                        .await
                        .unwrap_or_default();
                    ctrl.apply_list(ticket, items);
                });
            }
            None => ctrl.load(page, String::new()),
        }
    };

    Effect::new(move |_| {
        ctrl.page.track();
        ctrl.search.track();
        filter_brand.track();
        filter_category.track();
        load_current();
    });
    ctrl.set_reload(Callback::new(move |_| load_current()));

    let has_more = Signal::derive(move || {
        ctrl.items.get().len() as u32 >= ctrl.page.get().page_size
    });
    let form_title = Signal::derive(move || {
        match ctrl.mode.get() {
            FormMode::Add => "Add product",
            FormMode::Edit => "Edit product",
        }
        .to_string()
    });

    let empty_state = move || {
        (ctrl.loaded.get() && ctrl.items.get().is_empty()).then(|| {
            let filtered = !ctrl.search.get().trim().is_empty()
                || !filter_brand.get().is_empty()
                || !filter_category.get().is_empty();
            if filtered {
                view! { <p class="empty-state">"No products match your filters."</p> }
            } else {
                view! { <p class="empty-state">"No products yet. Add the first one."</p> }
            }
        })
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Products"</h1>
                <button class="button button--primary" on:click=move |_| ctrl.add()>
                    {icon("plus")}
                    " Add product"
                </button>
            </div>

            <div class="page-toolbar">
                <SearchInput
                    value=ctrl.search
                    on_change=Callback::new(move |term: String| {
                        ctrl.set_page_num(1);
                        ctrl.search.set(term);
                    })
                    placeholder="Search products..."
                />

                <select
                    class="filter-select"
                    prop:value=move || filter_brand.get()
                    on:change=move |ev| {
                        ctrl.set_page_num(1);
                        filter_brand.set(event_target_value(&ev));
                    }
                >
                    <option value="">"All brands"</option>
                    {move || {
                        brand_options
                            .get()
                            .into_iter()
                            .map(|b| view! { <option value=b.id.clone()>{b.name.clone()}</option> })
                            .collect_view()
                    }}
                </select>

                <select
                    class="filter-select"
                    prop:value=move || filter_category.get()
                    on:change=move |ev| {
                        ctrl.set_page_num(1);
                        filter_category.set(event_target_value(&ev));
                    }
                >
                    <option value="">"All categories"</option>
                    {move || {
                        category_options
                            .get()
                            .into_iter()
                            .map(|c| view! { <option value=c.id.clone()>{c.name.clone()}</option> })
                            .collect_view()
                    }}
                </select>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Barcode"</th>
                        <th>"Category"</th>
                        <th>"Brand"</th>
                        <th>"Cost"</th>
                        <th>"Price"</th>
                        <th>"In stock"</th>
                        <th>"Created"</th>
                        <th class="data-table__actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        ctrl.items
                            .get()
                            .into_iter()
                            .map(|product| {
                                let id = product.id.clone();
                                let for_view = product.clone();
                                let for_delete = product.clone();
                                view! {
                                    <tr>
                                        <td>{product.name.clone()}</td>
                                        <td>{product.barcode.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td>{product.category_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td>{product.brand_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td>{money(product.unit_cost_price)}</td>
                                        <td>{money(product.unit_selling_price)}</td>
                                        <td>{product
                                            .quantity_in_stock
                                            .map(|q| q.to_string())
                                            .unwrap_or_else(|| "-".to_string())}</td>
                                        <td>{format_timestamp(product.created_at)}</td>
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
                            <label for="product_name">"Product name"</label>
                            <input
                                type="text"
                                id="product_name"
                                prop:value=move || ctrl.draft.get().name
                                on:input=move |ev| {
                                    ctrl.draft.update(|d| d.name = event_target_value(&ev));
                                }
                            />
                            <FieldError errors=ctrl.field_errors field="name" />
                        </div>

                        <div class="form-group">
                            <label for="product_barcode">"Barcode (optional)"</label>
                            <input
                                type="text"
                                id="product_barcode"
                                prop:value=move || ctrl.draft.get().barcode
                                on:input=move |ev| {
                                    ctrl.draft.update(|d| d.barcode = event_target_value(&ev));
                                }
                            />
                            <FieldError errors=ctrl.field_errors field="barcode" />
                        </div>

                        <div class="form-group">
                            <label for="product_cost">"Unit cost price"</label>
                            <input
                                type="text"
                                id="product_cost"
                                inputmode="decimal"
                                prop:value=move || ctrl.draft.get().unit_cost_price
                                on:input=move |ev| {
                                    ctrl.draft.update(|d| d.unit_cost_price = event_target_value(&ev));
                                }
                            />
                            <FieldError errors=ctrl.field_errors field="unit_cost_price" />
                        </div>

                        <div class="form-group">
                            <label for="product_price">"Unit selling price"</label>
                            <input
                                type="text"
                                id="product_price"
                                inputmode="decimal"
                                prop:value=move || ctrl.draft.get().unit_selling_price
                                on:input=move |ev| {
                                    ctrl.draft.update(|d| d.unit_selling_price = event_target_value(&ev));
                                }
                            />
                            <FieldError errors=ctrl.field_errors field="unit_selling_price" />
                        </div>

                        <div class="form-group">
                            <label for="product_category">"Category"</label>
                            <select
                                id="product_category"
                                prop:value=move || ctrl.draft.get().category_id
                                on:change=move |ev| {
                                    ctrl.draft.update(|d| d.category_id = event_target_value(&ev));
                                }
                            >
                                <option value="">"Select a category"</option>
                                {move || {
                                    category_options
                                        .get()
                                        .into_iter()
                                        .map(|c| view! { <option value=c.id.clone()>{c.name.clone()}</option> })
                                        .collect_view()
                                }}
                            </select>
                            <FieldError errors=ctrl.field_errors field="category_id" />
                        </div>

                        <div class="form-group">
                            <label for="product_brand">"Brand"</label>
                            <select
                                id="product_brand"
                                prop:value=move || ctrl.draft.get().brand_id
                                on:change=move |ev| {
                                    ctrl.draft.update(|d| d.select_brand(event_target_value(&ev)));
                                }
                            >
                                <option value="">"Select a brand"</option>
                                {move || {
                                    brand_options
                                        .get()
                                        .into_iter()
                                        .map(|b| view! { <option value=b.id.clone()>{b.name.clone()}</option> })
                                        .collect_view()
                                }}
                            </select>
                            <FieldError errors=ctrl.field_errors field="brand_id" />
                        </div>

                        <div class="form-group">
                            <label for="product_brand_name">"...or a new brand name"</label>
                            <input
                                type="text"
                                id="product_brand_name"
                                prop:value=move || ctrl.draft.get().brand_name
                                on:input=move |ev| {
                                    ctrl.draft.update(|d| {
                                        d.brand_name = event_target_value(&ev);
                                        // typing a new brand drops the selection
                                        if !d.brand_name.trim().is_empty() {
                                            d.brand_id.clear();
                                        }
                                    });
                                }
                            />
                            <FieldError errors=ctrl.field_errors field="brand_name" />
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
                    .map(|product| {
                        view! {
                            <ProductDetails
                                product=product
                                on_close=Callback::new(move |_| ctrl.close_detail())
                            />
                        }
                    })
            }}
        </div>
    }
}
