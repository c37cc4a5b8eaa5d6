use leptos::prelude::*;
use leptos_router::components::A;

const MENU: &[(&str, &str)] = &[
    ("/brands", "Brands"),
    ("/categories", "Categories"),
    ("/products", "Products"),
    ("/employees", "Employees"),
    ("/profile", "My profile"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <ul class="sidebar__menu">
                {MENU
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <li class="sidebar__item">
                                <A href=*href attr:class="sidebar__link">{*label}</A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
