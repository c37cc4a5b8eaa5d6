use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::domain::brand::list::BrandsPage;
use crate::domain::category::list::CategoriesPage;
use crate::domain::employee::list::EmployeesPage;
use crate::domain::product::list::ProductsPage;
use crate::layout::Shell;
use crate::system::auth::guard::RequireSession;
use crate::system::pages::login::LoginPage;
use crate::system::pages::profile::ProfilePage;
use crate::system::pages::register::RegisterPage;

/// Everything under the shell requires a live session.
#[component]
fn Protected() -> impl IntoView {
    view! {
        <RequireSession>
            <Shell />
        </RequireSession>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/register") view=RegisterPage />
                <ParentRoute path=path!("") view=Protected>
                    <Route path=path!("") view=|| view! { <Redirect path="/products" /> } />
                    <Route path=path!("/brands") view=BrandsPage />
                    <Route path=path!("/categories") view=CategoriesPage />
                    <Route path=path!("/products") view=ProductsPage />
                    <Route path=path!("/employees") view=EmployeesPage />
                    <Route path=path!("/profile") view=ProfilePage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
