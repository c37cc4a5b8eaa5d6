pub mod header;
pub mod sidebar;

use leptos::prelude::*;
use leptos_router::components::Outlet;

use header::Header;
use sidebar::Sidebar;

/// Application chrome for the authenticated area: header on top,
/// navigation on the left, the routed page in the middle.
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-shell">
            <Header />
            <div class="app-shell__body">
                <Sidebar />
                <main class="app-shell__content">
                    <Outlet />
                </main>
            </div>
        </div>
    }
}
