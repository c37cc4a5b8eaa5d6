use leptos::prelude::*;

use crate::routes::AppRoutes;
use crate::shared::notify::{NotificationService, ToastHost};
use crate::system::auth::context::SessionProvider;

#[component]
pub fn App() -> impl IntoView {
    // Provide the toast service to the whole app via context.
    provide_context(NotificationService::new());

    view! {
        <SessionProvider>
            <AppRoutes />
        </SessionProvider>
        <ToastHost />
    }
}
