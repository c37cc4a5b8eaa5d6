//! Application-scoped session state.
//!
//! The current employee is explicit state with a load/clear lifecycle,
//! provided once at the app root and injected into pages via context.

use contracts::domain::employee::Employee;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub employee: Option<Employee>,
    /// True once the initial `/employees/me` probe has settled; the
    /// guard waits for this before deciding anything.
    pub loaded: bool,
}

#[derive(Clone, Copy)]
pub struct SessionState {
    inner: RwSignal<Session>,
}

impl SessionState {
    fn new() -> Self {
        Self {
            inner: RwSignal::new(Session::default()),
        }
    }

    pub fn session(&self) -> Session {
        self.inner.get()
    }

    pub fn employee(&self) -> Option<Employee> {
        self.inner.get().employee
    }

    pub fn is_loaded(&self) -> bool {
        self.inner.get().loaded
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.get().employee.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.inner
            .get()
            .employee
            .map(|e| e.is_admin)
            .unwrap_or(false)
    }

    /// Probe the backend for the cookie-authenticated employee.
    pub fn load(&self) {
        let this = *self;
        spawn_local(async move { this.refresh().await });
    }

    /// Await-able variant of [`SessionState::load`], for flows that must
    /// not navigate until the employee is in place (login, profile save).
    pub async fn refresh(self) {
        match api::fetch_me().await {
            Ok(employee) => self.inner.set(Session {
                employee: Some(employee),
                loaded: true,
            }),
            Err(error) => {
                log::debug!("session probe: {}", error);
                self.inner.set(Session {
                    employee: None,
                    loaded: true,
                });
            }
        }
    }

    /// Drop the local session after logout (the cookie is already gone).
    pub fn clear(&self) {
        self.inner.set(Session {
            employee: None,
            loaded: true,
        });
    }
}

#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let state = SessionState::new();
    provide_context(state);

    // restore the cookie session on mount
    state.load();

    children()
}

pub fn use_session() -> SessionState {
    use_context::<SessionState>().expect("SessionProvider not found in component tree")
}
