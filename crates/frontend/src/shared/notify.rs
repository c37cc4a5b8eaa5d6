//! Transient user notifications (toasts).
//!
//! Gateways and controllers talk to the [`Notifier`] trait only; the
//! concrete [`NotificationService`] is provided once via context and
//! rendered by [`ToastHost`].

use leptos::prelude::*;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    fn css_class(self) -> &'static str {
        match self {
            Severity::Success => "toast--success",
            Severity::Error => "toast--error",
            Severity::Info => "toast--info",
        }
    }
}

pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn toasts(&self) -> RwSignal<Vec<Toast>> {
        self.toasts
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationService {
    fn notify(&self, message: &str, severity: Severity) {
        let mut id = 0;
        self.next_id.update_value(|next| {
            *next += 1;
            id = *next;
        });
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                message: message.to_string(),
                severity,
            })
        });

        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
            this.dismiss(id);
        });
    }
}

pub fn use_notifier() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not found in context")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_notifier();

    view! {
        <div class="toast-host">
            {move || service.toasts().get().into_iter().map(|toast| {
                let id = toast.id;
                view! {
                    <div class=format!("toast {}", toast.severity.css_class())>
                        <span class="toast__message">{toast.message}</span>
                        <button class="toast__close" on:click=move |_| service.dismiss(id)>
                            "\u{00d7}"
                        </button>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
