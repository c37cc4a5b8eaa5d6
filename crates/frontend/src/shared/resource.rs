//! Generic CRUD resource plumbing.
//!
//! The brand/category/product/employee pages all follow the same shape:
//! a paginated, searchable list plus an add/edit form and a detail view,
//! backed by one REST collection. [`Resource`] describes an entity once;
//! the gateway functions and [`ResourceController`] are implemented once
//! and instantiated per entity.

use contracts::pagination::PageRequest;
use contracts::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_client::{self, ApiError};
use crate::shared::notify::{NotificationService, Notifier, Severity};

/// Static description of a REST resource and its form schema.
pub trait Resource: 'static {
    type Entity: Clone + PartialEq + DeserializeOwned + Send + Sync + 'static;
    type Draft: Clone + Default + PartialEq + Send + Sync + 'static;
    type Payload: Serialize + Send + Sync + 'static;

    /// Collection path under `/api/v1`, e.g. `/brands`.
    const BASE: &'static str;
    /// Lowercase singular label for fallback messages.
    const LABEL: &'static str;
    /// Whether the paginated list endpoint accepts `?search=`.
    const SEARCHABLE: bool = true;

    fn id(entity: &Self::Entity) -> &str;
    fn name_of(entity: &Self::Entity) -> String;
    fn draft_of(entity: &Self::Entity) -> Self::Draft;
    fn draft_id(draft: &Self::Draft) -> Option<String>;
    fn draft_name(draft: &Self::Draft) -> String;
    fn validate(draft: &Self::Draft) -> Result<(), FieldErrors>;
    fn payload(draft: &Self::Draft) -> Self::Payload;
}

/// `{base}/{pageSize}/{pageNum}[?search=]` — the backend's list scheme.
pub fn list_path(base: &str, page: PageRequest, search: &str) -> String {
    let mut path = format!("{}/{}", base, page.path_segment());
    let term = search.trim();
    if !term.is_empty() {
        path.push_str("?search=");
        path.push_str(&urlencoding::encode(term));
    }
    path
}

// ---------------------------------------------------------------------------
// Gateway
// ---------------------------------------------------------------------------

/// Report a failed operation.
///
/// HTTP errors are user-caused (validation, conflicts, not-found) and go
/// to the toast with the server's message; network failures are
/// infrastructure noise and only get logged. A 401 was already turned
/// into a login redirect by the client, so it is not toasted either.
fn report(notifier: &dyn Notifier, error: &ApiError, fallback: &str) {
    match error {
        ApiError::Http { .. } if error.is_unauthorized() => {}
        ApiError::Http { .. } => notifier.notify(error.message_or(fallback), Severity::Error),
        ApiError::Network(detail) => log::error!("{}: {}", fallback, detail),
    }
}

/// Request path for one page of `R`, dropping the search term when the
/// endpoint does not support it.
pub fn request_path<R: Resource>(page: PageRequest, search: &str) -> String {
    let search = if R::SEARCHABLE { search } else { "" };
    list_path(R::BASE, page, search)
}

/// Fetch one page. Errors are left to the caller: the backend 404s an
/// empty page, so a failed list is not worth a toast.
pub async fn list<R: Resource>(
    page: PageRequest,
    search: &str,
) -> Result<Vec<R::Entity>, ApiError> {
    api_client::get_json(&request_path::<R>(page, search)).await
}

/// Fetch one fresh record (used before opening an edit form).
pub async fn get<R: Resource>(notifier: &dyn Notifier, id: &str) -> Result<R::Entity, ApiError> {
    let result = api_client::get_json(&format!("{}/{}", R::BASE, id)).await;
    if let Err(error) = &result {
        report(
            notifier,
            error,
            &format!("Error fetching {}. Please contact admin.", R::LABEL),
        );
    }
    result
}

pub async fn create<R: Resource>(
    notifier: &dyn Notifier,
    payload: &R::Payload,
) -> Result<R::Entity, ApiError> {
    let result = api_client::post_json(R::BASE, payload).await;
    if let Err(error) = &result {
        report(notifier, error, &format!("Error adding {}", R::LABEL));
    }
    result
}

pub async fn update<R: Resource>(
    notifier: &dyn Notifier,
    id: &str,
    payload: &R::Payload,
) -> Result<R::Entity, ApiError> {
    let result = api_client::put_json(&format!("{}/{}", R::BASE, id), payload).await;
    if let Err(error) = &result {
        report(notifier, error, &format!("Error updating {}", R::LABEL));
    }
    result
}

pub async fn delete<R: Resource>(notifier: &dyn Notifier, id: &str) -> Result<(), ApiError> {
    let result = api_client::delete(&format!("{}/{}", R::BASE, id)).await;
    if let Err(error) = &result {
        report(
            notifier,
            error,
            &format!("Error deleting {}. Please contact admin.", R::LABEL),
        );
    }
    result
}

// ---------------------------------------------------------------------------
// Stale-response guard
// ---------------------------------------------------------------------------

/// Monotonic ticket counter for list requests. In-flight requests are
/// never cancelled; a response is applied only while its ticket is still
/// the latest one issued, so rapid page-size or search changes cannot
/// leave a stale page on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSequence {
    issued: u64,
}

impl RequestSequence {
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        ticket == self.issued
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Add,
    Edit,
}

/// Per-page state machine: `Idle` (list only), form open (add/edit with a
/// draft and field errors), or detail open. Owns every signal a resource
/// page needs; presentation components only read these signals and call
/// the intent methods.
pub struct ResourceController<R: Resource> {
    pub items: RwSignal<Vec<R::Entity>>,
    pub page: RwSignal<PageRequest>,
    /// Search text after debouncing; every change re-triggers the list.
    pub search: RwSignal<String>,
    pub draft: RwSignal<R::Draft>,
    pub field_errors: RwSignal<FieldErrors>,
    pub mode: RwSignal<FormMode>,
    pub show_form: RwSignal<bool>,
    pub selected: RwSignal<Option<R::Entity>>,
    /// False until the first list response lands, so the empty state is
    /// not flashed while loading.
    pub loaded: RwSignal<bool>,
    seq: StoredValue<RequestSequence>,
    reload_hook: StoredValue<Option<Callback<()>>>,
    notifier: NotificationService,
}

impl<R: Resource> Clone for ResourceController<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for ResourceController<R> {}

impl<R: Resource> ResourceController<R> {
    pub fn new(notifier: NotificationService) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            page: RwSignal::new(PageRequest::default()),
            search: RwSignal::new(String::new()),
            draft: RwSignal::new(R::Draft::default()),
            field_errors: RwSignal::new(FieldErrors::new()),
            mode: RwSignal::new(FormMode::Add),
            show_form: RwSignal::new(false),
            selected: RwSignal::new(None),
            loaded: RwSignal::new(false),
            seq: StoredValue::new(RequestSequence::default()),
            reload_hook: StoredValue::new(None),
            notifier,
        }
    }

    pub fn notifier(&self) -> NotificationService {
        self.notifier
    }

    /// Re-list whenever pagination or the (already debounced) search text
    /// change. Pages with extra reactive inputs (product filters) build
    /// their own effect instead and register a reload hook.
    pub fn init_list_effect(&self) {
        let this = *self;
        Effect::new(move |_| {
            let page = this.page.get();
            let search = this.search.get();
            this.load(page, search);
        });
    }

    /// What "refresh the list" means for this page. The default is a
    /// plain unfiltered list fetch.
    pub fn set_reload(&self, hook: Callback<()>) {
        self.reload_hook.set_value(Some(hook));
    }

    pub fn reload(&self) {
        match self.reload_hook.with_value(|h| *h) {
            Some(hook) => hook.run(()),
            None => self.load(self.page.get_untracked(), self.search.get_untracked()),
        }
    }

    pub fn load(&self, page: PageRequest, search: String) {
        let this = *self;
        let mut ticket = 0;
        self.seq.update_value(|seq| ticket = seq.issue());
        spawn_local(async move {
            let result = list::<R>(page, &search).await;
            if !this.seq.with_value(|seq| seq.is_latest(ticket)) {
                // a newer request owns the list now
                return;
            }
            match result {
                Ok(items) => this.items.set(items),
                Err(error) => {
                    log::error!("failed to list {}s: {}", R::LABEL, error);
                    this.items.set(Vec::new());
                }
            }
            this.loaded.set(true);
        });
    }

    /// Apply a list fetched outside the default path (filtered product
    /// pages), still honoring ticket order.
    pub fn issue_ticket(&self) -> u64 {
        let mut ticket = 0;
        self.seq.update_value(|seq| ticket = seq.issue());
        ticket
    }

    pub fn apply_list(&self, ticket: u64, items: Vec<R::Entity>) -> bool {
        if !self.seq.with_value(|seq| seq.is_latest(ticket)) {
            return false;
        }
        self.items.set(items);
        self.loaded.set(true);
        true
    }

    pub fn set_page_size(&self, page_size: u32) {
        self.page.update(|p| *p = p.with_size(page_size));
    }

    pub fn set_page_num(&self, page_num: u32) {
        self.page.update(|p| *p = p.with_num(page_num));
    }

    // -- form intents -------------------------------------------------------

    pub fn add(&self) {
        self.reset_form();
        self.show_form.set(true);
    }

    pub fn cancel(&self) {
        self.reset_form();
        self.show_form.set(false);
    }

    fn reset_form(&self) {
        self.draft.set(R::Draft::default());
        self.field_errors.set(FieldErrors::new());
        self.mode.set(FormMode::Add);
    }

    /// Open the edit form. The draft is always a fresh fetch, never the
    /// possibly-stale row from the table.
    pub fn edit(&self, id: String) {
        self.mode.set(FormMode::Edit);
        self.field_errors.set(FieldErrors::new());
        self.show_form.set(true);
        let this = *self;
        spawn_local(async move {
            match get::<R>(&this.notifier, &id).await {
                Ok(entity) => this.draft.set(R::draft_of(&entity)),
                Err(_) => this.show_form.set(false),
            }
        });
    }

    /// Validate, then create or update by mode. Validation failures set
    /// the field-error map and never reach the network; gateway failures
    /// have already been reported and leave the form open with the draft
    /// intact.
    pub fn submit(&self) {
        let draft = self.draft.get_untracked();
        if let Err(errors) = R::validate(&draft) {
            self.field_errors.set(errors);
            return;
        }
        self.field_errors.set(FieldErrors::new());

        let payload = R::payload(&draft);
        let name = R::draft_name(&draft);
        let mode = self.mode.get_untracked();
        let this = *self;
        spawn_local(async move {
            let result = match mode {
                FormMode::Add => create::<R>(&this.notifier, &payload).await.map(|_| "added"),
                FormMode::Edit => match R::draft_id(&draft) {
                    Some(id) => update::<R>(&this.notifier, &id, &payload)
                        .await
                        .map(|_| "updated"),
                    None => {
                        log::error!("edit submit for {} without an id", R::LABEL);
                        return;
                    }
                },
            };
            if let Ok(verb) = result {
                this.notifier
                    .notify(&format!("{} {} successfully", name, verb), Severity::Success);
                this.reset_form();
                this.show_form.set(false);
                this.reload();
            }
        });
    }

    // -- row intents --------------------------------------------------------

    pub fn view(&self, entity: R::Entity) {
        self.selected.set(Some(entity));
    }

    pub fn close_detail(&self) {
        self.selected.set(None);
    }

    /// Confirmation-gated delete; the list is re-fetched on success.
    pub fn remove(&self, entity: &R::Entity) {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!(
                    "Are you sure you want to delete {}?",
                    R::name_of(entity)
                ))
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let id = R::id(entity).to_string();
        let this = *self;
        spawn_local(async move {
            if delete::<R>(&this.notifier, &id).await.is_ok() {
                this.reload();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_are_monotonic_and_only_the_latest_wins() {
        let mut seq = RequestSequence::default();
        let first = seq.issue();
        let second = seq.issue();
        assert!(second > first);
        assert!(!seq.is_latest(first));
        assert!(seq.is_latest(second));
    }

    #[test]
    fn a_new_ticket_invalidates_all_prior_ones() {
        let mut seq = RequestSequence::default();
        let tickets: Vec<u64> = (0..5).map(|_| seq.issue()).collect();
        for stale in &tickets[..4] {
            assert!(!seq.is_latest(*stale));
        }
        assert!(seq.is_latest(tickets[4]));
    }

    #[test]
    fn list_path_without_search() {
        let page = PageRequest::new(5, 1);
        assert_eq!(list_path("/brands", page, ""), "/brands/5/1");
        assert_eq!(list_path("/brands", page, "   "), "/brands/5/1");
    }

    #[test]
    fn list_path_encodes_the_search_term() {
        let page = PageRequest::new(10, 2);
        assert_eq!(
            list_path("/products", page, "cough syrup"),
            "/products/10/2?search=cough%20syrup"
        );
    }

    #[test]
    fn list_path_clamps_page_parameters() {
        assert_eq!(
            list_path("/categories", PageRequest::new(0, 0), ""),
            "/categories/1/1"
        );
    }
}
