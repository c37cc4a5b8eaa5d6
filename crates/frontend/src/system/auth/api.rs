//! Session and employee endpoints.

use contracts::domain::employee::{Employee, LoginPayload, ProfilePayload, RegisterPayload};

use crate::shared::api_client::{self, ApiError};
use crate::shared::notify::{Notifier, Severity};

/// Register a new employee account.
pub async fn register(
    notifier: &dyn Notifier,
    payload: &RegisterPayload,
) -> Result<Employee, ApiError> {
    let result = api_client::post_json("/register", payload).await;
    if let Err(error) = &result {
        match error {
            ApiError::Network(detail) => log::error!("register failed: {}", detail),
            _ => notifier.notify(
                error.message_or("Error registering employee"),
                Severity::Error,
            ),
        }
    }
    result
}

/// Log in with email-or-username and password. The backend sets the
/// session cookie; the caller reloads the session afterwards.
pub async fn login(notifier: &dyn Notifier, payload: &LoginPayload) -> Result<(), ApiError> {
    let result: Result<serde_json::Value, ApiError> =
        api_client::post_json("/auth_session/login", payload).await;
    if let Err(error) = &result {
        match error {
            ApiError::Network(detail) => log::error!("login failed: {}", detail),
            _ => notifier.notify(error.message_or("Login failed"), Severity::Error),
        }
    }
    result.map(|_| ())
}

pub async fn logout() -> Result<(), ApiError> {
    api_client::delete("/auth_session/logout").await
}

/// Fetch the logged-in employee. A 401 here just means "not logged in",
/// so failures are logged, never toasted, and never redirected — the
/// probe runs on public pages too.
pub async fn fetch_me() -> Result<Employee, ApiError> {
    api_client::get_json_with("/employees/me", api_client::OnUnauthorized::PassThrough).await
}

/// Update an employee record (profile fields).
pub async fn update_employee(
    notifier: &dyn Notifier,
    id: &str,
    payload: &ProfilePayload,
) -> Result<Employee, ApiError> {
    let result = api_client::put_json(&format!("/employees/{}", id), payload).await;
    if let Err(error) = &result {
        match error {
            ApiError::Network(detail) => log::error!("profile update failed: {}", detail),
            _ => notifier.notify(error.message_or("Error updating profile."), Severity::Error),
        }
    }
    result
}
