//! HTTP client for the backend REST API.
//!
//! All requests go to `/api/v1` on the same origin with session cookies
//! attached. A 401 anywhere means the session expired; that is handled
//! here, globally, by navigating to the login page — callers never
//! recover from it locally.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use web_sys::RequestCredentials;

const API_BASE: &str = "/api/v1";

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The server answered with a non-2xx status. `message` carries the
    /// backend's `{"error": ...}` body when it was parseable.
    Http {
        status: u16,
        message: Option<String>,
    },
    /// The request never produced a response.
    Network(String),
}

impl ApiError {
    /// Server-supplied message, or the operation-specific fallback.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            ApiError::Http {
                message: Some(message),
                ..
            } => message,
            _ => fallback,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401, .. })
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, message } => match message {
                Some(message) => write!(f, "HTTP {}: {}", status, message),
                None => write!(f, "HTTP {}", status),
            },
            ApiError::Network(detail) => write!(f, "network error: {}", detail),
        }
    }
}

/// How a 401 response should be handled for a given request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnUnauthorized {
    /// The session expired mid-use: navigate to the login page.
    RedirectToLogin,
    /// A 401 is an expected answer (the session probe asking "who am
    /// I?"); it is returned to the caller instead of navigating away.
    PassThrough,
}

fn login_redirect_wanted(on_unauthorized: OnUnauthorized, pathname: &str) -> bool {
    // the login page itself is exempt to avoid a reload loop
    on_unauthorized == OnUnauthorized::RedirectToLogin && !pathname.starts_with("/login")
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}

/// Extract the backend's error message from a response body.
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("error")?
        .as_str()
        .map(str::to_string)
}

fn redirect_to_login(on_unauthorized: OnUnauthorized) {
    if let Some(window) = web_sys::window() {
        let location = window.location();
        let pathname = location.pathname().unwrap_or_default();
        if login_redirect_wanted(on_unauthorized, &pathname) {
            let _ = location.set_href("/login");
        }
    }
}

fn with_defaults(builder: RequestBuilder) -> RequestBuilder {
    builder
        .credentials(RequestCredentials::Include)
        .header("Accept", "application/json")
}

async fn check(
    response: Response,
    on_unauthorized: OnUnauthorized,
) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response.text().await.ok().and_then(|b| error_message(&b));
    if status == 401 {
        redirect_to_login(on_unauthorized);
    }
    Err(ApiError::Http { status, message })
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Network(format!("failed to parse response: {}", e)))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    get_json_with(path, OnUnauthorized::RedirectToLogin).await
}

/// GET with an explicit 401 policy. Anonymous users must be able to sit
/// on the register page while the session probe comes back 401.
pub async fn get_json_with<T: DeserializeOwned>(
    path: &str,
    on_unauthorized: OnUnauthorized,
) -> Result<T, ApiError> {
    let response = with_defaults(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    parse(check(response, on_unauthorized).await?).await
}

pub async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let request = with_defaults(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| ApiError::Network(format!("failed to serialize request: {}", e)))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    parse(check(response, OnUnauthorized::RedirectToLogin).await?).await
}

pub async fn put_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let request = with_defaults(Request::put(&api_url(path)))
        .json(body)
        .map_err(|e| ApiError::Network(format!("failed to serialize request: {}", e)))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    parse(check(response, OnUnauthorized::RedirectToLogin).await?).await
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = with_defaults(Request::delete(&api_url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response, OnUnauthorized::RedirectToLogin).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_prefixes_the_versioned_base() {
        assert_eq!(api_url("/brands/5/1"), "/api/v1/brands/5/1");
    }

    #[test]
    fn error_message_reads_the_error_key() {
        assert_eq!(
            error_message(r#"{"error": "Brand does not exist."}"#),
            Some("Brand does not exist.".to_string())
        );
        assert_eq!(error_message(r#"{"detail": "nope"}"#), None);
        assert_eq!(error_message("<html>502</html>"), None);
    }

    #[test]
    fn session_probe_never_triggers_the_login_redirect() {
        // an anonymous visitor on the register page stays there even
        // though the mount-time session probe comes back 401
        assert!(!login_redirect_wanted(
            OnUnauthorized::PassThrough,
            "/register"
        ));
        assert!(!login_redirect_wanted(OnUnauthorized::PassThrough, "/brands"));
    }

    #[test]
    fn expired_sessions_redirect_everywhere_but_the_login_page() {
        assert!(login_redirect_wanted(
            OnUnauthorized::RedirectToLogin,
            "/brands"
        ));
        assert!(login_redirect_wanted(
            OnUnauthorized::RedirectToLogin,
            "/register"
        ));
        assert!(!login_redirect_wanted(
            OnUnauthorized::RedirectToLogin,
            "/login"
        ));
    }

    #[test]
    fn message_or_falls_back_for_network_and_bare_http_errors() {
        let err = ApiError::Network("timeout".into());
        assert_eq!(err.message_or("Error adding brand"), "Error adding brand");

        let err = ApiError::Http {
            status: 500,
            message: None,
        };
        assert_eq!(err.message_or("fallback"), "fallback");

        let err = ApiError::Http {
            status: 409,
            message: Some("Brand already exists.".into()),
        };
        assert_eq!(err.message_or("fallback"), "Brand already exists.");
    }
}
