//! Bearer-token storage and the login call.
//!
//! The token lives in `localStorage`; the backend additionally sets a
//! session cookie on login, so API calls work with either mechanism.

use gloo_net::http::Request;
use web_sys::RequestCredentials;

use common::requests::{ApiErrorBody, LoginRequest, LoginResponse};

use crate::api::ApiError;

const TOKEN_KEY: &str = "resume_builder_token";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn token() -> Option<String> {
    local_storage()
        .and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
        .filter(|t| !t.is_empty())
}

pub fn is_authenticated() -> bool {
    token().is_some()
}

pub fn store_token(token: &str) {
    if let Some(storage) = local_storage() {
        storage.set_item(TOKEN_KEY, token).ok();
    }
}

pub fn clear_token() {
    if let Some(storage) = local_storage() {
        storage.remove_item(TOKEN_KEY).ok();
    }
}

/// `POST /api/auth/login`. Stores the returned token on success.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let body = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    let response = Request::post("/api/auth/login")
        .credentials(RequestCredentials::Include)
        .json(&body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        let body = response.json::<ApiErrorBody>().await.unwrap_or_default();
        let message = if body.error.is_empty() {
            "Invalid email or password".to_string()
        } else {
            body.error
        };
        return Err(ApiError::Failed(message));
    }
    let login = response
        .json::<LoginResponse>()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    store_token(&login.token);
    Ok(login)
}
