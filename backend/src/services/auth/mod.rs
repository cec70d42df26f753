//! # Authentication Service Module
//!
//! Session handling for the résumé API. Login issues an opaque session token
//! that clients may present either as a `Bearer` header or as the
//! `session_token` cookie; every protected handler resolves it back to a user
//! id through [`authenticated_user`].
//!
//! ## Registered Routes:
//!
//! *   **`POST /api/auth/login`**:
//!     - **Handler**: `login::process`
//!     - **Description**: Verifies an email/password pair and creates a new
//!       session. Responds with the token and user id as JSON and also sets
//!       the `session_token` cookie for cookie-based clients.

mod login;

use actix_web::web::{post, scope};
use actix_web::{HttpRequest, Scope};
use rusqlite::{Connection, OptionalExtension, params};

const API_PATH: &str = "/api/auth";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/login", post().to(login::process))
}

/// Extracts the session token from the request, header first, cookie second.
fn session_token(req: &HttpRequest) -> Option<String> {
    if let Some(value) = req.headers().get("Authorization") {
        if let Ok(value) = value.to_str() {
            if let Some(token) = value.strip_prefix("Bearer ") {
                return Some(token.to_string());
            }
        }
    }
    req.cookie("session_token").map(|c| c.value().to_string())
}

/// Resolves the request's session token to a user id, or `None` when the
/// request carries no token or the token matches no session.
pub fn authenticated_user(req: &HttpRequest, conn: &Connection) -> Option<String> {
    let token = session_token(req)?;
    conn.query_row(
        "SELECT user_id FROM sessions WHERE token = ?1",
        params![token],
        |row| row.get(0),
    )
    .optional()
    .ok()
    .flatten()
}
