//! # Résumé Service Module
//!
//! This module aggregates all API endpoints for the résumé store. It acts as
//! a router, directing incoming HTTP requests under the `/api/resumes` path
//! to the appropriate handler logic defined in its sub-modules.
//!
//! ## Registered Routes:
//!
//! *   **`GET /api/resumes`**:
//!     - **Handler**: `list::process`
//!     - **Description**: Returns the caller's own résumés, most recently
//!       modified first. Requires authentication.
//!
//! *   **`POST /api/resumes/save`**:
//!     - **Handler**: `save::process`
//!     - **Description**: Creates a new résumé from the submitted document,
//!       title, template and theme. Rejects blank titles (400 with field
//!       details) and duplicate titles within the account (409).
//!
//! *   **`POST /api/resumes/auto-save`**:
//!     - **Handler**: `auto_save::process`
//!     - **Description**: Create-or-update in one call. With a `resumeId` it
//!       updates that record in place; without one it behaves like `save`,
//!       including the duplicate-title check.
//!
//! *   **`GET /api/resumes/{id}`**:
//!     - **Handler**: `get::process`
//!     - **Description**: Fetches a single record, owned or shared by link.
//!       No authentication is required to read; a missing id is reported as
//!       401 to anonymous callers so they cannot enumerate which ids exist.
//!
//! *   **`PUT /api/resumes/{id}`**:
//!     - **Handler**: `update::process`
//!     - **Description**: Rewrites an owned record. Foreign and missing
//!       records both answer 404.
//!
//! *   **`DELETE /api/resumes/{id}`**:
//!     - **Handler**: `delete::process`
//!     - **Description**: Removes an owned record and confirms with a
//!       message envelope.
//!
//! *   **`POST /api/resumes/{id}/duplicate`**:
//!     - **Handler**: `duplicate::process`
//!     - **Description**: Clones any reachable record into the caller's
//!       account under a "Copy of …" title.
//!
//! *   **`GET /api/resumes/{id}/ownership`**:
//!     - **Handler**: `ownership::process`
//!     - **Description**: Tells an authenticated caller whether the record
//!       belongs to them, without exposing the owner.

mod auto_save;
mod delete;
mod duplicate;
mod get;
mod list;
mod ownership;
mod save;
mod store;
mod update;

use actix_web::Scope;
use actix_web::web::{delete, get, post, put, scope};

const API_PATH: &str = "/api/resumes";

pub fn configure_routes() -> Scope {
    // Literal segments are registered before `{id}` so "save" and
    // "auto-save" never match as record ids.
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/save", post().to(save::process))
        .route("/auto-save", post().to(auto_save::process))
        .route("/{id}/ownership", get().to(ownership::process))
        .route("/{id}/duplicate", post().to(duplicate::process))
        .route("/{id}", get().to(get::process))
        .route("/{id}", put().to(update::process))
        .route("/{id}", delete().to(delete::process))
}
