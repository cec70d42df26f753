//! Handler for `PUT /api/resumes/{id}`.

use actix_web::{HttpRequest, HttpResponse, web};

use common::requests::{ResumeResponse, SaveResumeRequest};

use super::store;
use crate::db;
use crate::responses;
use crate::services::auth::authenticated_user;

/// Rewrites an owned record. Updates keep whatever title the caller sent as
/// long as it is non-blank; the duplicate-title rule applies to creation
/// only, so renaming back and forth never dead-ends.
pub async fn process(
    req: HttpRequest,
    id: web::Path<String>,
    request: web::Json<SaveResumeRequest>,
) -> HttpResponse {
    let conn = match db::open() {
        Ok(conn) => conn,
        Err(e) => return responses::service_unavailable(&e),
    };
    let user_id = match authenticated_user(&req, &conn) {
        Some(id) => id,
        None => return responses::unauthorized("Authentication required"),
    };
    let title = request.title.trim();
    if title.is_empty() {
        return responses::validation(vec![("title", "Title is required")]);
    }
    match store::update_resume(
        &conn,
        &id,
        &user_id,
        &request.resume_data,
        title,
        &request.template,
        &request.theme,
    ) {
        Ok(Some(resume)) => HttpResponse::Ok().json(ResumeResponse { resume }),
        Ok(None) => responses::not_found("Resume not found"),
        Err(e) => responses::server_error(&e),
    }
}
