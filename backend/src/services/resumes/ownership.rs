//! Handler for `GET /api/resumes/{id}/ownership`.

use actix_web::{HttpRequest, HttpResponse, web};

use common::requests::OwnershipResponse;

use super::store;
use crate::db;
use crate::responses;
use crate::services::auth::authenticated_user;

/// Answers "is this record mine?" without revealing whose it is. The editor
/// uses this to decide between updating in place and forking a copy.
pub async fn process(req: HttpRequest, id: web::Path<String>) -> HttpResponse {
    let conn = match db::open() {
        Ok(conn) => conn,
        Err(e) => return responses::service_unavailable(&e),
    };
    let user_id = match authenticated_user(&req, &conn) {
        Some(id) => id,
        None => return responses::unauthorized("Authentication required"),
    };
    match store::fetch_resume(&conn, &id) {
        Ok(Some(resume)) => HttpResponse::Ok().json(OwnershipResponse {
            owns_resume: resume.user_id == user_id,
        }),
        Ok(None) => responses::not_found("Resume not found"),
        Err(e) => responses::server_error(&e),
    }
}
