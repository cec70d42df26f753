//! Handler for `POST /api/resumes/{id}/duplicate`.

use actix_web::{HttpRequest, HttpResponse, web};

use common::requests::ResumeResponse;

use super::store;
use crate::db;
use crate::responses;
use crate::services::auth::authenticated_user;

/// Clones a record into the caller's account. The source may belong to
/// anyone reachable by link, which is how "fork a shared résumé" works.
pub async fn process(req: HttpRequest, id: web::Path<String>) -> HttpResponse {
    let conn = match db::open() {
        Ok(conn) => conn,
        Err(e) => return responses::service_unavailable(&e),
    };
    let user_id = match authenticated_user(&req, &conn) {
        Some(id) => id,
        None => return responses::unauthorized("Authentication required"),
    };
    match store::duplicate_resume(&conn, &id, &user_id) {
        Ok(Some(resume)) => HttpResponse::Ok().json(ResumeResponse { resume }),
        Ok(None) => responses::not_found("Resume not found"),
        Err(e) => responses::server_error(&e),
    }
}
