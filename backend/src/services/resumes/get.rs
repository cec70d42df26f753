//! Handler for `GET /api/resumes/{id}`.
//!
//! Reading is open so that share links work without an account. Missing ids
//! are reported differently depending on who asks: anonymous callers get an
//! ambiguous 401 so they cannot tell "does not exist" from "not yours",
//! while authenticated callers get an honest 404.

use actix_web::{HttpRequest, HttpResponse, web};

use common::requests::ResumeResponse;

use super::store;
use crate::db;
use crate::responses;
use crate::services::auth::authenticated_user;

pub async fn process(req: HttpRequest, id: web::Path<String>) -> HttpResponse {
    let conn = match db::open() {
        Ok(conn) => conn,
        Err(e) => return responses::service_unavailable(&e),
    };
    match store::fetch_resume(&conn, &id) {
        Ok(Some(resume)) => HttpResponse::Ok().json(ResumeResponse { resume }),
        Ok(None) => {
            if authenticated_user(&req, &conn).is_some() {
                responses::not_found("Resume not found")
            } else {
                responses::unauthorized("Resume not found or access denied")
            }
        }
        Err(e) => responses::server_error(&e),
    }
}
