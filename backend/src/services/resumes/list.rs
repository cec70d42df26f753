//! Handler for `GET /api/resumes`.

use actix_web::{HttpRequest, HttpResponse};

use common::requests::ResumeListResponse;

use super::store;
use crate::db;
use crate::responses;
use crate::services::auth::authenticated_user;

pub async fn process(req: HttpRequest) -> HttpResponse {
    let conn = match db::open() {
        Ok(conn) => conn,
        Err(e) => return responses::service_unavailable(&e),
    };
    let user_id = match authenticated_user(&req, &conn) {
        Some(id) => id,
        None => return responses::unauthorized("Authentication required"),
    };
    match store::list_resumes(&conn, &user_id) {
        Ok(resumes) => HttpResponse::Ok().json(ResumeListResponse { resumes }),
        Err(e) => responses::server_error(&e),
    }
}
