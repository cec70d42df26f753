//! Handler for `DELETE /api/resumes/{id}`.

use actix_web::{HttpRequest, HttpResponse, web};

use common::requests::DeleteResponse;

use super::store;
use crate::db;
use crate::responses;
use crate::services::auth::authenticated_user;

pub async fn process(req: HttpRequest, id: web::Path<String>) -> HttpResponse {
    let conn = match db::open() {
        Ok(conn) => conn,
        Err(e) => return responses::service_unavailable(&e),
    };
    let user_id = match authenticated_user(&req, &conn) {
        Some(id) => id,
        None => return responses::unauthorized("Authentication required"),
    };
    match store::delete_resume(&conn, &id, &user_id) {
        Ok(true) => HttpResponse::Ok().json(DeleteResponse {
            message: "Resume deleted".to_string(),
        }),
        Ok(false) => responses::not_found("Resume not found"),
        Err(e) => responses::server_error(&e),
    }
}
