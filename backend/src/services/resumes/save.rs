//! Handler for `POST /api/resumes/save` (first save of a document).

use actix_web::{HttpRequest, HttpResponse, web};

use common::requests::{ResumeResponse, SaveResumeRequest};

use super::store;
use crate::db;
use crate::responses;
use crate::services::auth::authenticated_user;

pub async fn process(req: HttpRequest, request: web::Json<SaveResumeRequest>) -> HttpResponse {
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
    match store::title_exists(&conn, &user_id, title) {
        Ok(true) => return responses::conflict("A resume with this name already exists"),
        Ok(false) => {}
        Err(e) => return responses::server_error(&e),
    }
    match store::insert_resume(
        &conn,
        &user_id,
        &request.resume_data,
        title,
        &request.template,
        &request.theme,
    ) {
        Ok(resume) => HttpResponse::Ok().json(ResumeResponse { resume }),
        Err(e) => responses::server_error(&e),
    }
}
