//! Handler for `POST /api/resumes/auto-save`.
//!
//! The background-save entry point: the client does not know whether the
//! document it holds has ever been persisted, so the request carries an
//! optional `resumeId` and the server picks create or update accordingly.

use actix_web::{HttpRequest, HttpResponse, web};

use common::requests::{AutoSaveRequest, ResumeResponse};

use super::store;
use crate::db;
use crate::responses;
use crate::services::auth::authenticated_user;

pub async fn process(req: HttpRequest, request: web::Json<AutoSaveRequest>) -> HttpResponse {
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

    let result = match &request.resume_id {
        Some(id) => store::update_resume(
            &conn,
            id,
            &user_id,
            &request.resume_data,
            title,
            &request.template,
            &request.theme,
        ),
        None => {
            match store::title_exists(&conn, &user_id, title) {
                Ok(true) => {
                    return responses::conflict("A resume with this name already exists");
                }
                Ok(false) => {}
                Err(e) => return responses::server_error(&e),
            }
            store::insert_resume(
                &conn,
                &user_id,
                &request.resume_data,
                title,
                &request.template,
                &request.theme,
            )
            .map(Some)
        }
    };

    match result {
        Ok(Some(resume)) => HttpResponse::Ok().json(ResumeResponse { resume }),
        Ok(None) => responses::not_found("Resume not found"),
        Err(e) => responses::server_error(&e),
    }
}
