//! Stateless client for the résumé REST API.
//!
//! Every call is a single round trip: no retries, no caching, no recovery.
//! A bearer token from local credential storage is attached when present,
//! and browser cookies are always included, so either auth mechanism can
//! satisfy the backend. Status codes are translated into [`ApiError`]
//! variants by small pure functions kept separate from the I/O so they can
//! be unit-tested on the host.

mod error;

pub use error::ApiError;

use gloo_net::http::{Request, RequestBuilder, Response};
use web_sys::RequestCredentials;

use common::model::resume::{ResumeData, ResumeRecord};
use common::requests::{
    ApiErrorBody, AutoSaveRequest, OwnershipResponse, ResumeListResponse, ResumeResponse,
    SaveResumeRequest,
};

use crate::auth;

const RESUMES_PATH: &str = "/api/resumes";

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.credentials(RequestCredentials::Include);
    match auth::token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

fn network_err(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Reads the error envelope of a failed response; tolerates non-JSON bodies.
async fn error_body(response: &Response) -> ApiErrorBody {
    response.json::<ApiErrorBody>().await.unwrap_or_default()
}

async fn parse<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(network_err)
}

/// `GET /api/resumes` — the caller's own résumé collection, most recent first.
pub async fn list() -> Result<Vec<ResumeRecord>, ApiError> {
    let response = with_auth(Request::get(RESUMES_PATH))
        .send()
        .await
        .map_err(network_err)?;
    if !response.ok() {
        let body = error_body(&response).await;
        return Err(generic_failure(&body));
    }
    parse::<ResumeListResponse>(response).await.map(|r| r.resumes)
}

/// `GET /api/resumes/{id}` — a single record, shared or owned.
pub async fn get(id: &str) -> Result<ResumeRecord, ApiError> {
    let response = with_auth(Request::get(&format!("{}/{}", RESUMES_PATH, id)))
        .send()
        .await
        .map_err(network_err)?;
    if !response.ok() {
        let body = error_body(&response).await;
        return Err(get_failure(response.status(), &body, auth::token().is_some()));
    }
    parse::<ResumeResponse>(response).await.map(|r| r.resume)
}

/// `POST /api/resumes/save` — first save; the server assigns the id.
pub async fn create(
    data: &ResumeData,
    title: &str,
    template: &str,
    theme: &str,
) -> Result<ResumeRecord, ApiError> {
    let body = SaveResumeRequest {
        resume_data: data.clone(),
        title: title.to_string(),
        template: template.to_string(),
        theme: theme.to_string(),
    };
    let response = with_auth(Request::post(&format!("{}/save", RESUMES_PATH)))
        .json(&body)
        .map_err(network_err)?
        .send()
        .await
        .map_err(network_err)?;
    if !response.ok() {
        let body = error_body(&response).await;
        return Err(save_failure(response.status(), &body, true));
    }
    parse::<ResumeResponse>(response).await.map(|r| r.resume)
}

/// `PUT /api/resumes/{id}` — update of an owned record.
pub async fn update(
    id: &str,
    data: &ResumeData,
    title: &str,
    template: &str,
    theme: &str,
) -> Result<ResumeRecord, ApiError> {
    let body = SaveResumeRequest {
        resume_data: data.clone(),
        title: title.to_string(),
        template: template.to_string(),
        theme: theme.to_string(),
    };
    let response = with_auth(Request::put(&format!("{}/{}", RESUMES_PATH, id)))
        .json(&body)
        .map_err(network_err)?
        .send()
        .await
        .map_err(network_err)?;
    if !response.ok() {
        let body = error_body(&response).await;
        return Err(save_failure(response.status(), &body, false));
    }
    parse::<ResumeResponse>(response).await.map(|r| r.resume)
}

/// `DELETE /api/resumes/{id}`.
pub async fn remove(id: &str) -> Result<(), ApiError> {
    let response = with_auth(Request::delete(&format!("{}/{}", RESUMES_PATH, id)))
        .send()
        .await
        .map_err(network_err)?;
    if !response.ok() {
        let body = error_body(&response).await;
        return Err(generic_failure(&body));
    }
    Ok(())
}

/// `POST /api/resumes/{id}/duplicate` — server-side clone with a fresh id.
pub async fn duplicate(id: &str) -> Result<ResumeRecord, ApiError> {
    let response = with_auth(Request::post(&format!("{}/{}/duplicate", RESUMES_PATH, id)))
        .send()
        .await
        .map_err(network_err)?;
    if !response.ok() {
        let body = error_body(&response).await;
        return Err(generic_failure(&body));
    }
    parse::<ResumeResponse>(response).await.map(|r| r.resume)
}

/// `POST /api/resumes/auto-save` — the server decides create vs. update from
/// the optional id.
pub async fn auto_save(
    data: &ResumeData,
    id: Option<&str>,
    title: &str,
    template: &str,
    theme: &str,
) -> Result<ResumeRecord, ApiError> {
    let body = AutoSaveRequest {
        resume_data: data.clone(),
        resume_id: id.map(str::to_string),
        title: title.to_string(),
        template: template.to_string(),
        theme: theme.to_string(),
    };
    let response = with_auth(Request::post(&format!("{}/auto-save", RESUMES_PATH)))
        .json(&body)
        .map_err(network_err)?
        .send()
        .await
        .map_err(network_err)?;
    if !response.ok() {
        let body = error_body(&response).await;
        return Err(save_failure(response.status(), &body, id.is_none()));
    }
    parse::<ResumeResponse>(response).await.map(|r| r.resume)
}

/// `GET /api/resumes/{id}/ownership`. A failure here must be treated as
/// "not owned" by callers; this function only reports it.
pub async fn check_ownership(id: &str) -> Result<bool, ApiError> {
    let response = with_auth(Request::get(&format!("{}/{}/ownership", RESUMES_PATH, id)))
        .send()
        .await
        .map_err(network_err)?;
    if !response.ok() {
        let body = error_body(&response).await;
        return Err(generic_failure(&body));
    }
    parse::<OwnershipResponse>(response)
        .await
        .map(|r| r.owns_resume)
}

fn body_message(body: &ApiErrorBody, fallback: &str) -> String {
    if body.error.is_empty() {
        fallback.to_string()
    } else {
        body.error.clone()
    }
}

/// Mapping for calls without a finer taxonomy: message from the body's
/// `error` field, or a generic default.
fn generic_failure(body: &ApiErrorBody) -> ApiError {
    ApiError::Failed(body_message(body, "Something went wrong. Please try again"))
}

/// Mapping for the single-record fetch. A 401 without a bearer token is
/// deliberately reported as "not found or access denied" so unauthenticated
/// callers cannot distinguish missing records from forbidden ones.
fn get_failure(status: u16, body: &ApiErrorBody, has_token: bool) -> ApiError {
    match status {
        401 if !has_token => ApiError::NotFoundOrDenied,
        401 => ApiError::AuthRequired,
        _ => ApiError::Failed(body_message(body, "Failed to load resume")),
    }
}

/// Mapping for create/update/auto-save. `allow_conflict` distinguishes the
/// create path, where 409 means a duplicate title.
fn save_failure(status: u16, body: &ApiErrorBody, allow_conflict: bool) -> ApiError {
    match status {
        401 => ApiError::AuthRequired,
        503 => ApiError::ServiceUnavailable,
        400 => ApiError::Validation(validation_message(body)),
        409 if allow_conflict => {
            ApiError::Conflict(body_message(body, "A resume with this title already exists"))
        }
        _ => ApiError::Server {
            status,
            message: body_message(body, "Unexpected server error"),
        },
    }
}

/// Flattens a field-level `details` list into one multi-line message; falls
/// back to the body's `error` field.
fn validation_message(body: &ApiErrorBody) -> String {
    match &body.details {
        Some(details) if !details.is_empty() => details
            .iter()
            .map(|d| format!("{}: {}", d.field, d.message))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => body_message(body, "Validation failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::requests::FieldError;

    fn body(error: &str) -> ApiErrorBody {
        ApiErrorBody {
            error: error.to_string(),
            details: None,
        }
    }

    #[test]
    fn unauthenticated_get_is_ambiguous_by_design() {
        assert_eq!(
            get_failure(401, &body("Unauthorized"), false),
            ApiError::NotFoundOrDenied
        );
        assert_eq!(get_failure(401, &body("Unauthorized"), true), ApiError::AuthRequired);
        assert_eq!(
            get_failure(404, &body("No such resume"), true),
            ApiError::Failed("No such resume".into())
        );
    }

    #[test]
    fn save_statuses_map_to_typed_reasons() {
        assert_eq!(save_failure(401, &body(""), true), ApiError::AuthRequired);
        assert_eq!(save_failure(503, &body(""), true), ApiError::ServiceUnavailable);
        assert_eq!(
            save_failure(409, &body("Title taken"), true),
            ApiError::Conflict("Title taken".into())
        );
        // Updates have no duplicate-title case; 409 falls through.
        assert_eq!(
            save_failure(409, &body("Title taken"), false),
            ApiError::Server {
                status: 409,
                message: "Title taken".into()
            }
        );
        assert_eq!(
            save_failure(502, &body(""), true),
            ApiError::Server {
                status: 502,
                message: "Unexpected server error".into()
            }
        );
    }

    #[test]
    fn validation_details_concatenate_per_field() {
        let detailed = ApiErrorBody {
            error: "Validation failed".into(),
            details: Some(vec![
                FieldError {
                    field: "title".into(),
                    message: "must not be empty".into(),
                },
                FieldError {
                    field: "theme".into(),
                    message: "unknown value".into(),
                },
            ]),
        };
        assert_eq!(
            save_failure(400, &detailed, true),
            ApiError::Validation("title: must not be empty\ntheme: unknown value".into())
        );
        assert_eq!(
            save_failure(400, &body("Bad request"), true),
            ApiError::Validation("Bad request".into())
        );
    }

    #[test]
    fn generic_failures_use_body_error_or_default() {
        assert_eq!(generic_failure(&body("boom")), ApiError::Failed("boom".into()));
        assert_eq!(
            generic_failure(&body("")),
            ApiError::Failed("Something went wrong. Please try again".into())
        );
    }
}
