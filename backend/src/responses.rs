//! HTTP error responses with the JSON envelope the frontend expects.
//!
//! Status usage follows a fixed taxonomy: 401 authentication, 400 validation
//! (with a field-level `details` list), 404 missing, 409 duplicate title,
//! 503 storage unavailable, 500 everything else.

use actix_web::HttpResponse;

use common::requests::{ApiErrorBody, FieldError};

fn body(error: &str) -> ApiErrorBody {
    ApiErrorBody {
        error: error.to_string(),
        details: None,
    }
}

pub fn unauthorized(message: &str) -> HttpResponse {
    HttpResponse::Unauthorized().json(body(message))
}

pub fn not_found(message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(body(message))
}

pub fn conflict(message: &str) -> HttpResponse {
    HttpResponse::Conflict().json(body(message))
}

pub fn service_unavailable(detail: &str) -> HttpResponse {
    log::error!("storage unavailable: {}", detail);
    HttpResponse::ServiceUnavailable().json(body("The service is temporarily unavailable"))
}

pub fn server_error(detail: &str) -> HttpResponse {
    log::error!("request failed: {}", detail);
    HttpResponse::InternalServerError().json(body("Internal server error"))
}

pub fn validation(fields: Vec<(&str, &str)>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiErrorBody {
        error: "Validation failed".to_string(),
        details: Some(
            fields
                .into_iter()
                .map(|(field, message)| FieldError {
                    field: field.to_string(),
                    message: message.to_string(),
                })
                .collect(),
        ),
    })
}
