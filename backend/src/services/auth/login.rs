//! Handler for `POST /api/auth/login`.

use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpResponse, web};
use rusqlite::{Connection, OptionalExtension, params};

use common::requests::{LoginRequest, LoginResponse};

use crate::db;
use crate::responses;

/// Verifies the credentials and opens a session. A wrong email and a wrong
/// password get the same answer.
pub async fn process(request: web::Json<LoginRequest>) -> HttpResponse {
    let conn = match db::open() {
        Ok(conn) => conn,
        Err(e) => return responses::service_unavailable(&e),
    };
    match login(&conn, &request.email, &request.password) {
        Ok(Some(response)) => {
            let cookie = Cookie::build("session_token", response.token.clone())
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .finish();
            HttpResponse::Ok().cookie(cookie).json(response)
        }
        Ok(None) => responses::unauthorized("Invalid email or password"),
        Err(e) => responses::server_error(&e),
    }
}

fn login(conn: &Connection, email: &str, password: &str) -> Result<Option<LoginResponse>, String> {
    let user_id: Option<String> = conn
        .query_row(
            "SELECT id FROM users WHERE email = ?1 AND password_md5 = ?2",
            params![email, format!("{:x}", md5::compute(password))],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| e.to_string())?;
    let user_id = match user_id {
        Some(id) => id,
        None => return Ok(None),
    };
    let token = uuid::Uuid::new_v4().to_string();
    conn.execute(
        "INSERT INTO sessions (token, user_id, created_at) VALUES (?1, ?2, ?3)",
        params![&token, &user_id, db::now_millis()],
    )
    .map_err(|e| e.to_string())?;
    Ok(Some(LoginResponse { token, user_id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DEMO_EMAIL, DEMO_PASSWORD, init_schema};

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn demo_account_can_log_in() {
        let conn = test_conn();
        let response = login(&conn, DEMO_EMAIL, DEMO_PASSWORD).unwrap().unwrap();
        assert!(!response.token.is_empty());

        let stored: String = conn
            .query_row(
                "SELECT user_id FROM sessions WHERE token = ?1",
                params![&response.token],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(stored, response.user_id);
    }

    #[test]
    fn wrong_password_is_rejected() {
        let conn = test_conn();
        assert!(login(&conn, DEMO_EMAIL, "nope").unwrap().is_none());
        assert!(login(&conn, "ghost@example.com", DEMO_PASSWORD).unwrap().is_none());
    }
}
