//! SQLite access for the résumé store.
//!
//! Every handler opens its own short-lived connection; the schema is created
//! on startup and `CREATE TABLE IF NOT EXISTS` keeps reopening cheap. Resume
//! content is stored as one JSON document per row, which is what lets old
//! records keep their legacy field shapes until the next save rewrites them.

use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::Connection;

pub const DB_PATH: &str = "resumes.sqlite";

/// Email/password of the account seeded on first run.
pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_PASSWORD: &str = "demo";

pub fn open() -> Result<Connection, String> {
    Connection::open(DB_PATH).map_err(|e| e.to_string())
}

pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Creates the schema and the demo account if they do not exist yet.
pub fn init_schema(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS users (
             id TEXT PRIMARY KEY,
             email TEXT NOT NULL UNIQUE,
             password_md5 TEXT NOT NULL
         );
         CREATE TABLE IF NOT EXISTS sessions (
             token TEXT PRIMARY KEY,
             user_id TEXT NOT NULL,
             created_at INTEGER NOT NULL
         );
         CREATE TABLE IF NOT EXISTS resumes (
             id TEXT PRIMARY KEY,
             user_id TEXT NOT NULL,
             title TEXT NOT NULL,
             template TEXT NOT NULL,
             theme TEXT NOT NULL,
             data TEXT NOT NULL,
             last_modified INTEGER NOT NULL
         );",
    )
    .map_err(|e| e.to_string())?;

    conn.execute(
        "INSERT OR IGNORE INTO users (id, email, password_md5) VALUES (?1, ?2, ?3)",
        rusqlite::params![
            uuid::Uuid::new_v4().to_string(),
            DEMO_EMAIL,
            format!("{:x}", md5::compute(DEMO_PASSWORD)),
        ],
    )
    .map_err(|e| e.to_string())?;
    Ok(())
}
