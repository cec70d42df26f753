//! Row mapping and CRUD queries for the `resumes` table.
//!
//! Template and theme are canonicalized on every write, so whatever alias an
//! editor was using, the stored record always carries backend names. Reads
//! hand the stored JSON document back as the permissive raw shape; the
//! frontend normalizes it.

use rusqlite::{Connection, OptionalExtension, Row, params};

use common::model::resume::{ResumeData, ResumeRecord};
use common::model::theme;
use common::normalize::RawResumeData;

use crate::db::now_millis;

fn row_to_record(row: &Row) -> rusqlite::Result<ResumeRecord> {
    let data_json: String = row.get(5)?;
    Ok(ResumeRecord {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        template: row.get(3)?,
        theme: row.get(4)?,
        data: serde_json::from_str::<RawResumeData>(&data_json).unwrap_or_default(),
        last_modified: row.get(6)?,
    })
}

const RECORD_COLUMNS: &str = "id, user_id, title, template, theme, data, last_modified";

/// All résumés owned by a user, most recently modified first.
pub fn list_resumes(conn: &Connection, user_id: &str) -> Result<Vec<ResumeRecord>, String> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {} FROM resumes WHERE user_id = ?1 ORDER BY last_modified DESC",
            RECORD_COLUMNS
        ))
        .map_err(|e| e.to_string())?;
    let rows = stmt
        .query_map(params![user_id], row_to_record)
        .map_err(|e| e.to_string())?;
    Ok(rows.filter_map(Result::ok).collect())
}

pub fn fetch_resume(conn: &Connection, id: &str) -> Result<Option<ResumeRecord>, String> {
    conn.prepare(&format!(
        "SELECT {} FROM resumes WHERE id = ?1",
        RECORD_COLUMNS
    ))
    .map_err(|e| e.to_string())?
    .query_row(params![id], row_to_record)
    .optional()
    .map_err(|e| e.to_string())
}

pub fn title_exists(conn: &Connection, user_id: &str, title: &str) -> Result<bool, String> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM resumes WHERE user_id = ?1 AND title = ?2",
            params![user_id, title],
            |row| row.get(0),
        )
        .map_err(|e| e.to_string())?;
    Ok(count > 0)
}

/// Creates a record with a fresh id. Template and theme arrive as whatever
/// the caller sent and leave canonical.
pub fn insert_resume(
    conn: &Connection,
    user_id: &str,
    data: &ResumeData,
    title: &str,
    template: &str,
    theme_value: &str,
) -> Result<ResumeRecord, String> {
    let id = uuid::Uuid::new_v4().to_string();
    let template = theme::canonical_template(template);
    let theme_value = theme::canonical_theme(template, theme_value);
    let data_json = serde_json::to_string(data).map_err(|e| e.to_string())?;
    let now = now_millis();
    conn.execute(
        "INSERT INTO resumes (id, user_id, title, template, theme, data, last_modified)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![&id, user_id, title, template, theme_value, &data_json, now],
    )
    .map_err(|e| e.to_string())?;
    fetch_resume(conn, &id)?.ok_or_else(|| "inserted resume vanished".to_string())
}

/// Updates an owned record in place. Returns `None` when the record does not
/// exist or belongs to someone else.
pub fn update_resume(
    conn: &Connection,
    id: &str,
    user_id: &str,
    data: &ResumeData,
    title: &str,
    template: &str,
    theme_value: &str,
) -> Result<Option<ResumeRecord>, String> {
    let template = theme::canonical_template(template);
    let theme_value = theme::canonical_theme(template, theme_value);
    let data_json = serde_json::to_string(data).map_err(|e| e.to_string())?;
    let changed = conn
        .execute(
            "UPDATE resumes SET title = ?1, template = ?2, theme = ?3, data = ?4, last_modified = ?5
             WHERE id = ?6 AND user_id = ?7",
            params![title, template, theme_value, &data_json, now_millis(), id, user_id],
        )
        .map_err(|e| e.to_string())?;
    if changed == 0 {
        return Ok(None);
    }
    fetch_resume(conn, id)
}

pub fn delete_resume(conn: &Connection, id: &str, user_id: &str) -> Result<bool, String> {
    let changed = conn
        .execute(
            "DELETE FROM resumes WHERE id = ?1 AND user_id = ?2",
            params![id, user_id],
        )
        .map_err(|e| e.to_string())?;
    Ok(changed > 0)
}

/// Clones an existing record (any owner — sharing is by link) into a new
/// record owned by `new_owner`, with a derived default title.
pub fn duplicate_resume(
    conn: &Connection,
    id: &str,
    new_owner: &str,
) -> Result<Option<ResumeRecord>, String> {
    let source = match fetch_resume(conn, id)? {
        Some(source) => source,
        None => return Ok(None),
    };
    let new_id = uuid::Uuid::new_v4().to_string();
    let title = format!("Copy of {}", source.title);
    let data_json = serde_json::to_string(&source.data).map_err(|e| e.to_string())?;
    conn.execute(
        "INSERT INTO resumes (id, user_id, title, template, theme, data, last_modified)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            &new_id,
            new_owner,
            &title,
            &source.template,
            &source.theme,
            &data_json,
            now_millis()
        ],
    )
    .map_err(|e| e.to_string())?;
    fetch_resume(conn, &new_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_schema;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn
    }

    fn sample_data(name: &str) -> ResumeData {
        ResumeData {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn insert_assigns_id_and_canonicalizes_theme() {
        let conn = test_conn();
        let record =
            insert_resume(&conn, "u1", &sample_data("Ada"), "My CV", "aurora", "emerald").unwrap();
        assert!(!record.id.is_empty());
        assert_eq!(record.theme, "green");
        assert_eq!(record.template, "aurora");
        assert!(record.last_modified > 0);
    }

    #[test]
    fn list_is_scoped_to_the_owner() {
        let conn = test_conn();
        insert_resume(&conn, "u1", &sample_data("A"), "One", "classic", "blue").unwrap();
        insert_resume(&conn, "u2", &sample_data("B"), "Two", "classic", "red").unwrap();
        let mine = list_resumes(&conn, "u1").unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].title, "One");
    }

    #[test]
    fn update_refuses_foreign_records() {
        let conn = test_conn();
        let record =
            insert_resume(&conn, "u1", &sample_data("A"), "Mine", "classic", "blue").unwrap();
        let stolen = update_resume(
            &conn,
            &record.id,
            "u2",
            &sample_data("B"),
            "Theirs",
            "classic",
            "red",
        )
        .unwrap();
        assert!(stolen.is_none());

        let updated = update_resume(
            &conn,
            &record.id,
            "u1",
            &sample_data("A"),
            "Renamed",
            "classic",
            "red",
        )
        .unwrap()
        .unwrap();
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.theme, "red");
    }

    #[test]
    fn delete_reports_whether_anything_went_away() {
        let conn = test_conn();
        let record =
            insert_resume(&conn, "u1", &sample_data("A"), "Mine", "classic", "blue").unwrap();
        assert!(!delete_resume(&conn, &record.id, "u2").unwrap());
        assert!(delete_resume(&conn, &record.id, "u1").unwrap());
        assert!(fetch_resume(&conn, &record.id).unwrap().is_none());
    }

    #[test]
    fn duplicate_clones_across_owners_with_derived_title() {
        let conn = test_conn();
        let source =
            insert_resume(&conn, "u1", &sample_data("A"), "Team CV", "aurora", "teal").unwrap();
        let copy = duplicate_resume(&conn, &source.id, "u2").unwrap().unwrap();
        assert_ne!(copy.id, source.id);
        assert_eq!(copy.user_id, "u2");
        assert_eq!(copy.title, "Copy of Team CV");
        assert_eq!(copy.theme, "teal");
        assert_eq!(copy.data, source.data);
    }

    #[test]
    fn title_lookup_is_per_user() {
        let conn = test_conn();
        insert_resume(&conn, "u1", &sample_data("A"), "CV", "classic", "blue").unwrap();
        assert!(title_exists(&conn, "u1", "CV").unwrap());
        assert!(!title_exists(&conn, "u2", "CV").unwrap());
        assert!(!title_exists(&conn, "u1", "Other").unwrap());
    }
}
