//! Dashboard state and the local-list reducers.
//!
//! The reducers are pure so the delete/duplicate/rename contracts can be
//! tested without a browser: a record leaves the list only after the backend
//! confirmed the delete, a duplicate is prepended without re-fetching, and a
//! rename touches nothing but the title.

use common::model::resume::ResumeRecord;

use crate::api::ApiError;

/// In-flight rename of a single row.
pub struct RenameDraft {
    pub id: String,
    pub draft: String,
}

pub struct Dashboard {
    pub resumes: Vec<ResumeRecord>,
    pub loading: bool,
    pub error: Option<String>,
    /// Id awaiting delete confirmation, if the prompt is open.
    pub confirm_delete: Option<String>,
    pub rename: Option<RenameDraft>,
    /// A mutation round trip is in flight; buttons are disabled meanwhile.
    pub busy: bool,
    pub loaded: bool,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            resumes: Vec::new(),
            loading: true,
            error: None,
            confirm_delete: None,
            rename: None,
            busy: false,
            loaded: false,
        }
    }

    /// Removes a confirmed-deleted record. Called only after the backend
    /// acknowledged the delete.
    pub fn remove_resume(&mut self, id: &str) {
        self.resumes.retain(|r| r.id != id);
    }

    /// Settles a delete round trip. The prompt closes either way, but the
    /// record leaves the list only on a confirmed success; a failure keeps
    /// the list intact and surfaces the error. Returns whether the record
    /// was removed.
    pub fn finish_delete(&mut self, id: &str, result: Result<(), ApiError>) -> bool {
        self.busy = false;
        self.confirm_delete = None;
        match result {
            Ok(()) => {
                self.remove_resume(id);
                true
            }
            Err(err) => {
                self.error = Some(err.to_string());
                false
            }
        }
    }

    /// Puts a server-returned duplicate at the top of the list.
    pub fn prepend_resume(&mut self, record: ResumeRecord) {
        self.resumes.insert(0, record);
    }

    /// Swaps in the server-returned record after a rename.
    pub fn replace_resume(&mut self, record: ResumeRecord) {
        if let Some(existing) = self.resumes.iter_mut().find(|r| r.id == record.id) {
            *existing = record;
        }
    }
}

/// Validates a rename input: trimmed, non-empty.
pub fn validated_title(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, title: &str) -> ResumeRecord {
        ResumeRecord {
            id: id.to_string(),
            user_id: "u1".to_string(),
            title: title.to_string(),
            template: "classic".to_string(),
            theme: "blue".to_string(),
            last_modified: 0,
            data: Default::default(),
        }
    }

    #[test]
    fn delete_removes_only_the_confirmed_record() {
        let mut state = Dashboard::new();
        state.resumes = vec![record("a", "A"), record("b", "B")];
        state.remove_resume("a");
        assert_eq!(state.resumes.len(), 1);
        assert_eq!(state.resumes[0].id, "b");
    }

    #[test]
    fn confirmed_delete_settles_and_removes() {
        let mut state = Dashboard::new();
        state.resumes = vec![record("a", "A"), record("b", "B")];
        state.busy = true;
        state.confirm_delete = Some("a".into());
        assert!(state.finish_delete("a", Ok(())));
        assert_eq!(state.resumes.len(), 1);
        assert_eq!(state.resumes[0].id, "b");
        assert!(!state.busy);
        assert_eq!(state.confirm_delete, None);
    }

    #[test]
    fn failed_delete_keeps_the_list_and_reports() {
        let mut state = Dashboard::new();
        state.resumes = vec![record("a", "A"), record("b", "B")];
        state.busy = true;
        state.confirm_delete = Some("a".into());
        assert!(!state.finish_delete("a", Err(ApiError::Network("offline".into()))));
        // Nothing left the list; the prompt closed; the failure is visible.
        assert_eq!(state.resumes.len(), 2);
        assert_eq!(state.resumes[0].id, "a");
        assert_eq!(state.confirm_delete, None);
        assert!(state.error.is_some());
    }

    #[test]
    fn duplicate_prepends_without_touching_the_rest() {
        let mut state = Dashboard::new();
        state.resumes = vec![record("a", "A")];
        state.prepend_resume(record("c", "Copy of A"));
        assert_eq!(state.resumes[0].id, "c");
        assert_eq!(state.resumes[1].id, "a");
    }

    #[test]
    fn rename_replaces_title_in_place() {
        let mut state = Dashboard::new();
        state.resumes = vec![record("a", "A"), record("b", "B")];
        state.replace_resume(record("b", "Better title"));
        assert_eq!(state.resumes[1].title, "Better title");
        assert_eq!(state.resumes[0].title, "A");
    }

    #[test]
    fn blank_titles_are_rejected() {
        assert_eq!(validated_title("   "), None);
        assert_eq!(validated_title(""), None);
        assert_eq!(validated_title("  Staff Engineer  "), Some("Staff Engineer".into()));
    }
}
