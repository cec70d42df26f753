//! Editor state: the canonical editing data plus the flags that drive the
//! load/save/prompt flow.

use common::model::resume::{ResumeData, ResumeRecord};
use common::model::theme;
use common::normalize::{RawResumeData, normalize_resume};

/// User action deferred behind a login prompt, replayed after sign-in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PendingIntent {
    Save,
    Download,
}

pub struct LoginDraft {
    pub email: String,
    pub password: String,
    pub busy: bool,
    pub error: Option<String>,
}

impl LoginDraft {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            busy: false,
            error: None,
        }
    }
}

pub struct Editor {
    pub data: ResumeData,
    pub resume_id: Option<String>,
    pub title: String,
    /// Theme in the template's own wording; canonicalized on every save.
    pub theme: String,
    /// False for shared resumes and while ownership is unresolved.
    pub owned: bool,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
    /// Draft title while the name prompt is open.
    pub name_prompt: Option<String>,
    pub login: Option<LoginDraft>,
    pub pending: Option<PendingIntent>,
    /// Debounce generation for background saves; a scheduled save only fires
    /// if no later edit bumped the epoch.
    pub autosave_epoch: u32,
    pub loaded: bool,
}

impl Editor {
    pub fn new(template: &str, has_resume_id: bool) -> Self {
        Self {
            // Normalizing the empty raw shape yields the complete canonical
            // skeleton, placeholder skill category included.
            data: normalize_resume(&RawResumeData::default()),
            resume_id: None,
            title: String::new(),
            theme: theme::editor_theme(template, theme::DEFAULT_THEME).to_string(),
            owned: !has_resume_id,
            loading: has_resume_id,
            saving: false,
            error: None,
            name_prompt: None,
            login: None,
            pending: None,
            autosave_epoch: 0,
            loaded: false,
        }
    }

    /// Adopts a save response: the returned record's id and title become the
    /// active ones and the document counts as owned from here on. Returns
    /// whether the save created a new record (the id changed).
    pub fn adopt_saved(&mut self, record: &ResumeRecord) -> bool {
        let created = self.resume_id.as_deref() != Some(record.id.as_str());
        self.resume_id = Some(record.id.clone());
        self.title = record.title.clone();
        self.owned = true;
        created
    }

    /// Hydrates from a backend record: one normalization path for every way
    /// a record reaches the editor, and the theme translated to this
    /// template's wording.
    pub fn apply_record(&mut self, record: &ResumeRecord, template: &str) {
        self.data = record.editing_data();
        self.title = record.title.clone();
        self.theme = theme::editor_theme(template, &record.theme).to_string();
        self.resume_id = Some(record.id.clone());
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fresh_editor_is_iterable_everywhere() {
        let state = Editor::new("classic", false);
        assert!(state.owned);
        assert!(!state.loading);
        assert!(state.data.experience.is_empty());
        assert_eq!(state.data.skills.len(), 1);
        assert_eq!(state.theme, "blue");
    }

    #[test]
    fn aurora_editor_speaks_its_own_palette() {
        let state = Editor::new("aurora", false);
        assert_eq!(state.theme, "navy");
    }

    #[test]
    fn first_save_adopts_the_returned_id() {
        let record: ResumeRecord = serde_json::from_value(json!({
            "id": "fresh-id",
            "userId": "u1",
            "title": "Jane's Resume",
            "template": "classic",
            "theme": "blue",
            "lastModified": 1
        }))
        .unwrap();
        let mut state = Editor::new("classic", false);
        assert!(state.adopt_saved(&record));
        assert_eq!(state.resume_id.as_deref(), Some("fresh-id"));
        assert_eq!(state.title, "Jane's Resume");
        assert!(state.owned);
        // Saving the same record again is an update, not a second create.
        assert!(!state.adopt_saved(&record));
    }

    #[test]
    fn shared_save_adopts_the_forked_copy() {
        let forked: ResumeRecord = serde_json::from_value(json!({
            "id": "copy-id",
            "userId": "u2",
            "title": "Copy of Team CV",
            "template": "classic",
            "theme": "blue",
            "lastModified": 2
        }))
        .unwrap();
        let mut state = Editor::new("classic", true);
        state.resume_id = Some("original-id".into());
        state.owned = false;
        assert!(state.adopt_saved(&forked));
        assert_eq!(state.resume_id.as_deref(), Some("copy-id"));
        assert!(state.owned);
    }

    #[test]
    fn apply_record_normalizes_and_translates_theme() {
        let record: ResumeRecord = serde_json::from_value(json!({
            "id": "r9",
            "userId": "u1",
            "title": "CV",
            "template": "aurora",
            "theme": "green",
            "lastModified": 123,
            "languages": ["English (Native)"]
        }))
        .unwrap();
        let mut state = Editor::new("aurora", true);
        state.apply_record(&record, "aurora");
        assert_eq!(state.resume_id.as_deref(), Some("r9"));
        assert_eq!(state.theme, "emerald");
        assert!(!state.loading);
        assert_eq!(state.data.languages[0].name, "English");
        assert_eq!(state.data.languages[0].dots, 5);
    }
}
