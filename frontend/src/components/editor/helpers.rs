//! Pure decision logic and small browser utilities for the editor.
//!
//! The save-path decisions live here as plain functions so the first-save,
//! silent-update, and shared-fork contracts can be tested without a browser.

use wasm_bindgen::JsCast;

pub const DEFAULT_TITLE: &str = "My Resume";

/// What a save click should do, decided before any network traffic.
#[derive(Debug, Clone, PartialEq)]
pub enum SavePlan {
    /// Owned record with an id: update in place, no prompt.
    SilentUpdate { id: String, title: String },
    /// First save or a shared resume: ask for a name, then always create.
    PromptName { prefill: String },
}

pub fn plan_save(owned: bool, resume_id: Option<&str>, title: &str, person_name: &str) -> SavePlan {
    match resume_id {
        Some(id) if owned => SavePlan::SilentUpdate {
            id: id.to_string(),
            title: existing_or_default(title),
        },
        // A shared resume is never mutated; the confirmed save forks a copy.
        Some(_) => SavePlan::PromptName {
            prefill: format!("Copy of {}", existing_or_default(title)),
        },
        None => SavePlan::PromptName {
            prefill: first_save_title(person_name),
        },
    }
}

/// Title used by the pre-export best-effort save, which never prompts.
pub fn best_effort_title(owned: bool, resume_id: Option<&str>, title: &str, person_name: &str) -> String {
    match plan_save(owned, resume_id, title, person_name) {
        SavePlan::SilentUpdate { title, .. } => title,
        SavePlan::PromptName { prefill } => prefill,
    }
}

pub fn existing_or_default(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        trimmed.to_string()
    }
}

fn first_save_title(person_name: &str) -> String {
    let trimmed = person_name.trim();
    if trimmed.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        format!("{}'s Resume", trimmed)
    }
}

/// Record a background save may write to. Only an owned, already-persisted
/// record qualifies: first saves go through the name prompt and shared
/// resumes are never mutated in the background.
pub fn auto_save_target(owned: bool, resume_id: Option<&str>) -> Option<String> {
    resume_id.filter(|_| owned).map(str::to_string)
}

pub fn validated_title(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

const NOTICE_KEY: &str = "resume_builder_download_notice";

/// Session-scoped once-flag for the unauthenticated "not saved" download
/// notice. Returns `true` on the first call of the session only.
pub fn note_unsaved_download() -> bool {
    let storage = match web_sys::window().and_then(|w| w.session_storage().ok().flatten()) {
        Some(storage) => storage,
        None => return false,
    };
    if storage.get_item(NOTICE_KEY).ok().flatten().is_some() {
        return false;
    }
    storage.set_item(NOTICE_KEY, "1").ok();
    true
}

/// Export capability: hide editing chrome, hand the document to the
/// platform print pipeline, restore. The mechanism beyond that is the
/// browser's concern.
pub fn export_document() {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let body = window
        .document()
        .and_then(|d| d.body())
        .map(|b| b.unchecked_into::<web_sys::HtmlElement>());
    if let Some(body) = &body {
        body.class_list().add_1("printing").ok();
    }
    window.print().ok();
    if let Some(body) = &body {
        body.class_list().remove_1("printing").ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owned_record_updates_silently_with_existing_title() {
        assert_eq!(
            plan_save(true, Some("r1"), "Staff Resume", "Jane Doe"),
            SavePlan::SilentUpdate {
                id: "r1".into(),
                title: "Staff Resume".into()
            }
        );
    }

    #[test]
    fn owned_record_without_title_falls_back_to_default() {
        assert_eq!(
            plan_save(true, Some("r1"), "  ", "Jane Doe"),
            SavePlan::SilentUpdate {
                id: "r1".into(),
                title: DEFAULT_TITLE.into()
            }
        );
    }

    #[test]
    fn shared_record_prompts_with_copy_prefill() {
        // Ownership says no: the save must fork, never update.
        assert_eq!(
            plan_save(false, Some("r1"), "Team Lead CV", "Jane Doe"),
            SavePlan::PromptName {
                prefill: "Copy of Team Lead CV".into()
            }
        );
    }

    #[test]
    fn first_save_prompts_with_person_name() {
        assert_eq!(
            plan_save(true, None, "", "Jane Doe"),
            SavePlan::PromptName {
                prefill: "Jane Doe's Resume".into()
            }
        );
        assert_eq!(
            plan_save(false, None, "", "  "),
            SavePlan::PromptName {
                prefill: DEFAULT_TITLE.into()
            }
        );
    }

    #[test]
    fn best_effort_save_never_needs_a_prompt() {
        assert_eq!(best_effort_title(true, Some("r1"), "CV", ""), "CV");
        assert_eq!(best_effort_title(false, Some("r1"), "CV", ""), "Copy of CV");
        assert_eq!(best_effort_title(true, None, "", "Ada"), "Ada's Resume");
    }

    #[test]
    fn background_saves_touch_only_owned_persisted_records() {
        assert_eq!(auto_save_target(true, Some("r1")), Some("r1".to_string()));
        assert_eq!(auto_save_target(false, Some("r1")), None);
        assert_eq!(auto_save_target(true, None), None);
    }

    #[test]
    fn titles_must_be_non_blank_after_trimming() {
        assert_eq!(validated_title(" \t"), None);
        assert_eq!(validated_title(" Jane's Resume "), Some("Jane's Resume".into()));
    }
}
