//! Transient hand-off of a just-saved record across a redirect.
//!
//! When a save assigns a new id, the editor navigates to that record's own
//! URL. The freshly returned record is stashed in session storage so the
//! remounted editor can hydrate without re-fetching. The payload is consumed
//! by a single take-and-clear operation; it never survives a second read, so
//! stale hand-offs cannot shadow the backend.

use common::model::resume::ResumeRecord;

const HANDOFF_KEY: &str = "resume_builder_handoff";

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

pub fn stash(record: &ResumeRecord) {
    if let (Some(storage), Ok(json)) = (session_storage(), serde_json::to_string(record)) {
        storage.set_item(HANDOFF_KEY, &json).ok();
    }
}

/// Reads and clears the payload in one step. Unparseable leftovers are
/// discarded.
pub fn take() -> Option<ResumeRecord> {
    let storage = session_storage()?;
    let json = storage.get_item(HANDOFF_KEY).ok().flatten()?;
    storage.remove_item(HANDOFF_KEY).ok();
    serde_json::from_str(&json).ok()
}
