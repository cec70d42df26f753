use yew::prelude::*;

use crate::app::Page;

#[derive(Properties, PartialEq, Clone)]
pub struct EditorProps {
    /// Canonical template identifier; decides the palette wording and the
    /// section layout.
    pub template: String,
    /// Record to load on mount. `None` starts a fresh, unsaved resume.
    #[prop_or_default]
    pub resume_id: Option<String>,
    pub on_navigate: Callback<Page>,
}
