//! Update logic for the dashboard list controller.
//!
//! Deletes are never optimistic: the record leaves the local list only in
//! `DeleteFinished(Ok)`. Duplicates prepend the server-returned record, and
//! renames persist through a full update that reuses the record's existing
//! template, theme, and content.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::theme;

use super::messages::Msg;
use super::state::{Dashboard, RenameDraft, validated_title};
use crate::api;
use crate::app::Page;
use crate::toast::show_toast;

pub fn update(state: &mut Dashboard, ctx: &Context<Dashboard>, msg: Msg) -> bool {
    match msg {
        Msg::Loaded(result) => {
            state.loading = false;
            match result {
                Ok(resumes) => state.resumes = resumes,
                Err(err) => state.error = Some(err.to_string()),
            }
            true
        }
        Msg::Open(template, id) => {
            ctx.props().on_navigate.emit(Page::Editor {
                template: theme::canonical_template(&template).to_string(),
                resume_id: Some(id),
            });
            false
        }
        Msg::RequestDelete(id) => {
            state.confirm_delete = Some(id);
            true
        }
        Msg::CancelDelete => {
            state.confirm_delete = None;
            true
        }
        Msg::ConfirmDelete => {
            let id = match state.confirm_delete.clone() {
                Some(id) => id,
                None => return false,
            };
            state.busy = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::remove(&id).await;
                link.send_message(Msg::DeleteFinished(id, result));
            });
            true
        }
        Msg::DeleteFinished(id, result) => {
            if state.finish_delete(&id, result) {
                show_toast("Resume deleted");
            }
            true
        }
        Msg::Duplicate(id) => {
            if state.busy {
                return false;
            }
            state.busy = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::duplicate(&id).await.map(Box::new);
                link.send_message(Msg::DuplicateFinished(result));
            });
            true
        }
        Msg::DuplicateFinished(result) => {
            state.busy = false;
            match result {
                Ok(record) => {
                    state.prepend_resume(*record);
                    show_toast("Resume duplicated");
                }
                Err(err) => state.error = Some(err.to_string()),
            }
            true
        }
        Msg::StartRename(id) => {
            let current = state
                .resumes
                .iter()
                .find(|r| r.id == id)
                .map(|r| r.title.clone())
                .unwrap_or_default();
            state.rename = Some(RenameDraft { id, draft: current });
            true
        }
        Msg::RenameInput(value) => {
            if let Some(rename) = &mut state.rename {
                rename.draft = value;
            }
            false
        }
        Msg::CancelRename => {
            state.rename = None;
            true
        }
        Msg::CommitRename => {
            let rename = match &state.rename {
                Some(rename) => rename,
                None => return false,
            };
            let title = match validated_title(&rename.draft) {
                Some(title) => title,
                None => {
                    show_toast("Please enter a title");
                    return false;
                }
            };
            let record = match state.resumes.iter().find(|r| r.id == rename.id) {
                Some(record) => record.clone(),
                None => return false,
            };
            state.busy = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                // Only the title changes; content, template, and theme are
                // persisted exactly as stored.
                let result = api::update(
                    &record.id,
                    &record.editing_data(),
                    &title,
                    &record.template,
                    &record.theme,
                )
                .await
                .map(Box::new);
                link.send_message(Msg::RenameFinished(result));
            });
            true
        }
        Msg::RenameFinished(result) => {
            state.busy = false;
            match result {
                Ok(record) => {
                    state.replace_resume(*record);
                    state.rename = None;
                    show_toast("Resume renamed");
                }
                Err(err) => state.error = Some(err.to_string()),
            }
            true
        }
        Msg::DismissError => {
            state.error = None;
            true
        }
    }
}
