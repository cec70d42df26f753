//! Update logic for the editor state machine.
//!
//! Load, edit, save, duplicate-on-shared, login replay, and export all run
//! through here. The rules that matter:
//! - a shared resume is never updated; a confirmed save creates a new record
//! - a save failure leaves the editing state untouched
//! - auth-expiry-flavored failures re-open the login prompt instead of a
//!   generic banner
//! - the pre-export save is best effort; the export proceeds either way

use gloo_console::warn;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::language::dots_for_level;
use common::model::sections::{AchievementEntry, EducationEntry, ExperienceEntry, SkillCategory};
use common::model::theme;

use super::helpers::{
    SavePlan, auto_save_target, best_effort_title, existing_or_default, export_document,
    note_unsaved_download, plan_save, validated_title,
};
use super::messages::{AchField, EduField, ExpField, Field, Msg};
use super::state::{Editor, LoginDraft, PendingIntent};
use crate::api;
use crate::app::Page;
use crate::auth;
use crate::handoff;
use crate::toast::show_toast;

const AUTO_SAVE_DELAY_MS: u32 = 2_000;

pub fn update(state: &mut Editor, ctx: &Context<Editor>, msg: Msg) -> bool {
    let content_edit = matches!(
        &msg,
        Msg::Edit(..)
            | Msg::EditExperience(..)
            | Msg::AddExperience
            | Msg::RemoveExperience(..)
            | Msg::EditEducation(..)
            | Msg::AddEducation
            | Msg::RemoveEducation(..)
            | Msg::EditAchievement(..)
            | Msg::AddAchievement
            | Msg::RemoveAchievement(..)
            | Msg::EditLanguageName(..)
            | Msg::EditLanguageLevel(..)
            | Msg::SetLanguageDots(..)
            | Msg::AddLanguage
            | Msg::RemoveLanguage(..)
            | Msg::EditSkillCategory(..)
            | Msg::EditSkillItems(..)
            | Msg::AddSkillCategory
            | Msg::RemoveSkillCategory(..)
            | Msg::SetTheme(..)
    );
    let render = apply(state, ctx, msg);
    if content_edit {
        schedule_auto_save(state, ctx);
    }
    render
}

fn apply(state: &mut Editor, ctx: &Context<Editor>, msg: Msg) -> bool {
    match msg {
        Msg::Hydrate(record) => {
            let template = ctx.props().template.clone();
            state.apply_record(&record, &template);
            // The hand-off only ever carries a record this user just saved.
            state.owned = true;
            true
        }
        Msg::Loaded(result) => {
            let template = ctx.props().template.clone();
            match result {
                Ok(record) => {
                    state.apply_record(&record, &template);
                    if auth::is_authenticated() {
                        let id = record.id.clone();
                        let link = ctx.link().clone();
                        spawn_local(async move {
                            link.send_message(Msg::OwnershipResolved(
                                api::check_ownership(&id).await,
                            ));
                        });
                    } else {
                        state.owned = false;
                    }
                }
                Err(err) => {
                    state.loading = false;
                    state.error = Some(err.to_string());
                }
            }
            true
        }
        Msg::OwnershipResolved(result) => {
            state.owned = match result {
                Ok(owned) => owned,
                Err(err) => {
                    // Never assume ownership when the check itself failed.
                    warn!("ownership check failed:", err.to_string());
                    false
                }
            };
            if let Some(intent) = state.pending.take() {
                ctx.link().send_message(match intent {
                    PendingIntent::Save => Msg::Save,
                    PendingIntent::Download => Msg::Download,
                });
            }
            true
        }
        Msg::Edit(field, value) => {
            let target = match field {
                Field::Name => &mut state.data.name,
                Field::Role => &mut state.data.role,
                Field::Phone => &mut state.data.phone,
                Field::Email => &mut state.data.email,
                Field::Linkedin => &mut state.data.linkedin,
                Field::Location => &mut state.data.location,
                Field::Summary => &mut state.data.summary,
            };
            *target = value;
            true
        }
        Msg::EditExperience(index, field, value) => {
            if let Some(entry) = state.data.experience.get_mut(index) {
                match field {
                    ExpField::Title => entry.title = value,
                    ExpField::Company => entry.company_name = value,
                    ExpField::Date => entry.date = value,
                    ExpField::Location => entry.company_location = value,
                    ExpField::Accomplishment => entry.accomplishment = value,
                }
            }
            true
        }
        Msg::AddExperience => {
            state.data.experience.push(ExperienceEntry::default());
            true
        }
        Msg::RemoveExperience(index) => {
            if index < state.data.experience.len() {
                state.data.experience.remove(index);
            }
            true
        }
        Msg::EditEducation(index, field, value) => {
            if let Some(entry) = state.data.education.get_mut(index) {
                match field {
                    EduField::Degree => entry.degree = value,
                    EduField::Institution => entry.institution = value,
                    EduField::Duration => entry.duration = value,
                    EduField::Location => entry.location = value,
                }
            }
            true
        }
        Msg::AddEducation => {
            state.data.education.push(EducationEntry::default());
            true
        }
        Msg::RemoveEducation(index) => {
            if index < state.data.education.len() {
                state.data.education.remove(index);
            }
            true
        }
        Msg::EditAchievement(index, field, value) => {
            if let Some(entry) = state.data.achievements.get_mut(index) {
                match field {
                    AchField::Heading => entry.key_achievements = value,
                    AchField::Describe => entry.describe = value,
                }
            }
            true
        }
        Msg::AddAchievement => {
            state.data.achievements.push(AchievementEntry::default());
            true
        }
        Msg::RemoveAchievement(index) => {
            if index < state.data.achievements.len() {
                state.data.achievements.remove(index);
            }
            true
        }
        Msg::EditLanguageName(index, value) => {
            if let Some(entry) = state.data.languages.get_mut(index) {
                entry.name = value;
            }
            true
        }
        Msg::EditLanguageLevel(index, value) => {
            if let Some(entry) = state.data.languages.get_mut(index) {
                // Keep the pair consistent in both directions.
                entry.dots = dots_for_level(&value);
                entry.level = value;
            }
            true
        }
        Msg::SetLanguageDots(index, dots) => {
            if let Some(entry) = state.data.languages.get_mut(index) {
                entry.set_dots(dots);
            }
            true
        }
        Msg::AddLanguage => {
            state.data.languages.push(Default::default());
            true
        }
        Msg::RemoveLanguage(index) => {
            if index < state.data.languages.len() {
                state.data.languages.remove(index);
            }
            true
        }
        Msg::EditSkillCategory(index, value) => {
            if let Some(category) = state.data.skills.get_mut(index) {
                category.category = value;
            }
            true
        }
        Msg::EditSkillItems(index, value) => {
            if let Some(category) = state.data.skills.get_mut(index) {
                category.items = value
                    .split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            true
        }
        Msg::AddSkillCategory => {
            state.data.skills.push(SkillCategory::default());
            true
        }
        Msg::RemoveSkillCategory(index) => {
            if index < state.data.skills.len() {
                state.data.skills.remove(index);
            }
            true
        }
        Msg::SetTheme(alias) => {
            state.theme = alias;
            true
        }
        Msg::Save => {
            if state.saving {
                return false;
            }
            if !auth::is_authenticated() {
                state.pending = Some(PendingIntent::Save);
                state.login = Some(LoginDraft::new());
                return true;
            }
            match plan_save(
                state.owned,
                state.resume_id.as_deref(),
                &state.title,
                &state.data.name,
            ) {
                SavePlan::SilentUpdate { id, title } => {
                    start_update(state, ctx, id, title);
                }
                SavePlan::PromptName { prefill } => {
                    state.name_prompt = Some(prefill);
                }
            }
            true
        }
        Msg::NameInput(value) => {
            if let Some(draft) = &mut state.name_prompt {
                *draft = value;
            }
            false
        }
        Msg::ConfirmName => {
            let draft = match &state.name_prompt {
                Some(draft) => draft.clone(),
                None => return false,
            };
            let title = match validated_title(&draft) {
                Some(title) => title,
                None => {
                    show_toast("Please give the resume a name");
                    return false;
                }
            };
            state.name_prompt = None;
            // A confirmed name always creates: first saves have no record
            // yet and shared resumes must fork instead of mutating.
            start_create(state, ctx, title);
            true
        }
        Msg::CancelName => {
            state.name_prompt = None;
            true
        }
        Msg::SaveFinished(result) => {
            state.saving = false;
            match result {
                Ok(record) => {
                    let created = state.adopt_saved(&record);
                    show_toast("Resume saved");
                    if state.pending.take() == Some(PendingIntent::Download) {
                        export_document();
                    }
                    if created {
                        // Move to the record's own URL; the remounted editor
                        // hydrates from the hand-off instead of re-fetching.
                        handoff::stash(&record);
                        ctx.props().on_navigate.emit(Page::Editor {
                            template: ctx.props().template.clone(),
                            resume_id: Some(record.id.clone()),
                        });
                    }
                }
                Err(err) if err.is_auth_expired() => {
                    state.pending = Some(PendingIntent::Save);
                    state.login = Some(LoginDraft::new());
                }
                Err(err) => state.error = Some(err.to_string()),
            }
            true
        }
        Msg::AutoSave(epoch) => {
            // Stale timers (a later edit bumped the epoch) and in-flight
            // explicit saves are both skipped; the next edit reschedules.
            if epoch != state.autosave_epoch || state.saving {
                return false;
            }
            let id = match auto_save_target(state.owned, state.resume_id.as_deref()) {
                Some(id) => id,
                None => return false,
            };
            let data = state.data.clone();
            let template = theme::canonical_template(&ctx.props().template).to_string();
            let canonical = theme::canonical_theme(&template, &state.theme).to_string();
            let title = existing_or_default(&state.title);
            let link = ctx.link().clone();
            spawn_local(async move {
                let result =
                    api::auto_save(&data, Some(&id), &title, &template, &canonical).await;
                link.send_message(Msg::AutoSaved(result.map(Box::new)));
            });
            false
        }
        Msg::AutoSaved(result) => {
            match result {
                Ok(record) => {
                    state.adopt_saved(&record);
                }
                Err(err) => {
                    // Background saves stay silent; the explicit save path
                    // reports failures.
                    warn!("auto-save failed:", err.to_string());
                }
            }
            false
        }
        Msg::Download => {
            if !auth::is_authenticated() {
                if note_unsaved_download() {
                    show_toast("Heads up: this resume isn't saved to an account");
                }
                export_document();
                return false;
            }
            // Best-effort save before export; never block the export on it.
            let data = state.data.clone();
            let template = theme::canonical_template(&ctx.props().template).to_string();
            let canonical = theme::canonical_theme(&template, &state.theme).to_string();
            let title = best_effort_title(
                state.owned,
                state.resume_id.as_deref(),
                &state.title,
                &state.data.name,
            );
            let target = state
                .resume_id
                .clone()
                .filter(|_| state.owned);
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = match &target {
                    Some(id) => api::update(id, &data, &title, &template, &canonical).await,
                    None => api::create(&data, &title, &template, &canonical).await,
                };
                link.send_message(Msg::BestEffortSaved(result.map(Box::new)));
            });
            true
        }
        Msg::BestEffortSaved(result) => {
            match result {
                Ok(record) => {
                    state.adopt_saved(&record);
                }
                Err(err) => {
                    // Logged only: an export must not fail because a
                    // convenience save did.
                    warn!("pre-export save failed:", err.to_string());
                }
            }
            export_document();
            true
        }
        Msg::LoginEmail(value) => {
            if let Some(login) = &mut state.login {
                login.email = value;
            }
            false
        }
        Msg::LoginPassword(value) => {
            if let Some(login) = &mut state.login {
                login.password = value;
            }
            false
        }
        Msg::SubmitLogin => {
            let (email, password) = match &mut state.login {
                Some(login) if !login.busy => {
                    login.busy = true;
                    login.error = None;
                    (login.email.clone(), login.password.clone())
                }
                _ => return false,
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = auth::login(&email, &password).await.map(Box::new);
                link.send_message(Msg::LoginFinished(result));
            });
            true
        }
        Msg::CancelLogin => {
            state.login = None;
            state.pending = None;
            true
        }
        Msg::LoginFinished(result) => {
            match result {
                Ok(_) => {
                    state.login = None;
                    show_toast("Signed in");
                    match state.resume_id.clone() {
                        Some(id) => {
                            // Ownership may differ now; re-resolve before the
                            // deferred intent replays.
                            let link = ctx.link().clone();
                            spawn_local(async move {
                                link.send_message(Msg::OwnershipResolved(
                                    api::check_ownership(&id).await,
                                ));
                            });
                        }
                        None => {
                            if let Some(intent) = state.pending.take() {
                                ctx.link().send_message(match intent {
                                    PendingIntent::Save => Msg::Save,
                                    PendingIntent::Download => Msg::Download,
                                });
                            }
                        }
                    }
                }
                Err(err) => {
                    if let Some(login) = &mut state.login {
                        login.busy = false;
                        login.error = Some(err.to_string());
                    }
                }
            }
            true
        }
        Msg::DismissError => {
            state.error = None;
            true
        }
        Msg::Back => {
            let target = if auth::is_authenticated() {
                Page::Dashboard
            } else {
                Page::Landing
            };
            ctx.props().on_navigate.emit(target);
            false
        }
    }
}

/// Debounces a background save after a content edit. Each edit bumps the
/// epoch, so only the timer armed by the last edit in a burst fires.
fn schedule_auto_save(state: &mut Editor, ctx: &Context<Editor>) {
    if !auth::is_authenticated()
        || auto_save_target(state.owned, state.resume_id.as_deref()).is_none()
    {
        return;
    }
    state.autosave_epoch = state.autosave_epoch.wrapping_add(1);
    let epoch = state.autosave_epoch;
    let link = ctx.link().clone();
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(AUTO_SAVE_DELAY_MS).await;
        link.send_message(Msg::AutoSave(epoch));
    });
}

fn start_update(state: &mut Editor, ctx: &Context<Editor>, id: String, title: String) {
    state.saving = true;
    let data = state.data.clone();
    let template = theme::canonical_template(&ctx.props().template).to_string();
    let canonical = theme::canonical_theme(&template, &state.theme).to_string();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = api::update(&id, &data, &title, &template, &canonical).await;
        link.send_message(Msg::SaveFinished(result.map(Box::new)));
    });
}

fn start_create(state: &mut Editor, ctx: &Context<Editor>, title: String) {
    state.saving = true;
    let data = state.data.clone();
    let template = theme::canonical_template(&ctx.props().template).to_string();
    let canonical = theme::canonical_theme(&template, &state.theme).to_string();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = api::create(&data, &title, &template, &canonical).await;
        link.send_message(Msg::SaveFinished(result.map(Box::new)));
    });
}

// Referenced by the view for the shared badge; kept here with the rest of
// the save-path logic.
pub fn is_shared(state: &Editor) -> bool {
    state.resume_id.is_some() && !state.owned
}
