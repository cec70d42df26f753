//! View rendering for the dashboard.

use yew::html::Scope;
use yew::prelude::*;

use common::model::resume::ResumeRecord;

use super::messages::Msg;
use super::state::Dashboard;
use crate::sheet::TopSheet;

pub fn view(state: &Dashboard, ctx: &Context<Dashboard>) -> Html {
    let link = ctx.link();
    html! {
        <div class="page">
            <div class="toolbar">
                <h2>{"My resumes"}</h2>
                <div class="spacer" />
                <button onclick={ctx.props().on_logout.reform(|_| ())}>{"Sign out"}</button>
            </div>
            { build_error_banner(state, link) }
            {
                if state.loading {
                    html! { <p>{"Loading your resumes..."}</p> }
                } else if state.resumes.is_empty() {
                    html! { <p>{"Nothing here yet. Create a resume from the landing page."}</p> }
                } else {
                    build_table(state, link)
                }
            }
            { build_delete_sheet(state, link) }
        </div>
    }
}

fn build_error_banner(state: &Dashboard, link: &Scope<Dashboard>) -> Html {
    match &state.error {
        Some(error) => html! {
            <div class="banner">
                <span>{ error.clone() }</span>
                <button onclick={link.callback(|_| Msg::DismissError)}>{"Dismiss"}</button>
            </div>
        },
        None => html! {},
    }
}

fn build_table(state: &Dashboard, link: &Scope<Dashboard>) -> Html {
    html! {
        <table class="resume-table">
            <thead>
                <tr>
                    <th>{"Title"}</th>
                    <th>{"Template"}</th>
                    <th>{"Last modified"}</th>
                    <th>{"Actions"}</th>
                </tr>
            </thead>
            <tbody>
                { for state.resumes.iter().map(|record| build_row(state, link, record)) }
            </tbody>
        </table>
    }
}

fn build_row(state: &Dashboard, link: &Scope<Dashboard>, record: &ResumeRecord) -> Html {
    let id = record.id.clone();
    let renaming = state
        .rename
        .as_ref()
        .filter(|rename| rename.id == record.id);
    html! {
        <tr>
            <td>
                {
                    if let Some(rename) = renaming {
                        html! {
                            <input
                                value={rename.draft.clone()}
                                oninput={link.callback(|e: InputEvent| {
                                    Msg::RenameInput(e.target_unchecked_into::<web_sys::HtmlInputElement>().value())
                                })}
                                onkeydown={link.batch_callback(|e: KeyboardEvent| {
                                    match e.key().as_str() {
                                        "Enter" => Some(Msg::CommitRename),
                                        "Escape" => Some(Msg::CancelRename),
                                        _ => None,
                                    }
                                })}
                            />
                        }
                    } else {
                        html! { <span>{ record.title.clone() }</span> }
                    }
                }
            </td>
            <td>{ record.template.clone() }</td>
            <td>{ format_timestamp(record.last_modified) }</td>
            <td>
                {
                    if renaming.is_some() {
                        html! {
                            <>
                                <button
                                    class="primary"
                                    disabled={state.busy}
                                    onclick={link.callback(|_| Msg::CommitRename)}
                                >{"Save"}</button>
                                <button onclick={link.callback(|_| Msg::CancelRename)}>{"Cancel"}</button>
                            </>
                        }
                    } else {
                        let template = record.template.clone();
                        html! {
                            <>
                                <button
                                    class="primary"
                                    onclick={link.callback({
                                        let id = id.clone();
                                        move |_| Msg::Open(template.clone(), id.clone())
                                    })}
                                >{"Open"}</button>
                                <button onclick={link.callback({
                                    let id = id.clone();
                                    move |_| Msg::StartRename(id.clone())
                                })}>{"Rename"}</button>
                                <button disabled={state.busy} onclick={link.callback({
                                    let id = id.clone();
                                    move |_| Msg::Duplicate(id.clone())
                                })}>{"Duplicate"}</button>
                                <button class="danger" onclick={link.callback({
                                    let id = id.clone();
                                    move |_| Msg::RequestDelete(id.clone())
                                })}>{"Delete"}</button>
                            </>
                        }
                    }
                }
            </td>
        </tr>
    }
}

fn build_delete_sheet(state: &Dashboard, link: &Scope<Dashboard>) -> Html {
    let title = state.confirm_delete.as_ref().and_then(|id| {
        state
            .resumes
            .iter()
            .find(|r| &r.id == id)
            .map(|r| r.title.clone())
    });
    html! {
        <TopSheet open={state.confirm_delete.is_some()}>
            <h3>{"Delete resume?"}</h3>
            <p>
                { format!("\"{}\" will be permanently deleted. This cannot be undone.", title.unwrap_or_default()) }
            </p>
            <button
                class="danger"
                disabled={state.busy}
                onclick={link.callback(|_| Msg::ConfirmDelete)}
            >{"Delete"}</button>
            <button onclick={link.callback(|_| Msg::CancelDelete)}>{"Cancel"}</button>
        </TopSheet>
    }
}

fn format_timestamp(millis: i64) -> String {
    if millis <= 0 {
        return String::new();
    }
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(millis as f64));
    String::from(date.to_locale_string("en-US", &wasm_bindgen::JsValue::UNDEFINED))
}
