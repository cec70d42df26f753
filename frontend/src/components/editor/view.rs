//! View rendering for the template editor.
//!
//! All sections render from the canonical editing data, so there is never a
//! missing collection to guard against. Editing chrome (toolbar, entry
//! controls, sheets) carries classes the print stylesheet hides during
//! export.

use yew::html::Scope;
use yew::prelude::*;

use common::model::theme;

use super::messages::{AchField, EduField, ExpField, Field, Msg};
use super::state::Editor;
use super::update::is_shared;
use crate::sheet::TopSheet;

pub fn view(state: &Editor, ctx: &Context<Editor>) -> Html {
    let link = ctx.link();
    let template = &ctx.props().template;

    if state.loading {
        return html! {
            <div class="page">
                <p>{"Loading resume..."}</p>
            </div>
        };
    }

    html! {
        <div class="page">
            { build_toolbar(state, link, template) }
            { build_error_banner(state, link) }
            { build_contact_section(state, link) }
            { build_summary_section(state, link) }
            { build_experience_section(state, link) }
            { build_education_section(state, link) }
            { build_achievements_section(state, link) }
            { build_languages_section(state, link) }
            { build_skills_section(state, link) }
            { build_name_sheet(state, link) }
            { build_login_sheet(state, link) }
        </div>
    }
}

fn input_value(e: InputEvent) -> String {
    e.target_unchecked_into::<web_sys::HtmlInputElement>().value()
}

fn textarea_value(e: InputEvent) -> String {
    e.target_unchecked_into::<web_sys::HtmlTextAreaElement>()
        .value()
}

fn build_toolbar(state: &Editor, link: &Scope<Editor>, template: &str) -> Html {
    html! {
        <div class="toolbar">
            <button onclick={link.callback(|_| Msg::Back)}>{"Back"}</button>
            <strong>{ display_title(state) }</strong>
            {
                if is_shared(state) {
                    html! { <span title="Saving will create your own copy">{"(shared)"}</span> }
                } else {
                    html! {}
                }
            }
            <div class="spacer" />
            { build_theme_picker(state, link, template) }
            <button
                class="primary"
                disabled={state.saving}
                onclick={link.callback(|_| Msg::Save)}
            >
                { if state.saving { "Saving..." } else { "Save" } }
            </button>
            <button onclick={link.callback(|_| Msg::Download)}>{"Download PDF"}</button>
        </div>
    }
}

fn display_title(state: &Editor) -> String {
    if state.title.trim().is_empty() {
        "Untitled resume".to_string()
    } else {
        state.title.clone()
    }
}

fn build_theme_picker(state: &Editor, link: &Scope<Editor>, template: &str) -> Html {
    let template = template.to_string();
    html! {
        <select onchange={link.callback(|e: Event| {
            Msg::SetTheme(e.target_unchecked_into::<web_sys::HtmlSelectElement>().value())
        })}>
            {
                for theme::THEMES.iter().map(|canonical| {
                    let alias = theme::editor_theme(&template, canonical);
                    html! {
                        <option value={alias} selected={state.theme == alias}>
                            { alias }
                        </option>
                    }
                })
            }
        </select>
    }
}

fn build_error_banner(state: &Editor, link: &Scope<Editor>) -> Html {
    match &state.error {
        Some(error) => html! {
            <div class="banner">
                <span style="white-space: pre-line;">{ error.clone() }</span>
                <button onclick={link.callback(|_| Msg::DismissError)}>{"Dismiss"}</button>
            </div>
        },
        None => html! {},
    }
}

fn build_contact_section(state: &Editor, link: &Scope<Editor>) -> Html {
    let fields = [
        (Field::Name, "Full name", &state.data.name),
        (Field::Role, "Role", &state.data.role),
        (Field::Phone, "Phone", &state.data.phone),
        (Field::Email, "Email", &state.data.email),
        (Field::Linkedin, "LinkedIn", &state.data.linkedin),
        (Field::Location, "Location", &state.data.location),
    ];
    html! {
        <div class="field-grid">
            {
                for fields.into_iter().map(|(field, placeholder, value)| html! {
                    <input
                        placeholder={placeholder}
                        value={value.clone()}
                        oninput={link.callback(move |e: InputEvent| Msg::Edit(field, input_value(e)))}
                    />
                })
            }
        </div>
    }
}

fn build_summary_section(state: &Editor, link: &Scope<Editor>) -> Html {
    html! {
        <div class="section">
            <h3>{"Summary"}</h3>
            <textarea
                rows="4"
                style="width: 100%;"
                placeholder="A few sentences about yourself"
                value={state.data.summary.clone()}
                oninput={link.callback(|e: InputEvent| Msg::Edit(Field::Summary, textarea_value(e)))}
            />
        </div>
    }
}

fn build_experience_section(state: &Editor, link: &Scope<Editor>) -> Html {
    html! {
        <div class="section">
            <h3>{"Experience"}</h3>
            {
                for state.data.experience.iter().enumerate().map(|(i, entry)| html! {
                    <div class="entry">
                        <div class="entry-row">
                            <input
                                placeholder="Job title"
                                value={entry.title.clone()}
                                oninput={link.callback(move |e: InputEvent| Msg::EditExperience(i, ExpField::Title, input_value(e)))}
                            />
                            <input
                                placeholder="Company"
                                value={entry.company_name.clone()}
                                oninput={link.callback(move |e: InputEvent| Msg::EditExperience(i, ExpField::Company, input_value(e)))}
                            />
                        </div>
                        <div class="entry-row">
                            <input
                                placeholder="2019 - 2023"
                                value={entry.date.clone()}
                                oninput={link.callback(move |e: InputEvent| Msg::EditExperience(i, ExpField::Date, input_value(e)))}
                            />
                            <input
                                placeholder="City, Country"
                                value={entry.company_location.clone()}
                                oninput={link.callback(move |e: InputEvent| Msg::EditExperience(i, ExpField::Location, input_value(e)))}
                            />
                        </div>
                        <textarea
                            rows="3"
                            placeholder="One accomplishment per line"
                            value={entry.accomplishment.clone()}
                            oninput={link.callback(move |e: InputEvent| Msg::EditExperience(i, ExpField::Accomplishment, textarea_value(e)))}
                        />
                        <div class="entry-controls">
                            <button onclick={link.callback(move |_| Msg::RemoveExperience(i))}>{"Remove"}</button>
                        </div>
                    </div>
                })
            }
            <div class="entry-controls">
                <button onclick={link.callback(|_| Msg::AddExperience)}>{"Add experience"}</button>
            </div>
        </div>
    }
}

fn build_education_section(state: &Editor, link: &Scope<Editor>) -> Html {
    html! {
        <div class="section">
            <h3>{"Education"}</h3>
            {
                for state.data.education.iter().enumerate().map(|(i, entry)| html! {
                    <div class="entry">
                        <div class="entry-row">
                            <input
                                placeholder="Degree"
                                value={entry.degree.clone()}
                                oninput={link.callback(move |e: InputEvent| Msg::EditEducation(i, EduField::Degree, input_value(e)))}
                            />
                            <input
                                placeholder="Institution"
                                value={entry.institution.clone()}
                                oninput={link.callback(move |e: InputEvent| Msg::EditEducation(i, EduField::Institution, input_value(e)))}
                            />
                        </div>
                        <div class="entry-row">
                            <input
                                placeholder="2014 - 2018"
                                value={entry.duration.clone()}
                                oninput={link.callback(move |e: InputEvent| Msg::EditEducation(i, EduField::Duration, input_value(e)))}
                            />
                            <input
                                placeholder="City, Country"
                                value={entry.location.clone()}
                                oninput={link.callback(move |e: InputEvent| Msg::EditEducation(i, EduField::Location, input_value(e)))}
                            />
                        </div>
                        <div class="entry-controls">
                            <button onclick={link.callback(move |_| Msg::RemoveEducation(i))}>{"Remove"}</button>
                        </div>
                    </div>
                })
            }
            <div class="entry-controls">
                <button onclick={link.callback(|_| Msg::AddEducation)}>{"Add education"}</button>
            </div>
        </div>
    }
}

fn build_achievements_section(state: &Editor, link: &Scope<Editor>) -> Html {
    html! {
        <div class="section">
            <h3>{"Achievements"}</h3>
            {
                for state.data.achievements.iter().enumerate().map(|(i, entry)| html! {
                    <div class="entry">
                        <input
                            placeholder="Heading"
                            value={entry.key_achievements.clone()}
                            oninput={link.callback(move |e: InputEvent| Msg::EditAchievement(i, AchField::Heading, input_value(e)))}
                        />
                        <textarea
                            rows="2"
                            placeholder="What you did"
                            value={entry.describe.clone()}
                            oninput={link.callback(move |e: InputEvent| Msg::EditAchievement(i, AchField::Describe, textarea_value(e)))}
                        />
                        <div class="entry-controls">
                            <button onclick={link.callback(move |_| Msg::RemoveAchievement(i))}>{"Remove"}</button>
                        </div>
                    </div>
                })
            }
            <div class="entry-controls">
                <button onclick={link.callback(|_| Msg::AddAchievement)}>{"Add achievement"}</button>
            </div>
        </div>
    }
}

fn build_languages_section(state: &Editor, link: &Scope<Editor>) -> Html {
    html! {
        <div class="section">
            <h3>{"Languages"}</h3>
            {
                for state.data.languages.iter().enumerate().map(|(i, entry)| html! {
                    <div class="entry">
                        <div class="entry-row">
                            <input
                                placeholder="Language"
                                value={entry.name.clone()}
                                oninput={link.callback(move |e: InputEvent| Msg::EditLanguageName(i, input_value(e)))}
                            />
                            <input
                                placeholder="Proficiency"
                                value={entry.level.clone()}
                                oninput={link.callback(move |e: InputEvent| Msg::EditLanguageLevel(i, input_value(e)))}
                            />
                            <span class="dots">
                                {
                                    for (1..=5u8).map(|dot| html! {
                                        <button
                                            class={classes!((dot <= entry.dots).then_some("filled"))}
                                            onclick={link.callback(move |_| Msg::SetLanguageDots(i, dot))}
                                        >{ dot }</button>
                                    })
                                }
                            </span>
                        </div>
                        <div class="entry-controls">
                            <button onclick={link.callback(move |_| Msg::RemoveLanguage(i))}>{"Remove"}</button>
                        </div>
                    </div>
                })
            }
            <div class="entry-controls">
                <button onclick={link.callback(|_| Msg::AddLanguage)}>{"Add language"}</button>
            </div>
        </div>
    }
}

fn build_skills_section(state: &Editor, link: &Scope<Editor>) -> Html {
    html! {
        <div class="section">
            <h3>{"Skills"}</h3>
            {
                for state.data.skills.iter().enumerate().map(|(i, category)| html! {
                    <div class="entry">
                        <div class="entry-row">
                            <input
                                placeholder="Category"
                                value={category.category.clone()}
                                oninput={link.callback(move |e: InputEvent| Msg::EditSkillCategory(i, input_value(e)))}
                            />
                            <input
                                placeholder="Comma-separated skills"
                                value={category.items.join(", ")}
                                oninput={link.callback(move |e: InputEvent| Msg::EditSkillItems(i, input_value(e)))}
                            />
                        </div>
                        <div class="entry-controls">
                            <button onclick={link.callback(move |_| Msg::RemoveSkillCategory(i))}>{"Remove"}</button>
                        </div>
                    </div>
                })
            }
            <div class="entry-controls">
                <button onclick={link.callback(|_| Msg::AddSkillCategory)}>{"Add category"}</button>
            </div>
        </div>
    }
}

fn build_name_sheet(state: &Editor, link: &Scope<Editor>) -> Html {
    html! {
        <TopSheet open={state.name_prompt.is_some()}>
            <h3>{"Name this resume"}</h3>
            <div class="entry-row">
                <input
                    value={state.name_prompt.clone().unwrap_or_default()}
                    oninput={link.callback(|e: InputEvent| Msg::NameInput(input_value(e)))}
                    onkeydown={link.batch_callback(|e: KeyboardEvent| {
                        match e.key().as_str() {
                            "Enter" => Some(Msg::ConfirmName),
                            "Escape" => Some(Msg::CancelName),
                            _ => None,
                        }
                    })}
                />
                <button class="primary" onclick={link.callback(|_| Msg::ConfirmName)}>{"Save"}</button>
                <button onclick={link.callback(|_| Msg::CancelName)}>{"Cancel"}</button>
            </div>
        </TopSheet>
    }
}

fn build_login_sheet(state: &Editor, link: &Scope<Editor>) -> Html {
    let (email, password, busy, error) = match &state.login {
        Some(login) => (
            login.email.clone(),
            login.password.clone(),
            login.busy,
            login.error.clone(),
        ),
        None => (String::new(), String::new(), false, None),
    };
    html! {
        <TopSheet open={state.login.is_some()}>
            <h3>{"Sign in to save"}</h3>
            {
                match error {
                    Some(error) => html! { <div class="banner">{ error }</div> },
                    None => html! {},
                }
            }
            <div class="entry-row">
                <input
                    type="email"
                    placeholder="Email"
                    value={email}
                    oninput={link.callback(|e: InputEvent| Msg::LoginEmail(input_value(e)))}
                />
                <input
                    type="password"
                    placeholder="Password"
                    value={password}
                    oninput={link.callback(|e: InputEvent| Msg::LoginPassword(input_value(e)))}
                />
                <button class="primary" disabled={busy} onclick={link.callback(|_| Msg::SubmitLogin)}>
                    { if busy { "Signing in..." } else { "Sign in" } }
                </button>
                <button onclick={link.callback(|_| Msg::CancelLogin)}>{"Cancel"}</button>
            </div>
        </TopSheet>
    }
}
