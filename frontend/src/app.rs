//! Root component: hash-based page switching and the landing page.
//!
//! `App` owns the current [`Page`] and hands children an `on_navigate`
//! callback; no component reaches into window globals to move around. The
//! initial page is parsed from the location hash so editor links (including
//! shared-resume links) can be opened directly.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::theme;

use crate::auth;
use crate::components::dashboard::Dashboard;
use crate::components::editor::Editor;
use crate::toast::show_toast;

#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Landing,
    Dashboard,
    Editor {
        template: String,
        resume_id: Option<String>,
    },
}

impl Page {
    /// Parses a location hash such as `#/editor/aurora/42`. Unknown hashes
    /// land on the landing page.
    pub fn from_hash(hash: &str) -> Page {
        let trimmed = hash.trim_start_matches('#').trim_matches('/');
        let mut parts = trimmed.split('/');
        match parts.next() {
            Some("dashboard") => Page::Dashboard,
            Some("editor") => {
                let template = theme::canonical_template(parts.next().unwrap_or_default());
                let resume_id = parts.next().filter(|id| !id.is_empty()).map(str::to_string);
                Page::Editor {
                    template: template.to_string(),
                    resume_id,
                }
            }
            _ => Page::Landing,
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            Page::Landing => "#/".to_string(),
            Page::Dashboard => "#/dashboard".to_string(),
            Page::Editor {
                template,
                resume_id: Some(id),
            } => format!("#/editor/{}/{}", template, id),
            Page::Editor {
                template,
                resume_id: None,
            } => format!("#/editor/{}", template),
        }
    }
}

pub enum Msg {
    Navigate(Page),
    EmailInput(String),
    PasswordInput(String),
    SubmitLogin,
    LoginFinished(Result<(), String>),
    Logout,
}

pub struct App {
    page: Page,
    email: String,
    password: String,
    logging_in: bool,
    login_error: Option<String>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let page = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .map(|hash| Page::from_hash(&hash))
            .unwrap_or(Page::Landing);
        Self {
            page,
            email: String::new(),
            password: String::new(),
            logging_in: false,
            login_error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(page) => {
                if let Some(window) = web_sys::window() {
                    window.location().set_hash(&page.to_hash()).ok();
                }
                self.page = page;
                true
            }
            Msg::EmailInput(value) => {
                self.email = value;
                false
            }
            Msg::PasswordInput(value) => {
                self.password = value;
                false
            }
            Msg::SubmitLogin => {
                if self.logging_in {
                    return false;
                }
                self.logging_in = true;
                self.login_error = None;
                let email = self.email.clone();
                let password = self.password.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = auth::login(&email, &password)
                        .await
                        .map(|_| ())
                        .map_err(|e| e.to_string());
                    link.send_message(Msg::LoginFinished(result));
                });
                true
            }
            Msg::LoginFinished(result) => {
                self.logging_in = false;
                match result {
                    Ok(()) => {
                        self.password.clear();
                        show_toast("Signed in");
                        ctx.link().send_message(Msg::Navigate(Page::Dashboard));
                    }
                    Err(message) => self.login_error = Some(message),
                }
                true
            }
            Msg::Logout => {
                auth::clear_token();
                show_toast("Signed out");
                ctx.link().send_message(Msg::Navigate(Page::Landing));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate = ctx.link().callback(Msg::Navigate);
        match &self.page {
            Page::Landing => self.view_landing(ctx),
            Page::Dashboard => html! {
                <Dashboard {on_navigate} on_logout={ctx.link().callback(|_| Msg::Logout)} />
            },
            Page::Editor {
                template,
                resume_id,
            } => html! {
                <Editor
                    key={format!("{}:{}", template, resume_id.clone().unwrap_or_default())}
                    template={template.clone()}
                    resume_id={resume_id.clone()}
                    {on_navigate}
                />
            },
        }
    }
}

impl App {
    fn view_landing(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="page">
                <h1>{"Resume Builder"}</h1>
                <p>{"Pick a template to start writing, or sign in to continue where you left off."}</p>
                <div class="toolbar">
                    {
                        for theme::TEMPLATES.iter().map(|template| {
                            let on_navigate = link.callback({
                                let template = template.to_string();
                                move |_| Msg::Navigate(Page::Editor {
                                    template: template.clone(),
                                    resume_id: None,
                                })
                            });
                            html! {
                                <button class="primary" onclick={on_navigate}>
                                    { format!("New {} resume", template) }
                                </button>
                            }
                        })
                    }
                    {
                        if auth::is_authenticated() {
                            html! {
                                <button onclick={link.callback(|_| Msg::Navigate(Page::Dashboard))}>
                                    {"My resumes"}
                                </button>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
                { if auth::is_authenticated() { html! {} } else { self.view_login_form(ctx) } }
            </div>
        }
    }

    fn view_login_form(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="section">
                <h3>{"Sign in"}</h3>
                {
                    if let Some(error) = &self.login_error {
                        html! { <div class="banner">{ error.clone() }</div> }
                    } else {
                        html! {}
                    }
                }
                <div class="entry-row">
                    <input
                        type="email"
                        placeholder="Email"
                        value={self.email.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::EmailInput(e.target_unchecked_into::<web_sys::HtmlInputElement>().value())
                        })}
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        value={self.password.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::PasswordInput(e.target_unchecked_into::<web_sys::HtmlInputElement>().value())
                        })}
                    />
                    <button
                        class="primary"
                        disabled={self.logging_in}
                        onclick={link.callback(|_| Msg::SubmitLogin)}
                    >
                        { if self.logging_in { "Signing in..." } else { "Sign in" } }
                    </button>
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_parsing_covers_every_page() {
        assert_eq!(Page::from_hash(""), Page::Landing);
        assert_eq!(Page::from_hash("#/"), Page::Landing);
        assert_eq!(Page::from_hash("#/dashboard"), Page::Dashboard);
        assert_eq!(
            Page::from_hash("#/editor/aurora"),
            Page::Editor {
                template: "aurora".into(),
                resume_id: None
            }
        );
        assert_eq!(
            Page::from_hash("#/editor/classic/42"),
            Page::Editor {
                template: "classic".into(),
                resume_id: Some("42".into())
            }
        );
        // Unknown template identifiers normalize instead of failing.
        assert_eq!(
            Page::from_hash("#/editor/letterhead/42"),
            Page::Editor {
                template: "classic".into(),
                resume_id: Some("42".into())
            }
        );
        assert_eq!(Page::from_hash("#/nonsense"), Page::Landing);
    }

    #[test]
    fn hashes_round_trip() {
        for page in [
            Page::Landing,
            Page::Dashboard,
            Page::Editor {
                template: "aurora".into(),
                resume_id: Some("7".into()),
            },
            Page::Editor {
                template: "classic".into(),
                resume_id: None,
            },
        ] {
            assert_eq!(Page::from_hash(&page.to_hash()), page);
        }
    }
}
