//! Dashboard list controller: the signed-in user's résumé collection with
//! delete, duplicate, and inline rename.
//!
//! Activation requires authentication; an unauthenticated visit redirects
//! back to the landing page. The list is fetched exactly once on mount.

use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::Dashboard;

use crate::api;
use crate::app::Page;
use crate::auth;
use crate::toast::show_toast;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub on_navigate: Callback<Page>,
    pub on_logout: Callback<()>,
}

impl Component for Dashboard {
    type Message = Msg;
    type Properties = DashboardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Dashboard::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            if !auth::is_authenticated() {
                show_toast("Please sign in to see your resumes");
                ctx.props().on_navigate.emit(Page::Landing);
                return;
            }

            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Loaded(api::list().await));
            });
        }
    }
}
