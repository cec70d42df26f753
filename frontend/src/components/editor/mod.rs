//! Template editor: root module wiring the Yew `Component` implementation
//! with submodules for state, messages, update logic, view rendering, and
//! the pure save-path helpers.
//!
//! Mount order matters: a hand-off payload from a just-completed save wins
//! over a fetch, a resume id triggers a fetch plus (when signed in) an
//! ownership check, and neither means a blank canonical document.

use yew::platform::spawn_local;
use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::EditorProps;
pub use state::Editor;

use crate::api;
use crate::handoff;

impl Component for Editor {
    type Message = Msg;
    type Properties = EditorProps;

    fn create(ctx: &Context<Self>) -> Self {
        Editor::new(&ctx.props().template, ctx.props().resume_id.is_some())
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

            if let Some(record) = handoff::take() {
                ctx.link().send_message(Msg::Hydrate(Box::new(record)));
                return;
            }

            if let Some(id) = ctx.props().resume_id.clone() {
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Loaded(api::get(&id).await.map(Box::new)));
                });
            }
        }
    }
}
