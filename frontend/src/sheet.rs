//! Top-sheet modal container.
//!
//! Visibility is driven by the `open` prop from the owning component's
//! state, so a parent always knows whether its sheet is showing — there is
//! no shared global or DOM poking involved.

use yew::{Component, Context, Html, Properties, classes, html};

pub struct TopSheet;

#[derive(Properties, PartialEq)]
pub struct TopSheetProps {
    pub open: bool,
    #[prop_or_default]
    pub children: Html,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = TopSheetProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class={classes!("top-sheet", props.open.then_some("show"))}>
                { props.children.clone() }
            </div>
        }
    }
}
