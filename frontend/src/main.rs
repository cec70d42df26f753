use crate::app::App;

mod api;
mod app;
mod auth;
mod components;
mod handoff;
mod sheet;
mod styles;
mod toast;

fn main() {
    styles::register();
    yew::Renderer::<App>::new().render();
}
