//! Transient bottom-of-screen notifications.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Shows a message for a few seconds. Styling comes from the registered app
/// stylesheet; the node removes itself when the timer fires.
pub fn show_toast(message: &str) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };
    if let (Ok(node), Some(body)) = (document.create_element("div"), document.body()) {
        node.set_class_name("toast");
        node.set_text_content(Some(message));
        let toast: HtmlElement = node.unchecked_into();
        if body.append_child(&toast).is_ok() {
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(3000).await;
                if let Some(parent) = toast.parent_node() {
                    parent.remove_child(&toast).ok();
                }
            });
        }
    }
}
