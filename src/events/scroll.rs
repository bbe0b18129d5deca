use crate::constants::{HEADER_SCROLLED_CLASS, HEADER_SELECTOR};
use crate::core::header_is_scrolled;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the header's `scrolled` class in step with the window scroll offset.
pub fn wire_header_shadow(document: &web::Document) {
    let Some(header) = dom::query_one(document, HEADER_SELECTOR) else {
        return;
    };
    let Some(window) = web::window() else {
        return;
    };
    let win = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        let scrolled = header_is_scrolled(win.scroll_y().unwrap_or(0.0));
        _ = header
            .class_list()
            .toggle_with_force(HEADER_SCROLLED_CLASS, scrolled);
    }) as Box<dyn FnMut()>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
