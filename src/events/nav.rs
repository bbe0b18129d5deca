use crate::constants::{NAV_OPEN_CLASS, NAV_SELECTOR, NAV_TOGGLE_SELECTOR};
use crate::core::aria_expanded;
use crate::dom;
use web_sys as web;

/// Flip the mobile navigation open/closed and mirror it into `aria-expanded`.
pub fn wire_nav_toggle(document: &web::Document) {
    let (Some(toggle), Some(nav)) = (
        dom::query_one(document, NAV_TOGGLE_SELECTOR),
        dom::query_one(document, NAV_SELECTOR),
    ) else {
        log::debug!("[nav] no toggle/nav pair, skipping");
        return;
    };
    let toggle_el = toggle.clone();
    dom::add_listener(&toggle, "click", move |_ev: web::MouseEvent| {
        let open = nav.class_list().toggle(NAV_OPEN_CLASS).unwrap_or(false);
        _ = toggle_el.set_attribute("aria-expanded", aria_expanded(open));
    });
}
