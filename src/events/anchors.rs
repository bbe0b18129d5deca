use crate::constants::ANCHOR_SELECTOR;
use crate::core::anchor_target;
use crate::dom;
use web_sys as web;

/// Animate same-page anchor jumps instead of letting the browser snap.
pub fn wire_smooth_scroll(document: &web::Document) {
    for anchor in dom::query_all(document, ANCHOR_SELECTOR) {
        let doc = document.clone();
        let link = anchor.clone();
        dom::add_listener(&anchor, "click", move |ev: web::MouseEvent| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(target) = anchor_target(&href).and_then(|sel| dom::query_one(&doc, sel))
            else {
                return;
            };
            ev.prevent_default();
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            opts.set_block(web::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
        });
    }
}
