// Page chrome decisions kept free of DOM types so they can be tested on the host.

/// Scroll offset (logical px) past which the header gets its shadow.
pub const SCROLL_SHADOW_THRESHOLD: f64 = 10.0;

#[inline]
pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_SHADOW_THRESHOLD
}

/// Value mirrored into `aria-expanded` for a navigation open state.
#[inline]
pub fn aria_expanded(open: bool) -> &'static str {
    if open {
        "true"
    } else {
        "false"
    }
}

/// Selector for the in-page target of an anchor `href`, if it has one.
///
/// A bare `#` points nowhere and is left to the browser.
#[inline]
pub fn anchor_target(href: &str) -> Option<&str> {
    let href = href.trim();
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(href),
        _ => None,
    }
}
