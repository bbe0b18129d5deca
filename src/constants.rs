/// Page wiring constants: selectors, classes and newsletter feedback.
///
/// These keep the host page's contract in one place; the animation's own
/// tuning values live in `core/constants.rs`.
// Navigation
pub const NAV_TOGGLE_SELECTOR: &str = ".nav-toggle";
pub const NAV_SELECTOR: &str = ".main-nav";
pub const NAV_OPEN_CLASS: &str = "open";

// Header
pub const HEADER_SELECTOR: &str = ".site-header";
pub const HEADER_SCROLLED_CLASS: &str = "scrolled";

// Anchors
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// Hero canvas
pub const HERO_CANVAS_ID: &str = "heroCanvas";
pub const HERO_STYLE_ATTR: &str = "data-hero-style";
pub const HERO_SEED_ATTR: &str = "data-seed";

// Newsletter
pub const NEWSLETTER_FORM_SELECTOR: &str = ".newsletter-form";
pub const NEWSLETTER_EMAIL_SELECTOR: &str = "input[type=\"email\"]";
pub const NEWSLETTER_BUTTON_SELECTOR: &str = "button";
pub const NEWSLETTER_TAGGED_ATTR: &str = "data-tagged";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const SUBSCRIBING_LABEL: &str = "Subscribing...";
pub const SUBSCRIBED_LABEL: &str = "Subscribed!";
pub const SUBSCRIBED_BACKGROUND: &str = "#00D4AA";
pub const SUBSCRIBED_COLOR: &str = "#0B0F19";
pub const CONFIRMATION_REVERT_MS: i32 = 3000;
