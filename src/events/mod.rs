pub mod anchors;
pub mod nav;
pub mod newsletter;
pub mod scroll;

pub use anchors::wire_smooth_scroll;
pub use nav::wire_nav_toggle;
pub use newsletter::wire_newsletter_forms;
pub use scroll::wire_header_shadow;
