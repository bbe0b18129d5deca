// Host-side tests for newsletter request construction.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod newsletter {
    include!("../src/core/newsletter.rs");
}

use newsletter::*;

fn page(path: &str) -> PageInfo {
    PageInfo {
        path: path.to_string(),
        href: format!("https://thesignal.example{path}"),
    }
}

#[test]
fn tags_follow_section_markers() {
    assert_eq!(subscriber_tag("/ai-tools/foo"), "ai-tools");
    assert_eq!(subscriber_tag("/crypto/bitcoin-etf/"), "crypto");
    assert_eq!(subscriber_tag("/sports-betting/"), "sports-betting");
    assert_eq!(subscriber_tag("/about"), "about");
    assert_eq!(subscriber_tag("/about/team"), "about");
    assert_eq!(subscriber_tag("/"), "homepage");
    assert_eq!(subscriber_tag(""), "homepage");
    // section index without trailing slash is not a section page
    assert_eq!(subscriber_tag("/ai-tools"), "homepage");
}

#[test]
fn first_matching_marker_wins() {
    assert_eq!(subscriber_tag("/crypto/ai-tools/"), "ai-tools");
    assert_eq!(subscriber_tag("/sports-betting/about"), "sports-betting");
}

#[test]
fn tagged_submission_carries_tag_and_referrer() {
    let sub = Subscription::from_input(
        "reader@example.com",
        NewsletterMode::Tagged,
        &page("/ai-tools/foo"),
    )
    .expect("valid email");
    let fields = sub.fields();
    assert_eq!(
        fields.as_slice(),
        &[
            ("email", "reader@example.com"),
            ("tag", "ai-tools"),
            ("referrer_url", "https://thesignal.example/ai-tools/foo"),
        ]
    );
}

#[test]
fn email_is_trimmed() {
    let sub = Subscription::from_input("  a@b.co \n", NewsletterMode::Tagged, &page("/"))
        .expect("valid email");
    assert_eq!(sub.email, "a@b.co");
    assert_eq!(sub.tag, Some("homepage"));
}

#[test]
fn empty_or_blank_email_yields_no_request() {
    assert!(Subscription::from_input("", NewsletterMode::Tagged, &page("/")).is_none());
    assert!(Subscription::from_input("   \t", NewsletterMode::EmailOnly, &page("/")).is_none());
}

#[test]
fn email_only_mode_sends_just_the_email() {
    let sub = Subscription::from_input("x@y.z", NewsletterMode::EmailOnly, &page("/crypto/"))
        .expect("valid email");
    assert_eq!(sub.fields().as_slice(), &[("email", "x@y.z")]);
}

#[test]
fn mode_attribute_parsing() {
    assert_eq!(NewsletterMode::from_attr(None), NewsletterMode::Tagged);
    assert_eq!(NewsletterMode::from_attr(Some("true")), NewsletterMode::Tagged);
    assert_eq!(NewsletterMode::from_attr(Some("FALSE")), NewsletterMode::EmailOnly);
    assert_eq!(NewsletterMode::from_attr(Some(" false ")), NewsletterMode::EmailOnly);
}
