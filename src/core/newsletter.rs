use smallvec::SmallVec;

/// Which fields a newsletter form sends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NewsletterMode {
    /// `email`, `tag` and `referrer_url`.
    #[default]
    Tagged,
    /// `email` only.
    EmailOnly,
}

impl NewsletterMode {
    /// Parse the form's `data-tagged` attribute; only an explicit "false" opts out.
    pub fn from_attr(v: Option<&str>) -> Self {
        match v.map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("false") => NewsletterMode::EmailOnly,
            _ => NewsletterMode::Tagged,
        }
    }
}

/// Section tag for subscribers signing up from `path`.
///
/// First matching marker wins.
pub fn subscriber_tag(path: &str) -> &'static str {
    const SECTIONS: [(&str, &str); 4] = [
        ("/ai-tools/", "ai-tools"),
        ("/crypto/", "crypto"),
        ("/sports-betting/", "sports-betting"),
        ("/about", "about"),
    ];
    SECTIONS
        .iter()
        .find(|(marker, _)| path.contains(marker))
        .map(|(_, tag)| *tag)
        .unwrap_or("homepage")
}

/// Location of the page the form lives on.
#[derive(Clone, Debug, Default)]
pub struct PageInfo {
    pub path: String,
    pub href: String,
}

/// A validated subscription ready to be form-encoded.
#[derive(Clone, Debug, PartialEq)]
pub struct Subscription {
    pub email: String,
    pub tag: Option<&'static str>,
    pub referrer_url: Option<String>,
}

impl Subscription {
    /// Build from the raw input value; `None` when the trimmed email is empty.
    pub fn from_input(raw_email: &str, mode: NewsletterMode, page: &PageInfo) -> Option<Self> {
        let email = raw_email.trim();
        if email.is_empty() {
            return None;
        }
        let (tag, referrer_url) = match mode {
            NewsletterMode::Tagged => (Some(subscriber_tag(&page.path)), Some(page.href.clone())),
            NewsletterMode::EmailOnly => (None, None),
        };
        Some(Self {
            email: email.to_string(),
            tag,
            referrer_url,
        })
    }

    /// Body fields in wire order.
    pub fn fields(&self) -> SmallVec<[(&'static str, &str); 3]> {
        let mut out = SmallVec::new();
        out.push(("email", self.email.as_str()));
        if let Some(tag) = self.tag {
            out.push(("tag", tag));
        }
        if let Some(url) = self.referrer_url.as_deref() {
            out.push(("referrer_url", url));
        }
        out
    }
}
