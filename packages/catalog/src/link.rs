//! Outbound link policy for project cards.

/// Browsing context a project link opens in.
pub const NEW_CONTEXT_TARGET: &str = "_blank";

/// Drops the `window.opener` reference and the `Referer` header.
pub const ISOLATED_REL: &str = "noopener noreferrer";

/// Attributes of the anchor that opens a project's external page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundLink {
    pub href: String,
    pub target: &'static str,
    pub rel: &'static str,
}

impl OutboundLink {
    /// Link that opens `url` in a new, opener-isolated, referrer-less context.
    /// The URL is passed through untouched.
    pub fn for_url(url: &str) -> Self {
        Self {
            href: url.to_string(),
            target: NEW_CONTEXT_TARGET,
            rel: ISOLATED_REL,
        }
    }

    pub fn is_isolated(&self) -> bool {
        let has = |token: &str| self.rel.split_ascii_whitespace().any(|t| t == token);
        self.target == NEW_CONTEXT_TARGET && has("noopener") && has("noreferrer")
    }
}
