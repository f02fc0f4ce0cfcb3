//! Link elements as handed out by menu tree providers.
//!
//! A [`LinkElement`] is one node of a menu tree. It carries display data
//! (title, weight), a link target and an enabled flag, plus its ordered
//! children. Providers own these values; the serializer only reads them.

use serde::Deserialize;

/// Scheme prefix marking an explicitly internal link target.
const INTERNAL_SCHEME: &str = "internal:";

/// Application-routed schemes, kept verbatim as internal targets.
const ROUTED_SCHEMES: [&str; 3] = ["entity:", "route:", "base:"];

/// Destination of a link.
///
/// The variant is the "is external" classification of the target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UrlTarget {
    /// Absolute external URI (e.g., `https://example.com`).
    External(String),
    /// Application-relative path (e.g., `/about`, `node/1`).
    Internal(String),
}

impl UrlTarget {
    /// Classify a raw link string.
    ///
    /// - `internal:/about` - internal, prefix stripped
    /// - `entity:node/1`, `route:<front>`, `base:robots.txt` - internal, kept as written
    /// - `https://example.com`, `mailto:a@b.c` - external (any other URI scheme)
    /// - `/about`, `node/1` - internal
    ///
    /// Returns `None` for an empty string.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if let Some(path) = raw.strip_prefix(INTERNAL_SCHEME) {
            return Some(Self::Internal(path.to_owned()));
        }
        if ROUTED_SCHEMES.iter().any(|scheme| raw.starts_with(scheme)) {
            return Some(Self::Internal(raw.to_owned()));
        }
        if has_scheme(raw) {
            Some(Self::External(raw.to_owned()))
        } else {
            Some(Self::Internal(raw.to_owned()))
        }
    }

    /// Whether the target points outside the application.
    #[must_use]
    pub fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }

    /// The external URI, if this target is external.
    #[must_use]
    pub fn external_uri(&self) -> Option<&str> {
        match self {
            Self::External(uri) => Some(uri),
            Self::Internal(_) => None,
        }
    }

    /// The internal path, if this target is internal.
    #[must_use]
    pub fn internal_path(&self) -> Option<&str> {
        match self {
            Self::Internal(path) => Some(path),
            Self::External(_) => None,
        }
    }
}

/// Check for an RFC 3986 scheme: `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"`.
fn has_scheme(raw: &str) -> bool {
    let Some((scheme, _)) = raw.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// One node of a menu tree.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LinkElement {
    /// Provider-assigned identifier (used for subtree selection only).
    #[serde(default)]
    pub id: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Link target (`None` if the source data has no usable target).
    #[serde(default, deserialize_with = "deserialize_url")]
    pub url: Option<UrlTarget>,
    /// Ordering hint (lower sorts first).
    #[serde(default)]
    pub weight: i32,
    /// Disabled links are dropped together with their subtree.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Ordered child links.
    #[serde(default)]
    pub children: Vec<LinkElement>,
}

fn default_enabled() -> bool {
    true
}

fn deserialize_url<'de, D>(deserializer: D) -> Result<Option<UrlTarget>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(UrlTarget::parse))
}

impl LinkElement {
    /// Create an enabled link without children.
    #[must_use]
    pub fn new(title: impl Into<String>, url: Option<UrlTarget>, weight: i32) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            url,
            weight,
            enabled: true,
            children: Vec::new(),
        }
    }

    /// Set the identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the enabled flag.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Replace the children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<LinkElement>) -> Self {
        self.children = children;
        self
    }

    /// Find an enabled link by id in this subtree (pre-order).
    ///
    /// Disabled links are skipped together with everything below them, so
    /// only links that would be visible in the serialized menu are found.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&LinkElement> {
        if !self.enabled {
            return None;
        }
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}

/// A menu as returned by a provider: its name and the ordered root layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuTree {
    /// Menu machine name (e.g., "main", "footer").
    pub menu_name: String,
    /// Root-level links in provider order.
    pub links: Vec<LinkElement>,
}
