//! Turning stored names into public URLs.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// Characters left alone when escaping a stored name.
///
/// Unreserved characters plus `/` and the sub-delimiters that are harmless
/// inside a path.
const NAME_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/')
    .remove(b'!')
    .remove(b'*')
    .remove(b'(')
    .remove(b')')
    .remove(b'\'');

/// Percent-escape a stored name for use as a relative URL.
///
/// Backslashes become `/`.
pub fn escape_name(name: &str) -> String {
    utf8_percent_encode(&name.replace('\\', "/"), NAME_SAFE).to_string()
}

/// The URL stored names are served under.
///
/// Either a full URL such as `https://cdn.example.com/media/`, or a
/// reference relative to whatever page links to the file, such as
/// `/media/` or even the empty string.
///
/// ```rust
/// use inmemfs_storage::uri::BaseUrl;
///
/// let base = BaseUrl::parse("/media/").unwrap();
/// assert_eq!(base.join("avatars/alice.png").unwrap(), "/media/avatars/alice.png");
///
/// let base = BaseUrl::parse("https://cdn.example.com/media/").unwrap();
/// assert_eq!(base.join("a b").unwrap(), "https://cdn.example.com/media/a%20b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseUrl {
    Absolute(Url),
    Relative(String),
}

impl BaseUrl {
    /// Parse `base`, keeping it as a plain reference when it has no scheme.
    pub fn parse(base: &str) -> Result<Self, url::ParseError> {
        match Url::parse(base) {
            Ok(url) => Ok(BaseUrl::Absolute(url)),
            Err(url::ParseError::RelativeUrlWithoutBase) => Ok(BaseUrl::Relative(base.to_string())),
            Err(e) => Err(e),
        }
    }

    pub fn is_absolute(&self) -> bool {
        matches!(self, BaseUrl::Absolute(_))
    }

    /// Resolve `name` against this base the way a browser resolves a relative link.
    ///
    /// Leading slashes are dropped first, since tree paths ignore them.
    pub fn join(&self, name: &str) -> Result<String, url::ParseError> {
        let escaped = escape_name(name);
        let reference = escaped.trim_start_matches('/');
        match self {
            BaseUrl::Absolute(base) => Ok(base.join(reference)?.into()),
            BaseUrl::Relative(base) => Ok(merge(base, reference)),
        }
    }
}

impl From<Url> for BaseUrl {
    fn from(url: Url) -> Self {
        BaseUrl::Absolute(url)
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseUrl::Absolute(url) => write!(f, "{}", url),
            BaseUrl::Relative(base) => write!(f, "{}", base),
        }
    }
}

/// Merge a relative-path reference onto a relative base.
///
/// The base loses its query, fragment and last path segment, as in
/// RFC 3986 section 5.2.3. An empty reference keeps the base path whole.
fn merge(base: &str, reference: &str) -> String {
    let path = base.split(['?', '#']).next().unwrap_or_default();
    if reference.is_empty() {
        return path.to_string();
    }
    let dir = path.rfind('/').map_or("", |i| &path[..=i]);
    format!("{}{}", dir, reference)
}
