use once_cell::sync::Lazy;
use regex::Regex;

/// Prefixes that mark a real scheme rather than a `host:port` pair.
const EXPLICIT_SCHEMES: [&str; 4] = ["http://", "https://", "ftp://", "file://"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
    #[error("Unsupported protocol: {0}")]
    UnsupportedProtocol(String),
}

/// Trim and default to `https://` when no usable scheme is given.
///
/// `example.com` and `example.com:8080` both gain `https://`; `http`/`https`
/// URLs are kept; anything with a different explicit scheme is rejected.
pub fn normalize_url(raw: &str) -> Result<String, UrlError> {
    let url = raw.trim();
    match scheme_of(url) {
        None => Ok(format!("https://{url}")),
        Some(scheme) if scheme == "http" || scheme == "https" => Ok(url.to_string()),
        Some(scheme) => {
            // Prefix match is case-sensitive: `FTP://host` is treated as a bare host.
            if !EXPLICIT_SCHEMES.iter().any(|prefix| url.starts_with(prefix)) {
                Ok(format!("https://{url}"))
            } else {
                Err(UrlError::UnsupportedProtocol(scheme))
            }
        }
    }
}

/// RFC 3986 scheme before the first `:`, lowercased.
fn scheme_of(url: &str) -> Option<String> {
    let (candidate, _) = url.split_once(':')?;
    let mut chars = candidate.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        Some(candidate.to_ascii_lowercase())
    } else {
        None
    }
}

static QUOTED_ARTIFACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""\s*==\s*\$\d+"#).expect("valid artifact regex"));
static BARE_ARTIFACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*==\s*\$\d+").expect("valid artifact regex"));

/// Strip DevTools `== $0` markers left in markup copied from the inspector.
pub fn clean_scraped_html(html: &str) -> String {
    let html = QUOTED_ARTIFACT.replace_all(html, "\"");
    BARE_ARTIFACT.replace_all(&html, "").into_owned()
}
