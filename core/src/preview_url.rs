use std::fmt;

use url::Url;

/// Canonical form of the fallback target, so sanitizing it again is a no-op.
pub const DEFAULT_PREVIEW_URL: &str = "https://example.com/";

/// Sandbox tokens for the embedded preview surface.
pub const PREVIEW_SANDBOX: &str = "allow-same-origin allow-scripts allow-forms allow-popups";

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewUrlError {
    Empty,
    Invalid { candidate: String, source: url::ParseError },
}

impl fmt::Display for PreviewUrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewUrlError::Empty => write!(f, "preview url is empty"),
            PreviewUrlError::Invalid { candidate, source } => {
                write!(f, "invalid preview url '{candidate}': {source}")
            }
        }
    }
}

impl std::error::Error for PreviewUrlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PreviewUrlError::Empty => None,
            PreviewUrlError::Invalid { source, .. } => Some(source),
        }
    }
}

/// Adds `https://` unless the text already starts with a lowercase http(s)
/// scheme. Textual check only: `httpx://foo` becomes `https://httpx://foo`,
/// which URL parsing then reads as host `httpx` with an empty port.
pub fn with_scheme(trimmed: &str) -> String {
    if trimmed.starts_with(HTTP_PREFIX) || trimmed.starts_with(HTTPS_PREFIX) {
        trimmed.to_string()
    } else {
        format!("{HTTPS_PREFIX}{trimmed}")
    }
}

pub fn parse_preview_url(input: &str) -> Result<Url, PreviewUrlError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PreviewUrlError::Empty);
    }
    let candidate = with_scheme(trimmed);
    Url::parse(&candidate).map_err(|source| PreviewUrlError::Invalid { candidate, source })
}

/// Total: returns the canonical absolute URL, or [`DEFAULT_PREVIEW_URL`] for
/// empty or unparsable input.
pub fn sanitize(input: &str) -> String {
    parse_preview_url(input)
        .map(String::from)
        .unwrap_or_else(|_| DEFAULT_PREVIEW_URL.to_string())
}
