use std::fmt;
use std::str::FromStr;

/// Query parameter consulted once at startup.
pub const MODE_QUERY_KEY: &str = "mode";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    #[default]
    Setup,
    Book,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Setup => "setup",
            ViewMode::Book => "book",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = ViewModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "setup" => Ok(ViewMode::Setup),
            "book" => Ok(ViewMode::Book),
            other => Err(ViewModeError::Unknown(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewModeError {
    Unknown(String),
}

impl fmt::Display for ViewModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewModeError::Unknown(value) => {
                write!(f, "unknown view mode '{value}', expected 'setup' or 'book'")
            }
        }
    }
}

impl std::error::Error for ViewModeError {}

/// Where the initial mode came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeSource {
    Query,
    BuildDefault,
    Fallback,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedMode {
    pub mode: ViewMode,
    pub source: ModeSource,
}

/// Picks the initial mode: an exact `setup`/`book` query value wins, then a
/// build default of `book`, otherwise `setup`.
pub fn resolve_view_mode(query_value: Option<&str>, build_default: Option<&str>) -> ResolvedMode {
    if let Some(mode) = query_value.and_then(|value| value.parse::<ViewMode>().ok()) {
        return ResolvedMode {
            mode,
            source: ModeSource::Query,
        };
    }
    if build_default.map(str::trim) == Some(ViewMode::Book.as_str()) {
        return ResolvedMode {
            mode: ViewMode::Book,
            source: ModeSource::BuildDefault,
        };
    }
    ResolvedMode {
        mode: ViewMode::Setup,
        source: ModeSource::Fallback,
    }
}

/// First `mode` value of a `location.search` string, percent-decoded.
pub fn query_mode_param(search: &str) -> Option<String> {
    let raw = search.trim().trim_start_matches('?');
    if raw.is_empty() {
        return None;
    }
    url::form_urlencoded::parse(raw.as_bytes())
        .find(|(key, _)| key == MODE_QUERY_KEY)
        .map(|(_, value)| value.into_owned())
}
