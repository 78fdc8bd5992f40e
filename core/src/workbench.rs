use crate::preview_url::{sanitize, DEFAULT_PREVIEW_URL};
use crate::view_mode::ViewMode;

pub const REPO_SELECTED_LABEL: &str = "Repository selected";
pub const REPO_PENDING_LABEL: &str = "Repository can be added later";

/// State behind the setup screen and the book's preview page.
///
/// The active preview URL is stored as typed and only sanitized when read,
/// so every render hands the preview surface a safe absolute URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Workbench {
    view_mode: ViewMode,
    repo_input: String,
    preview_input: String,
    active_preview: String,
}

impl Workbench {
    pub fn new(view_mode: ViewMode) -> Self {
        Self {
            view_mode,
            repo_input: String::new(),
            preview_input: DEFAULT_PREVIEW_URL.to_string(),
            active_preview: DEFAULT_PREVIEW_URL.to_string(),
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn repo_input(&self) -> &str {
        &self.repo_input
    }

    pub fn preview_input(&self) -> &str {
        &self.preview_input
    }

    pub fn active_preview(&self) -> &str {
        &self.active_preview
    }

    pub fn set_repo_input(&mut self, value: impl Into<String>) {
        self.repo_input = value.into();
    }

    pub fn set_preview_input(&mut self, value: impl Into<String>) {
        self.preview_input = value.into();
    }

    /// "Open Book": commits the typed preview URL and enters book mode.
    pub fn open_book(&mut self) {
        self.active_preview = self.preview_input.clone();
        self.view_mode = ViewMode::Book;
    }

    /// "Reflect": recomputes the preview from the input, mode unchanged.
    pub fn reflect(&mut self) {
        self.active_preview = self.preview_input.clone();
    }

    /// Typed inputs are kept.
    pub fn back_to_setup(&mut self) {
        self.view_mode = ViewMode::Setup;
    }

    /// Dev shortcut into the book without committing the input.
    pub fn skip_to_book(&mut self) {
        self.view_mode = ViewMode::Book;
    }

    pub fn safe_preview_url(&self) -> String {
        sanitize(&self.active_preview)
    }

    pub fn has_repo(&self) -> bool {
        !self.repo_input.trim().is_empty()
    }

    pub fn repo_status(&self) -> &'static str {
        if self.has_repo() {
            REPO_SELECTED_LABEL
        } else {
            REPO_PENDING_LABEL
        }
    }
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new(ViewMode::default())
    }
}
