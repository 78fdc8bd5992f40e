pub mod book;
pub mod catalog;
pub mod palette;
pub mod preview_url;
pub mod swatch;
pub mod view_mode;
pub mod workbench;

pub use book::{paginate, BookState, ChapterPage, ALL_DESIGNS_LABEL};
pub use catalog::{
    chapter_by_category, chapter_count, design_by_code, total_designs, Chapter, DesignRecord,
    CHAPTERS, COLLECTION_LABEL,
};
pub use palette::{color_hex, palette_colors, PaletteSwatch};
pub use preview_url::{
    parse_preview_url, sanitize, PreviewUrlError, DEFAULT_PREVIEW_URL, PREVIEW_SANDBOX,
};
pub use swatch::{is_select_key, rotation_class, SwatchCardState};
pub use view_mode::{
    query_mode_param, resolve_view_mode, ModeSource, ResolvedMode, ViewMode, ViewModeError,
    MODE_QUERY_KEY,
};
pub use workbench::Workbench;
