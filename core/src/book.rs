use crate::catalog::{chapter_by_category, design_by_code, Chapter, DesignRecord, CHAPTERS};

pub const ALL_DESIGNS_LABEL: &str = "All Designs";

/// A visible chapter with its position in the filtered book.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChapterPage {
    pub chapter: &'static Chapter,
    /// 1-based, counted over the visible chapters only.
    pub number: usize,
    pub first_page: usize,
    pub last_page: usize,
}

impl ChapterPage {
    pub fn page_range_label(&self) -> String {
        format!("{}—{}", self.first_page, self.last_page)
    }

    pub fn folio_label(&self) -> String {
        format!("p. {}", self.number)
    }
}

/// Numbers chapters and pages with a running counter over `chapters`.
pub fn paginate<I>(chapters: I) -> Vec<ChapterPage>
where
    I: IntoIterator<Item = &'static Chapter>,
{
    let mut pages_before = 0usize;
    chapters
        .into_iter()
        .enumerate()
        .map(|(index, chapter)| {
            let first_page = pages_before + 1;
            pages_before += chapter.designs.len();
            ChapterPage {
                chapter,
                number: index + 1,
                first_page,
                last_page: pages_before,
            }
        })
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookState {
    active_category: Option<&'static str>,
    selected_code: Option<&'static str>,
}

impl BookState {
    pub fn active_category(&self) -> Option<&'static str> {
        self.active_category
    }

    /// `None` shows every chapter. Unknown categories also fall back to all.
    pub fn select_category(&mut self, category: Option<&str>) {
        self.active_category = category
            .and_then(chapter_by_category)
            .map(|chapter| chapter.category);
    }

    pub fn is_active(&self, category: Option<&str>) -> bool {
        self.active_category == category
    }

    pub fn visible_chapters(&self) -> Vec<ChapterPage> {
        match self.active_category {
            Some(category) => paginate(
                CHAPTERS
                    .iter()
                    .filter(move |chapter| chapter.category == category),
            ),
            None => paginate(CHAPTERS.iter()),
        }
    }

    /// Selecting the current design clears the selection. Unknown codes are
    /// ignored.
    pub fn toggle_design(&mut self, code: &str) {
        let Some(design) = design_by_code(code) else {
            return;
        };
        if self.selected_code == Some(design.code) {
            self.selected_code = None;
        } else {
            self.selected_code = Some(design.code);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_code = None;
    }

    pub fn is_selected(&self, code: &str) -> bool {
        self.selected_code == Some(code)
    }

    pub fn selected_design(&self) -> Option<&'static DesignRecord> {
        self.selected_code.and_then(design_by_code)
    }
}
