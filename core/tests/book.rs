use atelier_core::book::BookState;
use atelier_core::catalog::{chapter_count, total_designs, CHAPTERS, COLLECTION_LABEL};

#[test]
fn shipped_catalog_shape() {
    assert_eq!(chapter_count(), 4);
    assert_eq!(total_designs(), 12);
    assert_eq!(COLLECTION_LABEL, "2026 S/S");
    let categories: Vec<&str> = CHAPTERS.iter().map(|chapter| chapter.category).collect();
    assert_eq!(categories, vec!["Dashboard", "Marketing", "Application", "Creative"]);
}

#[test]
fn all_designs_numbers_pages_across_the_book() {
    let book = BookState::default();
    let pages = book.visible_chapters();
    let ranges: Vec<(usize, usize, usize)> = pages
        .iter()
        .map(|page| (page.number, page.first_page, page.last_page))
        .collect();
    assert_eq!(ranges, vec![(1, 1, 3), (2, 4, 6), (3, 7, 9), (4, 10, 12)]);
}

#[test]
fn filtered_chapter_restarts_numbering() {
    let mut book = BookState::default();
    book.select_category(Some("Creative"));
    assert_eq!(book.active_category(), Some("Creative"));
    let pages = book.visible_chapters();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].chapter.category, "Creative");
    assert_eq!(pages[0].number, 1);
    assert_eq!(pages[0].page_range_label(), "1—3");
}

#[test]
fn clearing_or_unknown_filter_shows_everything() {
    let mut book = BookState::default();
    book.select_category(Some("Marketing"));
    book.select_category(None);
    assert!(book.is_active(None));
    assert_eq!(book.visible_chapters().len(), 4);

    book.select_category(Some("Nonexistent"));
    assert_eq!(book.active_category(), None);
    assert_eq!(book.visible_chapters().len(), 4);
}

#[test]
fn toggling_a_design_twice_clears_it() {
    let mut book = BookState::default();
    book.toggle_design("MK-002");
    assert!(book.is_selected("MK-002"));
    assert_eq!(book.selected_design().map(|design| design.name), Some("Pricing Cards"));

    book.toggle_design("AP-001");
    assert!(!book.is_selected("MK-002"));
    assert!(book.is_selected("AP-001"));

    book.toggle_design("AP-001");
    assert!(book.selected_design().is_none());
}

#[test]
fn unknown_code_leaves_selection_alone() {
    let mut book = BookState::default();
    book.toggle_design("DS-001");
    book.toggle_design("ZZ-404");
    assert!(book.is_selected("DS-001"));
}

#[test]
fn selection_survives_filtering() {
    let mut book = BookState::default();
    book.toggle_design("DS-003");
    book.select_category(Some("Creative"));
    assert_eq!(book.selected_design().map(|design| design.code), Some("DS-003"));
    book.clear_selection();
    assert!(book.selected_design().is_none());
}
