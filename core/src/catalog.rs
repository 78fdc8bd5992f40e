/// One swatch: a UI design sample shown as a card in the book.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DesignRecord {
    pub name: &'static str,
    pub designer: &'static str,
    pub style: &'static str,
    pub stack: &'static str,
    pub palette: &'static str,
    pub image: &'static str,
    pub code: &'static str,
    pub description: &'static str,
}

/// A display category grouping several swatches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chapter {
    pub category: &'static str,
    pub category_ja: &'static str,
    pub designs: &'static [DesignRecord],
}

// Generated from swatches/catalog.toml by build.rs.
include!(concat!(env!("OUT_DIR"), "/swatch_catalog.rs"));

pub fn chapter_by_category(category: &str) -> Option<&'static Chapter> {
    let trimmed = category.trim();
    CHAPTERS.iter().find(|chapter| chapter.category == trimmed)
}

pub fn design_by_code(code: &str) -> Option<&'static DesignRecord> {
    let trimmed = code.trim();
    CHAPTERS
        .iter()
        .flat_map(|chapter| chapter.designs.iter())
        .find(|design| design.code == trimmed)
}

pub fn total_designs() -> usize {
    CHAPTERS.iter().map(|chapter| chapter.designs.len()).sum()
}

pub fn chapter_count() -> usize {
    CHAPTERS.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique_across_chapters() {
        let mut codes: Vec<&str> = CHAPTERS
            .iter()
            .flat_map(|chapter| chapter.designs.iter().map(|design| design.code))
            .collect();
        let total = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), total);
    }

    #[test]
    fn lookups_trim_but_match_exactly() {
        assert_eq!(
            chapter_by_category(" Marketing ").map(|chapter| chapter.category),
            Some("Marketing")
        );
        assert!(chapter_by_category("marketing").is_none());
        assert_eq!(design_by_code("CR-002").map(|design| design.name), Some("E-Commerce"));
        assert!(design_by_code("XX-999").is_none());
    }
}
