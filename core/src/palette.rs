pub const FALLBACK_HEX: &str = "#9ca3af";

/// Separator between color names in a palette description.
pub const PALETTE_SEPARATOR: &str = ", ";

pub const PALETTE_COLORS: &[(&str, &str)] = &[
    ("Navy", "#1e3a5f"),
    ("Cyan", "#06b6d4"),
    ("Slate", "#64748b"),
    ("White", "#f8f8f8"),
    ("Multi-accent", "#e879a8"),
    ("Gray", "#9ca3af"),
    ("Soft Blue", "#93c5fd"),
    ("Light Blue", "#bfdbfe"),
    ("Indigo", "#6366f1"),
    ("Accent", "#f59e0b"),
    ("Dark Gray", "#374151"),
    ("Off-White", "#faf5f0"),
    ("Charcoal", "#374151"),
    ("Tan", "#d2b48c"),
    ("Soft Gray", "#e5e7eb"),
    ("Teal", "#14b8a6"),
    ("Blue Accent", "#3b82f6"),
    ("Border Gray", "#d1d5db"),
    ("Black", "#1a1a1a"),
    ("Vibrant Accent", "#ec4899"),
    ("Warm Gray", "#a8a29e"),
    ("Dark", "#0f172a"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteSwatch<'a> {
    pub name: &'a str,
    pub hex: &'static str,
}

/// Exact-name lookup; unknown colors render as neutral gray.
pub fn color_hex(name: &str) -> &'static str {
    PALETTE_COLORS
        .iter()
        .find(|(color, _)| *color == name)
        .map(|(_, hex)| *hex)
        .unwrap_or(FALLBACK_HEX)
}

pub fn palette_colors(palette: &str) -> Vec<PaletteSwatch<'_>> {
    palette
        .split(PALETTE_SEPARATOR)
        .map(|name| PaletteSwatch {
            name,
            hex: color_hex(name),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_colors() {
        assert_eq!(color_hex("Navy"), "#1e3a5f");
        assert_eq!(color_hex("Charcoal"), color_hex("Dark Gray"));
        assert_eq!(color_hex("navy"), FALLBACK_HEX);
        assert_eq!(color_hex("Chartreuse"), FALLBACK_HEX);
    }

    #[test]
    fn palette_splits_in_order() {
        let colors = palette_colors("Off-White, Charcoal, Tan");
        let names: Vec<&str> = colors.iter().map(|swatch| swatch.name).collect();
        assert_eq!(names, vec!["Off-White", "Charcoal", "Tan"]);
        assert_eq!(colors[2].hex, "#d2b48c");
    }

    #[test]
    fn every_catalog_color_is_known() {
        for chapter in crate::catalog::CHAPTERS {
            for design in chapter.designs {
                for swatch in palette_colors(design.palette) {
                    assert!(
                        PALETTE_COLORS.iter().any(|(name, _)| *name == swatch.name),
                        "{} uses unmapped color {}",
                        design.code,
                        swatch.name
                    );
                }
            }
        }
    }
}
