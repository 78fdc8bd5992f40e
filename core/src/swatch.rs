pub const ROTATION_CLASSES: [&str; 9] = [
    "swatch-rotate-1",
    "swatch-rotate-2",
    "swatch-rotate-3",
    "swatch-rotate-4",
    "swatch-rotate-5",
    "swatch-rotate-6",
    "swatch-rotate-7",
    "swatch-rotate-8",
    "swatch-rotate-9",
];

pub fn rotation_class(index: usize) -> &'static str {
    ROTATION_CLASSES[index % ROTATION_CLASSES.len()]
}

/// Keys that select a focused card.
pub fn is_select_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Hover and flip flags owned by a single card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SwatchCardState {
    pub hovered: bool,
    pub flipped: bool,
}

impl SwatchCardState {
    pub fn pointer_enter(self) -> Self {
        Self {
            hovered: true,
            ..self
        }
    }

    pub fn pointer_leave(self) -> Self {
        Self {
            hovered: false,
            ..self
        }
    }

    pub fn toggle_flip(self) -> Self {
        Self {
            flipped: !self.flipped,
            ..self
        }
    }

    pub fn transform(&self) -> &'static str {
        if self.flipped {
            "rotateY(180deg)"
        } else {
            "rotateY(0)"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_every_nine() {
        assert_eq!(rotation_class(0), "swatch-rotate-1");
        assert_eq!(rotation_class(8), "swatch-rotate-9");
        assert_eq!(rotation_class(9), "swatch-rotate-1");
    }

    #[test]
    fn flip_survives_hover_changes() {
        let state = SwatchCardState::default()
            .pointer_enter()
            .toggle_flip()
            .pointer_leave();
        assert!(state.flipped);
        assert!(!state.hovered);
        assert_eq!(state.toggle_flip().transform(), "rotateY(0)");
    }

    #[test]
    fn select_keys() {
        assert!(is_select_key("Enter"));
        assert!(is_select_key(" "));
        assert!(!is_select_key("Tab"));
    }
}
