//! Presentation variant - which embellishments the page carries
//!
//! All three variants render the same content. The variant is chosen by the
//! route and shared with descendants through context.

use crate::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Plain layout
    Static,
    /// Scroll progress bar and staggered reveals
    Animated,
    /// Animated, plus pointer tilt on the hero and project cards
    #[default]
    Interactive,
}

impl Variant {
    pub const ALL: [Self; 3] = [Self::Static, Self::Animated, Self::Interactive];

    pub const fn reveals(self) -> bool {
        !matches!(self, Self::Static)
    }

    pub const fn shows_scroll_progress(self) -> bool {
        !matches!(self, Self::Static)
    }

    pub const fn tilts(self) -> bool {
        matches!(self, Self::Interactive)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Static => "Statis",
            Self::Animated => "Animasi",
            Self::Interactive => "Interaktif",
        }
    }

    pub fn route(self) -> Route {
        match self {
            Self::Static => Route::StaticSite {},
            Self::Animated => Route::AnimatedSite {},
            Self::Interactive => Route::InteractiveSite {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_table() {
        let table: Vec<_> = Variant::ALL
            .iter()
            .map(|v| (v.reveals(), v.shows_scroll_progress(), v.tilts()))
            .collect();
        assert_eq!(table, vec![(false, false, false), (true, true, false), (true, true, true)]);
    }

    #[test]
    fn each_variant_adds_to_the_previous() {
        for pair in Variant::ALL.windows(2) {
            let (lower, higher) = (pair[0], pair[1]);
            assert!(!lower.reveals() || higher.reveals());
            assert!(!lower.tilts() || higher.tilts());
        }
    }

    #[test]
    fn default_is_interactive() {
        assert_eq!(Variant::default(), Variant::Interactive);
    }

    #[test]
    fn routes_are_distinct() {
        let routes: Vec<String> = Variant::ALL.iter().map(|v| v.route().to_string()).collect();
        assert_eq!(routes, vec!["/static", "/animated", "/"]);
    }
}
