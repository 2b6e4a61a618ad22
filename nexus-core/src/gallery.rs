//! Gallery selection, favorites, and full-screen state.
//!
//! All transitions replace whole values - no partial in-place mutation -
//! which keeps the state friendly to the rendering model's change
//! detection. The state is process-local and lives for the page session.

use std::collections::BTreeSet;

/// Navigation, favorites, and full-screen flags for the template gallery.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GalleryState {
    current_index: usize,
    favorites: BTreeSet<String>,
    full_screen: bool,
}

impl GalleryState {
    /// Fresh state: first template selected, nothing favorited.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected catalog index.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Whether the given template is favorited.
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Whether the full-screen preview is open.
    pub fn is_full_screen(&self) -> bool {
        self.full_screen
    }

    /// Advance the selection, wrapping past the end.
    pub fn select_next(&mut self, total: usize) {
        if total > 0 {
            self.current_index = (self.current_index + 1) % total;
        }
    }

    /// Step the selection back, wrapping past the start.
    pub fn select_previous(&mut self, total: usize) {
        if total > 0 {
            self.current_index = (self.current_index + total - 1) % total;
        }
    }

    /// Jump straight to an index; out-of-range requests are ignored.
    pub fn select(&mut self, index: usize, total: usize) {
        if index < total {
            self.current_index = index;
        }
    }

    /// Symmetric-difference update on the favorites set. Never touches the
    /// selection.
    pub fn toggle_favorite(&mut self, id: &str) {
        if !self.favorites.remove(id) {
            self.favorites.insert(id.to_string());
        }
    }

    /// Open the full-screen preview.
    pub fn enter_full_screen(&mut self) {
        self.full_screen = true;
    }

    /// Close the full-screen preview.
    pub fn exit_full_screen(&mut self) {
        self.full_screen = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn next_and_previous_are_inverses() {
        for total in 1..=5 {
            for start in 0..total {
                let mut state = GalleryState::new();
                state.select(start, total);

                state.select_next(total);
                state.select_previous(total);
                assert_eq!(state.current_index(), start);

                state.select_previous(total);
                state.select_next(total);
                assert_eq!(state.current_index(), start);
            }
        }
    }

    #[test]
    fn previous_wraps_from_the_first_entry() {
        let mut state = GalleryState::new();
        state.select_previous(3);
        assert_eq!(state.current_index(), 2);
        state.select_next(3);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn double_toggle_restores_membership() {
        let mut state = GalleryState::new();
        assert!(!state.is_favorite("luxury-hotel"));
        state.toggle_favorite("luxury-hotel");
        assert!(state.is_favorite("luxury-hotel"));
        state.toggle_favorite("luxury-hotel");
        assert!(!state.is_favorite("luxury-hotel"));
    }

    #[test]
    fn toggling_favorites_never_moves_the_selection() {
        let mut state = GalleryState::new();
        state.select(2, 4);
        state.toggle_favorite("restaurant");
        assert_eq!(state.current_index(), 2);
        state.toggle_favorite("restaurant");
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn full_screen_round_trip() {
        let mut state = GalleryState::new();
        assert!(!state.is_full_screen());
        state.enter_full_screen();
        assert!(state.is_full_screen());
        state.exit_full_screen();
        assert!(!state.is_full_screen());
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let mut state = GalleryState::new();
        state.select(7, 4);
        assert_eq!(state.current_index(), 0);
    }
}
