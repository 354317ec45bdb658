use crate::state::navigation::{Navigation, Tile};
use crate::state::selection::BracketSelection;
use atp_data::stats::filter_tournaments;
use atp_data::tables::{BRACKET, TOURNAMENTS};
use atp_data::{Category, Filter, Slot, Surface, Tournament};

// ---------------------------------------------------------------------------
// Banner animation state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct AnimationState {
    /// Current frame index into the banner frames array, wraps at FRAME_COUNT.
    pub frame: usize,
    /// Monotonic tick counter, drives the ball bounce.
    pub tick: u64,
}

impl AnimationState {
    pub fn advance(&mut self, frame_count: usize) {
        self.tick = self.tick.wrapping_add(1);
        self.frame = (self.frame + 1) % frame_count;
    }
}

// ---------------------------------------------------------------------------
// Home screen
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct HomeState {
    pub selected_tile: usize,
}

impl HomeState {
    pub fn tile(&self) -> Tile {
        Tile::ALL[self.selected_tile.min(Tile::ALL.len() - 1)]
    }

    pub fn next(&mut self) {
        self.selected_tile = (self.selected_tile + 1) % Tile::ALL.len();
    }

    pub fn prev(&mut self) {
        self.selected_tile = (self.selected_tile + Tile::ALL.len() - 1) % Tile::ALL.len();
    }
}

// ---------------------------------------------------------------------------
// Calendar screen: filters and cursor, reset when entered from Home
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct CalendarState {
    pub surface: Filter<Surface>,
    pub category: Filter<Category>,
    pub selected: usize,
}

impl CalendarState {
    pub fn visible(&self) -> Vec<&'static Tournament> {
        filter_tournaments(TOURNAMENTS, self.surface, self.category)
    }

    pub fn selected_tournament(&self) -> Option<&'static Tournament> {
        self.visible().get(self.selected).copied()
    }

    pub fn cycle_surface(&mut self) {
        self.surface = self.surface.cycle(&Surface::ALL);
        self.selected = 0;
    }

    pub fn cycle_category(&mut self) {
        self.category = self.category.cycle(&Category::ALL);
        self.selected = 0;
    }

    pub fn move_down(&mut self) {
        let max = self.visible().len().saturating_sub(1);
        if self.selected < max {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

// ---------------------------------------------------------------------------
// Bracket screen: cursor over player slots plus the tapped players
// ---------------------------------------------------------------------------

/// Every player slot in the draw, in display order (match by match, top then bottom).
pub fn bracket_slots() -> impl Iterator<Item = Slot> {
    BRACKET.iter().flat_map(|m| m.slots())
}

#[derive(Debug, Default)]
pub struct BracketViewState {
    /// Index into `bracket_slots()`.
    pub cursor: usize,
    pub selection: BracketSelection,
}

impl BracketViewState {
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.selection.clear();
    }

    pub fn cursor_slot(&self) -> Option<Slot> {
        bracket_slots().nth(self.cursor)
    }

    pub fn move_down(&mut self) {
        let max = bracket_slots().count().saturating_sub(1);
        if self.cursor < max {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }
}

// ---------------------------------------------------------------------------
// Root app state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct AppState {
    pub navigation: Navigation,
    pub show_logs: bool,
    pub show_help: bool,
    pub home: HomeState,
    pub calendar: CalendarState,
    pub bracket: BracketViewState,
    pub rankings_scroll: u16,
    pub h2h_scroll: u16,
    pub animation: AnimationState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_tiles_wrap() {
        let mut home = HomeState::default();
        assert_eq!(home.tile(), Tile::Calendar);
        home.next();
        assert_eq!(home.tile(), Tile::Rankings);
        home.next();
        assert_eq!(home.tile(), Tile::Calendar);
        home.prev();
        assert_eq!(home.tile(), Tile::Rankings);
    }

    #[test]
    fn calendar_cursor_stays_in_filtered_list() {
        let mut cal = CalendarState::default();
        cal.cycle_surface(); // Hard
        cal.cycle_surface(); // Clay
        assert_eq!(cal.surface, Filter::Only(Surface::Clay));
        for _ in 0..10 {
            cal.move_down();
        }
        assert_eq!(cal.selected, 3);
        assert_eq!(cal.selected_tournament().map(|t| t.name), Some("Roland Garros"));
    }

    #[test]
    fn changing_a_filter_resets_the_cursor() {
        let mut cal = CalendarState::default();
        cal.move_down();
        cal.move_down();
        cal.cycle_category();
        assert_eq!(cal.selected, 0);
        assert_eq!(cal.category, Filter::Only(Category::Atp250));
        assert!(cal.visible().is_empty());
        assert!(cal.selected_tournament().is_none());
    }

    #[test]
    fn bracket_has_fourteen_slots() {
        assert_eq!(bracket_slots().count(), 14);
        let mut view = BracketViewState::default();
        for _ in 0..20 {
            view.move_down();
        }
        assert_eq!(view.cursor, 13);
        assert_eq!(view.cursor_slot().map(|s| s.player_id), Some("3"));
    }
}
