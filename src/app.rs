use crate::state::app_settings::AppSettings;
use crate::state::app_state::AppState;
use crate::state::navigation::{Intent, NavError, PlayerPair, Screen, Transition};
use crate::ui::props::ScreenProps;
use atp_data::Tournament;
use atp_data::stats::head_to_head_history;
use atp_data::tables::{MATCH_HISTORY, PLAYERS};
use log::{debug, error, info};

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn new(settings: AppSettings) -> Self {
        Self {
            settings,
            state: AppState::new(),
        }
    }

    pub fn screen(&self) -> &Screen {
        self.state.navigation.screen()
    }

    /// What the renderer should draw right now.
    pub fn view(&self) -> ScreenProps<'_> {
        ScreenProps::from_state(&self.state)
    }

    // -----------------------------------------------------------------------
    // Navigation: every screen change goes through here
    // -----------------------------------------------------------------------

    /// Apply an intent to the navigation machine and reset the view-local
    /// state of the screen being entered. Returns true when the screen changed.
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        let previous = self.screen().clone();
        match self.state.navigation.apply(intent) {
            Ok(Transition::Moved) => {
                self.on_screen_entered(&previous);
                true
            }
            Ok(Transition::Ignored) => false,
            Err(err) => {
                contract_violation(err);
                false
            }
        }
    }

    fn on_screen_entered(&mut self, previous: &Screen) {
        match self.state.navigation.screen() {
            Screen::Calendar if *previous == Screen::Home => {
                self.state.calendar = Default::default();
            }
            Screen::Bracket { tournament } => {
                info!("bracket: {}", tournament.name);
                self.state.bracket.reset();
            }
            Screen::Rankings => self.state.rankings_scroll = 0,
            Screen::HeadToHead { a, b, .. } => {
                info!("head-to-head: {} vs {}", a.name, b.name);
                self.state.h2h_scroll = 0;
            }
            _ => {}
        }
    }

    pub fn back(&mut self) -> bool {
        self.dispatch(Intent::Back)
    }

    // -----------------------------------------------------------------------
    // Home
    // -----------------------------------------------------------------------

    pub fn home_next_tile(&mut self) {
        self.state.home.next();
    }

    pub fn home_prev_tile(&mut self) {
        self.state.home.prev();
    }

    pub fn home_select(&mut self) -> bool {
        let tile = self.state.home.tile();
        self.dispatch(Intent::SelectTile(tile))
    }

    // -----------------------------------------------------------------------
    // Calendar
    // -----------------------------------------------------------------------

    pub fn calendar_down(&mut self) {
        self.state.calendar.move_down();
    }

    pub fn calendar_up(&mut self) {
        self.state.calendar.move_up();
    }

    pub fn calendar_cycle_surface(&mut self) {
        self.state.calendar.cycle_surface();
        debug!("surface filter: {}", self.state.calendar.surface.label());
    }

    pub fn calendar_cycle_category(&mut self) {
        self.state.calendar.cycle_category();
        debug!("category filter: {}", self.state.calendar.category.label());
    }

    /// Open the highlighted tournament. Does nothing on an empty list.
    pub fn calendar_open(&mut self) -> bool {
        let Some(tournament) = self.state.calendar.selected_tournament() else {
            return false;
        };
        self.dispatch(Intent::OpenTournament(tournament.id.to_string()))
    }

    // -----------------------------------------------------------------------
    // Bracket
    // -----------------------------------------------------------------------

    pub fn bracket_down(&mut self) {
        self.state.bracket.move_down();
    }

    pub fn bracket_up(&mut self) {
        self.state.bracket.move_up();
    }

    /// Toggle the player under the cursor. When this completes a pair, returns
    /// it with the current tournament so the caller can schedule the switch.
    pub fn bracket_toggle(&mut self) -> Option<(&'static Tournament, PlayerPair)> {
        let Screen::Bracket { tournament } = *self.screen() else {
            return None;
        };
        let slot = self.state.bracket.cursor_slot()?;
        let pair = self.state.bracket.selection.toggle(slot.player_id);
        debug!("bracket selection: {:?}", self.state.bracket.selection.as_slice());
        pair.map(|pair| (tournament, pair))
    }

    /// Open head-to-head right away if two players are selected.
    pub fn bracket_confirm(&mut self) -> bool {
        let Some(pair) = self.state.bracket.selection.pair() else {
            return false;
        };
        self.dispatch(Intent::OpenHeadToHead(pair))
    }

    /// A delayed pair from the bracket. Only applies while the same bracket is
    /// still on screen; otherwise the user has moved on and it is dropped.
    pub fn on_pair_confirmed(&mut self, tournament: &'static Tournament, pair: PlayerPair) -> bool {
        let same_bracket = matches!(
            self.screen(),
            Screen::Bracket { tournament: current } if current.id == tournament.id
        );
        if same_bracket {
            return self.dispatch(Intent::OpenHeadToHead(pair));
        }
        debug!(
            "dropping stale pair {}/{} on {}",
            pair.first(),
            pair.second(),
            self.screen().title()
        );
        false
    }

    // -----------------------------------------------------------------------
    // Scrolling lists
    // -----------------------------------------------------------------------

    pub fn scroll_down(&mut self) {
        match self.state.navigation.screen() {
            Screen::Rankings => {
                let last = PLAYERS.len().saturating_sub(1) as u16;
                self.state.rankings_scroll = (self.state.rankings_scroll + 1).min(last);
            }
            Screen::HeadToHead { a, b, .. } => {
                let meetings = head_to_head_history(MATCH_HISTORY, a.id, b.id).count() as u16;
                self.state.h2h_scroll = (self.state.h2h_scroll + 1).min(meetings.saturating_sub(1));
            }
            _ => {}
        }
    }

    pub fn scroll_up(&mut self) {
        match self.state.navigation.screen() {
            Screen::Rankings => {
                self.state.rankings_scroll = self.state.rankings_scroll.saturating_sub(1);
            }
            Screen::HeadToHead { .. } => {
                self.state.h2h_scroll = self.state.h2h_scroll.saturating_sub(1);
            }
            _ => {}
        }
    }

    // -----------------------------------------------------------------------
    // Global toggles and animation
    // -----------------------------------------------------------------------

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }

    pub fn toggle_help(&mut self) {
        self.state.show_help = !self.state.show_help;
    }

    pub fn advance_animation(&mut self, frame_count: usize) {
        self.state.animation.advance(frame_count);
    }
}

/// Callers must only pass ids taken from the reference tables. A violation is
/// fatal in debug builds and leaves the screen unchanged in release builds.
fn contract_violation(err: NavError) {
    error!("rejected navigation: {err}");
    if cfg!(debug_assertions) {
        panic!("rejected navigation: {err}");
    }
}
