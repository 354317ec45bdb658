//! Read-only data handed to the renderers, one variant per screen. Everything a
//! screen shows is resolved here so drawing code never touches the tables.

use crate::state::app_state::AppState;
use crate::state::navigation::{Screen, Tile};
use crate::state::selection::BracketSelection;
use atp_data::stats::{
    HeadToHeadStats, RankTrend, SurfaceRecord, head_to_head_history, head_to_head_stats,
    leader_points, rank_trend, ranking_share, surface_record,
};
use atp_data::tables::{BRACKET, MATCH_HISTORY, PLAYERS, bracket_round, player_by_id};
use atp_data::{
    BracketMatch, Category, Filter, HistoricalMatch, Player, Round, Slot, Surface, Tournament,
};

#[derive(Debug)]
pub enum ScreenProps<'a> {
    Home(HomeProps),
    Calendar(CalendarProps),
    Bracket(BracketProps<'a>),
    Rankings(RankingsProps),
    HeadToHead(HeadToHeadProps),
}

#[derive(Debug)]
pub struct HomeProps {
    pub selected: Tile,
    pub frame: usize,
    pub tick: u64,
}

#[derive(Debug)]
pub struct CalendarProps {
    pub tournaments: Vec<&'static Tournament>,
    pub surface: Filter<Surface>,
    pub category: Filter<Category>,
    pub selected: usize,
}

/// One player line inside a bracket match card.
#[derive(Debug, Clone, Copy)]
pub struct EntryProps {
    pub slot: Slot,
    pub player: Option<&'static Player>,
    pub selected: bool,
    pub under_cursor: bool,
    pub winner: bool,
}

#[derive(Debug, Clone)]
pub struct MatchProps {
    pub bracket_match: &'static BracketMatch,
    pub top: EntryProps,
    pub bottom: EntryProps,
}

#[derive(Debug)]
pub struct BracketProps<'a> {
    pub tournament: &'static Tournament,
    pub rounds: Vec<(Round, Vec<MatchProps>)>,
    pub selection: &'a BracketSelection,
}

impl BracketProps<'_> {
    /// Names of the selected players, in tap order.
    pub fn selected_names(&self) -> Vec<&'static str> {
        self.selection
            .as_slice()
            .iter()
            .map(|id| player_by_id(id).map_or("?", |p| p.name))
            .collect()
    }
}

#[derive(Debug)]
pub struct RankingRow {
    pub player: &'static Player,
    /// Percent of the leader's points.
    pub share: f64,
    pub trend: RankTrend,
}

#[derive(Debug)]
pub struct RankingsProps {
    pub rows: Vec<RankingRow>,
    pub leader_points: u32,
    pub scroll: u16,
}

#[derive(Debug)]
pub struct HeadToHeadProps {
    pub tournament: &'static Tournament,
    pub a: &'static Player,
    pub b: &'static Player,
    pub stats: HeadToHeadStats,
    pub history: Vec<&'static HistoricalMatch>,
    pub surfaces: [SurfaceRecord; 3],
    pub scroll: u16,
}

impl<'a> ScreenProps<'a> {
    pub fn from_state(state: &'a AppState) -> Self {
        match state.navigation.screen() {
            Screen::Home => ScreenProps::Home(HomeProps {
                selected: state.home.tile(),
                frame: state.animation.frame,
                tick: state.animation.tick,
            }),
            Screen::Calendar => ScreenProps::Calendar(CalendarProps {
                tournaments: state.calendar.visible(),
                surface: state.calendar.surface,
                category: state.calendar.category,
                selected: state.calendar.selected,
            }),
            Screen::Bracket { tournament } => {
                ScreenProps::Bracket(bracket_props(*tournament, state))
            }
            Screen::Rankings => ScreenProps::Rankings(rankings_props(state.rankings_scroll)),
            Screen::HeadToHead { tournament, a, b } => ScreenProps::HeadToHead(HeadToHeadProps {
                tournament: *tournament,
                a: *a,
                b: *b,
                stats: head_to_head_stats(MATCH_HISTORY, a.id, b.id),
                history: head_to_head_history(MATCH_HISTORY, a.id, b.id).collect(),
                surfaces: surface_record(MATCH_HISTORY, a.id, b.id),
                scroll: state.h2h_scroll,
            }),
        }
    }
}

fn bracket_props<'a>(tournament: &'static Tournament, state: &'a AppState) -> BracketProps<'a> {
    let selection = &state.bracket.selection;
    let cursor = state.bracket.cursor;

    // Slot indices follow table order, matching `bracket_slots()`.
    let slot_index = |m: &BracketMatch, bottom: bool| {
        let match_idx = BRACKET.iter().position(|b| b.id == m.id).unwrap_or_default();
        match_idx * 2 + usize::from(bottom)
    };
    let entry = |m: &'static BracketMatch, slot: Slot, bottom: bool| EntryProps {
        slot,
        player: player_by_id(slot.player_id),
        selected: selection.contains(slot.player_id),
        under_cursor: slot_index(m, bottom) == cursor,
        winner: m.is_winner(slot.player_id),
    };

    let rounds = Round::ALL
        .into_iter()
        .map(|round| {
            let matches = bracket_round(round)
                .map(|m| MatchProps {
                    bracket_match: m,
                    top: entry(m, m.top, false),
                    bottom: entry(m, m.bottom, true),
                })
                .collect();
            (round, matches)
        })
        .collect();

    BracketProps { tournament, rounds, selection }
}

fn rankings_props(scroll: u16) -> RankingsProps {
    let leader = leader_points(PLAYERS).unwrap_or(1).max(1);
    RankingsProps {
        rows: PLAYERS
            .iter()
            .map(|player| RankingRow {
                player,
                share: ranking_share(player.points, leader),
                trend: rank_trend(player.change),
            })
            .collect(),
        leader_points: leader,
        scroll,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::navigation::{Intent, PlayerPair};

    fn state_at_bracket(id: &str) -> AppState {
        let mut state = AppState::new();
        state.navigation.apply(Intent::SelectTile(Tile::Calendar)).unwrap();
        state.navigation.apply(Intent::OpenTournament(id.into())).unwrap();
        state
    }

    #[test]
    fn home_props_follow_tile_selection() {
        let mut state = AppState::new();
        state.home.next();
        let ScreenProps::Home(home) = ScreenProps::from_state(&state) else {
            panic!("expected home props");
        };
        assert_eq!(home.selected, Tile::Rankings);
    }

    #[test]
    fn calendar_props_are_filtered() {
        let mut state = AppState::new();
        state.navigation.apply(Intent::SelectTile(Tile::Calendar)).unwrap();
        state.calendar.surface = Filter::Only(Surface::Grass);
        let ScreenProps::Calendar(cal) = ScreenProps::from_state(&state) else {
            panic!("expected calendar props");
        };
        let names: Vec<_> = cal.tournaments.iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Wimbledon"]);
    }

    #[test]
    fn bracket_props_mark_cursor_selection_and_winners() {
        let mut state = state_at_bracket("7");
        state.bracket.cursor = 1; // m1 bottom: Ruud
        state.bracket.selection.toggle("1");
        let ScreenProps::Bracket(bracket) = ScreenProps::from_state(&state) else {
            panic!("expected bracket props");
        };
        assert_eq!(bracket.tournament.name, "Roland Garros");
        let sizes: Vec<_> = bracket.rounds.iter().map(|(r, m)| (*r, m.len())).collect();
        assert_eq!(
            sizes,
            vec![(Round::Quarterfinal, 4), (Round::Semifinal, 2), (Round::Final, 1)]
        );

        let qf1 = &bracket.rounds[0].1[0];
        assert!(qf1.top.selected && qf1.top.winner && !qf1.top.under_cursor);
        assert!(qf1.bottom.under_cursor && !qf1.bottom.selected && !qf1.bottom.winner);
        assert_eq!(qf1.bottom.player.map(|p| p.name), Some("Casper Ruud"));

        // Djokovic appears again in the semifinal and final; all copies are highlighted.
        let final_match = &bracket.rounds[2].1[0];
        assert!(final_match.top.selected);
        assert_eq!(bracket.selected_names(), vec!["Novak Djokovic"]);
    }

    #[test]
    fn rankings_props_share_and_trend() {
        let mut state = AppState::new();
        state.navigation.apply(Intent::SelectTile(Tile::Rankings)).unwrap();
        let ScreenProps::Rankings(rankings) = ScreenProps::from_state(&state) else {
            panic!("expected rankings props");
        };
        assert_eq!(rankings.rows.len(), 10);
        assert_eq!(rankings.leader_points, 11145);
        assert_eq!(rankings.rows[0].share, 100.0);
        assert_eq!(rankings.rows[6].trend, RankTrend::Up(3));
        assert!(rankings.rows.windows(2).all(|w| w[0].share >= w[1].share));
    }

    #[test]
    fn head_to_head_props_for_sample_pair() {
        let mut state = state_at_bracket("8");
        state
            .navigation
            .apply(Intent::OpenHeadToHead(PlayerPair::new("1", "2").unwrap()))
            .unwrap();
        let ScreenProps::HeadToHead(h2h) = ScreenProps::from_state(&state) else {
            panic!("expected head-to-head props");
        };
        assert_eq!(h2h.tournament.name, "Wimbledon");
        assert_eq!((h2h.stats.wins_a, h2h.stats.wins_b, h2h.stats.total), (3, 2, 5));
        assert_eq!(h2h.history.len(), 5);
        assert_eq!(h2h.surfaces[1].surface, Surface::Clay);
    }

    #[test]
    fn head_to_head_props_without_meetings() {
        let mut state = state_at_bracket("7");
        state
            .navigation
            .apply(Intent::OpenHeadToHead(PlayerPair::new("1", "3").unwrap()))
            .unwrap();
        let ScreenProps::HeadToHead(h2h) = ScreenProps::from_state(&state) else {
            panic!("expected head-to-head props");
        };
        assert_eq!(h2h.stats.total, 0);
        assert!(h2h.history.is_empty());
        assert_eq!((h2h.stats.win_rate_a(), h2h.stats.win_rate_b()), (0, 0));
    }
}
