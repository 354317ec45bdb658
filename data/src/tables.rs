//! Reference tables compiled into the binary. Nothing mutates them at runtime.

use crate::{BracketMatch, Category, HistoricalMatch, Player, Round, Slot, Surface, Tournament};

pub static TOURNAMENTS: &[Tournament] = &[
    tournament("1", "Australian Open", "Jan 14-27", "Melbourne", Surface::Hard, Category::GrandSlam, "$86.5M"),
    tournament("2", "Indian Wells Masters", "Mar 6-19", "Indian Wells", Surface::Hard, Category::Atp1000, "$9.8M"),
    tournament("3", "Miami Open", "Mar 19 - Apr 1", "Miami", Surface::Hard, Category::Atp1000, "$8.8M"),
    tournament("4", "Monte-Carlo Masters", "Apr 7-14", "Monte Carlo", Surface::Clay, Category::Atp1000, "$6.1M"),
    tournament("5", "Madrid Open", "Apr 26 - May 5", "Madrid", Surface::Clay, Category::Atp1000, "$8.8M"),
    tournament("6", "Italian Open", "May 10-19", "Rome", Surface::Clay, Category::Atp1000, "$8.0M"),
    tournament("7", "Roland Garros", "May 26 - Jun 9", "Paris", Surface::Clay, Category::GrandSlam, "$53.5M"),
    tournament("8", "Wimbledon", "Jun 30 - Jul 13", "London", Surface::Grass, Category::GrandSlam, "$50M"),
    tournament("9", "Canadian Open", "Aug 5-11", "Toronto/Montreal", Surface::Hard, Category::Atp1000, "$6.8M"),
    tournament("10", "Cincinnati Masters", "Aug 12-18", "Cincinnati", Surface::Hard, Category::Atp1000, "$6.8M"),
    tournament("11", "US Open", "Aug 26 - Sep 8", "New York", Surface::Hard, Category::GrandSlam, "$65M"),
    tournament("12", "Shanghai Masters", "Oct 2-13", "Shanghai", Surface::Hard, Category::Atp1000, "$9.0M"),
];

/// Ranking table, ordered by rank.
pub static PLAYERS: &[Player] = &[
    player("1", "Novak Djokovic", "SRB", 1, 11145, 18, 36, 0),
    player("2", "Carlos Alcaraz", "ESP", 2, 9815, 17, 20, 1),
    player("3", "Daniil Medvedev", "RUS", 3, 8765, 20, 27, -1),
    player("4", "Jannik Sinner", "ITA", 4, 7980, 19, 22, 2),
    player("5", "Andrey Rublev", "RUS", 5, 7450, 21, 26, 0),
    player("6", "Stefanos Tsitsipas", "GRE", 6, 6915, 19, 25, -2),
    player("7", "Holger Rune", "DEN", 7, 6325, 18, 20, 3),
    player("8", "Casper Ruud", "NOR", 8, 6020, 22, 24, -1),
    player("9", "Alexander Zverev", "GER", 9, 5890, 17, 26, 1),
    player("10", "Taylor Fritz", "USA", 10, 5650, 20, 26, -2),
];

/// Eight-player draw shown for every tournament. Quarterfinals are decided,
/// semifinals and the final are still to be played.
pub static BRACKET: &[BracketMatch] = &[
    decided("m1", Round::Quarterfinal, slot("1", 1), slot("8", 8), "6-3, 6-4", "1"),
    decided("m2", Round::Quarterfinal, slot("2", 2), slot("7", 7), "7-6, 6-2", "2"),
    decided("m3", Round::Quarterfinal, slot("3", 3), slot("6", 6), "6-4, 3-6, 6-3", "3"),
    decided("m4", Round::Quarterfinal, slot("4", 4), slot("5", 5), "6-2, 6-4", "4"),
    pending("m5", Round::Semifinal, slot("1", 1), slot("2", 2)),
    pending("m6", Round::Semifinal, slot("3", 3), slot("4", 4)),
    pending("m7", Round::Final, slot("1", 1), slot("3", 3)),
];

/// Meetings between Djokovic ("1") and Alcaraz ("2"), most recent first.
pub static MATCH_HISTORY: &[HistoricalMatch] = &[
    meeting("Sep 23, 2024", "Shanghai Masters", Surface::Hard, Round::Final, "7-6, 7-6", "1"),
    meeting("Jul 14, 2024", "Wimbledon", Surface::Grass, Round::Final, "6-2, 6-2, 7-6", "2"),
    meeting("Jun 9, 2024", "Roland Garros", Surface::Clay, Round::Semifinal, "6-3, 5-7, 6-1, 6-1", "1"),
    meeting("May 2, 2024", "Madrid Open", Surface::Clay, Round::Semifinal, "7-5, 6-7, 7-6", "2"),
    meeting("Jan 28, 2024", "Australian Open", Surface::Hard, Round::Quarterfinal, "6-4, 6-4, 6-4", "1"),
];

pub fn tournament_by_id(id: &str) -> Option<&'static Tournament> {
    TOURNAMENTS.iter().find(|t| t.id == id)
}

pub fn player_by_id(id: &str) -> Option<&'static Player> {
    PLAYERS.iter().find(|p| p.id == id)
}

pub fn bracket_round(round: Round) -> impl Iterator<Item = &'static BracketMatch> {
    BRACKET.iter().filter(move |m| m.round == round)
}

// ---------------------------------------------------------------------------
// const constructors: keep the tables above one row per record
// ---------------------------------------------------------------------------

const fn tournament(
    id: &'static str,
    name: &'static str,
    dates: &'static str,
    location: &'static str,
    surface: Surface,
    category: Category,
    prize: &'static str,
) -> Tournament {
    Tournament { id, name, dates, location, surface, category, prize }
}

#[allow(clippy::too_many_arguments)]
const fn player(
    id: &'static str,
    name: &'static str,
    country: &'static str,
    rank: u16,
    points: u32,
    tournaments: u16,
    age: u8,
    change: i16,
) -> Player {
    Player { id, name, country, rank, points, tournaments, age, change }
}

const fn slot(player_id: &'static str, seed: u8) -> Slot {
    Slot { player_id, seed }
}

const fn decided(
    id: &'static str,
    round: Round,
    top: Slot,
    bottom: Slot,
    score: &'static str,
    winner: &'static str,
) -> BracketMatch {
    BracketMatch { id, round, top, bottom, score: Some(score), winner: Some(winner) }
}

const fn pending(id: &'static str, round: Round, top: Slot, bottom: Slot) -> BracketMatch {
    BracketMatch { id, round, top, bottom, score: None, winner: None }
}

const fn meeting(
    date: &'static str,
    tournament: &'static str,
    surface: Surface,
    round: Round,
    score: &'static str,
    winner: &'static str,
) -> HistoricalMatch {
    HistoricalMatch { date, tournament, surface, round, score, players: ["1", "2"], winner }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tournament_ids_are_unique() {
        let ids: HashSet<_> = TOURNAMENTS.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), TOURNAMENTS.len());
    }

    #[test]
    fn roland_garros_is_seven() {
        let t = tournament_by_id("7").expect("Roland Garros should be in the calendar");
        assert_eq!(t.name, "Roland Garros");
        assert_eq!(t.surface, Surface::Clay);
        assert_eq!(t.category, Category::GrandSlam);
    }

    #[test]
    fn player_ids_and_ranks_are_unique_and_positive() {
        let ids: HashSet<_> = PLAYERS.iter().map(|p| p.id).collect();
        let ranks: HashSet<_> = PLAYERS.iter().map(|p| p.rank).collect();
        assert_eq!(ids.len(), PLAYERS.len());
        assert_eq!(ranks.len(), PLAYERS.len());
        assert!(PLAYERS.iter().all(|p| p.rank > 0));
    }

    #[test]
    fn players_are_ordered_by_rank() {
        assert!(PLAYERS.windows(2).all(|w| w[0].rank < w[1].rank));
    }

    #[test]
    fn unknown_ids_are_not_found() {
        assert!(tournament_by_id("99").is_none());
        assert!(player_by_id("").is_none());
    }

    #[test]
    fn bracket_winners_are_participants() {
        for m in BRACKET {
            if let Some(winner) = m.winner {
                assert!(
                    m.top.player_id == winner || m.bottom.player_id == winner,
                    "match {} has outside winner {winner}",
                    m.id
                );
            }
        }
    }

    #[test]
    fn bracket_players_exist() {
        for m in BRACKET {
            for slot in m.slots() {
                assert!(player_by_id(slot.player_id).is_some(), "unknown player {}", slot.player_id);
            }
        }
    }

    #[test]
    fn bracket_shape_is_four_two_one() {
        assert_eq!(bracket_round(Round::Quarterfinal).count(), 4);
        assert_eq!(bracket_round(Round::Semifinal).count(), 2);
        assert_eq!(bracket_round(Round::Final).count(), 1);
    }

    #[test]
    fn history_winners_are_participants() {
        for m in MATCH_HISTORY {
            assert!(m.players.contains(&m.winner));
            assert_ne!(m.players[0], m.players[1]);
        }
    }
}
