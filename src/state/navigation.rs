use atp_data::tables::{player_by_id, tournament_by_id};
use atp_data::{Player, Tournament};
use log::debug;
use std::fmt;

// ---------------------------------------------------------------------------
// Player pair: two distinct players chosen on the bracket screen
// ---------------------------------------------------------------------------

/// Two distinct player ids in tap order. Cannot hold the same id twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerPair {
    first: String,
    second: String,
}

impl PlayerPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Result<Self, NavError> {
        let first = first.into();
        let second = second.into();
        if first == second {
            return Err(NavError::DuplicatePlayer(first));
        }
        Ok(Self { first, second })
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }
}

// ---------------------------------------------------------------------------
// Screens and intents
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Calendar,
    Rankings,
}

impl Tile {
    pub const ALL: [Tile; 2] = [Tile::Calendar, Tile::Rankings];

    pub fn label(&self) -> &'static str {
        match self {
            Tile::Calendar => "Tournament Calendar",
            Tile::Rankings => "ATP Rankings",
        }
    }
}

/// The screen currently shown. Each variant carries exactly the data that
/// screen needs, so a bracket without a tournament cannot be expressed.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Screen {
    #[default]
    Home,
    Calendar,
    Bracket {
        tournament: &'static Tournament,
    },
    Rankings,
    HeadToHead {
        tournament: &'static Tournament,
        a: &'static Player,
        b: &'static Player,
    },
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "ATP Tour",
            Screen::Calendar => "ATP Calendar",
            Screen::Bracket { tournament } => tournament.name,
            Screen::Rankings => "ATP Rankings",
            Screen::HeadToHead { .. } => "Head to Head",
        }
    }

    pub fn tournament(&self) -> Option<&'static Tournament> {
        match self {
            Screen::Bracket { tournament } | Screen::HeadToHead { tournament, .. } => Some(*tournament),
            _ => None,
        }
    }
}

/// User intents reported by the views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SelectTile(Tile),
    OpenTournament(String),
    Back,
    OpenHeadToHead(PlayerPair),
}

/// Result of an accepted intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The screen changed.
    Moved,
    /// The intent has no meaning on the current screen; nothing changed.
    Ignored,
}

/// Contract violations. The machine is left untouched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    UnknownTournament(String),
    UnknownPlayer(String),
    DuplicatePlayer(String),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::UnknownTournament(id) => write!(f, "no tournament with id {id:?}"),
            NavError::UnknownPlayer(id) => write!(f, "no player with id {id:?}"),
            NavError::DuplicatePlayer(id) => {
                write!(f, "head-to-head needs two different players, got {id:?} twice")
            }
        }
    }
}

impl std::error::Error for NavError {}

// ---------------------------------------------------------------------------
// Navigation state machine
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct Navigation {
    screen: Screen,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Apply one intent. On `Err` the current screen is kept as it was.
    pub fn apply(&mut self, intent: Intent) -> Result<Transition, NavError> {
        let next = match (&self.screen, intent) {
            (Screen::Home, Intent::SelectTile(Tile::Calendar)) => Screen::Calendar,
            (Screen::Home, Intent::SelectTile(Tile::Rankings)) => Screen::Rankings,

            (Screen::Calendar, Intent::OpenTournament(id)) => {
                let tournament = tournament_by_id(&id).ok_or(NavError::UnknownTournament(id))?;
                Screen::Bracket { tournament }
            }
            (Screen::Calendar, Intent::Back) => Screen::Home,

            (Screen::Bracket { .. }, Intent::Back) => Screen::Calendar,
            (Screen::Bracket { tournament }, Intent::OpenHeadToHead(pair)) => {
                let a = lookup_player(pair.first())?;
                let b = lookup_player(pair.second())?;
                Screen::HeadToHead { tournament: *tournament, a, b }
            }

            (Screen::Rankings, Intent::Back) => Screen::Home,

            (Screen::HeadToHead { tournament, .. }, Intent::Back) => {
                Screen::Bracket { tournament: *tournament }
            }

            (screen, intent) => {
                debug!("ignoring {intent:?} on {}", screen.title());
                return Ok(Transition::Ignored);
            }
        };

        debug!("navigate: {} -> {}", self.screen.title(), next.title());
        self.screen = next;
        Ok(Transition::Moved)
    }
}

fn lookup_player(id: &str) -> Result<&'static Player, NavError> {
    player_by_id(id).ok_or_else(|| NavError::UnknownPlayer(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: &str, b: &str) -> PlayerPair {
        PlayerPair::new(a, b).expect("distinct ids")
    }

    fn at_bracket(id: &str) -> Navigation {
        let mut nav = Navigation::new();
        nav.apply(Intent::SelectTile(Tile::Calendar)).unwrap();
        nav.apply(Intent::OpenTournament(id.to_string())).unwrap();
        nav
    }

    #[test]
    fn starts_at_home() {
        assert_eq!(Navigation::new().screen(), &Screen::Home);
    }

    #[test]
    fn home_tiles() {
        let mut nav = Navigation::new();
        assert_eq!(nav.apply(Intent::SelectTile(Tile::Rankings)), Ok(Transition::Moved));
        assert_eq!(nav.screen(), &Screen::Rankings);
        nav.apply(Intent::Back).unwrap();
        assert_eq!(nav.screen(), &Screen::Home);
        nav.apply(Intent::SelectTile(Tile::Calendar)).unwrap();
        assert_eq!(nav.screen(), &Screen::Calendar);
        nav.apply(Intent::Back).unwrap();
        assert_eq!(nav.screen(), &Screen::Home);
    }

    #[test]
    fn calendar_opens_bracket_with_tournament() {
        let nav = at_bracket("7");
        let Screen::Bracket { tournament } = nav.screen() else {
            panic!("expected bracket, got {:?}", nav.screen());
        };
        assert_eq!(tournament.name, "Roland Garros");
    }

    #[test]
    fn bracket_back_returns_to_calendar() {
        let mut nav = at_bracket("7");
        nav.apply(Intent::Back).unwrap();
        assert_eq!(nav.screen(), &Screen::Calendar);
        assert_eq!(nav.screen().tournament(), None);
    }

    #[test]
    fn head_to_head_back_keeps_tournament() {
        let mut nav = at_bracket("7");
        nav.apply(Intent::OpenHeadToHead(pair("1", "3"))).unwrap();
        let Screen::HeadToHead { tournament, a, b } = nav.screen() else {
            panic!("expected head-to-head, got {:?}", nav.screen());
        };
        assert_eq!((tournament.id, a.id, b.id), ("7", "1", "3"));

        nav.apply(Intent::Back).unwrap();
        assert_eq!(nav.screen().tournament().map(|t| t.id), Some("7"));
        assert!(matches!(nav.screen(), Screen::Bracket { .. }));
    }

    #[test]
    fn unknown_tournament_is_rejected_without_moving() {
        let mut nav = Navigation::new();
        nav.apply(Intent::SelectTile(Tile::Calendar)).unwrap();
        let err = nav.apply(Intent::OpenTournament("42".into())).unwrap_err();
        assert_eq!(err, NavError::UnknownTournament("42".into()));
        assert_eq!(nav.screen(), &Screen::Calendar);
    }

    #[test]
    fn unknown_player_is_rejected_without_moving() {
        let mut nav = at_bracket("1");
        let before = nav.screen().clone();
        let err = nav.apply(Intent::OpenHeadToHead(pair("1", "99"))).unwrap_err();
        assert_eq!(err, NavError::UnknownPlayer("99".into()));
        assert_eq!(nav.screen(), &before);
    }

    #[test]
    fn duplicate_pair_cannot_be_built() {
        assert_eq!(PlayerPair::new("2", "2"), Err(NavError::DuplicatePlayer("2".into())));
    }

    #[test]
    fn pair_keeps_tap_order() {
        let p = pair("3", "1");
        assert_eq!((p.first(), p.second()), ("3", "1"));
    }

    #[test]
    fn intents_without_a_row_are_ignored() {
        let mut nav = Navigation::new();
        assert_eq!(nav.apply(Intent::Back), Ok(Transition::Ignored));
        assert_eq!(nav.apply(Intent::OpenTournament("7".into())), Ok(Transition::Ignored));
        assert_eq!(nav.apply(Intent::OpenHeadToHead(pair("1", "2"))), Ok(Transition::Ignored));
        assert_eq!(nav.screen(), &Screen::Home);

        nav.apply(Intent::SelectTile(Tile::Rankings)).unwrap();
        assert_eq!(nav.apply(Intent::SelectTile(Tile::Calendar)), Ok(Transition::Ignored));
        assert_eq!(nav.screen(), &Screen::Rankings);
    }

    #[test]
    fn head_to_head_only_from_bracket() {
        let mut nav = Navigation::new();
        nav.apply(Intent::SelectTile(Tile::Calendar)).unwrap();
        assert_eq!(nav.apply(Intent::OpenHeadToHead(pair("1", "2"))), Ok(Transition::Ignored));
        assert_eq!(nav.screen(), &Screen::Calendar);
    }

    #[test]
    fn every_reachable_screen_is_well_formed() {
        // Drive the machine through a long mixed sequence and check the
        // bracket/head-to-head invariants after every step.
        let script = [
            Intent::Back,
            Intent::SelectTile(Tile::Calendar),
            Intent::OpenTournament("99".into()),
            Intent::OpenTournament("3".into()),
            Intent::OpenHeadToHead(pair("5", "6")),
            Intent::OpenTournament("2".into()),
            Intent::Back,
            Intent::OpenHeadToHead(pair("1", "2")),
            Intent::Back,
            Intent::Back,
            Intent::OpenTournament("8".into()),
            Intent::Back,
            Intent::Back,
            Intent::SelectTile(Tile::Rankings),
            Intent::OpenTournament("1".into()),
            Intent::Back,
        ];
        let mut nav = Navigation::new();
        for intent in script {
            let _ = nav.apply(intent);
            match nav.screen() {
                Screen::Bracket { tournament } => assert!(tournament_by_id(tournament.id).is_some()),
                Screen::HeadToHead { a, b, .. } => assert_ne!(a.id, b.id),
                _ => {}
            }
        }
        assert_eq!(nav.screen(), &Screen::Home);
    }
}
