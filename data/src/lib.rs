pub mod stats;
pub mod tables;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Domain types: static reference data, shared by reference across views
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Surface {
    Hard,
    Clay,
    Grass,
}

impl Surface {
    pub const ALL: [Surface; 3] = [Surface::Hard, Surface::Clay, Surface::Grass];

    pub fn label(&self) -> &'static str {
        match self {
            Surface::Hard => "Hard",
            Surface::Clay => "Clay",
            Surface::Grass => "Grass",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    Atp250,
    Atp500,
    Atp1000,
    GrandSlam,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Atp250,
        Category::Atp500,
        Category::Atp1000,
        Category::GrandSlam,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Atp250 => "ATP 250",
            Category::Atp500 => "ATP 500",
            Category::Atp1000 => "ATP 1000",
            Category::GrandSlam => "Grand Slam",
        }
    }
}

/// Filter criterion over a closed enumeration. `All` only exists here and is
/// never attached to a tournament record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Filter<T> {
    #[default]
    All,
    Only(T),
}

impl<T: Copy + PartialEq> Filter<T> {
    pub fn matches(&self, value: T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => *wanted == value,
        }
    }

    /// Step to the next criterion: `All`, then each of `values` in order, then back to `All`.
    pub fn cycle(self, values: &[T]) -> Self {
        match self {
            Filter::All => values.first().copied().map_or(Filter::All, Filter::Only),
            Filter::Only(current) => {
                let next = values
                    .iter()
                    .position(|v| *v == current)
                    .and_then(|idx| values.get(idx + 1));
                next.copied().map_or(Filter::All, Filter::Only)
            }
        }
    }
}

impl Filter<Surface> {
    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Only(surface) => surface.label(),
        }
    }
}

impl Filter<Category> {
    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Only(category) => category.label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tournament {
    pub id: &'static str,
    pub name: &'static str,
    pub dates: &'static str,
    pub location: &'static str,
    pub surface: Surface,
    pub category: Category,
    pub prize: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: &'static str,
    pub name: &'static str,
    /// IOC country code, e.g. "SRB".
    pub country: &'static str,
    pub rank: u16,
    pub points: u32,
    pub tournaments: u16,
    pub age: u8,
    /// Positions gained (positive) or lost (negative) since the previous ranking.
    pub change: i16,
}

impl Player {
    /// Everything after the first name, used for compact labels ("Djokovic").
    pub fn surname(&self) -> &'static str {
        self.name
            .split_once(' ')
            .map(|(_, rest)| rest)
            .unwrap_or(self.name)
    }
}

/// Ordered from earliest to latest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Round {
    Quarterfinal,
    Semifinal,
    Final,
}

impl Round {
    pub const ALL: [Round; 3] = [Round::Quarterfinal, Round::Semifinal, Round::Final];

    pub fn label(&self) -> &'static str {
        match self {
            Round::Quarterfinal => "Quarterfinal",
            Round::Semifinal => "Semifinal",
            Round::Final => "Final",
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            Round::Quarterfinal => "QF",
            Round::Semifinal => "SF",
            Round::Final => "F",
        }
    }
}

/// One side of a bracket match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub player_id: &'static str,
    pub seed: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketMatch {
    pub id: &'static str,
    pub round: Round,
    pub top: Slot,
    pub bottom: Slot,
    pub score: Option<&'static str>,
    /// Always one of `top.player_id` / `bottom.player_id` when set.
    pub winner: Option<&'static str>,
}

impl BracketMatch {
    pub fn slots(&self) -> [Slot; 2] {
        [self.top, self.bottom]
    }

    pub fn is_winner(&self, player_id: &str) -> bool {
        self.winner == Some(player_id)
    }
}

/// A past meeting between two players, shown on the head-to-head screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoricalMatch {
    pub date: &'static str,
    pub tournament: &'static str,
    pub surface: Surface,
    pub round: Round,
    pub score: &'static str,
    pub players: [&'static str; 2],
    /// Always one of `players`.
    pub winner: &'static str,
}

impl HistoricalMatch {
    /// True when this meeting was played between exactly `a` and `b`, in either order.
    pub fn is_between(&self, a: &str, b: &str) -> bool {
        let [p, q] = self.players;
        (p == a && q == b) || (p == b && q == a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_all_matches_everything() {
        for surface in Surface::ALL {
            assert!(Filter::All.matches(surface));
        }
    }

    #[test]
    fn filter_only_matches_single_value() {
        let filter = Filter::Only(Surface::Clay);
        assert!(filter.matches(Surface::Clay));
        assert!(!filter.matches(Surface::Hard));
        assert!(!filter.matches(Surface::Grass));
    }

    #[test]
    fn filter_cycle_visits_every_value_then_wraps() {
        let mut filter = Filter::All;
        let mut seen = Vec::new();
        for _ in 0..Category::ALL.len() {
            filter = filter.cycle(&Category::ALL);
            seen.push(filter);
        }
        assert_eq!(
            seen,
            vec![
                Filter::Only(Category::Atp250),
                Filter::Only(Category::Atp500),
                Filter::Only(Category::Atp1000),
                Filter::Only(Category::GrandSlam),
            ]
        );
        assert_eq!(filter.cycle(&Category::ALL), Filter::All);
    }

    #[test]
    fn filter_labels() {
        assert_eq!(Filter::<Surface>::All.label(), "All");
        assert_eq!(Filter::Only(Surface::Grass).label(), "Grass");
        assert_eq!(Filter::Only(Category::GrandSlam).label(), "Grand Slam");
    }

    #[test]
    fn round_ordering() {
        assert!(Round::Quarterfinal < Round::Semifinal);
        assert!(Round::Semifinal < Round::Final);
    }

    #[test]
    fn historical_match_is_between_either_order() {
        let m = HistoricalMatch {
            date: "",
            tournament: "",
            surface: Surface::Hard,
            round: Round::Final,
            score: "",
            players: ["1", "2"],
            winner: "1",
        };
        assert!(m.is_between("1", "2"));
        assert!(m.is_between("2", "1"));
        assert!(!m.is_between("1", "3"));
    }

    #[test]
    fn records_serialize_with_plain_field_names() {
        let rg = tables::tournament_by_id("7").unwrap();
        let json = serde_json::to_value(rg).unwrap();
        assert_eq!(json["surface"], "Clay");
        assert_eq!(json["category"], "GrandSlam");

        let final_match = tables::BRACKET.last().unwrap();
        let json = serde_json::to_value(final_match).unwrap();
        assert_eq!(json["round"], "Final");
        assert!(json["score"].is_null());
        assert_eq!(json["top"]["player_id"], "1");
    }
}
