//! Pure derivations over the reference tables.

use crate::{Category, Filter, HistoricalMatch, Player, Surface, Tournament};
use serde::Serialize;

/// Tournaments matching both criteria, in input order.
pub fn filter_tournaments<'a>(
    all: &'a [Tournament],
    surface: Filter<Surface>,
    category: Filter<Category>,
) -> Vec<&'a Tournament> {
    all.iter()
        .filter(|t| surface.matches(t.surface) && category.matches(t.category))
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HeadToHeadStats {
    pub wins_a: u32,
    pub wins_b: u32,
    /// Meetings between the pair. Every meeting has a winner, so this is `wins_a + wins_b`.
    pub total: u32,
}

impl HeadToHeadStats {
    pub fn win_rate_a(&self) -> u32 {
        win_rate(self.wins_a, self.total)
    }

    pub fn win_rate_b(&self) -> u32 {
        win_rate(self.wins_b, self.total)
    }
}

/// Meetings between `a` and `b`, in table order.
pub fn head_to_head_history<'a>(
    matches: &'a [HistoricalMatch],
    a: &'a str,
    b: &'a str,
) -> impl Iterator<Item = &'a HistoricalMatch> {
    matches.iter().filter(move |m| m.is_between(a, b))
}

pub fn head_to_head_stats(matches: &[HistoricalMatch], a: &str, b: &str) -> HeadToHeadStats {
    head_to_head_history(matches, a, b).fold(HeadToHeadStats::default(), |mut stats, m| {
        stats.total += 1;
        if m.winner == a {
            stats.wins_a += 1;
        } else if m.winner == b {
            stats.wins_b += 1;
        }
        stats
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SurfaceRecord {
    pub surface: Surface,
    pub wins_a: u32,
    pub wins_b: u32,
}

/// Per-surface split of the pair's meetings, one entry per surface (zeros included).
pub fn surface_record(matches: &[HistoricalMatch], a: &str, b: &str) -> [SurfaceRecord; 3] {
    Surface::ALL.map(|surface| {
        let mut record = SurfaceRecord { surface, wins_a: 0, wins_b: 0 };
        for m in head_to_head_history(matches, a, b).filter(|m| m.surface == surface) {
            if m.winner == a {
                record.wins_a += 1;
            } else if m.winner == b {
                record.wins_b += 1;
            }
        }
        record
    })
}

/// Percentage of `wins` over `total`, rounded to the nearest integer. Zero when `total` is zero.
pub fn win_rate(wins: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(wins) / f64::from(total) * 100.0).round() as u32
}

/// `points` as a percentage of the leader's points. `max_points` must be positive.
pub fn ranking_share(points: u32, max_points: u32) -> f64 {
    debug_assert!(max_points > 0, "ranking_share needs a non-empty ranking");
    f64::from(points) / f64::from(max_points) * 100.0
}

pub fn leader_points(players: &[Player]) -> Option<u32> {
    players.iter().map(|p| p.points).max()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RankTrend {
    Up(u16),
    Down(u16),
    Steady,
}

pub fn rank_trend(change: i16) -> RankTrend {
    match change {
        0 => RankTrend::Steady,
        c if c > 0 => RankTrend::Up(c.unsigned_abs()),
        c => RankTrend::Down(c.unsigned_abs()),
    }
}
