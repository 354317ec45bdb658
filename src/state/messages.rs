use crate::state::navigation::PlayerPair;
use atp_data::Tournament;
use crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
    AnimationTick,
    /// A bracket pair whose display delay has elapsed, with the tournament it was picked in.
    PairConfirmed {
        tournament: &'static Tournament,
        pair: PlayerPair,
    },
}
