use crate::state::messages::UiEvent;
use crate::state::navigation::PlayerPair;
use atp_data::Tournament;
use log::debug;
use std::time::Duration;
use tokio::sync::mpsc;

/// Delivers a completed bracket pair back to the UI loop after a short pause,
/// so the second pick is visible before the screen changes.
#[derive(Debug, Clone)]
pub struct PairTimer {
    ui_events: mpsc::Sender<UiEvent>,
    delay: Duration,
}

impl PairTimer {
    pub fn new(ui_events: mpsc::Sender<UiEvent>, delay: Duration) -> Self {
        Self { ui_events, delay }
    }

    /// Fire-and-forget: the pair is captured now and sent as-is when the delay elapses.
    pub fn schedule(&self, tournament: &'static Tournament, pair: PlayerPair) {
        let ui_events = self.ui_events.clone();
        let delay = self.delay;
        debug!("head-to-head {}/{} in {delay:?}", pair.first(), pair.second());
        tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            let _ = ui_events.send(UiEvent::PairConfirmed { tournament, pair }).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atp_data::tables::tournament_by_id;

    #[tokio::test(start_paused = true)]
    async fn pair_arrives_after_delay() {
        let (tx, mut rx) = mpsc::channel(4);
        let timer = PairTimer::new(tx, Duration::from_millis(500));
        let roland_garros = tournament_by_id("7").unwrap();
        timer.schedule(roland_garros, PlayerPair::new("1", "3").unwrap());

        tokio::time::sleep(Duration::from_millis(499)).await;
        assert!(rx.try_recv().is_err(), "pair delivered too early");

        tokio::time::sleep(Duration::from_millis(2)).await;
        match rx.recv().await {
            Some(UiEvent::PairConfirmed { tournament, pair }) => {
                assert_eq!(tournament.id, "7");
                assert_eq!((pair.first(), pair.second()), ("1", "3"));
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[tokio::test]
    async fn zero_delay_sends_immediately() {
        let (tx, mut rx) = mpsc::channel(4);
        let timer = PairTimer::new(tx, Duration::ZERO);
        timer.schedule(tournament_by_id("1").unwrap(), PlayerPair::new("2", "4").unwrap());
        assert!(matches!(rx.recv().await, Some(UiEvent::PairConfirmed { .. })));
    }
}
