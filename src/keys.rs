use crate::app::App;
use crate::state::navigation::{Intent, PlayerPair, Screen, Tile};
use crate::state::timer::PairTimer;
use atp_data::Tournament;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Side effects a key press asks of the caller.
#[derive(Debug, PartialEq)]
pub enum KeyAction {
    None,
    Quit,
    /// Two players were just picked on the bracket; open head-to-head after the delay.
    SchedulePair(&'static Tournament, PlayerPair),
}

pub async fn handle_key_bindings(key_event: KeyEvent, app: &Arc<Mutex<App>>, pair_timer: &PairTimer) {
    let mut guard = app.lock().await;
    match handle_key(&mut guard, key_event) {
        KeyAction::None => {}
        KeyAction::Quit => {
            crate::cleanup_terminal();
            std::process::exit(0);
        }
        KeyAction::SchedulePair(tournament, pair) => pair_timer.schedule(tournament, pair),
    }
}

pub fn handle_key(app: &mut App, key_event: KeyEvent) -> KeyAction {
    // Terminals with the keyboard enhancement protocol (and Windows) also
    // report releases and repeats; only a press acts.
    if key_event.kind != KeyEventKind::Press {
        return KeyAction::None;
    }

    // The help overlay is modal: close it, or quit, and nothing else.
    if app.state.show_help {
        match (key_event.code, key_event.modifiers) {
            (Char('q'), _) | (Char('c'), KeyModifiers::CONTROL) => return KeyAction::Quit,
            (KeyCode::Esc | Char('?'), _) => app.toggle_help(),
            _ => {}
        }
        return KeyAction::None;
    }

    let screen = app.screen().clone();
    match (&screen, key_event.code, key_event.modifiers) {
        // Quit
        (_, Char('q'), _) | (_, Char('c'), KeyModifiers::CONTROL) => return KeyAction::Quit,

        // Global
        (_, Char('?'), _) => app.toggle_help(),
        (_, Char('f'), _) => app.toggle_full_screen(),
        (_, Char('"'), _) => app.toggle_show_logs(),

        // Home
        (Screen::Home, Char('l') | KeyCode::Right | KeyCode::Tab, _) => app.home_next_tile(),
        (Screen::Home, Char('h') | KeyCode::Left | KeyCode::BackTab, _) => app.home_prev_tile(),
        (Screen::Home, KeyCode::Enter, _) => {
            app.home_select();
        }
        (Screen::Home, Char('1'), _) => {
            app.dispatch(Intent::SelectTile(Tile::Calendar));
        }
        (Screen::Home, Char('2'), _) => {
            app.dispatch(Intent::SelectTile(Tile::Rankings));
        }

        // Calendar
        (Screen::Calendar, Char('j') | KeyCode::Down, _) => app.calendar_down(),
        (Screen::Calendar, Char('k') | KeyCode::Up, _) => app.calendar_up(),
        (Screen::Calendar, Char('s'), _) => app.calendar_cycle_surface(),
        (Screen::Calendar, Char('c'), _) => app.calendar_cycle_category(),
        (Screen::Calendar, KeyCode::Enter, _) => {
            app.calendar_open();
        }

        // Bracket
        (Screen::Bracket { .. }, Char('j') | KeyCode::Down, _) => app.bracket_down(),
        (Screen::Bracket { .. }, Char('k') | KeyCode::Up, _) => app.bracket_up(),
        (Screen::Bracket { .. }, Char(' '), _) => {
            if let Some((tournament, pair)) = app.bracket_toggle() {
                return KeyAction::SchedulePair(tournament, pair);
            }
        }
        (Screen::Bracket { .. }, KeyCode::Enter, _) => {
            app.bracket_confirm();
        }

        // Rankings / head-to-head
        (Screen::Rankings | Screen::HeadToHead { .. }, Char('j') | KeyCode::Down, _) => {
            app.scroll_down()
        }
        (Screen::Rankings | Screen::HeadToHead { .. }, Char('k') | KeyCode::Up, _) => {
            app.scroll_up()
        }

        // Back, everywhere but Home
        (_, KeyCode::Esc | KeyCode::Backspace, _) => {
            app.back();
        }

        _ => {}
    }
    KeyAction::None
}
