mod app;
mod components;
mod draw;
mod keys;
mod state;
mod ui;

use crate::app::App;
use crate::state::app_settings::AppSettings;
use crate::state::messages::UiEvent;
use crate::state::navigation::Screen;
use crate::state::timer::PairTimer;
use atp_data::tables::{BRACKET, MATCH_HISTORY, PLAYERS, TOURNAMENTS};
use atp_data::{BracketMatch, HistoricalMatch, Player, Tournament};
use crossterm::event::{self as crossterm_event, Event, KeyEventKind};
use crossterm::{cursor, execute, terminal};
use log::{error, info};
use serde::Serialize;
use std::io::Stdout;
use std::sync::Arc;
use std::{io, panic};
use tokio::sync::{Mutex, mpsc};
use tokio::time::Duration;
use tui::{Terminal, backend::CrosstermBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if handle_cli_args()? {
        return Ok(());
    }

    // Capture everything until the configured level is known, so warnings
    // from loading the settings reach the log pane.
    tui_logger::init_logger(log::LevelFilter::Trace)?;
    let settings = AppSettings::load();
    tui_logger::set_default_level(settings.log_level);

    better_panic::install();

    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;

    setup_panic_hook();
    setup_terminal()?;

    info!(
        "atptui {} started, pair delay {:?}",
        env!("CARGO_PKG_VERSION"),
        settings.pair_delay
    );

    let (ui_event_tx, ui_event_rx) = mpsc::channel::<UiEvent>(100);
    let pair_timer = PairTimer::new(ui_event_tx.clone(), settings.pair_delay);
    let app = Arc::new(Mutex::new(App::new(settings)));

    // Input handler thread
    let input_handler = tokio::spawn(input_handler_task(ui_event_tx.clone()));

    // Animation tick thread, 80ms ≈ 12.5 FPS
    let anim_tx = ui_event_tx.clone();
    let animation_task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(80));
        loop {
            interval.tick().await;
            if anim_tx.send(UiEvent::AnimationTick).await.is_err() {
                break;
            }
        }
    });

    let result = main_ui_loop(terminal, app, ui_event_rx, pair_timer).await;

    input_handler.abort();
    animation_task.abort();
    cleanup_terminal();

    result
}

fn handle_cli_args() -> anyhow::Result<bool> {
    let mut args = std::env::args().skip(1);
    let Some(arg) = args.next() else {
        return Ok(false);
    };

    match arg.as_str() {
        "-h" | "--help" => println!("{}", usage_text()),
        "-V" | "--version" => println!("atptui {}", env!("CARGO_PKG_VERSION")),
        "--json" => println!("{}", serde_json::to_string_pretty(&TableSnapshot::current())?),
        _ => {
            eprintln!("Unknown argument: {arg}\n\n{}", usage_text());
            std::process::exit(2);
        }
    }
    Ok(true)
}

fn usage_text() -> &'static str {
    "atptui - ATP tour terminal UI

Usage:
  atptui
  atptui --json
  atptui --help
  atptui --version

Environment:
  ATPTUI_LOG             Log level: error|warn|info|debug|trace|off (default info)
  ATPTUI_PAIR_DELAY_MS   Pause before opening head-to-head after two picks (default 500)"
}

/// Every reference table, as printed by `--json`.
#[derive(Debug, Serialize)]
struct TableSnapshot {
    tournaments: &'static [Tournament],
    players: &'static [Player],
    bracket: &'static [BracketMatch],
    match_history: &'static [HistoricalMatch],
}

impl TableSnapshot {
    fn current() -> Self {
        Self {
            tournaments: TOURNAMENTS,
            players: PLAYERS,
            bracket: BRACKET,
            match_history: MATCH_HISTORY,
        }
    }
}

async fn main_ui_loop(
    mut terminal: Terminal<CrosstermBackend<Stdout>>,
    app: Arc<Mutex<App>>,
    mut ui_events: mpsc::Receiver<UiEvent>,
    pair_timer: PairTimer,
) -> anyhow::Result<()> {
    {
        let app_guard = app.lock().await;
        draw::draw(&mut terminal, &app_guard)?;
    }

    while let Some(ui_event) = ui_events.recv().await {
        let should_redraw = handle_ui_event(ui_event, &app, &pair_timer).await;
        if should_redraw {
            let app_guard = app.lock().await;
            if let Err(e) = draw::draw(&mut terminal, &app_guard) {
                error!("draw failed: {e}");
            }
        }
    }
    Ok(())
}

async fn handle_ui_event(ui_event: UiEvent, app: &Arc<Mutex<App>>, pair_timer: &PairTimer) -> bool {
    match ui_event {
        UiEvent::KeyPressed(key_event) => {
            keys::handle_key_bindings(key_event, app, pair_timer).await;
            true
        }
        UiEvent::Resize => true,
        UiEvent::AnimationTick => {
            let mut guard = app.lock().await;
            guard.advance_animation(crate::components::banner::FRAME_COUNT);
            // Only the home banner animates.
            matches!(guard.screen(), Screen::Home)
        }
        UiEvent::PairConfirmed { tournament, pair } => {
            let mut guard = app.lock().await;
            guard.on_pair_confirmed(tournament, pair)
        }
    }
}

async fn input_handler_task(ui_events: mpsc::Sender<UiEvent>) {
    loop {
        if let Ok(event) = crossterm_event::read() {
            let ui_event = match event {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    Some(UiEvent::KeyPressed(key_event))
                }
                Event::Resize(_, _) => Some(UiEvent::Resize),
                _ => None,
            };

            if let Some(ui_event) = ui_event
                && ui_events.send(ui_event).await.is_err()
            {
                break;
            }
        }
    }
}

fn setup_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;
    execute!(stdout, terminal::EnterAlternateScreen)?;
    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
    terminal::enable_raw_mode()
}

/// Best effort: called from the quit key and the panic hook, where there is
/// nothing left to report a failure to.
pub fn cleanup_terminal() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, cursor::MoveTo(0, 0));
    let _ = execute!(stdout, terminal::Clear(terminal::ClearType::All));
    let _ = execute!(stdout, terminal::LeaveAlternateScreen);
    let _ = execute!(stdout, cursor::Show);
    let _ = terminal::disable_raw_mode();
}

fn setup_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        cleanup_terminal();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));
}
