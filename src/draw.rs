use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{
    Block, BorderType, Borders, Cell, Clear, Gauge, Paragraph, Row, Table, TableState,
};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::App;
use crate::components::banner::AnimatedBanner;
use crate::components::bracket::{BracketGrid, BracketView};
use crate::state::navigation::{Screen, Tile};
use crate::ui::layout::LayoutAreas;
use crate::ui::props::{
    BracketProps, CalendarProps, HeadToHeadProps, HomeProps, RankingsProps, ScreenProps,
};
use atp_data::Surface;
use atp_data::stats::RankTrend;

pub fn draw<B>(terminal: &mut Terminal<B>, app: &App) -> anyhow::Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    let current_size = terminal.size()?;
    if current_size.width <= 10 || current_size.height <= 10 {
        return Ok(());
    }

    let mut layout = LayoutAreas::new(current_size);

    terminal.draw(|f| {
        layout.update(f.area(), app.settings.full_screen, app.state.show_logs);

        if !app.settings.full_screen {
            draw_header(f, layout.header, app.screen());
        }

        match app.view() {
            ScreenProps::Home(props) => draw_home(f, layout.main, &props),
            ScreenProps::Calendar(props) => draw_calendar(f, layout.main, &props),
            ScreenProps::Bracket(props) => draw_bracket(f, layout.main, &props),
            ScreenProps::Rankings(props) => draw_rankings(f, layout.main, &props),
            ScreenProps::HeadToHead(props) => draw_head_to_head(f, layout.main, &props),
        }

        if let Some(logs) = layout.logs {
            draw_logs(f, logs);
        }
        if app.state.show_help {
            draw_help(f, app.screen());
        }
    })?;
    Ok(())
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn surface_color(surface: Surface) -> Color {
    match surface {
        Surface::Hard => Color::Rgb(0, 120, 200),
        Surface::Clay => Color::Rgb(204, 85, 0),
        Surface::Grass => Color::Rgb(46, 139, 87),
    }
}

fn draw_header(f: &mut Frame, header: [Rect; 2], screen: &Screen) {
    let style = Style::default().fg(Color::White);
    let border_type = BorderType::Rounded;

    let mut crumbs = vec![Span::styled(" ATP Tour", Style::default().add_modifier(Modifier::BOLD))];
    match screen {
        Screen::Home => {}
        Screen::Calendar => crumbs.push(Span::raw(" > Calendar")),
        Screen::Rankings => crumbs.push(Span::raw(" > Rankings")),
        Screen::Bracket { tournament } => {
            crumbs.push(Span::raw(format!(" > Calendar > {}", tournament.name)));
        }
        Screen::HeadToHead { tournament, a, b } => {
            crumbs.push(Span::raw(format!(" > {} > ", tournament.name)));
            crumbs.push(Span::styled(
                format!("{} vs {}", a.surname(), b.surname()),
                Style::default().fg(Color::Yellow),
            ));
        }
    }

    let title = Paragraph::new(Line::from(crumbs)).style(style).block(
        Block::default()
            .borders(Borders::LEFT | Borders::BOTTOM | Borders::TOP)
            .border_type(border_type),
    );
    f.render_widget(title, header[0]);

    let help = Paragraph::new("Help: ? ")
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .style(style);
    f.render_widget(help, header[1]);
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

fn draw_home(f: &mut Frame, area: Rect, props: &HomeProps) {
    let block = default_border(Color::DarkGray).title(" ATP Tour ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [_top_pad, banner_area, _gap, tiles_area, prompt_area, _bottom_pad] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(7),
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);

    f.render_widget(AnimatedBanner { frame: props.frame, tick: props.tick }, banner_area);

    let [_, left_tile, _, right_tile, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(30),
        Constraint::Length(4),
        Constraint::Length(30),
        Constraint::Fill(1),
    ])
    .areas(tiles_area);
    for (tile, tile_area) in Tile::ALL.into_iter().zip([left_tile, right_tile]) {
        let (color, blurb) = match tile {
            Tile::Calendar => (Color::Cyan, "Tournaments and draws"),
            Tile::Rankings => (Color::Yellow, "Current ATP standings"),
        };
        let selected = tile == props.selected;
        let block = if selected {
            default_border(color).border_type(BorderType::Thick)
        } else {
            default_border(Color::DarkGray)
        };
        let text = vec![
            Line::from(Span::styled(tile.label(), Style::default().fg(color).add_modifier(Modifier::BOLD))),
            Line::from(""),
            Line::from(Span::styled(blurb, Style::default().fg(Color::Gray))),
        ];
        f.render_widget(
            Paragraph::new(text).alignment(Alignment::Center).block(block),
            tile_area,
        );
    }

    f.render_widget(
        Paragraph::new("←/→ choose  Enter open  1/2 jump")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        prompt_area,
    );
}

// ---------------------------------------------------------------------------
// Calendar
// ---------------------------------------------------------------------------

fn draw_calendar(f: &mut Frame, area: Rect, props: &CalendarProps) {
    let block = default_border(Color::White).title(" Tournament Calendar ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [filter_area, list_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(inner);

    let filters = Line::from(vec![
        Span::styled(" [s] Surface: ", Style::default().fg(Color::DarkGray)),
        Span::styled(props.surface.label(), Style::default().fg(Color::Cyan)),
        Span::styled("   [c] Category: ", Style::default().fg(Color::DarkGray)),
        Span::styled(props.category.label(), Style::default().fg(Color::Cyan)),
    ]);
    f.render_widget(Paragraph::new(filters), filter_area);

    if props.tournaments.is_empty() {
        draw_placeholder(f, list_area, "No tournaments match these filters");
        return;
    }

    let rows: Vec<Row> = props
        .tournaments
        .iter()
        .map(|t| {
            Row::new(vec![
                Cell::from(t.name),
                Cell::from(t.dates),
                Cell::from(t.location),
                Cell::from(Span::styled(t.surface.label(), Style::default().fg(surface_color(t.surface)))),
                Cell::from(t.category.label()),
                Cell::from(t.prize),
            ])
        })
        .collect();

    let header = Row::new(["Tournament", "Dates", "Location", "Surface", "Category", "Prize"])
        .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::UNDERLINED));
    let table = Table::new(
        rows,
        [
            Constraint::Fill(3),
            Constraint::Length(16),
            Constraint::Fill(2),
            Constraint::Length(7),
            Constraint::Length(10),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .style(Style::default().fg(Color::Gray))
    .row_highlight_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD | Modifier::REVERSED))
    .column_spacing(2);
    let mut table_state = TableState::default().with_selected(Some(props.selected));
    f.render_stateful_widget(table, list_area, &mut table_state);
}

// ---------------------------------------------------------------------------
// Bracket
// ---------------------------------------------------------------------------

fn draw_bracket(f: &mut Frame, area: Rect, props: &BracketProps) {
    let t = props.tournament;
    let block = default_border(surface_color(t.surface)).title(format!(" {} ", t.name));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [info_area, draw_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let info = Line::from(vec![
        Span::raw(format!(" {}  |  {}  |  ", t.location, t.dates)),
        Span::styled(t.surface.label(), Style::default().fg(surface_color(t.surface))),
        Span::raw(format!("  |  {}  |  {}", t.category.label(), t.prize)),
    ]);
    f.render_widget(Paragraph::new(info).style(Style::default().fg(Color::Gray)), info_area);

    let grid = BracketGrid::compute(draw_area.width);
    f.render_widget(BracketView { rounds: &props.rounds, grid: &grid }, draw_area);

    let names = props.selected_names();
    let footer = match names.as_slice() {
        [] => "Space select a player  Enter compare two".to_string(),
        [one] => format!("Selected: {one}. Pick one more player to compare"),
        [a, b, ..] => format!("Opening head-to-head: {a} vs {b}"),
    };
    f.render_widget(
        Paragraph::new(footer)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center),
        footer_area,
    );
}

// ---------------------------------------------------------------------------
// Rankings
// ---------------------------------------------------------------------------

fn draw_rankings(f: &mut Frame, area: Rect, props: &RankingsProps) {
    let block = default_border(Color::White)
        .title(" ATP Rankings ")
        .title_bottom(format!(" Share of leader's {} points ", props.leader_points));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows: Vec<Row> = props
        .rows
        .iter()
        .skip(props.scroll as usize)
        .map(|row| {
            let p = row.player;
            let trend = match row.trend {
                RankTrend::Up(n) => Span::styled(format!("▲{n}"), Style::default().fg(Color::Green)),
                RankTrend::Down(n) => Span::styled(format!("▼{n}"), Style::default().fg(Color::Red)),
                RankTrend::Steady => Span::styled("–", Style::default().fg(Color::DarkGray)),
            };
            Row::new(vec![
                Cell::from(format!("{:>3}", p.rank)),
                Cell::from(trend),
                Cell::from(p.name),
                Cell::from(p.country),
                Cell::from(p.age.to_string()),
                Cell::from(format!("{:>6}", p.points)),
                Cell::from(share_bar(row.share, 20)),
                Cell::from(p.tournaments.to_string()),
            ])
        })
        .collect();

    let header = Row::new(["Rank", "", "Player", "Country", "Age", "Points", "Share", "Events"])
        .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::UNDERLINED));
    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(7),
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Length(28),
            Constraint::Length(6),
        ],
    )
    .header(header)
    .column_spacing(2);
    f.render_widget(table, inner);
}

/// `"██████░░░░  60.1%"`, filled cells proportional to `share`.
fn share_bar(share: f64, width: usize) -> Line<'static> {
    let filled = ((share / 100.0) * width as f64).round().clamp(0.0, width as f64) as usize;
    Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(Color::Cyan)),
        Span::styled("░".repeat(width - filled), Style::default().fg(Color::DarkGray)),
        Span::raw(format!(" {share:5.1}%")),
    ])
}

// ---------------------------------------------------------------------------
// Head to head
// ---------------------------------------------------------------------------

fn draw_head_to_head(f: &mut Frame, area: Rect, props: &HeadToHeadProps) {
    let block = default_border(Color::Yellow).title(format!(
        " {} vs {} ",
        props.a.name, props.b.name
    ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [players_area, rates_area, surfaces_area, history_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Length(5),
        Constraint::Fill(1),
    ])
    .areas(inner);

    let [left, center, right] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Fill(1),
    ])
    .areas(players_area);
    for (player, wins, area, alignment) in [
        (props.a, props.stats.wins_a, left, Alignment::Right),
        (props.b, props.stats.wins_b, right, Alignment::Left),
    ] {
        let text = vec![
            Line::from(Span::styled(player.name, Style::default().add_modifier(Modifier::BOLD))),
            Line::from(format!("#{} {}", player.rank, player.country)),
            Line::from(Span::styled(format!("{wins} wins"), Style::default().fg(Color::Yellow))),
        ];
        f.render_widget(Paragraph::new(text).alignment(alignment), area);
    }
    f.render_widget(
        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("{} - {}", props.stats.wins_a, props.stats.wins_b),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center),
        center,
    );

    let [rate_a, _, rate_b] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(2), Constraint::Fill(1)])
            .areas(rates_area);
    for (rate, area, color) in [
        (props.stats.win_rate_a(), rate_a, Color::Cyan),
        (props.stats.win_rate_b(), rate_b, Color::Magenta),
    ] {
        f.render_widget(
            Gauge::default()
                .percent(rate.min(100) as u16)
                .label(format!("{rate}% win rate"))
                .gauge_style(Style::default().fg(color).bg(Color::Black)),
            area,
        );
    }

    let surface_rows: Vec<Row> = props
        .surfaces
        .iter()
        .map(|r| {
            Row::new(vec![
                Cell::from(Span::styled(r.surface.label(), Style::default().fg(surface_color(r.surface)))),
                Cell::from(r.wins_a.to_string()),
                Cell::from(r.wins_b.to_string()),
            ])
        })
        .collect();
    let surfaces = Table::new(
        surface_rows,
        [Constraint::Length(8), Constraint::Length(12), Constraint::Length(12)],
    )
    .header(
        Row::new(["Surface", props.a.surname(), props.b.surname()])
            .style(Style::default().fg(Color::DarkGray)),
    )
    .block(Block::default().borders(Borders::TOP).title(" By surface "));
    f.render_widget(surfaces, surfaces_area);

    let history_block = Block::default()
        .borders(Borders::TOP)
        .title(format!(" Recent meetings ({}) ", props.stats.total));
    if props.history.is_empty() {
        let inner = history_block.inner(history_area);
        f.render_widget(history_block, history_area);
        f.render_widget(
            Paragraph::new("These players have not met yet")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let lines: Vec<Line> = props
        .history
        .iter()
        .map(|m| {
            let winner = if m.winner == props.a.id { props.a } else { props.b };
            Line::from(vec![
                Span::styled(format!("{:<13}", m.date), Style::default().fg(Color::DarkGray)),
                Span::raw(format!("{:<20}", m.tournament)),
                Span::styled(format!("{:<6}", m.surface.label()), Style::default().fg(surface_color(m.surface))),
                Span::raw(format!("{:<3}", m.round.short_label())),
                Span::styled(format!("{:<18}", winner.surname()), Style::default().fg(Color::Green)),
                Span::raw(m.score),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(lines).block(history_block).scroll((props.scroll, 0)),
        history_area,
    );
}

// ---------------------------------------------------------------------------
// Overlays
// ---------------------------------------------------------------------------

fn draw_placeholder(f: &mut Frame, area: Rect, msg: &str) {
    f.render_widget(
        Paragraph::new(msg)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        area,
    );
}

fn draw_logs(f: &mut Frame, area: Rect) {
    let logger = TuiLoggerWidget::default()
        .block(default_border(Color::DarkGray).title(" Logs "))
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Cyan))
        .style_debug(Style::default().fg(Color::Gray))
        .style_trace(Style::default().fg(Color::DarkGray));
    f.render_widget(logger, area);
}

fn help_rows(screen: &Screen) -> Vec<(&'static str, &'static str)> {
    let mut rows = match screen {
        Screen::Home => vec![("←/→ h/l", "Choose tile"), ("Enter", "Open tile"), ("1 / 2", "Calendar / Rankings")],
        Screen::Calendar => vec![
            ("↑/↓ j/k", "Move"),
            ("s", "Cycle surface filter"),
            ("c", "Cycle category filter"),
            ("Enter", "Open tournament"),
            ("Esc", "Back"),
        ],
        Screen::Bracket { .. } => vec![
            ("↑/↓ j/k", "Move between players"),
            ("Space", "Select / deselect player"),
            ("Enter", "Compare selected pair"),
            ("Esc", "Back to calendar"),
        ],
        Screen::Rankings | Screen::HeadToHead { .. } => vec![("↑/↓ j/k", "Scroll"), ("Esc", "Back")],
    };
    rows.extend([("f", "Full screen"), ("\"", "Logs"), ("?", "Close help"), ("q", "Quit")]);
    rows
}

fn draw_help(f: &mut Frame, screen: &Screen) {
    let rows = help_rows(screen);
    let [_, area, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(rows.len() as u16 + 2),
        Constraint::Fill(1),
    ])
    .areas(f.area());
    let [_, area, _] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(48), Constraint::Fill(1)])
            .areas(area);

    let table = Table::new(
        rows.into_iter().map(|(key, action)| {
            Row::new(vec![
                Cell::from(Span::styled(key, Style::default().fg(Color::Yellow))),
                Cell::from(action),
            ])
        }),
        [Constraint::Length(12), Constraint::Fill(1)],
    )
    .block(default_border(Color::White).title(format!(" Help: {} ", screen.title())));

    f.render_widget(Clear, area);
    f.render_widget(table, area);
}
