use atp_data::Round;
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::{Color, Modifier, Style};
use tui::widgets::Widget;

use crate::components::banner_frames::{BannerColor, resolve};
use crate::ui::props::{EntryProps, MatchProps};

// ---------------------------------------------------------------------------
// Layout constants
// ---------------------------------------------------------------------------

/// Rows per match cell: top player, score/status line, bottom player.
pub const MATCH_HEIGHT: u16 = 3;

/// Slot heights per depth (0 = quarterfinal leaf, 2 = final root).
/// SH[0] = MATCH_HEIGHT; SH[d] = 2 * SH[d-1] + 1.
const SH: [u16; 3] = [
    MATCH_HEIGHT,
    2 * MATCH_HEIGHT + 1,
    2 * (2 * MATCH_HEIGHT + 1) + 1,
];

/// Rows used by the whole draw.
pub const DRAW_HEIGHT: u16 = SH[2];

pub const CONNECTOR_WIDTH: u16 = 3;

const CELL_W_MAX: u16 = 28;

// ---------------------------------------------------------------------------
// BracketGrid: positions of the seven match cells
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct MatchCell {
    /// Row of the score line, relative to the top of the draw.
    pub center_row: u16,
    pub col: u16,
    pub depth: usize,
    /// Index of the match within its round.
    pub match_idx: usize,
}

/// Column order left to right: QF | conn | SF | conn | F
#[derive(Debug, Clone)]
pub struct BracketGrid {
    /// Depth-major: QF(4) + SF(2) + F(1).
    pub cells: Vec<MatchCell>,
    pub round_cols: [u16; 3],
    pub cell_width: u16,
}

impl BracketGrid {
    /// Center rows follow center[d][i] = SH[d]/2 + i * (SH[d+1] - SH[d]):
    ///   QF: [1, 5, 9, 13]  SF: [3, 11]  F: [7]
    pub fn compute(width: u16) -> Self {
        let per_col = width.saturating_sub(CONNECTOR_WIDTH * 2) / 3;
        let cell_width = per_col.clamp(1, CELL_W_MAX);
        let stride = cell_width + CONNECTOR_WIDTH;
        let round_cols = [0, stride, stride * 2];

        let first_center = [SH[0] / 2, SH[1] / 2, SH[2] / 2];
        let spacing = [SH[1] - SH[0], SH[2] - SH[1], 0];
        let counts = [4usize, 2, 1];

        let mut cells = Vec::with_capacity(7);
        for depth in 0..3 {
            for i in 0..counts[depth] {
                cells.push(MatchCell {
                    center_row: first_center[depth] + i as u16 * spacing[depth],
                    col: round_cols[depth],
                    depth,
                    match_idx: i,
                });
            }
        }

        Self { cells, round_cols, cell_width }
    }

    pub fn cells_for_depth(&self, depth: usize) -> &[MatchCell] {
        const OFFSETS: [usize; 4] = [0, 4, 6, 7];
        &self.cells[OFFSETS[depth]..OFFSETS[depth + 1]]
    }
}

pub fn round_to_depth(round: Round) -> usize {
    match round {
        Round::Quarterfinal => 0,
        Round::Semifinal => 1,
        Round::Final => 2,
    }
}

// ---------------------------------------------------------------------------
// BracketView widget
// ---------------------------------------------------------------------------

pub struct BracketView<'a> {
    pub rounds: &'a [(Round, Vec<MatchProps>)],
    pub grid: &'a BracketGrid,
}

impl Widget for BracketView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < MATCH_HEIGHT {
            return;
        }
        let scroll = self.scroll_to_cursor(area.height);

        for cell in &self.grid.cells {
            if let Some(m) = self.match_at(cell) {
                draw_match_cell(m, cell, self.grid.cell_width, area, scroll, buf);
            }
        }

        for depth in 0..2 {
            let children = self.grid.cells_for_depth(depth);
            let conn_x = area.x + self.grid.round_cols[depth] + self.grid.cell_width;
            for (j, parent) in self.grid.cells_for_depth(depth + 1).iter().enumerate() {
                draw_connector(
                    children[2 * j].center_row,
                    parent.center_row,
                    children[2 * j + 1].center_row,
                    conn_x,
                    area,
                    scroll,
                    buf,
                );
            }
        }
    }
}

impl BracketView<'_> {
    fn match_at(&self, cell: &MatchCell) -> Option<&MatchProps> {
        self.rounds
            .iter()
            .find(|(round, _)| round_to_depth(*round) == cell.depth)
            .and_then(|(_, matches)| matches.get(cell.match_idx))
    }

    /// Keeps the cursor row visible when the area is shorter than the draw.
    fn scroll_to_cursor(&self, height: u16) -> u16 {
        if height >= DRAW_HEIGHT {
            return 0;
        }
        let cursor_row = self.grid.cells.iter().find_map(|cell| {
            let m = self.match_at(cell)?;
            if m.top.under_cursor {
                Some(cell.center_row - 1)
            } else if m.bottom.under_cursor {
                Some(cell.center_row + 1)
            } else {
                None
            }
        });
        cursor_row
            .unwrap_or(0)
            .saturating_sub(height / 2)
            .min(DRAW_HEIGHT - height)
    }
}

fn screen_y(row: u16, scroll: u16, area: Rect) -> Option<u16> {
    let rel = row.checked_sub(scroll)?;
    (rel < area.height).then_some(area.y + rel)
}

fn draw_match_cell(
    m: &MatchProps,
    cell: &MatchCell,
    cell_width: u16,
    area: Rect,
    scroll: u16,
    buf: &mut Buffer,
) {
    let x = area.x + cell.col;
    if x >= area.right() {
        return;
    }
    let avail_w = area.right().saturating_sub(x).min(cell_width) as usize;

    let rows = [
        (cell.center_row - 1, format_entry_line(&m.top, avail_w), entry_style(&m.top)),
        (cell.center_row, format_status_line(m, avail_w), resolve(BannerColor::Shadow)),
        (cell.center_row + 1, format_entry_line(&m.bottom, avail_w), entry_style(&m.bottom)),
    ];
    for (row, text, style) in rows {
        if let Some(sy) = screen_y(row, scroll, area) {
            buf.set_stringn(x, sy, text, avail_w, style);
        }
    }
}

fn entry_style(entry: &EntryProps) -> Style {
    let style = if entry.selected {
        resolve(BannerColor::Ball).add_modifier(Modifier::BOLD)
    } else if entry.winner {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    if entry.under_cursor {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

/// `"* 1 Djokovic   W"`: selection mark, seed, surname, winner flag.
fn format_entry_line(entry: &EntryProps, width: usize) -> String {
    let mark = if entry.selected { '*' } else { ' ' };
    let name = entry.player.map_or("?", |p| p.surname());
    let flag = if entry.winner { 'W' } else { ' ' };
    // mark + sp + seed(2) + sp + name + sp + flag
    let name_w = width.saturating_sub(7);
    let name: String = name.chars().take(name_w).collect();
    format!("{mark} {:>2} {name:<name_w$} {flag}", entry.slot.seed)
}

fn format_status_line(m: &MatchProps, width: usize) -> String {
    let round = m.bracket_match.round.short_label();
    let detail = m.bracket_match.score.unwrap_or("vs");
    let text = format!("  {round:<2} {detail}");
    text.chars().take(width).collect()
}

fn draw_connector(
    r_top: u16,
    r_mid: u16,
    r_bot: u16,
    conn_x: u16,
    area: Rect,
    scroll: u16,
    buf: &mut Buffer,
) {
    let style = resolve(BannerColor::Shadow);
    let (col_a, col_b, col_c) = (conn_x, conn_x + 1, conn_x + 2);
    let mut put = |x: u16, row: u16, ch: char| {
        if x < area.right()
            && let Some(sy) = screen_y(row, scroll, area)
        {
            put_char(buf, x, sy, ch, style);
        }
    };

    //   ─┐      child_top
    //    │
    //   ─├─     parent
    //    │
    //   ─┘      child_bot
    put(col_a, r_top, '─');
    put(col_b, r_top, '┐');
    for row in (r_top + 1)..r_mid {
        put(col_b, row, '│');
    }
    put(col_a, r_mid, '─');
    put(col_b, r_mid, '├');
    put(col_c, r_mid, '─');
    for row in (r_mid + 1)..r_bot {
        put(col_b, row, '│');
    }
    put(col_a, r_bot, '─');
    put(col_b, r_bot, '┘');
}

fn put_char(buf: &mut Buffer, x: u16, y: u16, ch: char, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_char(ch);
        cell.set_style(style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::app_state::AppState;
    use crate::state::navigation::{Intent, Tile};
    use crate::ui::props::ScreenProps;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn bracket_state() -> AppState {
        let mut state = AppState::new();
        state.navigation.apply(Intent::SelectTile(Tile::Calendar)).unwrap();
        state.navigation.apply(Intent::OpenTournament("7".into())).unwrap();
        state
    }

    #[test]
    fn slot_heights() {
        assert_eq!(SH, [3, 7, 15]);
        assert_eq!(DRAW_HEIGHT, 15);
    }

    #[test]
    fn centers_per_round() {
        let grid = BracketGrid::compute(90);
        let centers = |d| grid.cells_for_depth(d).iter().map(|c| c.center_row).collect::<Vec<_>>();
        assert_eq!(centers(0), vec![1, 5, 9, 13]);
        assert_eq!(centers(1), vec![3, 11]);
        assert_eq!(centers(2), vec![7]);
    }

    #[test]
    fn parent_center_is_midpoint_of_children() {
        let grid = BracketGrid::compute(90);
        for depth in 0..2 {
            let children = grid.cells_for_depth(depth);
            for (j, parent) in grid.cells_for_depth(depth + 1).iter().enumerate() {
                let mid = (children[2 * j].center_row + children[2 * j + 1].center_row) / 2;
                assert_eq!(parent.center_row, mid);
            }
        }
    }

    #[test]
    fn cell_width_caps() {
        assert_eq!(BracketGrid::compute(300).cell_width, CELL_W_MAX);
        assert_eq!(BracketGrid::compute(66).cell_width, 20);
    }

    #[test]
    fn entry_line_fits_width() {
        let state = bracket_state();
        let ScreenProps::Bracket(props) = ScreenProps::from_state(&state) else {
            panic!("expected bracket props");
        };
        let qf1 = &props.rounds[0].1[0];
        let line = format_entry_line(&qf1.top, 20);
        assert_eq!(line.chars().count(), 20);
        assert!(line.contains("Djokovic"));
        assert!(line.ends_with('W'));
    }

    #[test]
    fn renders_names_scores_and_connectors() {
        let mut state = bracket_state();
        state.bracket.selection.toggle("3");
        let ScreenProps::Bracket(props) = ScreenProps::from_state(&state) else {
            panic!("expected bracket props");
        };
        let grid = BracketGrid::compute(90);
        let area = Rect::new(0, 0, 90, DRAW_HEIGHT);
        let mut buf = Buffer::empty(area);
        BracketView { rounds: &props.rounds, grid: &grid }.render(area, &mut buf);

        assert!(row_text(&buf, 0).contains("Djokovic"));
        assert!(row_text(&buf, 1).contains("6-3, 6-4"));
        assert!(row_text(&buf, 2).contains("Ruud"));
        assert!(row_text(&buf, 7).contains("F  vs"));
        assert!(row_text(&buf, 8).contains("* "));
        assert!(row_text(&buf, 3).contains('├'));
    }

    #[test]
    fn short_area_scrolls_to_cursor() {
        let mut state = bracket_state();
        state.bracket.cursor = 7; // m4 bottom: Rublev, row 14
        let ScreenProps::Bracket(props) = ScreenProps::from_state(&state) else {
            panic!("expected bracket props");
        };
        let grid = BracketGrid::compute(90);
        let area = Rect::new(0, 0, 90, 6);
        let mut buf = Buffer::empty(area);
        BracketView { rounds: &props.rounds, grid: &grid }.render(area, &mut buf);
        assert!(row_text(&buf, 5).contains("Rublev"));
    }
}
