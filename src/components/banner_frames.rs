use tui::style::{Color, Modifier, Style};

pub const FRAME_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BannerColor {
    /// ATP navy.
    Primary,
    /// Ball optic yellow.
    Ball,
    Accent,
    Shadow,
}

pub fn resolve(color: BannerColor) -> Style {
    match color {
        BannerColor::Primary => Style::default().fg(Color::Rgb(0, 48, 135)).add_modifier(Modifier::BOLD),
        BannerColor::Ball => Style::default().fg(Color::Rgb(204, 255, 0)),
        BannerColor::Accent => Style::default().fg(Color::Rgb(0, 160, 220)).add_modifier(Modifier::BOLD),
        BannerColor::Shadow => Style::default().fg(Color::Indexed(240)),
    }
}

/// Row of a ball bouncing between the top and bottom of `height` rows.
pub fn ball_row(tick: u64, height: u16) -> u16 {
    let h = u64::from(height.saturating_sub(1));
    if h == 0 {
        return 0;
    }
    let t = tick % (2 * h);
    h.abs_diff(t) as u16
}

/// Tennis ball with its seam rolling left to right.
pub fn ball_frame(frame: usize) -> [&'static str; 5] {
    const FRAMES: [[&str; 5]; FRAME_COUNT] = [
        ["  .---.  ", r" /(    \ ", r"|  )    |", r" \(    / ", "  '---'  "],
        ["  .---.  ", r" / (   \ ", r"|   )   |", r" \ (   / ", "  '---'  "],
        ["  .---.  ", r" /  (  \ ", r"|    )  |", r" \  (  / ", "  '---'  "],
        ["  .---.  ", r" /   ( \ ", r"|     ) |", r" \   ( / ", "  '---'  "],
    ];
    FRAMES[frame % FRAME_COUNT]
}

pub fn title_rows() -> [&'static str; 4] {
    [
        r"   _ _____ ___   _____ ___  _   _ ___ ",
        r"  /_\_   _| _ \ |_   _/ _ \| | | | _ \",
        r" / _ \| | |  _/   | || (_) | |_| |   /",
        r"/_/ \_\_| |_|     |_| \___/ \___/|_|_\",
    ]
}

pub const SUBTITLE: &str = "TOURNAMENT CALENDAR  |  RANKINGS  |  HEAD TO HEAD";
