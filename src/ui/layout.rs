use tui::layout::{Constraint, Layout, Rect, Size};

pub const HEADER_HEIGHT: u16 = 3;
pub const LOG_PANE_HEIGHT: u16 = 10;

/// Areas for one frame: header (title + key hint), the screen body and an
/// optional log pane under it.
#[derive(Debug, PartialEq, Eq)]
pub struct LayoutAreas {
    pub header: [Rect; 2],
    pub main: Rect,
    pub logs: Option<Rect>,
}

impl LayoutAreas {
    pub fn new(size: Size) -> Self {
        Self::from_rect(Rect::new(0, 0, size.width, size.height), false, false)
    }

    pub fn update(&mut self, area: Rect, full_screen: bool, show_logs: bool) {
        *self = Self::from_rect(area, full_screen, show_logs);
    }

    fn from_rect(area: Rect, full_screen: bool, show_logs: bool) -> Self {
        let (body, logs) = if show_logs {
            let [body, logs] =
                Layout::vertical([Constraint::Fill(1), Constraint::Length(LOG_PANE_HEIGHT)])
                    .areas(area);
            (body, Some(logs))
        } else {
            (area, None)
        };

        if full_screen {
            return LayoutAreas {
                header: [Rect::ZERO, Rect::ZERO],
                main: body,
                logs,
            };
        }

        let [header, main] =
            Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Fill(1)]).areas(body);

        LayoutAreas {
            header: Layout::horizontal([Constraint::Percentage(70), Constraint::Percentage(30)])
                .areas(header),
            main,
            logs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_sits_above_main() {
        let areas = LayoutAreas::new(Size::new(100, 40));
        assert_eq!(areas.header[0].height, HEADER_HEIGHT);
        assert_eq!(areas.main.y, HEADER_HEIGHT);
        assert_eq!(areas.main.height, 40 - HEADER_HEIGHT);
        assert!(areas.logs.is_none());
    }

    #[test]
    fn full_screen_drops_the_header() {
        let mut areas = LayoutAreas::new(Size::new(80, 24));
        areas.update(Rect::new(0, 0, 80, 24), true, false);
        assert_eq!(areas.header, [Rect::ZERO, Rect::ZERO]);
        assert_eq!(areas.main, Rect::new(0, 0, 80, 24));
    }

    #[test]
    fn log_pane_takes_the_bottom() {
        let mut areas = LayoutAreas::new(Size::new(80, 30));
        areas.update(Rect::new(0, 0, 80, 30), false, true);
        let logs = areas.logs.expect("log pane requested");
        assert_eq!(logs.height, LOG_PANE_HEIGHT);
        assert_eq!(logs.y, 30 - LOG_PANE_HEIGHT);
        assert_eq!(areas.main.bottom(), logs.y);
    }
}
