use crate::components::banner_frames::{
    BannerColor, SUBTITLE, ball_frame, ball_row, resolve, title_rows,
};
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Widget};

pub use crate::components::banner_frames::FRAME_COUNT;

/// Home screen banner. `frame` turns the ball, `tick` bounces it.
#[derive(Debug, Default)]
pub struct AnimatedBanner {
    pub frame: usize,
    pub tick: u64,
}

impl Widget for AnimatedBanner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < 3 {
            render_line(Line::from(" ATP TOUR "), area.x, area.y, area.width, buf);
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(resolve(BannerColor::Primary));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if inner.width < 60 || inner.height < 4 {
            render_compact(inner, buf);
        } else {
            render_full(&self, inner, buf);
        }
    }
}

fn render_compact(inner: Rect, buf: &mut Buffer) {
    render_centered(
        Line::from(Span::styled("ATP TOUR", resolve(BannerColor::Accent))),
        inner,
        inner.y,
        buf,
    );
    if inner.height > 1 {
        render_centered(
            Line::from(Span::styled(SUBTITLE, resolve(BannerColor::Shadow))),
            inner,
            inner.y + 1,
            buf,
        );
    }
}

fn render_full(banner: &AnimatedBanner, inner: Rect, buf: &mut Buffer) {
    let title = title_rows();
    let ball = ball_frame(banner.frame);
    let ball_y = ball_row(banner.tick, title.len() as u16);

    for (row, title_row) in title.iter().enumerate() {
        let y = inner.y + row as u16;
        if y >= inner.bottom() {
            return;
        }
        let ball_style = if row as u16 == ball_y {
            resolve(BannerColor::Ball)
        } else {
            resolve(BannerColor::Shadow)
        };
        let line = Line::from(vec![
            Span::styled(*title_row, resolve(BannerColor::Primary)),
            Span::raw("  "),
            Span::styled(ball[row], ball_style),
        ]);
        render_centered(line, inner, y, buf);
    }

    let subtitle_y = inner.y + title.len() as u16;
    render_centered(
        Line::from(Span::styled(SUBTITLE, resolve(BannerColor::Accent))),
        inner,
        subtitle_y,
        buf,
    );
}

fn render_centered(line: Line, area: Rect, y: u16, buf: &mut Buffer) {
    if y >= area.bottom() {
        return;
    }
    let w = line.width() as u16;
    let x = area.x + area.width.saturating_sub(w) / 2;
    render_line(line, x, y, area.right().saturating_sub(x), buf);
}

fn render_line(line: Line, x: u16, y: u16, max_width: u16, buf: &mut Buffer) {
    let mut cx = x;
    let limit = x.saturating_add(max_width);
    for span in &line.spans {
        if cx >= limit {
            break;
        }
        let (end, _) = buf.set_stringn(cx, y, span.content.as_ref(), (limit - cx) as usize, span.style);
        cx = end;
    }
}
