//! Fixed header and footer bars.  Both receive the published pull distance.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

use super::theme::Theme;

const METER_CELLS: usize = 12;

/// A bordered bar with a title on the left and a pull meter on the right.
pub struct PullBar<'a> {
    pub title: &'a str,
    pub pull: f64,
    pub max_pull: f64,
}

impl Widget for PullBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border_style());
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(Span::styled(format!(" {}", self.title), Theme::title_style()));
        buf.set_line(inner.x, inner.y, &title, inner.width);

        let meter = pull_meter(self.pull, self.max_pull);
        let meter_width = meter.chars().count() as u16;
        if meter_width + 1 < inner.width {
            let x = inner.right() - meter_width - 1;
            let line = Line::from(Span::styled(meter, Theme::meter_style()));
            buf.set_line(x, inner.y, &line, meter_width);
        }
    }
}

/// `"pull +33 ▮▮▯▯▯▯▯▯▯▯▯▯"` style meter; the bar shows `|pull| / max`.
pub fn pull_meter(pull: f64, max_pull: f64) -> String {
    let ratio = if max_pull > 0.0 {
        (pull.abs() / max_pull).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (ratio * METER_CELLS as f64).round() as usize;
    format!(
        "pull {:+4.0} {}{}",
        pull,
        "▮".repeat(filled),
        "▯".repeat(METER_CELLS - filled)
    )
}
