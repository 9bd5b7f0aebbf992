//! The elastic page: a dimmed backdrop with the document layer on top,
//! shifted by the current pull.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use super::theme::Theme;

/// Renders the visible slice of the document, translated by `shift` rows.
/// Rows uncovered by the translation show the backdrop.
pub struct PageView<'a> {
    pub lines: &'a [String],
    /// First document row at rest.
    pub first_row: usize,
    /// Translation in rows; positive moves the content down.
    pub shift: i32,
    pub overlay_opacity: f64,
}

impl Widget for PageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let backdrop = Theme::backdrop_style(self.overlay_opacity);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf[(x, y)].set_symbol(backdrop_glyph(x, y)).set_style(backdrop);
            }
        }

        let width = area.width.saturating_sub(2);
        for screen_row in 0..area.height {
            let content_row = i64::from(screen_row) - i64::from(self.shift);
            if content_row < 0 {
                continue;
            }
            let Some(text) = self.lines.get(self.first_row + content_row as usize) else {
                continue;
            };
            let y = area.y + screen_row;
            let band = Rect::new(area.x, y, area.width, 1);
            for x in band.left()..band.right() {
                buf[(x, y)].set_symbol(" ");
            }
            buf.set_style(band, Theme::content_style());

            let style = if is_heading(self.lines, self.first_row + content_row as usize) {
                Theme::heading_style()
            } else {
                Theme::content_style()
            };
            let line = Line::from(Span::styled(text.as_str(), style));
            buf.set_line(area.x + 1, y, &line, width);
        }
    }
}

/// Sparse diagonal dots for the backdrop.
fn backdrop_glyph(x: u16, y: u16) -> &'static str {
    if (x as u32 + 2 * y as u32) % 6 == 0 { "·" } else { " " }
}

/// A line followed by an `===` underline reads as a heading.
fn is_heading(lines: &[String], idx: usize) -> bool {
    let underline = |s: &String| !s.is_empty() && s.chars().all(|c| c == '=');
    lines.get(idx).is_some_and(underline)
        || lines.get(idx + 1).is_some_and(underline)
}
