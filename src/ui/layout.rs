//! Layout helpers: split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Fixed header, elastic page, fixed footer, and a status line.
pub struct PageLayout {
    pub header_area: Rect,
    pub page_area: Rect,
    pub footer_area: Rect,
    pub status_area: Rect,
}

impl PageLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header bar
                Constraint::Min(1),    // page (takes all remaining space)
                Constraint::Length(3), // footer bar
                Constraint::Length(1), // status line
            ])
            .split(area);

        Self {
            header_area: chunks[0],
            page_area: chunks[1],
            footer_area: chunks[2],
            status_area: chunks[3],
        }
    }
}
