//! Native (row-based) scrolling of the page, and the viewport the engine
//! queries.  The engine works in pull units; one terminal row is
//! `px_per_row` of them.

use crate::core::{Viewport, ViewportMetrics};

#[derive(Debug, Clone)]
pub struct PageScroll {
    /// First visible document row.
    pub offset: usize,
    /// Rows of the page area, set on every draw.  Zero until the first
    /// layout, which the engine sees as "no document context".
    pub viewport_rows: usize,
    pub document_rows: usize,
    pub px_per_row: f64,
}

impl PageScroll {
    pub fn new(document_rows: usize, px_per_row: f64) -> Self {
        Self {
            offset: 0,
            viewport_rows: 0,
            document_rows,
            px_per_row,
        }
    }

    pub fn max_offset(&self) -> usize {
        self.document_rows.saturating_sub(self.viewport_rows)
    }

    /// Scroll by `rows` (positive = down), clamped to the document.
    pub fn scroll_by(&mut self, rows: isize) {
        let target = self.offset as isize + rows;
        self.offset = target.clamp(0, self.max_offset() as isize) as usize;
    }

    pub fn page(&mut self, down: bool) {
        let rows = self.viewport_rows.saturating_sub(1).max(1) as isize;
        self.scroll_by(if down { rows } else { -rows });
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    pub fn to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Record a new page-area height and keep the offset in range.
    pub fn resize(&mut self, viewport_rows: usize) {
        self.viewport_rows = viewport_rows;
        self.offset = self.offset.min(self.max_offset());
    }
}

impl Viewport for PageScroll {
    fn metrics(&self) -> Option<ViewportMetrics> {
        if self.viewport_rows == 0 {
            return None;
        }
        Some(ViewportMetrics {
            scroll_offset: self.offset as f64 * self.px_per_row,
            viewport_height: self.viewport_rows as f64 * self.px_per_row,
            document_height: self.document_rows as f64 * self.px_per_row,
        })
    }
}
