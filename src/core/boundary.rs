//! Viewport queries and edge detection.
//!
//! The engine never reads scroll state directly.  Hosts hand it a
//! [`Viewport`] which reports the current metrics (or nothing, when there is
//! no laid-out page yet), and [`Boundary::detect`] turns those into the two
//! edge flags the input channels gate on.

/// Slack allowed at the bottom edge to absorb sub-pixel rounding.
pub const BOTTOM_TOLERANCE: f64 = 10.0;

/// Scroll geometry sampled at the moment an event is handled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    /// Distance scrolled from the top of the document.
    pub scroll_offset: f64,
    /// Height of the visible window.
    pub viewport_height: f64,
    /// Full height of the scrollable document.
    pub document_height: f64,
}

/// Read-only access to the host's scroll state.
pub trait Viewport {
    /// Current metrics, or `None` when the host has no document context.
    fn metrics(&self) -> Option<ViewportMetrics>;
}

impl Viewport for ViewportMetrics {
    fn metrics(&self) -> Option<ViewportMetrics> {
        Some(*self)
    }
}

impl<V: Viewport + ?Sized> Viewport for &V {
    fn metrics(&self) -> Option<ViewportMetrics> {
        (**self).metrics()
    }
}

/// Which scroll extremes the viewport currently sits at.  A document shorter
/// than its viewport is at both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Boundary {
    pub at_top: bool,
    pub at_bottom: bool,
}

impl Boundary {
    pub fn detect(m: &ViewportMetrics) -> Self {
        Self {
            at_top: m.scroll_offset == 0.0,
            at_bottom: m.viewport_height + m.scroll_offset
                >= m.document_height - BOTTOM_TOLERANCE,
        }
    }

    /// Query a viewport and detect its boundary in one go.
    pub fn query<V: Viewport + ?Sized>(viewport: &V) -> Option<Self> {
        viewport.metrics().map(|m| Self::detect(&m))
    }

    /// True at either edge.
    pub fn any(self) -> bool {
        self.at_top || self.at_bottom
    }
}
