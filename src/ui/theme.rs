//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme.  Change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── page ───────────────────────────────────────────────────
    pub fn content_style() -> Style {
        Style::default().fg(Color::White).bg(Color::Rgb(24, 26, 32))
    }

    pub fn heading_style() -> Style {
        Self::content_style()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    /// The backdrop revealed behind pulled content.  `overlay_opacity` is the
    /// strength of the dark overlay on top of it: 0.85 at rest, fading toward
    /// 0.3 as the pull grows, so the backdrop brightens.
    pub fn backdrop_style(overlay_opacity: f64) -> Style {
        let light = ((1.0 - overlay_opacity.clamp(0.0, 1.0)) * 255.0).round() as u8;
        Style::default()
            .fg(Color::Rgb(light, light, light.saturating_add(20)))
            .bg(Color::Rgb(light / 4, light / 4, light / 3))
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn meter_style() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }

    pub fn dim_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_brightens_as_overlay_fades() {
        let fg = |o: f64| match Theme::backdrop_style(o).fg {
            Some(Color::Rgb(r, _, _)) => r,
            other => panic!("unexpected colour {other:?}"),
        };
        assert!(fg(0.3) > fg(0.85));
        assert_eq!(fg(0.85), 38);
    }
}
